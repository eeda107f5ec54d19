// DOM hooks shared by the page markup and the WASM front-end.

// Elements looked up by id
pub const CONFIG_SCRIPT_ID: &str = "site-config";
pub const CONTACT_FORM_ID: &str = "contact-form";

// Attribute hooks
pub const NAV_ATTR: &str = "data-nav"; // nav button -> section id
pub const BOOK_ATTR: &str = "data-book-service"; // catalog button -> service name
pub const COUNT_UP_ATTR: &str = "data-count-up"; // target number
pub const DURATION_ATTR: &str = "data-duration"; // seconds
pub const PREFIX_ATTR: &str = "data-prefix";
pub const SUFFIX_ATTR: &str = "data-suffix";
pub const TYPEWRITER_ATTR: &str = "data-typewriter";
pub const DELAY_ATTR: &str = "data-delay"; // milliseconds
pub const SUBMITTED_ATTR: &str = "data-submitted";
pub const CAROUSEL_ATTR: &str = "data-carousel"; // testimonial slider root
pub const SLIDE_ATTR: &str = "data-slide";
pub const PREV_ATTR: &str = "data-carousel-prev";
pub const NEXT_ATTR: &str = "data-carousel-next";
pub const DOT_ATTR: &str = "data-carousel-dot";
pub const DIRECTION_ATTR: &str = "data-direction"; // "1" forward, "-1" back

// Styling hooks
pub const ACTIVE_CLASS: &str = "is-active";
pub const CURSOR_CLASS: &str = "typewriter-cursor";

// Count-up duration when `data-duration` is absent (seconds)
pub const COUNT_UP_DEFAULT_SEC: f64 = 2.0;

#[inline]
pub fn attr_selector(attr: &str) -> String {
    format!("[{}]", attr)
}
