// Shared tuning constants for the ambient page effects.

// Particle pool
pub const PARTICLE_COUNT: usize = 40;

// Spawn ranges, half-open [min, min + span)
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_SPAN: f32 = 3.0;
pub const DRIFT_SPAN: f32 = 0.5; // centred on zero: [-0.25, 0.25)
pub const RISE_MIN: f32 = 0.1;
pub const RISE_SPAN: f32 = 0.3;
pub const LIFESPAN_MIN: u32 = 200;
pub const LIFESPAN_SPAN: u32 = 200;

// Opacity flicker factor, re-rolled every tick
pub const FLICKER_MIN: f32 = 0.3;
pub const FLICKER_SPAN: f32 = 0.5;

// Recycled particles re-enter this far below the bottom edge (px)
pub const RESPAWN_BELOW_PX: f32 = 10.0;

// Default palette (gold)
pub const PARTICLE_FILL_RGB: [u8; 3] = [212, 175, 55];
pub const PARTICLE_STROKE_RGB: [u8; 3] = [229, 193, 88];
pub const PARTICLE_STROKE_ALPHA: f32 = 0.6; // outline opacity relative to fill
pub const PARTICLE_LINE_WIDTH: f64 = 0.5;

// Text effects
pub const TYPEWRITER_CHAR_MS: u64 = 30;
pub const CONTACT_RESET_MS: f64 = 3000.0;

// Testimonial carousel: |drag offset px| * velocity px/s needed to turn a page
pub const SWIPE_CONFIDENCE_THRESHOLD: f64 = 10_000.0;

// Page layout, in registration order
pub const DEFAULT_SECTIONS: [&str; 7] = [
    "home",
    "about",
    "team",
    "testimonials",
    "services",
    "catalog",
    "contact",
];
pub const DEFAULT_SECTION: &str = "home";
pub const CONTACT_SECTION: &str = "contact";
