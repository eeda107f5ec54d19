use crate::constants::{attr_selector, ACTIVE_CLASS, NAV_ATTR};
use crate::dom::{self, Listener};
use fnv::FnvHashMap;
use site_core::ActiveSection;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Smooth-scroll to `section_id` and mark it active right away, before the
/// scroll settles. Unknown ids are ignored.
pub fn navigate_to(document: &web::Document, active: &Rc<RefCell<ActiveSection>>, section_id: &str) {
    let Some(target) = document.get_element_by_id(section_id) else {
        log::warn!("[nav] no section #{}", section_id);
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    active.borrow_mut().set(section_id);
}

fn highlight(buttons: &FnvHashMap<String, Vec<web::Element>>, active_id: &str) {
    for (id, els) in buttons {
        let on = id == active_id;
        for el in els {
            _ = el.class_list().toggle_with_force(ACTIVE_CLASS, on);
            if on {
                _ = el.set_attribute("aria-current", "true");
            } else {
                _ = el.remove_attribute("aria-current");
            }
        }
    }
}

/// Navigation buttons (`[data-nav]`): click-to-scroll plus active-item
/// highlighting.
pub struct NavBar {
    _clicks: Vec<Listener>,
}

impl NavBar {
    pub fn wire(document: &web::Document, active: &Rc<RefCell<ActiveSection>>) -> Self {
        let mut buttons: FnvHashMap<String, Vec<web::Element>> = FnvHashMap::default();
        let mut clicks = Vec::new();
        for el in dom::query_all(document, &attr_selector(NAV_ATTR)) {
            let Some(section_id) = el.get_attribute(NAV_ATTR) else {
                continue;
            };
            let doc = document.clone();
            let active_click = active.clone();
            let id_click = section_id.clone();
            if let Some(l) = dom::add_click_listener(&el, move |ev| {
                ev.prevent_default();
                navigate_to(&doc, &active_click, &id_click);
            }) {
                clicks.push(l);
            }
            buttons.entry(section_id).or_default().push(el);
        }
        log::info!("[nav] {} nav targets", buttons.len());

        active
            .borrow_mut()
            .subscribe(move |id| highlight(&buttons, id));

        Self { _clicks: clicks }
    }
}
