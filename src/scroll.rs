use crate::dom::{self, Listener};
use site_core::{ActiveSection, ScrollSpy, SectionExtent, SectionRegistry, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Read every registered section's extent from live layout, in order.
/// Ids with no matching element are skipped.
pub fn read_sections(document: &web::Document, ids: &[String]) -> SectionRegistry {
    ids.iter()
        .filter_map(|id| {
            let el = document
                .get_element_by_id(id)?
                .dyn_into::<web::HtmlElement>()
                .ok()?;
            Some(SectionExtent::new(
                id.as_str(),
                el.offset_top() as f64,
                el.offset_height() as f64,
            ))
        })
        .collect()
}

pub fn read_viewport(window: &web::Window) -> Viewport {
    let (_, height) = dom::viewport_size(window);
    Viewport::new(window.scroll_y().unwrap_or(0.0), height)
}

type Spy = ScrollSpy<Box<dyn FnMut(&str)>>;

/// Scroll spy bound to the window. Dropping it removes the listener.
pub struct ScrollSpyHandle {
    spy: Rc<RefCell<Spy>>,
    listener: Option<Listener>,
}

impl ScrollSpyHandle {
    pub fn attach(
        window: &web::Window,
        document: &web::Document,
        section_ids: Vec<String>,
        active: Rc<RefCell<ActiveSection>>,
    ) -> Self {
        let active_change = active.clone();
        let on_change: Box<dyn FnMut(&str)> = Box::new(move |id: &str| {
            active_change.borrow_mut().set(id);
        });
        let sections = read_sections(document, &section_ids);
        log::info!("[scroll] tracking {} sections", sections.len());
        let spy = Rc::new(RefCell::new(ScrollSpy::attach(
            on_change,
            read_viewport(window),
            &sections,
        )));

        let spy_scroll = spy.clone();
        let window_scroll = window.clone();
        let document_scroll = document.clone();
        let listener = Listener::passive(window, "scroll", move |_| {
            // one layout read per event, then evaluate
            let viewport = read_viewport(&window_scroll);
            let sections = read_sections(&document_scroll, &section_ids);
            // nav clicks write the cell directly; compare against what is shown
            let shown = active.borrow().get().to_string();
            let mut spy = spy_scroll.borrow_mut();
            spy.sync(&shown);
            spy.on_scroll(viewport, &sections);
        });
        if listener.is_none() {
            log::warn!("[scroll] could not register scroll listener");
        }

        Self { spy, listener }
    }

    pub fn detach(&mut self) {
        self.spy.borrow_mut().detach();
        self.listener.take();
    }
}

impl Drop for ScrollSpyHandle {
    fn drop(&mut self) {
        self.detach();
    }
}
