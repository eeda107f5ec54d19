use crate::constants::*;
use crate::dom::{self, Listener};
use site_core::Carousel;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Slider {
    root: web::Element,
    slides: Vec<web::Element>,
    dots: Vec<web::Element>,
    state: Carousel,
}

impl Slider {
    fn render(&self) {
        let current = self.state.index();
        for (i, el) in self.slides.iter().enumerate() {
            let on = i == current;
            _ = el.class_list().toggle_with_force(ACTIVE_CLASS, on);
            _ = el.set_attribute("aria-hidden", if on { "false" } else { "true" });
        }
        for (i, el) in self.dots.iter().enumerate() {
            let on = i == current;
            _ = el.class_list().toggle_with_force(ACTIVE_CLASS, on);
            if on {
                _ = el.set_attribute("aria-current", "true");
            } else {
                _ = el.remove_attribute("aria-current");
            }
        }
        _ = self
            .root
            .set_attribute(DIRECTION_ATTR, &self.state.direction().to_string());
    }
}

fn client_x(ev: &web::Event) -> Option<f64> {
    ev.dyn_ref::<web::MouseEvent>().map(|m| m.client_x() as f64)
}

/// Wire one `[data-carousel]` root: arrows, dots, and drag-to-swipe.
fn wire_one(root: web::Element, listeners: &mut Vec<Listener>) {
    let slides = dom::query_within(&root, &attr_selector(SLIDE_ATTR));
    if slides.is_empty() {
        log::warn!("[carousel] no slides under {}", CAROUSEL_ATTR);
        return;
    }
    let dots = dom::query_within(&root, &attr_selector(DOT_ATTR));
    let prev = dom::query_within(&root, &attr_selector(PREV_ATTR));
    let next = dom::query_within(&root, &attr_selector(NEXT_ATTR));
    let slider = Rc::new(RefCell::new(Slider {
        root: root.clone(),
        state: Carousel::new(slides.len()),
        slides,
        dots: dots.clone(),
    }));
    slider.borrow().render();

    for (buttons, step) in [(prev, -1), (next, 1)] {
        for el in buttons {
            let s = slider.clone();
            if let Some(l) = dom::add_click_listener(&el, move |_| {
                let mut s = s.borrow_mut();
                s.state.paginate(step);
                s.render();
            }) {
                listeners.push(l);
            }
        }
    }

    for (i, el) in dots.iter().enumerate() {
        let s = slider.clone();
        if let Some(l) = dom::add_click_listener(el, move |_| {
            let mut s = s.borrow_mut();
            if s.state.go_to(i) {
                s.render();
            }
        }) {
            listeners.push(l);
        }
    }

    // drag start: (x, time ms)
    let grab = Rc::new(Cell::new(None::<(f64, f64)>));
    let grab_down = grab.clone();
    if let Some(l) = Listener::new(&root, "pointerdown", move |ev| {
        grab_down.set(client_x(&ev).map(|x| (x, dom::now_ms())));
    }) {
        listeners.push(l);
    }
    let s = slider.clone();
    if let Some(l) = Listener::new(&root, "pointerup", move |ev| {
        let (Some((x0, t0)), Some(x1)) = (grab.take(), client_x(&ev)) else {
            return;
        };
        let offset = x1 - x0;
        let elapsed_sec = (dom::now_ms() - t0) / 1000.0;
        if elapsed_sec <= 0.0 {
            return;
        }
        let mut s = s.borrow_mut();
        if s.state.swipe(offset, offset / elapsed_sec) {
            s.render();
        }
    }) {
        listeners.push(l);
    }
}

/// Every testimonial slider on the page.
pub struct CarouselBoard {
    _listeners: Vec<Listener>,
}

impl CarouselBoard {
    pub fn wire(document: &web::Document) -> Self {
        let mut listeners = Vec::new();
        let roots = dom::query_all(document, &attr_selector(CAROUSEL_ATTR));
        log::info!("[carousel] {} sliders", roots.len());
        for root in roots {
            wire_one(root, &mut listeners);
        }
        Self {
            _listeners: listeners,
        }
    }
}
