use crate::constants::*;
use crate::dom::{self, Listener};
use crate::nav;
use site_core::constants::CONTACT_SECTION;
use site_core::{ActiveSection, ContactForm};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FIELD_NAMES: [&str; 7] = ["name", "email", "phone", "service", "date", "guests", "message"];

fn field(form: &web::HtmlFormElement, name: &str) -> Option<web::Element> {
    form.query_selector(&format!("[name=\"{}\"]", name)).ok().flatten()
}

fn read_value(el: &web::Element) -> Option<String> {
    if let Some(i) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(i.value());
    }
    if let Some(t) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return Some(t.value());
    }
    el.dyn_ref::<web::HtmlSelectElement>().map(|s| s.value())
}

fn write_value(el: &web::Element, value: &str) {
    if let Some(i) = el.dyn_ref::<web::HtmlInputElement>() {
        i.set_value(value);
    } else if let Some(t) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        t.set_value(value);
    } else if let Some(s) = el.dyn_ref::<web::HtmlSelectElement>() {
        s.set_value(value);
    }
}

/// The pending "clear submitted" timeout. Scheduling again replaces it.
struct ResetTimer {
    window: web::Window,
    pending: Cell<Option<i32>>,
}

impl ResetTimer {
    fn schedule(self: &Rc<Self>, delay_ms: i32, on_fire: impl FnOnce() + 'static) {
        self.cancel();
        let timer = Rc::downgrade(self);
        let cb = Closure::once_into_js(move || {
            if let Some(t) = timer.upgrade() {
                t.pending.set(None);
            }
            on_fire();
        });
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::warn!("[contact] setTimeout failed: {:?}", e),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

fn handle_submit(
    timer: &Rc<ResetTimer>,
    form_el: &web::HtmlFormElement,
    state: &Rc<RefCell<ContactForm>>,
) {
    {
        let mut st = state.borrow_mut();
        for name in FIELD_NAMES {
            if let Some(v) = field(form_el, name).as_ref().and_then(read_value) {
                st.fields.set(name, v);
            }
        }
    }
    let result = state.borrow_mut().submit(dom::now_ms());
    match result {
        Ok(()) => {
            _ = form_el.remove_attribute("data-error");
            _ = form_el.set_attribute(SUBMITTED_ATTR, "true");
            let form_reset = form_el.clone();
            let state_reset = state.clone();
            let delay = state.borrow().reset_after_ms() as i32;
            timer.schedule(delay, move || {
                if !state_reset.borrow().is_submitted(dom::now_ms()) {
                    _ = form_reset.remove_attribute(SUBMITTED_ATTR);
                }
            });
        }
        Err(e) => {
            log::info!("[contact] rejected: {}", e);
            _ = form_el.set_attribute("data-error", &e.to_string());
        }
    }
}

/// Booking buttons and the inquiry form.
pub struct ContactSection {
    _listeners: Vec<Listener>,
    reset: Rc<ResetTimer>,
}

impl ContactSection {
    pub fn wire(
        window: &web::Window,
        document: &web::Document,
        active: &Rc<RefCell<ActiveSection>>,
        reset_after_ms: f64,
    ) -> Self {
        let state = Rc::new(RefCell::new(ContactForm::new(reset_after_ms)));
        let form_el = document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok());
        let mut listeners = Vec::new();
        let reset = Rc::new(ResetTimer {
            window: window.clone(),
            pending: Cell::new(None),
        });

        for el in dom::query_all(document, &attr_selector(BOOK_ATTR)) {
            let Some(service) = el.get_attribute(BOOK_ATTR) else {
                continue;
            };
            let doc = document.clone();
            let active_book = active.clone();
            let state_book = state.clone();
            let form_book = form_el.clone();
            if let Some(l) = dom::add_click_listener(&el, move |_| {
                state_book.borrow_mut().book(&service);
                if let Some(f) = form_book.as_ref().and_then(|f| field(f, "service")) {
                    write_value(&f, &state_book.borrow().fields.service);
                }
                nav::navigate_to(&doc, &active_book, CONTACT_SECTION);
            }) {
                listeners.push(l);
            }
        }

        match form_el {
            Some(form) => {
                let reset_submit = reset.clone();
                let form_submit = form.clone();
                if let Some(l) = Listener::new(&form, "submit", move |ev| {
                    ev.prevent_default();
                    handle_submit(&reset_submit, &form_submit, &state);
                }) {
                    listeners.push(l);
                }
            }
            None => log::info!("[contact] no #{} on this page", CONTACT_FORM_ID),
        }

        Self {
            _listeners: listeners,
            reset,
        }
    }
}

impl Drop for ContactSection {
    fn drop(&mut self) {
        self.reset.cancel();
    }
}
