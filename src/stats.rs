use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::AnimationLoop;
use site_core::CountUp;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct PendingCounter {
    el: web::Element,
    count: CountUp,
}

fn parse_counter(el: web::Element) -> Option<PendingCounter> {
    let raw = el.get_attribute(COUNT_UP_ATTR)?;
    let target = match raw.trim().replace(',', "").parse::<u64>() {
        Ok(v) => v,
        Err(_) => {
            log::warn!("[stats] ignoring count-up target {:?}", raw);
            return None;
        }
    };
    let duration = el
        .get_attribute(DURATION_ATTR)
        .and_then(|d| d.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d >= 0.0)
        .unwrap_or(COUNT_UP_DEFAULT_SEC);
    let count = CountUp::new(target, duration).with_affixes(
        el.get_attribute(PREFIX_ATTR).unwrap_or_default(),
        el.get_attribute(SUFFIX_ATTR).unwrap_or_default(),
    );
    el.set_text_content(Some(&count.render(0)));
    Some(PendingCounter { el, count })
}

/// Start every pending counter that has scrolled into view. Each one counts
/// only once.
fn start_visible(
    window: &web::Window,
    pending: &RefCell<Vec<PendingCounter>>,
    running: &RefCell<Vec<AnimationLoop>>,
) {
    let ready: Vec<PendingCounter> = {
        let mut p = pending.borrow_mut();
        if p.is_empty() {
            return;
        }
        let (ready, rest): (Vec<_>, Vec<_>) =
            p.drain(..).partition(|c| dom::is_in_view(window, &c.el));
        *p = rest;
        ready
    };
    for PendingCounter { el, mut count } in ready {
        match AnimationLoop::start(move |ts| {
            let (value, done) = count.frame(ts);
            el.set_text_content(Some(&count.render(value)));
            !done
        }) {
            Ok(l) => running.borrow_mut().push(l),
            Err(e) => log::error!("[stats] count-up loop: {:?}", e),
        }
    }
}

/// `[data-count-up]` numbers that count from zero the first time they
/// appear on screen.
pub struct StatsBoard {
    _running: Rc<RefCell<Vec<AnimationLoop>>>,
    _scroll: Option<Listener>,
}

impl StatsBoard {
    pub fn wire(window: &web::Window, document: &web::Document) -> Self {
        let counters: Vec<PendingCounter> = dom::query_all(document, &attr_selector(COUNT_UP_ATTR))
            .into_iter()
            .filter_map(parse_counter)
            .collect();
        log::info!("[stats] {} counters", counters.len());
        let pending = Rc::new(RefCell::new(counters));
        let running = Rc::new(RefCell::new(Vec::new()));

        start_visible(window, &pending, &running);

        let window_scroll = window.clone();
        let running_scroll = running.clone();
        let scroll = Listener::passive(window, "scroll", move |_| {
            start_visible(&window_scroll, &pending, &running_scroll);
        });

        Self {
            _running: running,
            _scroll: scroll,
        }
    }
}
