use crate::constants::*;
use crate::dom;
use crate::frame::AnimationLoop;
use instant::Instant;
use site_core::Typewriter;
use std::time::Duration;
use web_sys as web;

fn start_one(document: &web::Document, el: web::Element, char_interval: Duration) -> Option<AnimationLoop> {
    let text = el
        .get_attribute(TYPEWRITER_ATTR)
        .filter(|t| !t.is_empty())
        .or_else(|| el.text_content())?;
    let delay = el
        .get_attribute(DELAY_ATTR)
        .and_then(|d| d.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let tw = Typewriter::new(text, Duration::from_millis(delay), char_interval);

    // text node for the revealed part, span for the blinking cursor
    el.set_text_content(None);
    let shown = document.create_text_node("");
    _ = el.append_child(&shown);
    let cursor = document.create_element("span").ok()?;
    cursor.set_class_name(CURSOR_CLASS);
    cursor.set_text_content(Some("|"));
    _ = el.append_child(&cursor);

    let mounted = Instant::now();
    let mut last_len = usize::MAX;
    let frames = AnimationLoop::start(move |_ts| {
        let elapsed = mounted.elapsed();
        let visible = tw.visible_at(elapsed);
        if visible.len() != last_len {
            last_len = visible.len();
            shown.set_data(visible);
        }
        if tw.is_done_at(elapsed) {
            cursor.remove();
            return false;
        }
        true
    });
    match frames {
        Ok(f) => Some(f),
        Err(e) => {
            log::error!("[typewriter] frame loop: {:?}", e);
            None
        }
    }
}

/// Type out every `[data-typewriter]` element.
pub fn wire(document: &web::Document, char_interval: Duration) -> Vec<AnimationLoop> {
    dom::query_all(document, &attr_selector(TYPEWRITER_ATTR))
        .into_iter()
        .filter_map(|el| start_one(document, el, char_interval))
        .collect()
}
