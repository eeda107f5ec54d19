// Host-side tests for the scroll spy and the active-section cell.

use site_core::{evaluate, probe_point, ActiveSection, ScrollSpy, SectionExtent, Viewport};
use std::cell::RefCell;
use std::rc::Rc;

fn two_sections() -> Vec<SectionExtent> {
    vec![
        SectionExtent::new("home", 0.0, 800.0),
        SectionExtent::new("about", 800.0, 800.0),
    ]
}

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str)) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    (seen, move |id: &str| log.borrow_mut().push(id.to_string()))
}

#[test]
fn probe_is_viewport_midpoint() {
    assert_eq!(probe_point(0.0, 800.0), 400.0);
    assert_eq!(probe_point(500.0, 800.0), 900.0);
}

#[test]
fn evaluate_top_of_page_is_home() {
    assert_eq!(evaluate(0.0, 800.0, &two_sections()), Some("home"));
}

#[test]
fn evaluate_scrolled_is_about() {
    assert_eq!(evaluate(500.0, 800.0, &two_sections()), Some("about"));
}

#[test]
fn evaluate_is_deterministic() {
    let sections = two_sections();
    for y in [0.0, 123.0, 399.0, 400.0, 500.0, 1199.0, 1300.0] {
        assert_eq!(evaluate(y, 800.0, &sections), evaluate(y, 800.0, &sections));
    }
}

#[test]
fn attach_reports_current_section_immediately() {
    let (seen, on_change) = recorder();
    let spy = ScrollSpy::attach(on_change, Viewport::new(500.0, 800.0), &two_sections());
    assert_eq!(*seen.borrow(), vec!["about"]);
    assert_eq!(spy.last(), Some("about"));
}

#[test]
fn scroll_within_same_section_is_silent() {
    let sections = two_sections();
    let (seen, on_change) = recorder();
    let mut spy = ScrollSpy::attach(on_change, Viewport::new(0.0, 800.0), &sections);
    assert!(!spy.on_scroll(Viewport::new(100.0, 800.0), &sections));
    assert!(!spy.on_scroll(Viewport::new(399.0, 800.0), &sections));
    assert!(spy.on_scroll(Viewport::new(400.0, 800.0), &sections));
    assert!(!spy.on_scroll(Viewport::new(450.0, 800.0), &sections));
    assert!(spy.on_scroll(Viewport::new(0.0, 800.0), &sections));
    assert_eq!(*seen.borrow(), vec!["home", "about", "home"]);
}

#[test]
fn gap_keeps_previous_section() {
    let sections = vec![
        SectionExtent::new("home", 0.0, 800.0),
        SectionExtent::new("contact", 2000.0, 800.0),
    ];
    let (seen, on_change) = recorder();
    let mut spy = ScrollSpy::attach(on_change, Viewport::new(0.0, 800.0), &sections);
    // probe 1400 sits between the two
    assert!(!spy.on_scroll(Viewport::new(1000.0, 800.0), &sections));
    assert_eq!(spy.last(), Some("home"));
    assert!(spy.on_scroll(Viewport::new(1800.0, 800.0), &sections));
    assert_eq!(*seen.borrow(), vec!["home", "contact"]);
}

#[test]
fn layout_changes_are_picked_up_per_event() {
    let (seen, on_change) = recorder();
    let mut spy = ScrollSpy::attach(on_change, Viewport::new(0.0, 800.0), &two_sections());
    // the hero grew; same scroll offset now lands elsewhere
    let reflowed = vec![
        SectionExtent::new("home", 0.0, 200.0),
        SectionExtent::new("about", 200.0, 800.0),
    ];
    assert!(spy.on_scroll(Viewport::new(0.0, 800.0), &reflowed));
    assert_eq!(*seen.borrow(), vec!["home", "about"]);
}

#[test]
fn detached_spy_stays_quiet() {
    let sections = two_sections();
    let (seen, on_change) = recorder();
    let mut spy = ScrollSpy::attach(on_change, Viewport::new(0.0, 800.0), &sections);
    spy.detach();
    assert!(!spy.is_attached());
    assert!(!spy.on_scroll(Viewport::new(900.0, 800.0), &sections));
    assert_eq!(*seen.borrow(), vec!["home"]);
}

#[test]
fn navigation_overrides_then_spy_catches_up() {
    let active = Rc::new(RefCell::new(ActiveSection::new("home")));
    let highlighted = Rc::new(RefCell::new(String::new()));
    let h = highlighted.clone();
    active.borrow_mut().subscribe(move |id| *h.borrow_mut() = id.to_string());

    let sections = two_sections();
    let active_spy = active.clone();
    let mut spy = ScrollSpy::attach(
        move |id: &str| {
            active_spy.borrow_mut().set(id);
        },
        Viewport::new(0.0, 800.0),
        &sections,
    );
    assert_eq!(*highlighted.borrow(), "home");

    // nav click marks "about" before the smooth scroll moves anything
    active.borrow_mut().set("about");
    assert_eq!(*highlighted.borrow(), "about");

    // scroll lands in about; the spy reports it and the cell ignores the repeat
    spy.on_scroll(Viewport::new(500.0, 800.0), &sections);
    assert_eq!(active.borrow().get(), "about");
    assert_eq!(*highlighted.borrow(), "about");
}

#[test]
fn navigation_to_unreachable_section_is_undone_by_next_scroll() {
    let sections = vec![
        SectionExtent::new("catalog", 0.0, 2000.0),
        SectionExtent::new("contact", 2000.0, 400.0),
    ];
    let active = Rc::new(RefCell::new(ActiveSection::new("home")));
    let active_spy = active.clone();
    let mut spy = ScrollSpy::attach(
        move |id: &str| {
            active_spy.borrow_mut().set(id);
        },
        Viewport::new(800.0, 800.0),
        &sections,
    );
    assert_eq!(active.borrow().get(), "catalog");

    // page bottom: clicking "contact" cannot bring it under the probe
    active.borrow_mut().set("contact");

    let shown = active.borrow().get().to_string();
    spy.sync(&shown);
    assert!(spy.on_scroll(Viewport::new(900.0, 800.0), &sections));
    assert_eq!(active.borrow().get(), "catalog");
}

#[test]
fn sync_suppresses_repeat_of_the_shown_section() {
    let sections = two_sections();
    let (seen, on_change) = recorder();
    let mut spy = ScrollSpy::attach(on_change, Viewport::new(0.0, 800.0), &sections);
    spy.sync("about");
    assert!(!spy.on_scroll(Viewport::new(500.0, 800.0), &sections));
    assert_eq!(spy.last(), Some("about"));
    assert_eq!(*seen.borrow(), vec!["home"]);
}
