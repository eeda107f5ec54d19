#![cfg(target_arch = "wasm32")]
use site_core::{ActiveSection, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
mod contact;
mod dom;
mod frame;
mod nav;
mod particles;
mod scroll;
mod stats;
mod typewriter;

/// Everything the page shell keeps alive. Dropping it unregisters every
/// listener and cancels every frame callback.
struct Site {
    active: Rc<RefCell<ActiveSection>>,
    particles: Option<particles::ParticleLayer>,
    scroll_spy: scroll::ScrollSpyHandle,
    _nav: nav::NavBar,
    _stats: stats::StatsBoard,
    _contact: contact::ContactSection,
    _carousels: carousel::CarouselBoard,
    _typewriters: Vec<frame::AnimationLoop>,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

static STARTED: AtomicBool = AtomicBool::new(false);

fn load_config(document: &web::Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(constants::CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SiteConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("already mounted");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = load_config(&document);

    let active = Rc::new(RefCell::new(ActiveSection::new(
        config.default_section.as_str(),
    )));

    // subscribers first so the spy's initial report reaches them
    let nav = nav::NavBar::wire(&document, &active);
    let scroll_spy =
        scroll::ScrollSpyHandle::attach(&window, &document, config.sections.clone(), active.clone());
    let particles =
        particles::ParticleLayer::mount(&document, &config.canvas_id, config.particles.clone());
    let stats = stats::StatsBoard::wire(&window, &document);
    let contact =
        contact::ContactSection::wire(&window, &document, &active, config.contact_reset_ms);
    let carousels = carousel::CarouselBoard::wire(&document);
    let typewriters =
        typewriter::wire(&document, Duration::from_millis(config.typewriter_char_ms));

    log::info!("mounted; active section = {}", active.borrow().get());
    SITE.with(|site| {
        *site.borrow_mut() = Some(Site {
            active,
            particles,
            scroll_spy,
            _nav: nav,
            _stats: stats,
            _contact: contact,
            _carousels: carousels,
            _typewriters: typewriters,
        });
    });
    Ok(())
}

/// Current active section id, for host scripts.
#[wasm_bindgen(js_name = activeSection)]
pub fn active_section() -> Option<String> {
    SITE.with(|site| {
        site.borrow()
            .as_ref()
            .map(|s| s.active.borrow().get().to_string())
    })
}

/// Scroll to a section as if its nav item had been clicked.
#[wasm_bindgen(js_name = navigateTo)]
pub fn navigate_to(section_id: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let active = SITE.with(|site| site.borrow().as_ref().map(|s| s.active.clone()));
    if let Some(active) = active {
        nav::navigate_to(&document, &active, section_id);
    }
}

/// Release every listener and animation frame. The page can be mounted
/// again afterwards.
#[wasm_bindgen]
pub fn teardown() {
    let site = SITE.with(|site| site.borrow_mut().take());
    if let Some(mut site) = site {
        site.scroll_spy.detach();
        if let Some(p) = site.particles.as_mut() {
            p.stop();
        }
        drop(site);
        log::info!("torn down");
    }
    STARTED.store(false, Ordering::SeqCst);
}

/// Mount again after a [`teardown`].
#[wasm_bindgen]
pub fn remount() {
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}
