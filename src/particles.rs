use crate::dom::{self, Listener};
use crate::frame::AnimationLoop;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{DrawSurface, ParticleConfig, ParticleField, Surface};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2d context as a paint target for the particle field.
pub struct Canvas2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    /// `None` when the element has no 2d context to give.
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    fn circle(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
    }
}

#[inline]
fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", rgb[0], rgb[1], rgb[2], alpha.clamp(0.0, 1.0))
}

impl DrawSurface for Canvas2d {
    fn clear(&mut self, surface: Surface) {
        self.ctx
            .clear_rect(0.0, 0.0, surface.width as f64, surface.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.ctx.set_fill_style_str(&rgba(rgb, alpha));
        self.circle(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32, line_width: f64) {
        self.ctx.set_stroke_style_str(&rgba(rgb, alpha));
        self.ctx.set_line_width(line_width);
        self.circle(center, radius);
        self.ctx.stroke();
    }
}

struct FieldState {
    field: ParticleField,
    canvas: Canvas2d,
    rng: StdRng,
}

/// Full-viewport particle canvas: render loop plus resize tracking.
pub struct ParticleLayer {
    state: Rc<RefCell<FieldState>>,
    frames: Option<AnimationLoop>,
    resize: Option<Listener>,
}

impl ParticleLayer {
    /// Start painting on `#canvas_id`. A missing canvas or 2d context means
    /// no layer at all; the page works without it.
    pub fn mount(document: &web::Document, canvas_id: &str, style: ParticleConfig) -> Option<Self> {
        let Some(canvas) = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            log::warn!("[particles] no canvas #{}; skipping", canvas_id);
            return None;
        };
        let Some(ctx) = Canvas2d::acquire(&canvas) else {
            log::warn!("[particles] 2d context unavailable; skipping");
            return None;
        };

        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        let mut rng = StdRng::from_entropy();
        let mut field = ParticleField::new(style);
        field.start(w as f32, h as f32, &mut rng);
        log::info!("[particles] {} particles on {}x{}", field.particles().len(), w, h);

        let state = Rc::new(RefCell::new(FieldState {
            field,
            canvas: ctx,
            rng,
        }));

        let state_tick = state.clone();
        let frames = match AnimationLoop::start(move |_ts| {
            let mut st = state_tick.borrow_mut();
            let FieldState { field, canvas, rng } = &mut *st;
            field.tick(rng, canvas)
        }) {
            Ok(f) => Some(f),
            Err(e) => {
                log::error!("[particles] frame loop: {:?}", e);
                None
            }
        };

        let resize = web::window().and_then(|window| {
            let state_resize = state.clone();
            let canvas_resize = canvas.clone();
            Listener::new(&window, "resize", move |_| {
                let (w, h) = dom::sync_canvas_to_viewport(&canvas_resize);
                state_resize.borrow_mut().field.on_resize(w as f32, h as f32);
            })
        });

        Some(Self {
            state,
            frames,
            resize,
        })
    }

    /// Stop painting and let go of the frame callback and resize listener.
    pub fn stop(&mut self) {
        self.state.borrow_mut().field.stop();
        self.frames.take();
        self.resize.take();
    }
}

impl Drop for ParticleLayer {
    fn drop(&mut self) {
        self.stop();
    }
}
