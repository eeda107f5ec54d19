//! Decorative particle field: a fixed pool of glowing dots drifting upward.
//!
//! Particles live in a plain `Vec` arena that is allocated once by
//! [`ParticleField::start`]. A particle that outlives its lifespan is
//! recycled in place at the bottom of the surface; nothing is reallocated
//! while the field runs.

use crate::config::ParticleConfig;
use crate::constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::PI;

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

impl RandomSource for StdRng {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Replays a fixed list of values, wrapping around at the end.
#[derive(Clone, Debug, Default)]
pub struct SequenceRandom {
    values: Vec<f32>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.next % self.values.len()];
        self.next = self.next.wrapping_add(1);
        v.clamp(0.0, 1.0 - f32::EPSILON)
    }
}

/// Drawable dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Paint target for the field. The web front-end implements this for a
/// canvas 2d context; tests record the calls.
pub trait DrawSurface {
    fn clear(&mut self, surface: Surface);
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32, line_width: f64);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub size: f32,
    /// `x` is horizontal drift per tick, `y` is upward speed per tick.
    pub vel: Vec2,
    pub age: u32,
    pub lifespan: u32,
    pub opacity: f32,
}

/// Create a particle somewhere on the surface.
///
/// Draws from `rng` in a fixed order: x, y, size, drift, rise, opacity,
/// lifespan.
pub fn spawn(surface: Surface, rng: &mut impl RandomSource) -> Particle {
    let x = rng.next_f32() * surface.width;
    let y = rng.next_f32() * surface.height;
    let size = SIZE_MIN + rng.next_f32() * SIZE_SPAN;
    let drift = (rng.next_f32() - 0.5) * DRIFT_SPAN;
    let rise = RISE_MIN + rng.next_f32() * RISE_SPAN;
    let opacity = FLICKER_MIN + rng.next_f32() * FLICKER_SPAN;
    let extra = ((rng.next_f32() * LIFESPAN_SPAN as f32) as u32).min(LIFESPAN_SPAN - 1);
    Particle {
        pos: Vec2::new(x, y),
        size,
        vel: Vec2::new(drift, rise),
        age: 0,
        lifespan: LIFESPAN_MIN + extra,
        opacity,
    }
}

/// Advance one particle by a single tick.
pub fn update(pool: &mut [Particle], index: usize, surface: Surface, rng: &mut impl RandomSource) {
    let p = &mut pool[index];
    p.pos.x += p.vel.x;
    p.pos.y -= p.vel.y;
    p.age += 1;
    if p.age > p.lifespan {
        p.age = 0;
        p.pos.y = surface.height + RESPAWN_BELOW_PX;
        p.pos.x = rng.next_f32() * surface.width;
    }
    let life_ratio = p.age as f32 / p.lifespan as f32;
    let flicker = FLICKER_MIN + rng.next_f32() * FLICKER_SPAN;
    // sin(PI) rounds to a tiny negative in f32
    p.opacity = ((life_ratio * PI).sin() * flicker).max(0.0);
}

/// Paint one particle: filled dot plus a faint outline.
pub fn draw(pool: &[Particle], index: usize, canvas: &mut impl DrawSurface, style: &ParticleConfig) {
    let p = &pool[index];
    canvas.fill_circle(p.pos, p.size, style.fill_rgb, p.opacity);
    canvas.stroke_circle(
        p.pos,
        p.size,
        style.stroke_rgb,
        p.opacity * style.stroke_alpha,
        style.line_width,
    );
}

pub struct ParticleField {
    pool: Vec<Particle>,
    surface: Surface,
    style: ParticleConfig,
    running: bool,
}

impl ParticleField {
    pub fn new(style: ParticleConfig) -> Self {
        Self {
            pool: Vec::new(),
            surface: Surface::default(),
            style,
            running: false,
        }
    }

    /// Allocate the pool and begin accepting ticks.
    ///
    /// Starting an already running field re-rolls the whole pool.
    pub fn start(&mut self, width: f32, height: f32, rng: &mut impl RandomSource) {
        self.surface = Surface::new(width, height);
        self.pool = (0..self.style.count)
            .map(|_| spawn(self.surface, rng))
            .collect();
        self.running = true;
        log::debug!(
            "[particles] started pool={} surface={}x{}",
            self.pool.len(),
            width,
            height
        );
    }

    /// Track new surface dimensions. Particles already in flight keep their
    /// coordinates; only recycled ones pick up the new bounds.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.surface = Surface::new(width, height);
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("[particles] stopped");
        }
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.pool
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Run one animation frame. Returns `false`, touching nothing, once the
    /// field has been stopped.
    pub fn tick(&mut self, rng: &mut impl RandomSource, canvas: &mut impl DrawSurface) -> bool {
        if !self.running {
            return false;
        }
        canvas.clear(self.surface);
        for i in 0..self.pool.len() {
            update(&mut self.pool, i, self.surface, rng);
            draw(&self.pool, i, canvas, &self.style);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    struct Discard;

    impl DrawSurface for Discard {
        fn clear(&mut self, _: Surface) {}
        fn fill_circle(&mut self, _: Vec2, _: f32, _: [u8; 3], _: f32) {}
        fn stroke_circle(&mut self, _: Vec2, _: f32, _: [u8; 3], _: f32, _: f64) {}
    }

    #[test]
    fn spawn_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let surface = Surface::new(1280.0, 720.0);
        for _ in 0..500 {
            let p = spawn(surface, &mut rng);
            assert!(p.pos.x >= 0.0 && p.pos.x < 1280.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 720.0);
            assert!(p.size >= 1.0 && p.size < 4.0);
            assert!(p.vel.x >= -0.25 && p.vel.x < 0.25);
            assert!(p.vel.y >= 0.1 && p.vel.y < 0.4);
            assert!(p.lifespan >= 200 && p.lifespan < 400);
            assert!(p.opacity >= 0.3 && p.opacity < 0.8);
            assert_eq!(p.age, 0);
        }
    }

    #[test]
    fn sequence_extremes_stay_in_range() {
        let surface = Surface::new(100.0, 100.0);
        let p = spawn(surface, &mut SequenceRandom::new(vec![1.0]));
        assert!(p.pos.x < 100.0);
        assert!(p.lifespan < 400);
        let p = spawn(surface, &mut SequenceRandom::new(vec![0.0]));
        assert_eq!(p.lifespan, 200);
        assert_eq!(p.vel.x, -0.25);
    }

    #[test]
    fn tick_on_idle_field_does_nothing() {
        let mut field = ParticleField::new(ParticleConfig::default());
        let mut rng = SequenceRandom::new(vec![0.5]);
        assert!(!field.tick(&mut rng, &mut Discard));
        assert!(field.particles().is_empty());
    }
}
