// Host-side tests for the particle field.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{
    spawn, update, DrawSurface, ParticleConfig, ParticleField, SequenceRandom, Surface,
};

#[derive(Default)]
struct Recorder {
    clears: usize,
    fills: Vec<(Vec2, f32, [u8; 3], f32)>,
    strokes: Vec<(f32, f64)>,
}

impl DrawSurface for Recorder {
    fn clear(&mut self, _surface: Surface) {
        self.clears += 1;
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.fills.push((center, radius, rgb, alpha));
    }
    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _rgb: [u8; 3], alpha: f32, line_width: f64) {
        self.strokes.push((alpha, line_width));
    }
}

fn started_field(seed: u64) -> (ParticleField, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut field = ParticleField::new(ParticleConfig::default());
    field.start(1280.0, 720.0, &mut rng);
    (field, rng)
}

#[test]
fn start_allocates_fixed_pool() {
    let (field, _) = started_field(1);
    assert!(field.is_running());
    assert_eq!(field.particles().len(), 40);
    assert!(field.particles().iter().all(|p| p.age == 0));
}

#[test]
fn age_never_exceeds_lifespan() {
    let (mut field, mut rng) = started_field(2);
    let mut canvas = Recorder::default();
    for _ in 0..1200 {
        assert!(field.tick(&mut rng, &mut canvas));
        for p in field.particles() {
            assert!(p.age <= p.lifespan, "age {} > lifespan {}", p.age, p.lifespan);
        }
    }
}

#[test]
fn particles_rise_and_drift_between_resets() {
    let (mut field, mut rng) = started_field(3);
    let mut canvas = Recorder::default();
    for _ in 0..600 {
        let before: Vec<_> = field.particles().to_vec();
        field.tick(&mut rng, &mut canvas);
        for (old, new) in before.iter().zip(field.particles()) {
            if new.age == 0 {
                // recycled this tick
                continue;
            }
            assert_eq!(new.age, old.age + 1);
            assert!(new.pos.y < old.pos.y, "particle moved down");
            assert!((new.pos.x - old.pos.x - old.vel.x).abs() < 1e-3);
            assert_eq!(new.vel, old.vel);
            assert_eq!(new.size, old.size);
        }
    }
}

#[test]
fn recycle_resets_below_bottom_edge() {
    let surface = Surface::new(1000.0, 500.0);
    let mut pool = vec![spawn(surface, &mut SequenceRandom::new(vec![0.5]))];
    pool[0].age = pool[0].lifespan;
    let lifespan = pool[0].lifespan;

    update(&mut pool, 0, surface, &mut SequenceRandom::new(vec![0.25]));

    let p = pool[0];
    assert_eq!(p.age, 0);
    assert_eq!(p.lifespan, lifespan);
    assert_eq!(p.pos.y, 510.0);
    assert_eq!(p.pos.x, 250.0);
    assert_eq!(p.opacity, 0.0);
}

#[test]
fn opacity_follows_life_curve_times_flicker() {
    let surface = Surface::new(100.0, 100.0);
    let mut pool = vec![spawn(surface, &mut SequenceRandom::new(vec![0.0]))];
    assert_eq!(pool[0].lifespan, 200);
    pool[0].age = 99;

    // flicker factor 0.3 + 0.5 * 1.0 (clamped just below 1)
    update(&mut pool, 0, surface, &mut SequenceRandom::new(vec![1.0]));
    assert_eq!(pool[0].age, 100);
    assert!((pool[0].opacity - 0.8).abs() < 1e-4);

    pool[0].age = 99;
    update(&mut pool, 0, surface, &mut SequenceRandom::new(vec![0.0]));
    assert!((pool[0].opacity - 0.3).abs() < 1e-4);
}

#[test]
fn flicker_is_reproducible_with_same_sequence() {
    let run = || {
        let mut rng = SequenceRandom::new(vec![0.1, 0.7, 0.3, 0.9, 0.5]);
        let mut field = ParticleField::new(ParticleConfig::default());
        field.start(800.0, 600.0, &mut rng);
        let mut canvas = Recorder::default();
        for _ in 0..50 {
            field.tick(&mut rng, &mut canvas);
        }
        field.particles().to_vec()
    };
    assert_eq!(run(), run());
}

#[test]
fn tick_clears_then_draws_each_particle_in_gold() {
    let (mut field, mut rng) = started_field(4);
    let mut canvas = Recorder::default();
    field.tick(&mut rng, &mut canvas);
    assert_eq!(canvas.clears, 1);
    assert_eq!(canvas.fills.len(), 40);
    assert_eq!(canvas.strokes.len(), 40);
    for ((_, radius, rgb, alpha), (stroke_alpha, width)) in canvas.fills.iter().zip(&canvas.strokes) {
        assert!(*radius >= 1.0 && *radius < 4.0);
        assert_eq!(*rgb, [212, 175, 55]);
        assert!((stroke_alpha - alpha * 0.6).abs() < 1e-6);
        assert_eq!(*width, 0.5);
    }
    for (i, (center, ..)) in canvas.fills.iter().enumerate() {
        assert_eq!(*center, field.particles()[i].pos, "draw order must follow pool order");
    }
}

#[test]
fn resize_does_not_move_particles_in_flight() {
    let (mut field, _) = started_field(5);
    let before = field.particles().to_vec();
    field.on_resize(320.0, 240.0);
    assert_eq!(field.particles(), &before[..]);
    assert_eq!(field.surface(), Surface::new(320.0, 240.0));
}

#[test]
fn stopped_field_ignores_forced_ticks() {
    let (mut field, mut rng) = started_field(6);
    let mut canvas = Recorder::default();
    field.tick(&mut rng, &mut canvas);
    field.stop();
    field.stop();
    let frozen = field.particles().to_vec();
    let mut after = Recorder::default();
    for _ in 0..10 {
        assert!(!field.tick(&mut rng, &mut after));
    }
    assert_eq!(field.particles(), &frozen[..]);
    assert_eq!(after.clears, 0);
    assert!(after.fills.is_empty());
}

#[test]
fn custom_pool_size_is_honoured() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut field = ParticleField::new(ParticleConfig {
        count: 7,
        ..ParticleConfig::default()
    });
    field.start(100.0, 100.0, &mut rng);
    assert_eq!(field.particles().len(), 7);
}
