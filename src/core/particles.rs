//! Particle field drawn on the full-page background canvas

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::motion::Vec2;

/// Particles closer than this are joined by a line
pub const DEFAULT_LINK_DISTANCE: f64 = 140.0;

/// Roughly one particle per this many square pixels
const AREA_PER_PARTICLE: f64 = 18_000.0;
const MIN_PARTICLES: usize = 24;
const MAX_PARTICLES: usize = 110;

/// Top speed in pixels per second
const MAX_SPEED: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
}

/// Line between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    /// 1.0 when touching, falling linearly to 0.0 at the link distance
    pub strength: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    link_distance: f64,
    particles: Vec<Particle>,
}

/// Particle budget for a canvas of the given size
pub fn particle_count(width: f64, height: f64) -> usize {
    let area = (width.max(0.0) * height.max(0.0)) / AREA_PER_PARTICLE;
    (area as usize).clamp(MIN_PARTICLES, MAX_PARTICLES)
}

impl ParticleField {
    /// Fill a `width` x `height` canvas using a seeded generator
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let count = particle_count(width, height);

        let particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(
                    rng.gen_range(0.0..=width.max(1.0)),
                    rng.gen_range(0.0..=height.max(1.0)),
                ),
                velocity: Vec2::new(
                    rng.gen_range(-MAX_SPEED..=MAX_SPEED),
                    rng.gen_range(-MAX_SPEED..=MAX_SPEED),
                ),
                radius: rng.gen_range(0.8..=2.2),
            })
            .collect();

        Self {
            width,
            height,
            link_distance: DEFAULT_LINK_DISTANCE,
            particles,
        }
    }

    pub fn with_link_distance(mut self, distance: f64) -> Self {
        self.link_distance = distance.max(0.0);
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Canvas was resized: keep particles, fold them into the new bounds
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for p in &mut self.particles {
            p.position.x = wrap(p.position.x, width);
            p.position.y = wrap(p.position.y, height);
        }
    }

    /// Drift every particle for `dt_ms`, wrapping around the edges
    pub fn step(&mut self, dt_ms: f64) {
        let dt = dt_ms.clamp(0.0, 100.0) / 1000.0;
        for p in &mut self.particles {
            p.position.x = wrap(p.position.x + p.velocity.x * dt, self.width);
            p.position.y = wrap(p.position.y + p.velocity.y * dt, self.height);
        }
    }

    /// All pairs closer than the link distance
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        if self.link_distance <= 0.0 {
            return links;
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance < self.link_distance {
                    links.push(Link {
                        from: a.position,
                        to: b.position,
                        strength: 1.0 - distance / self.link_distance,
                    });
                }
            }
        }

        links
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    value.rem_euclid(extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_count_is_bounded() {
        assert_eq!(particle_count(0.0, 0.0), MIN_PARTICLES);
        assert_eq!(particle_count(10_000.0, 10_000.0), MAX_PARTICLES);
        assert_eq!(particle_count(1200.0, 900.0), 60);
    }

    #[test]
    fn test_seeded_field_is_reproducible() {
        let a = ParticleField::new(800.0, 600.0, 7);
        let b = ParticleField::new(800.0, 600.0, 7);
        assert_eq!(a.particles(), b.particles());

        let c = ParticleField::new(800.0, 600.0, 8);
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn test_particles_start_inside_bounds() {
        let field = ParticleField::new(640.0, 480.0, 1);
        for p in field.particles() {
            assert!((0.0..=640.0).contains(&p.position.x));
            assert!((0.0..=480.0).contains(&p.position.y));
        }
    }

    #[test]
    fn test_step_wraps_at_edges() {
        let mut field = ParticleField::new(100.0, 100.0, 3);
        field.particles = vec![Particle {
            position: Vec2::new(99.0, 1.0),
            velocity: Vec2::new(10.0, -10.0),
            radius: 1.0,
        }];

        field.step(200.0);

        let p = field.particles()[0];
        // 200ms clamps to 100ms: +1px / -1px
        assert!((p.position.x - 0.0).abs() < 1e-9);
        assert!((p.position.y - 0.0).abs() < 1e-9);

        field.step(100.0);
        let p = field.particles()[0];
        assert!((p.position.x - 1.0).abs() < 1e-9);
        assert!((p.position.y - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_links_fade_with_distance() {
        let mut field = ParticleField::new(500.0, 500.0, 0).with_link_distance(100.0);
        field.particles = vec![
            Particle {
                position: Vec2::new(0.0, 0.0),
                velocity: Vec2::ZERO,
                radius: 1.0,
            },
            Particle {
                position: Vec2::new(50.0, 0.0),
                velocity: Vec2::ZERO,
                radius: 1.0,
            },
            Particle {
                position: Vec2::new(400.0, 400.0),
                velocity: Vec2::ZERO,
                radius: 1.0,
            },
        ];

        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].strength - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_resize_folds_particles_in() {
        let mut field = ParticleField::new(1000.0, 1000.0, 11);
        field.resize(200.0, 100.0);
        for p in field.particles() {
            assert!(p.position.x < 200.0);
            assert!(p.position.y < 100.0);
        }
        assert_eq!(field.size(), (200.0, 100.0));
    }
}
