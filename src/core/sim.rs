use glam::Vec2;
use rand::prelude::*;

pub const DEFAULT_PARTICLE_COUNT: usize = 200;

/// Pairs further apart than this get no connecting line.
pub const MAX_CONNECT_DISTANCE: f32 = 100.0;

// Radius is drawn once per particle from [MIN_RADIUS, MAX_RADIUS).
pub const MIN_RADIUS: f32 = 5.0;
pub const MAX_RADIUS: f32 = 15.0;

/// Velocity components are drawn from [-MAX_COMPONENT_SPEED, MAX_COMPONENT_SPEED).
pub const MAX_COMPONENT_SPEED: f32 = 0.5;

/// 5x5 pixel-art heart, drawn cell by cell at `radius / 2` per cell.
pub const HEART_GLYPH: [[bool; 5]; 5] = [
    [false, true, false, true, false],
    [true, true, true, true, true],
    [true, true, true, true, true],
    [false, true, true, true, false],
    [false, false, true, false, false],
];

/// Logical width/height the particles move within. Mutated on window resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Draw a coordinate uniformly from `[radius, extent - radius]`.
///
/// If the surface is too small for the particle on this axis the draw range is
/// empty; the coordinate is pinned to the axis centre instead of sampling a
/// negative span.
fn random_coord(rng: &mut impl Rng, radius: f32, extent: f32) -> f32 {
    let span = extent - radius * 2.0;
    if span <= 0.0 {
        return extent * 0.5;
    }
    radius + rng.gen::<f32>() * span
}

fn random_component_speed(rng: &mut impl Rng) -> f32 {
    rng.gen::<f32>() * (2.0 * MAX_COMPONENT_SPEED) - MAX_COMPONENT_SPEED
}

fn random_interior(rng: &mut impl Rng, radius: f32, bounds: Bounds) -> Vec2 {
    Vec2::new(
        random_coord(rng, radius, bounds.width),
        random_coord(rng, radius, bounds.height),
    )
}

/// A drifting point-mass rendered as a heart glyph.
#[derive(Clone, Debug)]
pub struct Particle {
    pub radius: f32,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    pub fn new(rng: &mut impl Rng, bounds: Bounds) -> Self {
        let radius = MIN_RADIUS + rng.gen::<f32>() * (MAX_RADIUS - MIN_RADIUS);
        Self {
            radius,
            pos: random_interior(rng, radius, bounds),
            vel: Vec2::new(random_component_speed(rng), random_component_speed(rng)),
        }
    }

    /// Advance one frame and reflect off the walls.
    ///
    /// The wall check runs after the move, so a particle can sit up to one
    /// velocity step past the wall for a single frame before the flipped
    /// component carries it back. Reflection only negates a component; speed
    /// is preserved.
    pub fn update(&mut self, bounds: Bounds) {
        self.pos += self.vel;
        if self.pos.x > bounds.width - self.radius || self.pos.x < self.radius {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > bounds.height - self.radius || self.pos.y < self.radius {
            self.vel.y = -self.vel.y;
        }
    }

    /// Re-draw the position inside `bounds`; radius and velocity are kept.
    pub fn reset(&mut self, rng: &mut impl Rng, bounds: Bounds) {
        self.pos = random_interior(rng, self.radius, bounds);
    }
}

/// Line segment between two nearby particles, faded by distance.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// Linear opacity falloff: 1 at zero distance, 0 at the threshold, `None` at
/// or beyond it.
pub fn connection_opacity(distance: f32) -> Option<f32> {
    if distance < MAX_CONNECT_DISTANCE {
        Some(1.0 - distance / MAX_CONNECT_DISTANCE)
    } else {
        None
    }
}

/// Owns the particle collection and the bounds they move within.
///
/// The collection size is fixed at construction; resize repositions particles
/// but never adds or removes them.
pub struct ParticleField {
    pub bounds: Bounds,
    pub particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let bounds = Bounds::new(width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count).map(|_| Particle::new(&mut rng, bounds)).collect();
        Self {
            bounds,
            particles,
            rng,
        }
    }

    /// Proximity lines for the current (pre-step) positions.
    ///
    /// Every unordered pair is checked, so this is the O(n^2) hot path:
    /// ~19,900 pair checks per frame at the default 200 particles.
    pub fn connections(&self) -> Vec<Connection> {
        let mut out = Vec::new();
        for a in 0..self.particles.len() {
            for b in (a + 1)..self.particles.len() {
                let from = self.particles[a].pos;
                let to = self.particles[b].pos;
                if let Some(opacity) = connection_opacity(from.distance(to)) {
                    out.push(Connection { from, to, opacity });
                }
            }
        }
        out
    }

    /// Advance every particle one frame.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.update(bounds);
        }
    }

    /// Adopt new bounds and relocate every particle inside them.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.reset(&mut self.rng, bounds);
        }
    }
}
