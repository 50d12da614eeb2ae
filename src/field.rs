// The particle field: owns every particle of the background, steps them one
// frame at a time and draws the frame onto a `Surface`.

use crate::config::{sanitize, FieldConfig};
use crate::particle::Particle;
use crate::surface::{NullSurface, Surface};
use rand::Rng;

pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: glm::DVec2,
    generation: u64,
    frames: u64,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, config: FieldConfig, rng: &mut R) -> Self {
        let mut field = ParticleField {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            pointer: glm::vec2(0.0, 0.0),
            generation: 0,
            frames: 0,
        };
        field.populate(width, height, rng);
        field
    }

    /// Adopts the new viewport size and throws the whole particle set away in
    /// favour of a freshly generated one.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.populate(width, height, rng);
        self.generation += 1;
    }

    fn populate<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        let width = sanitize(width);
        let height = sanitize(height);
        let count = self.config.particle_count(width, height);
        let config = &self.config;
        let particles: Vec<Particle> = (0..count)
            .map(|_| Particle::random(rng, width, height, config))
            .collect();
        self.width = width;
        self.height = height;
        self.particles = particles;
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = glm::vec2(x, y);
    }

    /// Advances every particle by one frame and draws the result.
    ///
    /// Particles are processed in index order: each one moves, bounces, is
    /// drawn, is linked to every later particle in range, and then reacts to
    /// the pointer and slows down. Later particles are therefore linked at the
    /// position they had before this frame's move.
    pub fn step<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let config = self.config;
        surface.clear(self.width, self.height)?;

        for i in 0..self.particles.len() {
            let (head, rest) = self.particles.split_at_mut(i + 1);
            let particle = &mut head[i];

            particle.integrate();
            particle.reflect(self.width, self.height);
            surface.fill_circle(particle.pos, particle.radius, config.color, particle.opacity)?;

            for other in rest.iter() {
                let distance = glm::distance(&particle.pos, &other.pos);
                if distance < config.link_distance {
                    surface.stroke_line(
                        particle.pos,
                        other.pos,
                        config.color,
                        link_opacity(distance, &config),
                        config.link_width,
                    )?;
                }
            }

            particle.repel_from(self.pointer, &config);
            particle.damp(config.damping);
        }
        self.frames += 1;
        Ok(())
    }

    /// Steps the physics without drawing anything.
    pub fn advance(&mut self) {
        match self.step(&mut NullSurface) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn pointer(&self) -> glm::DVec2 {
        self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// How many times the particle set has been regenerated by `resize`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Frames stepped so far; survives `resize`.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

/// Opacity of the line joining two particles `distance` apart: `link_opacity`
/// when touching, fading linearly to nothing at `link_distance`.
pub fn link_opacity(distance: f64, config: &FieldConfig) -> f64 {
    if distance < config.link_distance {
        config.link_opacity * (1.0 - distance / config.link_distance)
    } else {
        0.0
    }
}
