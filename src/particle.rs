// A single point of the background field: position, velocity and the fixed
// look it was born with

use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: glm::DVec2,
    pub vel: glm::DVec2,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, opacity: f64) -> Particle {
        Particle {
            pos: glm::vec2(pos_x, pos_y),
            vel: glm::vec2(vel_x, vel_y),
            radius,
            opacity,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let speed = config.initial_speed;
        let (min_radius, max_radius) = config.radius_range;
        let (min_opacity, max_opacity) = config.opacity_range;
        Particle::new(
            rng.gen::<f64>() * width,
            rng.gen::<f64>() * height,
            uniform(rng, -speed, speed),
            uniform(rng, -speed, speed),
            uniform(rng, min_radius, max_radius),
            uniform(rng, min_opacity, max_opacity),
        )
    }

    pub fn speed(&self) -> f64 {
        glm::length(&self.vel)
    }

    // One frame of Euler integration
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    // Flips the velocity sign on any axis that left the viewport. The position
    // itself is left where it is, so a particle can sit one step outside.
    pub fn reflect(&mut self, width: f64, height: f64) {
        if self.pos.x < 0.0 || self.pos.x > width {
            self.vel.x *= -1.0;
        }
        if self.pos.y < 0.0 || self.pos.y > height {
            self.vel.y *= -1.0;
        }
    }

    /// Pushes the particle away from the pointer when it is within
    /// `pointer_radius`, with a force falling off linearly to zero at the
    /// radius, then clamps the speed to `max_speed`.
    ///
    /// Returns whether the pointer was close enough to interact.
    pub fn repel_from(&mut self, pointer: glm::DVec2, config: &FieldConfig) -> bool {
        let away = self.pos - pointer;
        let distance = glm::length(&away);
        if distance.is_nan() || distance >= config.pointer_radius {
            return false;
        }
        // A particle exactly under the pointer has no direction to flee in
        if distance > 0.0 {
            let force = (config.pointer_radius - distance) / config.pointer_radius;
            self.vel += away / distance * (force * config.pointer_strength);
        }
        let speed = self.speed();
        if speed > config.max_speed {
            self.vel *= config.max_speed / speed;
        }
        true
    }

    pub fn damp(&mut self, factor: f64) {
        self.vel *= factor;
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}
