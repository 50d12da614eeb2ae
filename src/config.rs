// Tunable constants of the particle field. Defaults reproduce the site's
// background exactly.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    /// Viewport area (px²) per generated particle.
    pub area_per_particle: f64,
    /// Each velocity component starts in `[-initial_speed, initial_speed)`.
    pub initial_speed: f64,
    pub radius_range: (f64, f64),
    pub opacity_range: (f64, f64),
    pub link_distance: f64,
    /// Line opacity for two particles at the same spot.
    pub link_opacity: f64,
    pub link_width: f64,
    pub pointer_radius: f64,
    pub pointer_strength: f64,
    pub max_speed: f64,
    pub damping: f64,
    pub color: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            max_particles: 80,
            area_per_particle: 15000.0,
            initial_speed: 0.25,
            radius_range: (1.0, 3.0),
            opacity_range: (0.2, 0.7),
            link_distance: 150.0,
            link_opacity: 0.15,
            link_width: 0.5,
            pointer_radius: 150.0,
            pointer_strength: 0.02,
            max_speed: 2.0,
            damping: 0.99,
            color: Color::from_u32(0x6366f1ff),
        }
    }
}

impl FieldConfig {
    /// Number of particles for a viewport, scaled by area and capped.
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        let area = sanitize(width) * sanitize(height);
        let count = (area / self.area_per_particle).floor();
        if count.is_finite() && count > 0.0 {
            (count as usize).min(self.max_particles)
        } else {
            0
        }
    }
}

// Negative, NaN and infinite dimensions all count as an empty viewport.
pub(crate) fn sanitize(dim: f64) -> f64 {
    if dim.is_finite() && dim > 0.0 {
        dim
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_scales_with_area() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(1000.0, 1000.0), 66);
        assert_eq!(config.particle_count(800.0, 600.0), 32);
    }

    #[test]
    fn count_is_capped() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(1600.0, 1200.0), 80);
        assert_eq!(config.particle_count(3840.0, 2160.0), 80);
    }

    #[test]
    fn degenerate_viewports_are_empty() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(0.0, 0.0), 0);
        assert_eq!(config.particle_count(100.0, 100.0), 0);
        assert_eq!(config.particle_count(-1000.0, -1000.0), 0);
        assert_eq!(config.particle_count(f64::NAN, 1000.0), 0);
        assert_eq!(config.particle_count(f64::INFINITY, 1000.0), 0);
    }
}
