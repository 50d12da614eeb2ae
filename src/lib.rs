//! Animated particle background for the portfolio site.
//!
//! A field of slowly drifting points fills the viewport behind the page.
//! Points closer than 150px are joined by faint lines and the mouse pushes
//! nearby points away. [`ParticleField`] holds the simulation and draws onto
//! any [`Surface`]; in the browser, `ParticlesBackground` mounts it on a
//! fixed canvas and runs it from `requestAnimationFrame`.

extern crate nalgebra_glm as glm;

#[cfg(target_arch = "wasm32")]
#[macro_use]
mod utils;

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod pixel_buffer;
pub mod surface;
#[cfg(target_arch = "wasm32")]
mod web;

pub use crate::canvas::CanvasSurface;
pub use crate::color::Color;
pub use crate::config::FieldConfig;
pub use crate::error::MountError;
pub use crate::field::{link_opacity, ParticleField};
pub use crate::particle::Particle;
pub use crate::pixel_buffer::PixelBuffer;
pub use crate::surface::{NullSurface, Surface};
#[cfg(target_arch = "wasm32")]
pub use crate::web::ParticlesBackground;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Use `wee_alloc` as the global allocator when the feature is on.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn initialize() {
    utils::set_panic_hook();
}
