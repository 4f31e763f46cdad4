//! Deep-space background rendering for the starfolio portfolio.
//!
//! The background is a single non-interactive layer painted behind all page
//! content: a radial gradient backdrop, a field of pulsing stars generated once
//! at mount, and a fixed set of drifting asteroids. Orbit rings are provided
//! separately so the page can place them around the hero badge.

mod animations;
mod chars;
mod color;
mod layer;
pub mod motion;

pub use animations::asteroids::{
    ASTEROIDS, AsteroidDrift, AsteroidPose, CELL_HEIGHT_PX, CELL_WIDTH_PX,
};
pub use animations::orbit::OrbitRings;
pub use animations::starfield::{generate_stars, pulse_tween, star_cell};
pub use color::{BACKDROP_CENTER, BACKDROP_EDGE, blend, lerp_rgb};
pub use layer::{BackgroundLayer, BackgroundView};
