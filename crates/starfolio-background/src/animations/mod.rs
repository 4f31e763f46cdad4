//! Background animation implementations.

pub mod asteroids;
pub mod backdrop;
pub mod orbit;
pub mod starfield;
