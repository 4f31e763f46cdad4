//! Character constants for background animations.

/// Star glyphs from smallest to largest diameter.
pub const STAR_CHARS: &[char] = &['·', '•', '✦'];

/// Asteroid glyphs, one per quarter turn of rotation.
pub const ASTEROID_CHARS: &[char] = &['▓', '▒', '▓', '░'];

/// Orbit ring dot and highlighted arc glyphs.
pub const ORBIT_DOT: char = '·';
pub const ORBIT_ARC: char = '•';
