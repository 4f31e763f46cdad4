//! Drifting asteroid glyphs.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use starfolio_core::{AsteroidDescriptor, Repeat};

use crate::chars::ASTEROID_CHARS;
use crate::color::{ASTEROID_SLATE, blend, rgb_of};
use crate::motion::{Transition, Tween};

/// The hand-placed asteroid set.
pub const ASTEROIDS: [AsteroidDescriptor; 5] = [
    AsteroidDescriptor {
        size: 60,
        start_x: 100,
        start_y: 100,
        duration: 20.0,
        delay: 0.0,
    },
    AsteroidDescriptor {
        size: 40,
        start_x: 800,
        start_y: 200,
        duration: 25.0,
        delay: 2.0,
    },
    AsteroidDescriptor {
        size: 90,
        start_x: 200,
        start_y: 600,
        duration: 30.0,
        delay: 5.0,
    },
    AsteroidDescriptor {
        size: 50,
        start_x: 1000,
        start_y: 500,
        duration: 22.0,
        delay: 1.0,
    },
    AsteroidDescriptor {
        size: 30,
        start_x: 500,
        start_y: 50,
        duration: 18.0,
        delay: 3.0,
    },
];

/// Pixel offset of each drift keyframe from the start position.
const DRIFT_OFFSETS: [f64; 4] = [0.0, 50.0, -50.0, 0.0];

/// Nominal terminal cell size in pixels.
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Opacity of asteroid bodies.
const ASTEROID_OPACITY: f64 = 0.3;

/// Jagged rock outline in a 24x24 box.
const OUTLINE: [(f64, f64); 12] = [
    (12.0, 2.0),
    (15.0, 5.0),
    (19.0, 4.0),
    (22.0, 9.0),
    (20.0, 14.0),
    (22.0, 19.0),
    (17.0, 22.0),
    (12.0, 20.0),
    (7.0, 22.0),
    (2.0, 19.0),
    (4.0, 14.0),
    (2.0, 9.0),
];
const OUTLINE_BOX: f64 = 24.0;

/// Position and rotation of an asteroid at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidPose {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
}

/// Drift animation for a single asteroid.
#[derive(Debug, Clone)]
pub struct AsteroidDrift {
    size: f64,
    x: Tween,
    y: Tween,
    rotation: Tween,
}

impl AsteroidDrift {
    pub fn new(desc: &AsteroidDescriptor) -> Self {
        let transition = Transition::new(desc.duration)
            .repeat(Repeat::Infinite)
            .delay(desc.delay);
        let path = |start: i32| -> Vec<f64> {
            DRIFT_OFFSETS
                .iter()
                .map(|offset| start as f64 + offset)
                .collect()
        };

        Self {
            size: desc.size as f64,
            x: Tween::keyframes(path(desc.start_x), transition),
            y: Tween::keyframes(path(desc.start_y), transition),
            rotation: Tween::between(0.0, 360.0, transition),
        }
    }

    pub fn pose(&self, elapsed: f64) -> AsteroidPose {
        AsteroidPose {
            x: self.x.sample(elapsed),
            y: self.y.sample(elapsed),
            rotation: self.rotation.sample(elapsed),
        }
    }

    /// Whether the pixel `(px, py)` lies inside the rock outline at `pose`.
    pub fn covers(&self, pose: &AsteroidPose, px: f64, py: f64) -> bool {
        let half = self.size / 2.0;
        let (cx, cy) = (pose.x + half, pose.y + half);

        // Undo the rotation about the glyph centre
        let theta = -pose.rotation.to_radians();
        let (dx, dy) = (px - cx, py - cy);
        let rx = dx * theta.cos() - dy * theta.sin();
        let ry = dx * theta.sin() + dy * theta.cos();

        let scale = OUTLINE_BOX / self.size;
        let u = rx * scale + OUTLINE_BOX / 2.0;
        let v = ry * scale + OUTLINE_BOX / 2.0;
        point_in_outline(u, v)
    }

    /// Paint the asteroid over the backdrop and stars already in `buf`.
    pub fn render(&self, buf: &mut Buffer, area: Rect, elapsed: f64) {
        let pose = self.pose(elapsed);
        let glyph = rotation_glyph(pose.rotation);

        // Cells touched by the unrotated bounding circle
        let reach = self.size * std::f64::consts::FRAC_1_SQRT_2;
        let (cx, cy) = (pose.x + self.size / 2.0, pose.y + self.size / 2.0);
        let col_range = cell_span(cx - reach, cx + reach, CELL_WIDTH_PX, area.width);
        let row_range = cell_span(cy - reach, cy + reach, CELL_HEIGHT_PX, area.height);

        for row in row_range {
            for col in col_range.clone() {
                let px = (col as f64 + 0.5) * CELL_WIDTH_PX;
                let py = (row as f64 + 0.5) * CELL_HEIGHT_PX;
                if !self.covers(&pose, px, py) {
                    continue;
                }
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                let backdrop = rgb_of(cell.bg);
                let tinted = blend(ASTEROID_SLATE, backdrop, ASTEROID_OPACITY);
                // Stars behind the rock stay visible through it
                if cell.symbol() == " " {
                    cell.set_char(glyph);
                    cell.set_style(Style::new().fg(tinted));
                }
                cell.set_style(Style::new().bg(tinted));
            }
        }
    }
}

/// Texture glyph for the current quarter turn.
fn rotation_glyph(rotation: f64) -> char {
    let quarter = (rotation.rem_euclid(360.0) / 90.0) as usize;
    ASTEROID_CHARS[quarter.min(ASTEROID_CHARS.len() - 1)]
}

/// Range of cell indices overlapping the pixel span `[lo, hi]`, clipped to `limit`.
fn cell_span(lo: f64, hi: f64, cell_px: f64, limit: u16) -> std::ops::Range<u16> {
    let start = (lo / cell_px).floor().max(0.0);
    let end = ((hi / cell_px).ceil() + 1.0).min(limit as f64);
    if end <= start {
        return 0..0;
    }
    start as u16..end as u16
}

/// Even-odd ray casting against [`OUTLINE`].
fn point_in_outline(u: f64, v: f64) -> bool {
    let mut inside = false;
    let mut j = OUTLINE.len() - 1;
    for i in 0..OUTLINE.len() {
        let (xi, yi) = OUTLINE[i];
        let (xj, yj) = OUTLINE[j];
        if (yi > v) != (yj > v) && u < (xj - xi) * (v - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
