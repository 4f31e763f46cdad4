//! Spinning orbit rings around the hero badge.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use starfolio_core::Repeat;

use crate::chars::{ORBIT_ARC, ORBIT_DOT};
use crate::color::{ORBIT_INDIGO, ORBIT_PURPLE, blend, rgb_of};
use crate::motion::{Transition, Tween};

/// Inner ring diameter relative to the outer ring (24rem vs 28rem).
const INNER_RATIO: f64 = 384.0 / 448.0;

/// Half-width of the highlighted arc, in degrees.
const ARC_HALF_SPAN: f64 = 25.0;

/// One ring: radii in cells, colour, and its spin.
#[derive(Debug, Clone)]
struct Ring {
    rx: f64,
    ry: f64,
    color: (u8, u8, u8),
    spin: Tween,
}

/// Two concentric rings spinning in opposite directions.
#[derive(Debug, Clone)]
pub struct OrbitRings {
    /// Centre cell, may lie outside the render area while scrolling.
    center: (i32, i32),
    rings: [Ring; 2],
}

impl OrbitRings {
    /// Rings centred on `center` whose outer ring has the given cell radii.
    pub fn new(center: (i32, i32), outer_rx: f64, outer_ry: f64) -> Self {
        let spin = |period: f64, turn: f64| {
            Tween::between(0.0, turn, Transition::new(period).repeat(Repeat::Infinite))
        };
        Self {
            center,
            rings: [
                Ring {
                    rx: outer_rx * INNER_RATIO,
                    ry: outer_ry * INNER_RATIO,
                    color: ORBIT_INDIGO,
                    spin: spin(10.0, 360.0),
                },
                Ring {
                    rx: outer_rx,
                    ry: outer_ry,
                    color: ORBIT_PURPLE,
                    spin: spin(15.0, -360.0),
                },
            ],
        }
    }

    /// Angle of each ring's highlighted arc, in degrees, `[inner, outer]`.
    pub fn arc_angles(&self, elapsed: f64) -> [f64; 2] {
        [
            self.rings[0].spin.sample(elapsed).rem_euclid(360.0),
            self.rings[1].spin.sample(elapsed).rem_euclid(360.0),
        ]
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, elapsed: f64) {
        for ring in &self.rings {
            let arc = ring.spin.sample(elapsed);
            let steps = ((ring.rx + ring.ry) * 8.0).max(32.0) as usize;

            for step in 0..steps {
                let angle = step as f64 * 360.0 / steps as f64;
                let rad = angle.to_radians();
                let col = self.center.0 + (ring.rx * rad.cos()).round() as i32;
                let row = self.center.1 + (ring.ry * rad.sin()).round() as i32;
                if !contains(area, col, row) {
                    continue;
                }

                let lit = angular_distance(angle, arc) <= ARC_HALF_SPAN;
                let (glyph, alpha) = if lit { (ORBIT_ARC, 0.8) } else { (ORBIT_DOT, 0.2) };
                if let Some(cell) = buf.cell_mut((col as u16, row as u16)) {
                    // A lit arc wins over a dim dot from the other ring
                    if !lit && cell.symbol() == ORBIT_ARC.to_string() {
                        continue;
                    }
                    let backdrop = rgb_of(cell.bg);
                    cell.set_char(glyph);
                    cell.set_style(Style::new().fg(blend(ring.color, backdrop, alpha)));
                }
            }
        }
    }
}

fn contains(area: Rect, col: i32, row: i32) -> bool {
    col >= area.x as i32
        && row >= area.y as i32
        && col < area.right() as i32
        && row < area.bottom() as i32
}

/// Shortest distance between two angles in degrees.
fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rings_spin_opposite_ways() {
        let rings = OrbitRings::new((40, 12), 20.0, 10.0);
        assert_eq!(rings.arc_angles(0.0), [0.0, 0.0]);
        let [inner, outer] = rings.arc_angles(2.5);
        assert!((inner - 90.0).abs() < 1e-6);
        assert!((outer - 300.0).abs() < 1e-6);
        // Inner completes a turn every 10 s, outer every 15 s
        let [inner, outer] = rings.arc_angles(30.0);
        assert!(inner.abs() < 1e-6 || (inner - 360.0).abs() < 1e-6);
        assert!(outer.abs() < 1e-6 || (outer - 360.0).abs() < 1e-6);
    }

    #[test]
    fn test_angular_distance_wraps() {
        assert_eq!(angular_distance(350.0, 10.0), 20.0);
        assert_eq!(angular_distance(10.0, -10.0), 20.0);
        assert_eq!(angular_distance(90.0, 270.0), 180.0);
    }

    #[test]
    fn test_render_marks_arc() {
        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);
        let rings = OrbitRings::new((30, 15), 24.0, 12.0);
        rings.render(&mut buf, area, 0.0);

        // Both arcs start at angle zero, on the right of each ring
        assert_eq!(buf[(54, 15)].symbol(), ORBIT_ARC.to_string());
        // Left side of the outer ring is a dim dot
        assert_eq!(buf[(6, 15)].symbol(), ORBIT_DOT.to_string());
        // The centre is untouched
        assert_eq!(buf[(30, 15)].symbol(), " ");
    }

    #[test]
    fn test_render_clips_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        let rings = OrbitRings::new((-100, -100), 10.0, 5.0);
        rings.render(&mut buf, area, 1.0);
        assert_eq!(buf, Buffer::empty(area));
    }
}
