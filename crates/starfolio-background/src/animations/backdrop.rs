//! Static radial gradient backdrop.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use crate::animations::asteroids::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::color::{BACKDROP_CENTER, BACKDROP_EDGE, lerp_rgb};

/// Backdrop colour for the cell at `(col, row)` of an area `width` x `height`.
///
/// Distances are measured in pixels so the gradient stays circular despite
/// tall terminal cells; the gradient ends at the farthest corner.
pub fn backdrop_rgb(col: u16, row: u16, width: u16, height: u16) -> (u8, u8, u8) {
    let half_w = width as f64 * CELL_WIDTH_PX / 2.0;
    let half_h = height as f64 * CELL_HEIGHT_PX / 2.0;
    let radius = (half_w * half_w + half_h * half_h).sqrt();
    if radius == 0.0 {
        return BACKDROP_CENTER;
    }

    let dx = (col as f64 + 0.5) * CELL_WIDTH_PX - half_w;
    let dy = (row as f64 + 0.5) * CELL_HEIGHT_PX - half_h;
    let t = (dx * dx + dy * dy).sqrt() / radius;
    lerp_rgb(BACKDROP_CENTER, BACKDROP_EDGE, t)
}

/// Fill `area` with the gradient, clearing anything underneath.
pub fn render_backdrop(buf: &mut Buffer, area: Rect) {
    for row in 0..area.height {
        for col in 0..area.width {
            let (r, g, b) = backdrop_rgb(col, row, area.width, area.height);
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.reset();
                cell.set_style(Style::new().bg(Color::Rgb(r, g, b)));
            }
        }
    }
}
