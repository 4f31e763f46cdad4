//! The composed background layer.

use rand::Rng;
use ratatui::{Frame, buffer::Buffer, layout::Rect, widgets::Widget};
use starfolio_core::Star;
use tracing::debug;

use crate::animations::asteroids::{ASTEROIDS, AsteroidDrift};
use crate::animations::{backdrop, starfield};
use crate::motion::Tween;

/// Background state, created once per mount.
///
/// The starfield is generated in [`BackgroundLayer::mount`] and never touched
/// again; rendering only samples animations at the given elapsed time. The
/// layer has no pointer targets, so everything it paints is click-through.
#[derive(Debug, Clone)]
pub struct BackgroundLayer {
    stars: Vec<Star>,
    /// Pulse animation per star, same order as `stars`.
    pulses: Vec<Tween>,
    asteroids: Vec<AsteroidDrift>,
    show_asteroids: bool,
}

impl BackgroundLayer {
    /// Mount the layer, drawing the starfield from `rng`.
    pub fn mount<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stars = starfield::generate_stars(rng);
        let pulses = stars.iter().map(starfield::pulse_tween).collect();
        let asteroids = ASTEROIDS.iter().map(AsteroidDrift::new).collect();
        debug!(stars = stars.len(), asteroids = ASTEROIDS.len(), "background mounted");

        Self {
            stars,
            pulses,
            asteroids,
            show_asteroids: true,
        }
    }

    /// Enable or disable the asteroid drift.
    pub fn with_asteroids(mut self, show: bool) -> Self {
        self.show_asteroids = show;
        self
    }

    /// The stars generated at mount.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Opacity of star `index` at `elapsed` seconds, if it exists.
    pub fn star_opacity(&self, index: usize, elapsed: f64) -> Option<f64> {
        self.pulses.get(index).map(|pulse| pulse.sample(elapsed))
    }

    /// A widget painting the layer as it looks `elapsed` seconds after mount.
    pub fn view(&self, elapsed: f64) -> BackgroundView<'_> {
        BackgroundView {
            layer: self,
            elapsed,
        }
    }

    /// Render the background over the whole frame.
    pub fn render(&self, frame: &mut Frame, elapsed: f64) {
        let area = frame.area();
        frame.render_widget(self.view(elapsed), area);
    }
}

/// Snapshot of a [`BackgroundLayer`] at one instant.
#[derive(Debug, Clone, Copy)]
pub struct BackgroundView<'a> {
    layer: &'a BackgroundLayer,
    elapsed: f64,
}

impl Widget for BackgroundView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        backdrop::render_backdrop(buf, area);

        for (star, pulse) in self.layer.stars.iter().zip(&self.layer.pulses) {
            starfield::render_star(buf, area, star, pulse.sample(self.elapsed));
        }

        if self.layer.show_asteroids {
            for asteroid in &self.layer.asteroids {
                asteroid.render(buf, area, self.elapsed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::STAR_CHARS;
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::style::Color;

    fn mounted() -> BackgroundLayer {
        BackgroundLayer::mount(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_mount_then_rerender_keeps_stars() {
        let layer = mounted();
        assert_eq!(layer.stars().len(), 50);
        for star in layer.stars() {
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((1.0..4.0).contains(&star.size));
            assert!((0.0..5.0).contains(&star.delay));
        }

        let snapshot = layer.stars().to_vec();
        let area = Rect::new(0, 0, 120, 40);
        for frame in 0..5 {
            let mut buf = Buffer::empty(area);
            layer.view(frame as f64 * 0.7).render(area, &mut buf);
            assert_eq!(layer.stars(), snapshot.as_slice());
        }
    }

    #[test]
    fn test_same_seed_same_layer() {
        assert_eq!(mounted().stars(), mounted().stars());
    }

    #[test]
    fn test_stars_painted_over_backdrop() {
        let layer = mounted().with_asteroids(false);
        let area = Rect::new(0, 0, 100, 50);
        let mut buf = Buffer::empty(area);
        layer.view(0.0).render(area, &mut buf);

        for star in layer.stars() {
            let (x, y) = starfield::star_cell(star, area);
            let cell = &buf[(x, y)];
            assert!(STAR_CHARS.iter().any(|c| cell.symbol() == c.to_string()));
            assert!(matches!(cell.bg, Color::Rgb(..)));
        }
    }

    #[test]
    fn test_star_opacity_pulses() {
        let layer = mounted();
        let delay = layer.stars()[0].delay;
        assert_eq!(layer.star_opacity(0, 0.0), Some(0.2));
        let peak = layer.star_opacity(0, delay + 1.5).unwrap_or_default();
        assert!((peak - 1.0).abs() < 1e-6);
        assert_eq!(layer.star_opacity(50, 0.0), None);
    }

    #[test]
    fn test_asteroids_toggle() {
        let area = Rect::new(0, 0, 160, 50);
        let layer = mounted();

        let mut with = Buffer::empty(area);
        layer.view(0.0).render(area, &mut with);
        let mut without = Buffer::empty(area);
        layer.clone().with_asteroids(false).view(0.0).render(area, &mut without);

        assert_ne!(with, without);
    }
}
