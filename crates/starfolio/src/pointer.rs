//! Pointer routing for foreground elements.
//!
//! Only foreground widgets register regions. Decorative layers (backdrop,
//! stars, asteroids, orbit rings) never do, so a click on them falls through
//! to whatever foreground element shares the cell, or to nothing.

use ratatui::layout::{Position, Rect};

/// Something on the page that reacts to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A link button, by index into the portfolio's links.
    Link(usize),
}

/// Clickable regions registered during the last frame.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, area: Rect, target: Target) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Topmost target at a cell; later registrations sit above earlier ones.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    pub fn regions(&self) -> impl Iterator<Item = &(Rect, Target)> {
        self.regions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_has_no_target() {
        let hits = HitMap::default();
        assert_eq!(hits.target_at(0, 0), None);
    }

    #[test]
    fn test_target_within_region() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(10, 5, 8, 1), Target::Link(0));
        assert_eq!(hits.target_at(10, 5), Some(Target::Link(0)));
        assert_eq!(hits.target_at(17, 5), Some(Target::Link(0)));
        assert_eq!(hits.target_at(18, 5), None);
        assert_eq!(hits.target_at(10, 6), None);
    }

    #[test]
    fn test_later_region_on_top() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(0, 0, 10, 1), Target::Link(0));
        hits.register(Rect::new(5, 0, 10, 1), Target::Link(1));
        assert_eq!(hits.target_at(7, 0), Some(Target::Link(1)));
        assert_eq!(hits.target_at(2, 0), Some(Target::Link(0)));
    }

    #[test]
    fn test_empty_region_ignored() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(3, 3, 0, 1), Target::Link(2));
        assert_eq!(hits.regions().count(), 0);
        hits.register(Rect::new(3, 3, 1, 1), Target::Link(2));
        hits.clear();
        assert_eq!(hits.target_at(3, 3), None);
    }
}
