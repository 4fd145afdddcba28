//! Testimonial carousel navigation.
//!
//! Indices wrap in both directions. Autoplay advances on each tick until the visitor navigates
//! by hand; after that the carousel stays where it is put.

use serde::{Deserialize, Serialize};

/// Direction of a completed horizontal swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right to left; shows the next item
    Left,
    /// Finger moved left to right; shows the previous item
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: bool,
    swipe_threshold: f64,
    touch_start: Option<f64>,
    touch_end: Option<f64>,
}

impl Carousel {
    /// A carousel over `len` items, autoplaying from the first one
    pub fn new(len: usize, swipe_threshold: f64) -> Self {
        Self {
            len,
            index: 0,
            autoplay: true,
            swipe_threshold,
            touch_start: None,
            touch_end: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    /// Autoplay timer fired. Returns whether the carousel moved.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay || self.len == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.autoplay = false;
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.autoplay = false;
    }

    /// Jump to a thumbnail or dot. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.autoplay = false;
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start = Some(x);
        self.touch_end = None;
    }

    pub fn touch_move(&mut self, x: f64) {
        self.touch_end = Some(x);
    }

    /// Finish the gesture. A tap without movement, or a drag shorter than the threshold,
    /// is not a swipe.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let (start, end) = (self.touch_start.take()?, self.touch_end.take()?);
        let distance = start - end;

        let swipe = if distance > self.swipe_threshold {
            Swipe::Left
        } else if distance < -self.swipe_threshold {
            Swipe::Right
        } else {
            return None;
        };

        match swipe {
            Swipe::Left => self.next(),
            Swipe::Right => self.previous(),
        }
        Some(swipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = Carousel::new(5, 50.0);
        carousel.previous();
        assert_eq!(carousel.index(), 4);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_manual_navigation_stops_autoplay() {
        let mut carousel = Carousel::new(5, 50.0);
        assert!(carousel.tick());
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 2);

        carousel.go_to(4);
        assert!(!carousel.is_autoplaying());
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 4);

        carousel.go_to(9);
        assert_eq!(carousel.index(), 4);
    }

    #[test]
    fn test_swipe_threshold() {
        let mut carousel = Carousel::new(5, 50.0);

        carousel.touch_start(200.0);
        carousel.touch_move(160.0);
        assert_eq!(carousel.touch_end(), None);
        assert!(carousel.is_autoplaying());

        carousel.touch_start(200.0);
        carousel.touch_move(120.0);
        assert_eq!(carousel.touch_end(), Some(Swipe::Left));
        assert_eq!(carousel.index(), 1);

        carousel.touch_start(100.0);
        carousel.touch_move(180.0);
        assert_eq!(carousel.touch_end(), Some(Swipe::Right));
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn test_tap_is_not_a_swipe() {
        let mut carousel = Carousel::new(5, 50.0);
        carousel.touch_start(100.0);
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(0, 50.0);
        assert!(!carousel.tick());
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
    }
}
