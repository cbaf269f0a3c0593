//! Page-wise horizontal scrolling for the project carousel.
//!
//! The controller is stateless: every call reads the offset and width from
//! the surface, computes a target one viewport away and hands it back to the
//! surface. Clamping belongs to the surface (the browser does it natively for
//! `scrollTo`), so the controller never bounds-checks.

/// Which way to move the viewport window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards offset 0.
    Left,
    /// Towards the end of the strip.
    Right,
}

/// A horizontally scrollable container.
pub trait ScrollSurface {
    /// Current scroll offset from the left edge.
    fn offset(&self) -> f64;

    /// Width of the visible window.
    fn viewport_width(&self) -> f64;

    /// Request a scroll to `offset`. Implementations clamp the value into
    /// their valid range.
    fn scroll_to(&mut self, offset: f64);
}

/// Target offset for one page step from `offset` with a window of `width`.
pub fn target_offset(offset: f64, width: f64, direction: Direction) -> f64 {
    match direction {
        Direction::Left => offset - width,
        Direction::Right => offset + width,
    }
}

/// Move `surface` one viewport width in `direction`.
pub fn advance<S>(surface: &mut S, direction: Direction)
where
    S: ScrollSurface + ?Sized,
{
    let target = target_offset(surface.offset(), surface.viewport_width(), direction);
    surface.scroll_to(target);
}

/// In-memory scroll surface that clamps like a browser scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedStrip {
    content_width: f64,
    viewport_width: f64,
    offset: f64,
}

impl ClampedStrip {
    /// A strip of `content_width` seen through a window of `viewport_width`,
    /// scrolled to the start.
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        Self {
            content_width,
            viewport_width,
            offset: 0.0,
        }
    }

    /// A strip of `panels` full-width panels.
    pub fn with_panels(panels: usize, viewport_width: f64) -> Self {
        Self::new(panels as f64 * viewport_width, viewport_width)
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Number of `Right` steps needed to reach the end from offset 0.
    pub fn page_count(&self) -> usize {
        if self.viewport_width <= 0.0 {
            return 0;
        }
        (self.content_width / self.viewport_width).ceil() as usize
    }
}

impl ScrollSurface for ClampedStrip {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn scroll_to(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_panel_walkthrough_clamps_at_last_page() {
        let mut strip = ClampedStrip::new(3200.0, 800.0);
        assert_eq!(strip.offset(), 0.0);

        advance(&mut strip, Direction::Right);
        assert_eq!(strip.offset(), 800.0);

        for _ in 0..3 {
            advance(&mut strip, Direction::Right);
        }
        assert_eq!(strip.offset(), 2400.0);

        advance(&mut strip, Direction::Right);
        assert_eq!(strip.offset(), 2400.0);
    }

    #[test]
    fn page_count_right_steps_reach_max() {
        for (content, width) in [(3200.0, 800.0), (3000.0, 800.0), (500.0, 800.0), (801.0, 400.0)] {
            let mut strip = ClampedStrip::new(content, width);
            for _ in 0..strip.page_count() {
                advance(&mut strip, Direction::Right);
            }
            assert_eq!(strip.offset(), strip.max_offset(), "content={content} width={width}");

            advance(&mut strip, Direction::Right);
            assert_eq!(strip.offset(), strip.max_offset());
        }
    }

    #[test]
    fn left_at_start_is_noop() {
        let mut strip = ClampedStrip::with_panels(4, 640.0);
        advance(&mut strip, Direction::Left);
        assert_eq!(strip.offset(), 0.0);
    }

    #[test]
    fn left_then_right_round_trips_from_interior() {
        let mut strip = ClampedStrip::with_panels(6, 500.0);
        for start in [500.0, 750.0, 1000.0, 2000.0] {
            strip.scroll_to(start);
            advance(&mut strip, Direction::Left);
            advance(&mut strip, Direction::Right);
            assert_eq!(strip.offset(), start);
        }
    }

    #[test]
    fn target_offset_does_not_clamp() {
        assert_eq!(target_offset(0.0, 800.0, Direction::Left), -800.0);
        assert_eq!(target_offset(2400.0, 800.0, Direction::Right), 3200.0);
    }

    #[test]
    fn advance_works_through_trait_object() {
        let mut strip = ClampedStrip::with_panels(3, 300.0);
        let surface: &mut dyn ScrollSurface = &mut strip;
        advance(surface, Direction::Right);
        assert_eq!(strip.offset(), 300.0);
    }

    #[test]
    fn strip_narrower_than_viewport_never_moves() {
        let mut strip = ClampedStrip::new(500.0, 800.0);
        advance(&mut strip, Direction::Right);
        assert_eq!(strip.offset(), 0.0);
        assert_eq!(strip.page_count(), 1);
    }
}
