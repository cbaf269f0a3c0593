//! When a scroll-revealed element counts as "in view".

/// Fraction of the window height an element's top edge must pass before it
/// counts as scrolled into view.
pub const REVEAL_THRESHOLD: f64 = 0.9;

/// Element box relative to the viewport, as `getBoundingClientRect` reports
/// it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
}

/// Whether an element should reveal in a `width` x `height` viewport.
///
/// The top edge must be above `height * REVEAL_THRESHOLD`, and the element
/// must overlap the viewport horizontally, so carousel panels parked off to
/// the side stay hidden until they are scrolled in.
pub fn should_reveal(rect: ViewportRect, width: f64, height: f64) -> bool {
    rect.top < height * REVEAL_THRESHOLD && rect.left < width && rect.right > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, left: f64, width: f64) -> ViewportRect {
        ViewportRect {
            top,
            left,
            right: left + width,
        }
    }

    #[test]
    fn reveals_once_top_passes_threshold() {
        assert!(!should_reveal(rect(900.0, 0.0, 800.0), 800.0, 1000.0));
        assert!(should_reveal(rect(899.0, 0.0, 800.0), 800.0, 1000.0));
        // Already scrolled past.
        assert!(should_reveal(rect(-400.0, 0.0, 800.0), 800.0, 1000.0));
    }

    #[test]
    fn offscreen_carousel_panel_stays_hidden() {
        // Second and fourth panels of an 800px strip at offset 0.
        assert!(!should_reveal(rect(100.0, 800.0, 800.0), 800.0, 1000.0));
        assert!(!should_reveal(rect(100.0, -800.0, 800.0), 800.0, 1000.0));
        // Scrolled halfway in.
        assert!(should_reveal(rect(100.0, 400.0, 800.0), 800.0, 1000.0));
    }
}
