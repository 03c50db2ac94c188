/// Published scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Smoothed offset of the viewport top in pixels.
    pub top: f64,
    /// Fraction of the scrollable range covered, 0.0 to 1.0.
    pub progress: f64,
}

impl ScrollState {
    /// State for a smoothed `position` over a scrollable range of `max_scroll`.
    pub fn from_position(position: f64, max_scroll: f64) -> Self {
        if max_scroll <= 0.0 {
            return Self::default();
        }
        let progress = (position / max_scroll).clamp(0.0, 1.0);
        Self {
            top: progress * max_scroll,
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_fraction_of_range() {
        let s = ScrollState::from_position(250.0, 1000.0);
        assert_eq!(s.progress, 0.25);
        assert_eq!(s.top, 250.0);
    }

    #[test]
    fn empty_range_is_origin() {
        assert_eq!(ScrollState::from_position(50.0, 0.0), ScrollState::default());
        assert_eq!(ScrollState::from_position(50.0, -10.0), ScrollState::default());
    }

    #[test]
    fn position_is_clamped_to_range() {
        assert_eq!(ScrollState::from_position(-5.0, 100.0).progress, 0.0);
        let s = ScrollState::from_position(150.0, 100.0);
        assert_eq!(s.progress, 1.0);
        assert_eq!(s.top, 100.0);
    }
}
