// ============================================================================
// EASING FUNCTIONS for the coordinate transition
// ============================================================================

use serde::Deserialize;

/// Timing curve applied to transition progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No easing, constant speed
    Linear,
    /// Gentle S-curve; the default timing curve for touch retargets
    #[default]
    InOutQuad,
    /// Slow at start and end, fast in the middle
    InOutCubic,
    /// Fast at start, decelerates at end
    OutCubic,
}

impl Easing {
    /// Apply the curve to `t`, clamped to `[0, 1]` first
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InOutQuad => ease_in_out_quad(t),
            Easing::InOutCubic => ease_in_out_cubic(t),
            Easing::OutCubic => ease_out_cubic(t),
        }
    }
}

/// Ease-in-out quadratic: accelerate to the midpoint, then decelerate
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Ease-in-out cubic: slow at start and end, fast in the middle
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Ease-out cubic: fast at start, decelerates at end
pub fn ease_out_cubic(t: f32) -> f32 {
    let x = 1.0 - t;
    1.0 - x * x * x
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::InOutQuad,
        Easing::InOutCubic,
        Easing::OutCubic,
    ];

    #[test]
    fn test_endpoints_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value >= previous, "{easing:?} dipped at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_in_out_curves_pass_through_midpoint() {
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_out_cubic(0.25) > 0.25);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Easing::InOutQuad.apply(-2.0), 0.0);
        assert_eq!(Easing::OutCubic.apply(7.5), 1.0);
    }
}
