use bevy::math::Vec2;

/// Radius of a circle sitting on the spiral origin
pub const CENTER_RADIUS: f32 = 1.2;

/// Radius of a circle at (or beyond) the corner distance
pub const EDGE_RADIUS: f32 = 0.2;

/// Distance from the centre of a `width` x `height` surface to a corner
pub fn max_distance(width: f32, height: f32) -> f32 {
    Vec2::new(width * 0.5, height * 0.5).length()
}

/// Map a point's distance from the origin onto a circle radius.
///
/// `[0, max_distance]` maps linearly onto `[1.2, 0.2]` (farther = smaller),
/// clamped at both ends.
pub fn map_radius(point: Vec2, max_distance: f32) -> f32 {
    let distance = point.length();

    let t = if max_distance > 0.0 {
        (distance / max_distance).clamp(0.0, 1.0)
    } else if distance > 0.0 {
        1.0
    } else {
        0.0
    };

    // Weighted form so both endpoints come out exact
    CENTER_RADIUS * (1.0 - t) + EDGE_RADIUS * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_distance_portrait() {
        let max = max_distance(400.0, 800.0);
        assert!((max - 447.2136).abs() < 1e-3, "max = {max}");
    }

    #[test]
    fn test_endpoints_are_exact() {
        let max = max_distance(400.0, 800.0);

        assert_eq!(map_radius(Vec2::ZERO, max), 1.2);
        assert_eq!(map_radius(Vec2::new(200.0, 400.0), max), 0.2);
    }

    #[test]
    fn test_farther_means_smaller() {
        let max = 100.0;
        let near = map_radius(Vec2::new(10.0, 0.0), max);
        let far = map_radius(Vec2::new(0.0, 90.0), max);

        assert!(near > far);
        assert!((map_radius(Vec2::new(30.0, 40.0), max) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_clamped_outside_domain() {
        let max = 50.0;
        assert_eq!(map_radius(Vec2::new(5000.0, -5000.0), max), 0.2);

        for distance in [0.0, 1.0, 25.0, 49.999, 50.0, 51.0, 1e9] {
            let r = map_radius(Vec2::new(distance, 0.0), max);
            assert!((0.2..=1.2).contains(&r), "distance {distance} -> {r}");
        }
    }

    #[test]
    fn test_degenerate_surface() {
        assert_eq!(map_radius(Vec2::ZERO, 0.0), 1.2);
        assert_eq!(map_radius(Vec2::new(1.0, 1.0), 0.0), 0.2);
    }
}
