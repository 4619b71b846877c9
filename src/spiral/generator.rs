// spiral/generator.rs

use bevy::math::Vec2;

/// Number of circles in the bouquet (one logarithmic spiral per index)
pub const SPIRAL_CIRCLE_COUNT: usize = 1500;

/// Growth rate of the logarithmic spiral
const GROWTH_RATE: f32 = 0.005;

/// Index divisor for the spiral's scale factor
const INDEX_SCALE_DIVISOR: f32 = 4.0;

/// Position of circle `index` for the given spiral angle.
///
/// `x = a * e^(k * angle) * cos(angle * index)` with `a = index / 4` and
/// `k = 0.005` (and `sin` for `y`). Index 0 always lands on the origin.
pub fn compute_point(angle: f32, index: usize) -> Vec2 {
    let a = index as f32 / INDEX_SCALE_DIVISOR;
    let magnitude = a * (GROWTH_RATE * angle).exp();
    let (sin, cos) = (angle * index as f32).sin_cos();

    Vec2::new(magnitude * cos, magnitude * sin)
}

/// Every circle position for `angle`, in index order
pub fn coordinate_set(angle: f32) -> Vec<Vec2> {
    (0..SPIRAL_CIRCLE_COUNT)
        .map(|index| compute_point(angle, index))
        .collect()
}
