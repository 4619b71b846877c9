use bevy::math::Vec2;

use super::radius::map_radius;

/// A single circle primitive in spiral space (origin = spiral centre, y-down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Collection of circles handed to the renderer each frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleShape {
    circles: Vec<Circle>,
}

impl CircleShape {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            circles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_circle(&mut self, center: Vec2, radius: f32) {
        self.circles.push(Circle { center, radius });
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn get(&self, index: usize) -> Option<&Circle> {
        self.circles.get(index)
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

/// Build the full shape from the interpolated x and y arrays.
///
/// Rebuilt from scratch on every call. Extra entries in the longer array are
/// ignored.
pub fn assemble_shapes(xs: &[f32], ys: &[f32], max_distance: f32) -> CircleShape {
    let mut shape = CircleShape::with_capacity(xs.len().min(ys.len()));

    for (&x, &y) in xs.iter().zip(ys) {
        let center = Vec2::new(x, y);
        shape.add_circle(center, map_radius(center, max_distance));
    }

    shape
}
