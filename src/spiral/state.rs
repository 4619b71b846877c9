// spiral/state.rs

use bevy::prelude::Resource;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::easing::Easing;
use super::generator::coordinate_set;
use super::shape::{CircleShape, assemble_shapes};
use super::transition::AxisTransition;

/// Angle the spiral shows before the first touch
pub const INITIAL_ANGLE: f32 = FRAC_PI_2;

/// How long a retarget takes to settle, in seconds
pub const TRANSITION_DURATION_SECS: f32 = 1.5;

/// The spiral's only mutable state: the current angle and the two axis
/// transitions derived from it.
///
/// The angle is only written through [`SpiralState::touch_end`] (or
/// [`SpiralState::set_angle`]). Everything else is read-only derivation.
#[derive(Debug, Clone, Resource)]
pub struct SpiralState {
    angle: f32,
    xs: AxisTransition,
    ys: AxisTransition,
}

impl Default for SpiralState {
    fn default() -> Self {
        Self::new(INITIAL_ANGLE, Easing::default())
    }
}

impl SpiralState {
    /// Spiral resting at `angle`, no transition in flight
    pub fn new(angle: f32, easing: Easing) -> Self {
        let (xs, ys) = split_axes(angle);
        SpiralState {
            angle,
            xs: AxisTransition::settled(xs, TRANSITION_DURATION_SECS, easing),
            ys: AxisTransition::settled(ys, TRANSITION_DURATION_SECS, easing),
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Handle a touch end: pick a uniformly random angle in `[0, 2π)` and
    /// start gliding towards it. Returns the new angle.
    pub fn touch_end<R: Rng + ?Sized>(&mut self, rng: &mut R, now: f32) -> f32 {
        let angle = rng.random_range(0.0..TAU);
        self.set_angle(angle, now);
        angle
    }

    /// Retarget both axes to the coordinate set for `angle`
    pub fn set_angle(&mut self, angle: f32, now: f32) {
        self.angle = angle;
        let (xs, ys) = split_axes(angle);
        self.xs.retarget(xs, now);
        self.ys.retarget(ys, now);
    }

    pub fn is_settled(&self, now: f32) -> bool {
        self.xs.is_settled(now) && self.ys.is_settled(now)
    }

    /// Interpolated x and y arrays at `now`
    pub fn animated_coordinates(&self, now: f32) -> (Vec<f32>, Vec<f32>) {
        (self.xs.sample(now), self.ys.sample(now))
    }

    /// The circles to draw at `now`
    pub fn shape(&self, now: f32, max_distance: f32) -> CircleShape {
        let (xs, ys) = self.animated_coordinates(now);
        assemble_shapes(&xs, &ys, max_distance)
    }
}

fn split_axes(angle: f32) -> (Vec<f32>, Vec<f32>) {
    coordinate_set(angle).into_iter().map(|p| (p.x, p.y)).unzip()
}
