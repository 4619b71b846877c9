use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{
    camera::ViewportMetrics,
    input::TouchEnded,
    spiral::SpiralState,
    visual::setup::{SpiralCircle, circle_transform},
};

/// Source of new spiral angles
#[derive(Resource, Debug, Clone)]
pub struct AngleRng(pub StdRng);

impl AngleRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_rng(&mut rand::rng())),
        }
    }
}

/// System: every touch end picks a new angle and retargets the transition.
///
/// This is the only writer of the spiral angle.
pub fn handle_touch_end(
    time: Res<Time>,
    mut touches: MessageReader<TouchEnded>,
    mut rng: ResMut<AngleRng>,
    mut state: ResMut<SpiralState>,
) {
    let now = time.elapsed_secs();

    for touch in touches.read() {
        let angle = state.touch_end(&mut rng.0, now);
        info!(
            "Touch {} ended at {:?}: retargeting spiral to angle {:.3}",
            touch.id, touch.position, angle
        );
    }
}

/// System: push the interpolated shape into the circle transforms.
///
/// Once a transition has settled and been written out, frames are skipped
/// until the state changes again.
pub fn sync_spiral_circles(
    time: Res<Time>,
    state: Res<SpiralState>,
    metrics: Res<ViewportMetrics>,
    mut circles: Query<(&SpiralCircle, &mut Transform)>,
    mut wrote_settled: Local<bool>,
) {
    let now = time.elapsed_secs();
    let settled = state.is_settled(now);

    if settled && *wrote_settled && !state.is_changed() {
        return;
    }

    let shape = state.shape(now, metrics.max_distance);
    for (circle, mut transform) in &mut circles {
        if let Some(c) = shape.get(circle.index) {
            *transform = circle_transform(&metrics, c.center, c.radius);
        }
    }

    *wrote_settled = settled;
}
