use bevy::prelude::*;
use bevy::sprite_render::MeshMaterial2d;

use crate::{
    camera::ViewportMetrics,
    spiral::{SPIRAL_CIRCLE_COUNT, SpiralState},
    visual::material::{GlowCircleMaterial, SweepGradient, quad_size},
};

/// One circle of the bouquet; `index` is its position in the coordinate set
#[derive(Component, Debug, Clone, Copy)]
pub struct SpiralCircle {
    pub index: usize,
}

/// Startup system: spawn every circle on a shared quad and material
pub fn setup_spiral(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<GlowCircleMaterial>>,
    metrics: Res<ViewportMetrics>,
    state: Res<SpiralState>,
    time: Res<Time>,
) {
    let quad = meshes.add(Rectangle::new(1.0, 1.0));
    let material = materials.add(GlowCircleMaterial::new(&SweepGradient::cmy(metrics.origin)));

    let shape = state.shape(time.elapsed_secs(), metrics.max_distance);
    if shape.is_empty() {
        warn!("Spiral shape is empty, nothing to spawn");
        return;
    }

    let circles: Vec<_> = shape
        .circles()
        .iter()
        .enumerate()
        .map(|(index, circle)| {
            (
                SpiralCircle { index },
                Mesh2d(quad.clone()),
                MeshMaterial2d(material.clone()),
                circle_transform(&metrics, circle.center, circle.radius),
            )
        })
        .collect();
    commands.spawn_batch(circles);

    info!(
        "Spawned {} of {} spiral circles at angle {:.3}",
        shape.len(),
        SPIRAL_CIRCLE_COUNT,
        state.angle()
    );
}

/// World transform for a circle given in spiral space
pub fn circle_transform(metrics: &ViewportMetrics, center: Vec2, radius: f32) -> Transform {
    let size = quad_size(radius);
    Transform::from_translation(metrics.to_world(center).extend(0.0))
        .with_scale(Vec3::new(size, size, 1.0))
}
