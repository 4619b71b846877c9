use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::settings::Dimensions;
use crate::spiral::max_distance;

/// Near-black screen background (#010101)
pub const BACKGROUND: Color = Color::srgb(1.0 / 255.0, 1.0 / 255.0, 1.0 / 255.0);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .add_systems(Startup, setup_camera);
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Surface metrics the spiral is laid out against
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
    /// Centre-to-corner distance of the surface
    pub max_distance: f32,
    /// World-space position of the spiral centre
    pub origin: Vec2,
}

impl ViewportMetrics {
    /// Metrics for a window of `window` logical size, optionally laid out
    /// against `dimensions` instead.
    ///
    /// The spiral centre sits `(width/2, height/2)` from the window's top-left
    /// corner. The 2D camera puts world (0, 0) at the window centre with y up,
    /// so an override smaller than the window shifts the origin up and left.
    pub fn new(window: Vec2, dimensions: Option<Dimensions>) -> Self {
        let (width, height) = dimensions
            .map(|d| (d.width, d.height))
            .unwrap_or((window.x, window.y));

        let origin = Vec2::new((width - window.x) * 0.5, (window.y - height) * 0.5);

        Self {
            width,
            height,
            max_distance: max_distance(width, height),
            origin,
        }
    }

    /// Spiral space (y-down, origin at spiral centre) to world space
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        self.origin + Vec2::new(point.x, -point.y)
    }
}

/// Orthographic 2D camera: one world unit per logical pixel, origin centred
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Startup system: read the window size once and publish the metrics
pub fn measure_viewport(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    dimensions: Option<Res<DimensionsOverride>>,
) {
    let window_size = windows
        .single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or_else(|_| {
            warn!("No primary window at startup, assuming a zero-sized surface");
            Vec2::ZERO
        });

    let dimensions = dimensions.and_then(|d| d.0).filter(|d| match d.validate("dimensions override") {
        Ok(()) => true,
        Err(err) => {
            warn!("{}; laying out against the window instead", err);
            false
        }
    });

    let metrics = ViewportMetrics::new(window_size, dimensions);
    info!(
        "Viewport: {}x{} (window {}x{}), max distance {:.2}, origin {:?}",
        metrics.width, metrics.height, window_size.x, window_size.y, metrics.max_distance, metrics.origin
    );

    commands.insert_resource(metrics);
}

/// Optional surface size that replaces the window size for layout
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DimensionsOverride(pub Option<Dimensions>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_metrics() {
        let metrics = ViewportMetrics::new(Vec2::new(400.0, 800.0), None);

        assert_eq!(metrics.width, 400.0);
        assert_eq!(metrics.height, 800.0);
        assert!((metrics.max_distance - 447.2136).abs() < 1e-3);
        assert_eq!(metrics.origin, Vec2::ZERO);
    }

    #[test]
    fn test_override_replaces_window_size() {
        let metrics = ViewportMetrics::new(
            Vec2::new(1000.0, 1000.0),
            Some(Dimensions::new(400.0, 800.0)),
        );

        assert_eq!(metrics.width, 400.0);
        assert!((metrics.max_distance - 447.2136).abs() < 1e-3);
        // Centre at (200, 400) from the top-left of a 1000x1000 window
        assert_eq!(metrics.origin, Vec2::new(-300.0, 100.0));
    }

    #[test]
    fn test_to_world_flips_y() {
        let metrics = ViewportMetrics::new(Vec2::new(400.0, 800.0), None);
        assert_eq!(metrics.to_world(Vec2::new(3.0, 4.0)), Vec2::new(3.0, -4.0));
    }

    fn measured(window: (u32, u32), dimensions: Option<Dimensions>) -> ViewportMetrics {
        let mut app = App::new();
        app.insert_resource(DimensionsOverride(dimensions))
            .add_systems(Startup, measure_viewport);
        app.world_mut().spawn((
            Window {
                resolution: bevy::window::WindowResolution::new(window.0, window.1),
                ..default()
            },
            PrimaryWindow,
        ));

        app.update();
        *app.world().resource::<ViewportMetrics>()
    }

    #[test]
    fn test_measure_viewport_uses_valid_override() {
        let metrics = measured((1000, 1000), Some(Dimensions::new(400.0, 800.0)));
        assert_eq!(metrics.origin, Vec2::new(-300.0, 100.0));
    }

    #[test]
    fn test_measure_viewport_ignores_invalid_override() {
        let metrics = measured((540, 960), Some(Dimensions::new(f32::NAN, -5.0)));

        assert_eq!(metrics, ViewportMetrics::new(Vec2::new(540.0, 960.0), None));
        assert!(metrics.max_distance.is_finite());
    }
}
