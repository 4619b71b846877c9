use bevy::prelude::*;

use crate::{
    camera::{DimensionsOverride, measure_viewport},
    settings::{Dimensions, SpiralSettings},
    spiral::{Easing, SpiralState, state::INITIAL_ANGLE},
    visual::{
        animate::{AngleRng, handle_touch_end, sync_spiral_circles},
        material::GlowCircleMaterialPlugin,
        setup::setup_spiral,
    },
};

/// The spiral screen: state, startup spawning and per-frame animation
#[derive(Debug, Clone, Default)]
pub struct SpiralPlugin {
    /// Lay out against this size instead of the window's
    pub dimensions: Option<Dimensions>,
    pub seed: Option<u64>,
    pub easing: Easing,
}

impl SpiralPlugin {
    pub fn from_settings(settings: &SpiralSettings) -> Result<Self, String> {
        let plugin = Self {
            dimensions: None,
            seed: settings.seed,
            easing: settings.easing,
        };

        match settings.dimensions {
            Some(d) => plugin.with_dimensions(d.width, d.height),
            None => Ok(plugin),
        }
    }

    /// Lay out against `width` x `height`; both must be positive and finite
    pub fn with_dimensions(mut self, width: f32, height: f32) -> Result<Self, String> {
        let dimensions = Dimensions::new(width, height);
        dimensions.validate("dimensions")?;
        self.dimensions = Some(dimensions);
        Ok(self)
    }
}

impl Plugin for SpiralPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GlowCircleMaterialPlugin)
            .insert_resource(DimensionsOverride(self.dimensions))
            .insert_resource(SpiralState::new(INITIAL_ANGLE, self.easing))
            .insert_resource(AngleRng::new(self.seed))
            // Measure first so spawning can lay circles out against the metrics
            .add_systems(Startup, (measure_viewport, setup_spiral).chain())
            .add_systems(Update, (handle_touch_end, sync_spiral_circles).chain());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_from_settings() {
        let settings = SpiralSettings {
            seed: Some(11),
            easing: Easing::Linear,
            ..SpiralSettings::default()
        };

        let plugin = SpiralPlugin::from_settings(&settings).unwrap();
        assert_eq!(plugin.seed, Some(11));
        assert_eq!(plugin.easing, Easing::Linear);
        assert_eq!(plugin.dimensions, None);
    }

    #[test]
    fn test_dimensions_override() {
        let plugin = SpiralPlugin::default().with_dimensions(400.0, 800.0).unwrap();
        assert_eq!(plugin.dimensions, Some(Dimensions::new(400.0, 800.0)));
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        for (width, height) in [(f32::NAN, -5.0), (0.0, 800.0), (400.0, f32::INFINITY)] {
            let err = SpiralPlugin::default()
                .with_dimensions(width, height)
                .unwrap_err();
            assert!(err.contains("dimensions"), "{err}");
        }
    }

    #[test]
    fn test_from_settings_rejects_invalid_dimensions() {
        let settings = SpiralSettings {
            dimensions: Some(Dimensions::new(-1.0, 10.0)),
            ..SpiralSettings::default()
        };
        assert!(SpiralPlugin::from_settings(&settings).is_err());
    }
}
