use serde::Deserialize;

use crate::spiral::Easing;

const SETTINGS_JSON: &str = include_str!("../assets/spiral.json");

/// A `{width, height}` pair in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Reject non-finite or non-positive sizes; `field` names the source in the error
    pub fn validate(&self, field: &str) -> Result<(), String> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(format!(
                "{} must be positive and finite, got {}x{}",
                field, self.width, self.height
            ))
        }
    }
}

/// Initial window size for desktop runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 540,
            height: 960,
        }
    }
}

/// App settings, embedded from `assets/spiral.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpiralSettings {
    pub title: String,
    pub window: WindowSize,
    /// Overrides the window size used for centring and radius mapping
    pub dimensions: Option<Dimensions>,
    /// Fixed RNG seed, for reproducible angle sequences
    pub seed: Option<u64>,
    pub easing: Easing,
}

impl Default for SpiralSettings {
    fn default() -> Self {
        Self {
            title: "Spiral".to_string(),
            window: WindowSize::default(),
            dimensions: None,
            seed: None,
            easing: Easing::default(),
        }
    }
}

impl SpiralSettings {
    /// Load the settings embedded at build time
    pub fn load() -> Result<Self, String> {
        Self::from_json(SETTINGS_JSON)
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SpiralSettings =
            serde_json::from_str(json).map_err(|e| format!("Invalid spiral settings: {}", e))?;

        if settings.window.width == 0 || settings.window.height == 0 {
            return Err(format!(
                "window must be non-empty, got {}x{}",
                settings.window.width, settings.window.height
            ));
        }
        if let Some(dimensions) = &settings.dimensions {
            dimensions.validate("dimensions")?;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_settings_parse() {
        let settings = SpiralSettings::load().unwrap();
        assert_eq!(settings, SpiralSettings::default());
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings =
            SpiralSettings::from_json(r#"{ "dimensions": { "width": 400, "height": 800 } }"#)
                .unwrap();

        assert_eq!(settings.dimensions, Some(Dimensions::new(400.0, 800.0)));
        assert_eq!(settings.title, "Spiral");
        assert_eq!(settings.easing, Easing::InOutQuad);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_easing_names() {
        let settings = SpiralSettings::from_json(r#"{ "easing": "out_cubic", "seed": 9 }"#).unwrap();
        assert_eq!(settings.easing, Easing::OutCubic);
        assert_eq!(settings.seed, Some(9));

        assert!(SpiralSettings::from_json(r#"{ "easing": "bounce" }"#).is_err());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let err = SpiralSettings::from_json(r#"{ "dimensions": { "width": -1, "height": 800 } }"#)
            .unwrap_err();
        assert!(err.contains("dimensions"), "{err}");

        assert!(
            SpiralSettings::from_json(r#"{ "window": { "width": 0, "height": 10 } }"#).is_err()
        );
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SpiralSettings::from_json("{ not json").unwrap_err();
        assert!(err.starts_with("Invalid spiral settings"));
    }
}
