use bevy::prelude::*;

mod camera;
mod input;
mod settings;
mod spiral;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use input::InputPlugin;
use settings::SpiralSettings;
use visual::SpiralPlugin;

fn main() {
    // Logging is not up until DefaultPlugins is added, so hold on to the error
    let (settings, settings_error) = match SpiralSettings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (SpiralSettings::default(), Some(err)),
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: settings.title.clone(),
            resolution: WindowResolution::new(settings.window.width, settings.window.height),
            resizable: true,
            ..default()
        }),
        ..default()
    }));

    if let Some(err) = settings_error {
        warn!("{}; falling back to default settings", err);
    }
    info!("Spiral settings: {:?}", settings);

    let spiral = SpiralPlugin::from_settings(&settings).unwrap_or_else(|err| {
        warn!("{}; laying out against the window", err);
        SpiralPlugin {
            dimensions: None,
            seed: settings.seed,
            easing: settings.easing,
        }
    });

    app.add_plugins(CameraPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(spiral);

    app.run();
}
