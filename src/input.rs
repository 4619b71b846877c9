use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<TouchEnded>()
            .add_systems(PreUpdate, collect_touch_ends);
    }
}

/// A finger lifted (or the left mouse button released on desktop)
#[derive(Message, Debug, Clone)]
pub struct TouchEnded {
    /// Window (logical) coordinates, if known
    pub position: Option<Vec2>,
    /// 0 = mouse, otherwise the touch id
    pub id: u64,
}

fn collect_touch_ends(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<TouchEnded>,
) {
    if mouse_buttons.just_released(MouseButton::Left) {
        let position = windows.iter().find_map(Window::cursor_position);
        out.write(TouchEnded { position, id: 0 });
    }

    // Cancelled touches are not a touch end
    for ev in touch_events.read() {
        if ev.phase == TouchPhase::Ended {
            out.write(TouchEnded {
                position: Some(ev.position),
                id: ev.id,
            });
        }
    }
}
