use crate::camera::CameraMovement;

/// Keys the demo reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyC,
    Space,
    Escape,
}

impl Button {
    /// Movement intent bound to this button, if any
    pub const fn movement(self) -> Option<CameraMovement> {
        match self {
            Button::KeyW => Some(CameraMovement::Forward),
            Button::KeyS => Some(CameraMovement::Backward),
            Button::KeyA => Some(CameraMovement::Left),
            Button::KeyD => Some(CameraMovement::Right),
            Button::Space => Some(CameraMovement::Up),
            Button::KeyC => Some(CameraMovement::Down),
            Button::Escape => None,
        }
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}

/// One movement intent per held movement key, in press order
pub fn movement_intents(controller: &dyn Controller) -> Vec<CameraMovement> {
    controller
        .get_down_keys()
        .iter()
        .filter_map(|button| button.movement())
        .collect()
}
