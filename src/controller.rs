use glam::Vec3;
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Fixed per-press movement step for the directional keys.
pub const NUDGE_STEP: f32 = 0.1;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl Button {
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Fixed-step offset a directional press applies to the movable group.
    /// No acceleration, no clamping; Escape moves nothing.
    pub fn nudge(&self) -> Vec3 {
        match self {
            Button::ArrowUp => Vec3::new(0.0, NUDGE_STEP, 0.0),
            Button::ArrowDown => Vec3::new(0.0, -NUDGE_STEP, 0.0),
            Button::ArrowLeft => Vec3::new(-NUDGE_STEP, 0.0, 0.0),
            Button::ArrowRight => Vec3::new(NUDGE_STEP, 0.0, 0.0),
            Button::Escape => Vec3::ZERO,
        }
    }
}

/// Controller - current button states
pub trait Controller {
    fn is_down(&self, button: Button) -> bool;

    fn get_down_keys(&self) -> &[Button];
}

/// Pressed-state tracker fed from winit keyboard events.
#[derive(Debug, Default)]
pub struct KeyState {
    down: Vec<Button>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a winit event into a button edge. Returns the button and
    /// whether it went down, for callers that act on press edges.
    pub fn process(&mut self, event: &KeyEvent) -> Option<(Button, bool)> {
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        let button = Button::from_key_code(code)?;
        let pressed = event.state.is_pressed();
        self.set(button, pressed);
        Some((button, pressed))
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        if pressed {
            if !self.down.contains(&button) {
                self.down.push(button);
            }
        } else {
            self.down.retain(|b| *b != button);
        }
    }
}

impl Controller for KeyState {
    fn is_down(&self, button: Button) -> bool {
        self.down.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_nudges_are_fixed_steps() {
        assert_eq!(Button::ArrowUp.nudge(), Vec3::new(0.0, 0.1, 0.0));
        assert_eq!(Button::ArrowDown.nudge(), Vec3::new(0.0, -0.1, 0.0));
        assert_eq!(Button::ArrowLeft.nudge(), Vec3::new(-0.1, 0.0, 0.0));
        assert_eq!(Button::ArrowRight.nudge(), Vec3::new(0.1, 0.0, 0.0));
        assert_eq!(Button::Escape.nudge(), Vec3::ZERO);
    }

    #[test]
    fn key_state_tracks_presses() {
        let mut state = KeyState::new();
        state.set(Button::ArrowLeft, true);
        state.set(Button::ArrowUp, true);
        assert!(state.is_down(Button::ArrowLeft));
        assert!(state.is_down(Button::ArrowUp));
        assert!(!state.is_down(Button::ArrowRight));

        state.set(Button::ArrowLeft, false);
        assert!(!state.is_down(Button::ArrowLeft));
        assert_eq!(state.get_down_keys(), &[Button::ArrowUp]);
    }

    #[test]
    fn repeated_presses_do_not_duplicate() {
        let mut state = KeyState::new();
        state.set(Button::ArrowUp, true);
        state.set(Button::ArrowUp, true);
        assert_eq!(state.get_down_keys().len(), 1);
    }

    #[test]
    fn arrow_key_codes_map_to_buttons() {
        assert_eq!(
            Button::from_key_code(KeyCode::ArrowUp),
            Some(Button::ArrowUp)
        );
        assert_eq!(Button::from_key_code(KeyCode::KeyW), None);
    }
}
