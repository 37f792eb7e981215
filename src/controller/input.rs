/// Keyboard and mouse state plus the per-frame input snapshot
use std::collections::HashSet;
use winit::keyboard::KeyCode;

use super::gamepad::GamepadButtons;

/// Window-system independent input events
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    /// Left mouse button
    PrimaryMouse { is_down: bool },
    FocusLost,
}

/// Key mapping configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub advance_cull_mode: KeyCode,
    pub exit: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            advance_cull_mode: KeyCode::KeyA,
            exit: KeyCode::Escape,
        }
    }
}

/// Everything the update step needs from the input devices for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub key_down: bool,
    pub mouse_pressed: bool,
    pub pad_pressed: bool,
    pub exit_requested: bool,
}

/// True if any device asks for the next cull mode this frame.
pub fn is_advance_requested(input: &InputSnapshot) -> bool {
    input.key_down || input.mouse_pressed || input.pad_pressed
}

/// Held keyboard keys and the left mouse button, built up from window events
pub struct InputState {
    bindings: KeyBindings,
    pressed_keys: HashSet<KeyCode>,
    pub left_button: bool,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed_keys: HashSet::new(),
            left_button: false,
        }
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.pressed_keys.insert(*key);
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(key);
            }
            InputEvent::PrimaryMouse { is_down } => self.left_button = *is_down,
            InputEvent::FocusLost => self.clear(),
        }
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    pub fn clear(&mut self) {
        self.pressed_keys.clear();
        self.left_button = false;
    }

    /// Combine held keyboard/mouse state with this frame's gamepad buttons.
    pub fn snapshot(&self, pad: &GamepadButtons) -> InputSnapshot {
        InputSnapshot {
            key_down: self.is_key_pressed(self.bindings.advance_cull_mode),
            mouse_pressed: self.left_button,
            pad_pressed: pad.advance,
            exit_requested: self.is_key_pressed(self.bindings.exit) || pad.back,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

pub mod native {
    use super::*;
    use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
    use winit::keyboard::PhysicalKey;

    /// Translate the winit window events this demo listens to.
    pub fn window_event_to_input(event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput {
                event: KeyEvent { state, physical_key: PhysicalKey::Code(code), repeat: false, .. },
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::KeyDown(*code),
                ElementState::Released => InputEvent::KeyUp(*code),
            }),
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => Some(InputEvent::PrimaryMouse {
                is_down: *state == ElementState::Pressed,
            }),
            WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(key: bool, mouse: bool, pad: bool) -> InputSnapshot {
        InputSnapshot { key_down: key, mouse_pressed: mouse, pad_pressed: pad, exit_requested: false }
    }

    #[test]
    fn test_advance_is_or_of_devices() {
        for bits in 0u8..8 {
            let (k, m, p) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            assert_eq!(is_advance_requested(&snapshot(k, m, p)), bits != 0);
        }
    }

    #[test]
    fn test_key_press_and_release() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::KeyDown(KeyCode::KeyA));
        assert!(input.snapshot(&GamepadButtons::default()).key_down);
        input.process_event(&InputEvent::KeyUp(KeyCode::KeyA));
        assert!(!input.snapshot(&GamepadButtons::default()).key_down);
    }

    #[test]
    fn test_unbound_key_does_not_advance() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::KeyDown(KeyCode::KeyB));
        let snap = input.snapshot(&GamepadButtons::default());
        assert!(!is_advance_requested(&snap));
        assert!(input.is_key_pressed(KeyCode::KeyB));
    }

    #[test]
    fn test_primary_mouse_press_and_release() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::PrimaryMouse { is_down: true });
        assert!(input.snapshot(&GamepadButtons::default()).mouse_pressed);
        input.process_event(&InputEvent::PrimaryMouse { is_down: false });
        assert!(!input.snapshot(&GamepadButtons::default()).mouse_pressed);
    }

    #[test]
    fn test_gamepad_buttons_forwarded() {
        let input = InputState::default();
        let snap = input.snapshot(&GamepadButtons { advance: true, back: true });
        assert!(snap.pad_pressed);
        assert!(snap.exit_requested);
    }

    #[test]
    fn test_exit_key() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::KeyDown(KeyCode::Escape));
        assert!(input.snapshot(&GamepadButtons::default()).exit_requested);
    }

    #[test]
    fn test_focus_lost_clears_everything() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::KeyDown(KeyCode::KeyA));
        input.process_event(&InputEvent::PrimaryMouse { is_down: true });
        input.process_event(&InputEvent::FocusLost);
        assert_eq!(input.snapshot(&GamepadButtons::default()), InputSnapshot::default());
    }

    #[test]
    fn test_custom_bindings() {
        let mut input = InputState::new(KeyBindings { advance_cull_mode: KeyCode::Space, exit: KeyCode::KeyQ });
        input.process_event(&InputEvent::KeyDown(KeyCode::Space));
        input.process_event(&InputEvent::KeyDown(KeyCode::KeyQ));
        let snap = input.snapshot(&GamepadButtons::default());
        assert!(snap.key_down);
        assert!(snap.exit_requested);
    }

    #[test]
    fn test_focus_lost_translated() {
        use winit::event::WindowEvent;
        assert_eq!(native::window_event_to_input(&WindowEvent::Focused(false)), Some(InputEvent::FocusLost));
        assert_eq!(native::window_event_to_input(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn test_unrelated_window_events_ignored() {
        use winit::event::WindowEvent;
        assert_eq!(native::window_event_to_input(&WindowEvent::CloseRequested), None);
        assert_eq!(native::window_event_to_input(&WindowEvent::RedrawRequested), None);
        assert_eq!(native::window_event_to_input(&WindowEvent::Moved(winit::dpi::PhysicalPosition::new(4, 2))), None);
    }
}
