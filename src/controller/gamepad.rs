use gilrs::{Button, EventType, Gilrs};

/// Buttons of the primary gamepad this demo cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamepadButtons {
    pub advance: bool,
    pub back: bool,
}

/// Gamepad polling. Missing backend support just means no gamepad input.
pub struct GamepadInput {
    gilrs: Option<Gilrs>,
}

impl GamepadInput {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => {
                for (id, pad) in gilrs.gamepads() {
                    tracing::info!(id = ?id, name = pad.name(), "gamepad found");
                }
                Some(gilrs)
            }
            Err(e) => {
                tracing::warn!("gamepad input unavailable: {e}");
                None
            }
        };
        Self { gilrs }
    }

    pub fn is_available(&self) -> bool {
        self.gilrs.is_some()
    }

    /// Drain pending events, then read the first connected gamepad.
    pub fn poll(&mut self) -> GamepadButtons {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return GamepadButtons::default();
        };

        while let Some(ev) = gilrs.next_event() {
            match ev.event {
                EventType::Connected => tracing::info!(id = ?ev.id, "gamepad connected"),
                EventType::Disconnected => tracing::info!(id = ?ev.id, "gamepad disconnected"),
                _ => {}
            }
        }

        match gilrs.gamepads().next() {
            Some((_, pad)) => GamepadButtons {
                advance: pad.is_pressed(Button::South),
                back: pad.is_pressed(Button::Select),
            },
            None => GamepadButtons::default(),
        }
    }
}

impl Default for GamepadInput {
    fn default() -> Self {
        Self::new()
    }
}
