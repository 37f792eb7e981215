use crate::model::CullMode;

/// Cycles the cull mode once per press of the advance input.
///
/// `was_pressed` lags the combined input by one tick, so a held button only
/// counts on the tick it goes down.
#[derive(Debug, Clone, Default)]
pub struct CullModeController {
    current_mode: CullMode,
    was_pressed: bool,
}

impl CullModeController {
    pub fn new() -> Self {
        Self {
            current_mode: CullMode::CullCounterClockwise,
            was_pressed: false,
        }
    }

    pub fn current_mode(&self) -> CullMode {
        self.current_mode
    }

    pub fn is_held(&self) -> bool {
        self.was_pressed
    }

    /// Feed this tick's combined advance signal and return the resulting mode.
    pub fn tick(&mut self, advance_requested: bool) -> CullMode {
        if advance_requested {
            if !self.was_pressed {
                let previous = self.current_mode;
                self.current_mode = previous.next();
                tracing::debug!(from = %previous, to = %self.current_mode, "cull mode changed");
            }
            self.was_pressed = true;
        } else {
            self.was_pressed = false;
        }
        self.current_mode
    }
}
