use tracing::debug;

use super::surface::{Button, ButtonState, Field, MemorySurface, Panel, Surface};

/// Terminal-backed surface: panel updates go to stdout, notifications to
/// stderr, button changes to the log. Slot storage is delegated to a
/// [`MemorySurface`] so the last rendered state stays readable.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    slots: MemorySurface,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for TerminalSurface {
    fn field_value(&self, field: Field) -> String {
        self.slots.field_value(field)
    }

    fn set_field_value(&self, field: Field, value: &str) {
        self.slots.set_field_value(field, value);
    }

    fn panel_text(&self, panel: Panel) -> String {
        self.slots.panel_text(panel)
    }

    fn set_panel_text(&self, panel: Panel, text: &str) {
        self.slots.set_panel_text(panel, text);
        println!("{text}");
    }

    fn button(&self, button: Button) -> ButtonState {
        self.slots.button(button)
    }

    fn set_button(&self, button: Button, state: ButtonState) {
        debug!(?button, label = %state.label, enabled = state.enabled, "button state");
        self.slots.set_button(button, state);
    }

    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}
