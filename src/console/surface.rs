use std::collections::HashMap;
use std::sync::Mutex;

/// Initial text of the translation output panel; doubles as the "nothing
/// to speak yet" sentinel for the read-aloud action.
pub const OUTPUT_PLACEHOLDER: &str = "Translation will appear here...";

/// Editable input slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TranslateInput,
    TargetLang,
    SpeechInput,
    SpeechLang,
}

/// Read-only display slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    TranslationOutput,
}

/// Action buttons, addressed explicitly per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Speak,
    Download,
}

impl Button {
    fn default_label(&self) -> &'static str {
        match self {
            Self::Speak => "Play",
            Self::Download => "Download",
        }
    }
}

/// Label and enabled flag of an action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    pub enabled: bool,
}

/// The presentation boundary. Implementations hold the named slots; the
/// controller looks them up at the moment of use and never caches their
/// content.
pub trait Surface: Send + Sync {
    fn field_value(&self, field: Field) -> String;
    fn set_field_value(&self, field: Field, value: &str);

    fn panel_text(&self, panel: Panel) -> String;
    fn set_panel_text(&self, panel: Panel, text: &str);

    fn button(&self, button: Button) -> ButtonState;
    fn set_button(&self, button: Button, state: ButtonState);

    /// Blocking user notification (the page's alert box).
    fn notify(&self, message: &str);
}

/// In-memory surface: plain slot storage, no rendering. The CLI seeds it
/// from arguments; tests read it back.
#[derive(Debug)]
pub struct MemorySurface {
    fields: Mutex<HashMap<Field, String>>,
    panels: Mutex<HashMap<Panel, String>>,
    buttons: Mutex<HashMap<Button, ButtonState>>,
    notifications: Mutex<Vec<String>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        let mut panels = HashMap::new();
        panels.insert(Panel::TranslationOutput, OUTPUT_PLACEHOLDER.to_string());

        let mut buttons = HashMap::new();
        for button in [Button::Speak, Button::Download] {
            buttons.insert(
                button,
                ButtonState {
                    label: button.default_label().to_string(),
                    enabled: true,
                },
            );
        }

        Self {
            fields: Mutex::new(HashMap::new()),
            panels: Mutex::new(panels),
            buttons: Mutex::new(buttons),
            notifications: Mutex::new(Vec::new()),
        }
    }

    /// Notifications shown so far, oldest first.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MemorySurface {
    fn field_value(&self, field: Field) -> String {
        self.fields.lock().unwrap().get(&field).cloned().unwrap_or_default()
    }

    fn set_field_value(&self, field: Field, value: &str) {
        self.fields.lock().unwrap().insert(field, value.to_string());
    }

    fn panel_text(&self, panel: Panel) -> String {
        self.panels.lock().unwrap().get(&panel).cloned().unwrap_or_default()
    }

    fn set_panel_text(&self, panel: Panel, text: &str) {
        self.panels.lock().unwrap().insert(panel, text.to_string());
    }

    fn button(&self, button: Button) -> ButtonState {
        self.buttons
            .lock()
            .unwrap()
            .get(&button)
            .cloned()
            .unwrap_or(ButtonState {
                label: button.default_label().to_string(),
                enabled: true,
            })
    }

    fn set_button(&self, button: Button, state: ButtonState) {
        self.buttons.lock().unwrap().insert(button, state);
    }

    fn notify(&self, message: &str) {
        self.notifications.lock().unwrap().push(message.to_string());
    }
}
