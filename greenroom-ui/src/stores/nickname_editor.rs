//! Nickname editor state store
//!
//! Modal list editor for an artist's nicknames. The owning form keeps the
//! value as a comma-joined string; the editor parses it, edits a working
//! list, and commits the join back on close.

/// Split a comma-joined nickname field into clean entries.
pub fn parse_nicknames(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// State for the nickname editor modal on the artist form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NicknameEditor {
    /// Working list shown in the modal
    pub nicknames: Vec<String>,
    /// Text box contents
    pub input: String,
    /// Committed comma-joined field value
    pub form_value: String,
    /// Whether the modal is visible
    pub is_open: bool,
}

/// Events for the nickname editor
#[derive(Clone, Debug)]
pub enum NicknameEvent {
    /// Modal became visible
    Open,
    /// User edits the text box
    SetInput(String),
    /// User submits the text box (Enter); comma-separated multi-add allowed
    SubmitInput,
    /// User removes the entry at an index
    Remove(usize),
    /// Modal was dismissed; the working list is committed to the form
    Close,
}

impl NicknameEditor {
    /// Seed the editor from the form's current field value.
    pub fn seeded(field_value: &str) -> Self {
        Self {
            nicknames: parse_nicknames(field_value),
            form_value: field_value.to_string(),
            ..Self::default()
        }
    }

    /// The committed entries, as the form will submit them.
    pub fn committed(&self) -> Vec<String> {
        parse_nicknames(&self.form_value)
    }

    /// Apply an event and return the new state.
    pub fn transition(self, event: NicknameEvent) -> NicknameEditor {
        match event {
            NicknameEvent::Open => {
                let mut state = self;
                state.is_open = true;
                state
            }
            NicknameEvent::SetInput(value) => {
                let mut state = self;
                state.input = value;
                state
            }
            NicknameEvent::SubmitInput => {
                let mut state = self;
                let mut parts = parse_nicknames(&state.input);
                state.nicknames.append(&mut parts);
                state.input.clear();
                state
            }
            NicknameEvent::Remove(index) => {
                let mut state = self;
                if index < state.nicknames.len() {
                    state.nicknames.remove(index);
                }
                state
            }
            NicknameEvent::Close => {
                let mut state = self;
                state.is_open = false;
                state.form_value = state.nicknames.join(",");
                state
            }
        }
    }
}
