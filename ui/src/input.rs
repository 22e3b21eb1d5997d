//! Single-line text input.
//!
//! Holds whatever the user has typed but not yet submitted. Submitting hands
//! the text to the owner's callback and clears the field.

/// Configuration passed in by the owning component.
pub struct TextInputProps {
    pub on_submit: Box<dyn FnMut(String)>,
}

pub struct TextInput {
    text: String,
    on_submit: Box<dyn FnMut(String)>,
}

impl TextInput {
    pub fn new(props: TextInputProps) -> Self {
        Self {
            text: String::new(),
            on_submit: props.on_submit,
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    /// Replaces the uncommitted text with the field's current value.
    pub fn change(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    /// Clears the field, then forwards the text it held. Empty text is
    /// forwarded too.
    pub fn submit(&mut self) {
        let text = std::mem::take(&mut self.text);
        (self.on_submit)(text);
    }
}

impl std::fmt::Debug for TextInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextInput").field("text", &self.text).finish_non_exhaustive()
    }
}
