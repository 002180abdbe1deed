/// The guesser's single-line input box.
#[derive(Debug, Default)]
pub struct GuessForm {
    buffer: String,
    disabled: bool,
}

impl GuessForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, text: impl ToString) {
        self.buffer = text.to_string();
    }

    /// Hands the buffer over and clears it. Inert while disabled.
    pub fn submit(&mut self) -> Option<String> {
        if self.disabled {
            return None;
        }
        Some(std::mem::take(&mut self.buffer))
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[cfg(test)]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_clears_buffer() {
        let mut form = GuessForm::new();
        form.input("  Apple ");
        assert_eq!(form.submit().as_deref(), Some("  Apple "));
        assert_eq!(form.buffer(), "");
        assert_eq!(form.submit().as_deref(), Some(""));
    }

    #[test]
    fn disabled_form_is_inert() {
        let mut form = GuessForm::new();
        form.set_disabled(true);
        form.input("cat");
        assert_eq!(form.submit(), None);
        assert_eq!(form.buffer(), "cat");
        form.set_disabled(false);
        assert_eq!(form.submit().as_deref(), Some("cat"));
    }
}
