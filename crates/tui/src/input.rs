#[derive(Debug, Default)]
pub struct InputState {
    pub buffer: String,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_char(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            return;
        }
        self.buffer.push(c);
    }

    pub fn handle_paste(&mut self, text: &str) {
        for c in text.chars() {
            self.handle_char(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_drops_line_breaks() {
        let mut input = InputState::new();
        input.handle_paste("/tmp/cv.pdf\n");
        assert_eq!(input.buffer, "/tmp/cv.pdf");
    }

    #[test]
    fn take_resets_the_prompt() {
        let mut input = InputState::new();
        input.handle_char('a');
        input.handle_char('b');
        input.handle_backspace();
        assert_eq!(input.take(), "a");
        assert!(input.is_blank());
    }
}
