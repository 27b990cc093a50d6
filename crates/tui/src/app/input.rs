use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key_event(key),
            Event::Paste(text) => {
                self.handle_paste(&text);
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('q') {
            return Ok(true);
        }

        if key.code == KeyCode::F(1) {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        if self.show_help {
            if key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return Ok(false);
        }

        let Some(wizard) = self.wizard.as_ref() else {
            return Ok(self.handle_home_key(key));
        };
        if wizard.is_submitted() {
            return Ok(self.handle_submitted_key(key));
        }
        let step = wizard.current_step();

        match key.code {
            KeyCode::Esc => {
                self.retreat();
                return Ok(false);
            }
            KeyCode::Char('n') if ctrl => {
                self.advance();
                return Ok(false);
            }
            KeyCode::Tab => {
                self.cycle_focus(true);
                return Ok(false);
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                return Ok(false);
            }
            _ => {}
        }

        match step {
            Step::Upload => self.handle_upload_key(key, ctrl),
            Step::CoverLetter | Step::Send => self.handle_form_key(key, ctrl),
            Step::Confirm => self.handle_confirm_key(key, ctrl),
        }
        Ok(false)
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                self.navigate(Destination::NewApplication);
                false
            }
            KeyCode::Esc | KeyCode::Char('q') => true,
            _ => false,
        }
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('n') | KeyCode::Enter => {
                self.navigate(Destination::NewApplication);
                false
            }
            KeyCode::Char('h') | KeyCode::Esc => {
                self.navigate(Destination::Home);
                false
            }
            KeyCode::Char('q') => true,
            _ => false,
        }
    }

    fn handle_upload_key(&mut self, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Char('r') if ctrl => {
                if let Some(ref mut wizard) = self.wizard {
                    wizard.remove_cv();
                }
            }
            KeyCode::Enter => {
                if !self.path_input.is_blank() {
                    self.submit_path();
                } else if self.wizard.as_ref().is_some_and(Wizard::can_advance) {
                    self.advance();
                }
            }
            KeyCode::Backspace => self.path_input.handle_backspace(),
            KeyCode::Char(c) if !ctrl => self.path_input.handle_char(c),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Char('g') if ctrl => {
                if self.current_step() == Some(Step::CoverLetter) {
                    self.generate_cover_letter();
                }
            }
            KeyCode::Char('l') if ctrl => self.edit_focused(TextEdit::Clear),
            KeyCode::Enter => match self.focused_field() {
                Some(field) if field.is_multiline() => self.edit_focused(TextEdit::Insert('\n')),
                _ => self.advance(),
            },
            KeyCode::Backspace => self.edit_focused(TextEdit::Backspace),
            KeyCode::Char(c) if !ctrl => self.edit_focused(TextEdit::Insert(c)),
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, ctrl: bool) {
        let toggle = match key.code {
            KeyCode::Char(' ') => self.focused_preference(),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.focus = index;
                Preference::ALL.get(index).copied()
            }
            KeyCode::Up => {
                self.cycle_focus(false);
                None
            }
            KeyCode::Down => {
                self.cycle_focus(true);
                None
            }
            KeyCode::Enter => {
                self.send_application();
                None
            }
            KeyCode::Char('s') if ctrl => {
                self.send_application();
                None
            }
            _ => None,
        };

        if let (Some(preference), Some(wizard)) = (toggle, self.wizard.as_mut()) {
            wizard.toggle_preference(preference);
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.show_help {
            return;
        }
        match self.wizard.as_ref() {
            Some(wizard) if !wizard.is_submitted() => {}
            _ => return,
        }
        match self.current_step() {
            Some(Step::Upload) => self.path_input.handle_paste(text),
            Some(Step::CoverLetter) | Some(Step::Send) => {
                let edit = match self.focused_field() {
                    Some(field) if !field.is_multiline() => {
                        TextEdit::Paste(text.replace(['\r', '\n'], ""))
                    }
                    _ => TextEdit::Paste(text.replace("\r\n", "\n")),
                };
                self.edit_focused(edit);
            }
            _ => {}
        }
    }
}
