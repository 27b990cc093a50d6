pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

Home:
  Enter         Start a new application
  q / Esc       Quit

Wizard:
  Ctrl + N      Continue to the next step
  Esc           Back to the previous step (Home from step 1)
  Tab           Next field / toggle
  Shift + Tab   Previous field / toggle

Upload CV:
  Type or paste a file path, then Enter
  Ctrl + R      Remove the uploaded CV

Cover Letter:
  Ctrl + G      Generate with AI
  Ctrl + L      Clear the focused field

Confirmation:
  Space / 1-3   Toggle preferences and terms
  Enter         Send application (Ctrl + S also works)

After sending:
  n             Create another application
  h             Return to home

General:
  F1            Toggle this help
  Ctrl + Q      Quit
"#
        .to_string()
    }

    pub fn footer_hint(&self, context: HintContext) -> &'static str {
        match context {
            HintContext::Home => "Enter: get started  q: quit  F1: help",
            HintContext::Upload => {
                "Enter: open path  Ctrl+R: remove  Ctrl+N: continue  Esc: home  F1: help"
            }
            HintContext::CoverLetter => {
                "Tab: switch field  Ctrl+G: generate  Ctrl+N: continue  Esc: back  F1: help"
            }
            HintContext::Send => "Tab: switch field  Ctrl+N: continue  Esc: back  F1: help",
            HintContext::Confirm => {
                "Tab: move  Space: toggle  Enter: send application  Esc: back  F1: help"
            }
            HintContext::Submitted => "n: create another application  h: home  q: quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintContext {
    Home,
    Upload,
    CoverLetter,
    Send,
    Confirm,
    Submitted,
}
