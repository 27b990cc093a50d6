mod confirm;
mod cover_letter;
mod send;
mod upload;

pub use confirm::ConfirmView;
pub use cover_letter::{CoverLetterView, LetterMode, COVER_LETTER_PLACEHOLDER};
pub use send::{SendView, DEFAULT_EMAIL_BODY, DEFAULT_SUBJECT};
pub use upload::UploadView;

use crate::draft::WizardDraft;
use crate::job::Ticket;
use crate::step::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    JobDescription,
    CoverLetter,
    RecipientEmail,
    Subject,
    EmailBody,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::JobDescription => "Job Description",
            Field::CoverLetter => "Your Cover Letter",
            Field::RecipientEmail => "Recipient Email *",
            Field::Subject => "Subject Line",
            Field::EmailBody => "Email Body",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(
            self,
            Field::JobDescription | Field::CoverLetter | Field::EmailBody
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Paste(String),
    Backspace,
    Clear,
}

impl TextEdit {
    fn apply(self, target: &mut String) {
        match self {
            TextEdit::Insert(c) => target.push(c),
            TextEdit::Paste(text) => target.push_str(&text),
            TextEdit::Backspace => {
                target.pop();
            }
            TextEdit::Clear => target.clear(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    DailyJobs,
    WeeklyTips,
    AgreeTerms,
}

impl Preference {
    pub const ALL: [Preference; 3] = [
        Preference::DailyJobs,
        Preference::WeeklyTips,
        Preference::AgreeTerms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preference::DailyJobs => "Send me daily job recommendations",
            Preference::WeeklyTips => "Send me weekly career tips and advice",
            Preference::AgreeTerms => "I agree to the Terms of Service and Privacy Policy",
        }
    }
}

#[derive(Debug)]
pub enum StepView {
    Upload(UploadView),
    CoverLetter(CoverLetterView),
    Send(SendView),
    Confirm(ConfirmView),
}

impl StepView {
    pub fn mount(step: Step, draft: &WizardDraft) -> Self {
        match step {
            Step::Upload => StepView::Upload(UploadView::default()),
            Step::CoverLetter => StepView::CoverLetter(CoverLetterView::mount(draft)),
            Step::Send => StepView::Send(SendView::mount(draft)),
            Step::Confirm => StepView::Confirm(ConfirmView::default()),
        }
    }

    pub fn step(&self) -> Step {
        match self {
            StepView::Upload(_) => Step::Upload,
            StepView::CoverLetter(_) => Step::CoverLetter,
            StepView::Send(_) => Step::Send,
            StepView::Confirm(_) => Step::Confirm,
        }
    }

    pub fn fields(&self) -> &'static [Field] {
        match self {
            StepView::Upload(_) | StepView::Confirm(_) => &[],
            StepView::CoverLetter(_) => &[Field::JobDescription, Field::CoverLetter],
            StepView::Send(_) => &[Field::RecipientEmail, Field::Subject, Field::EmailBody],
        }
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        match (self, field) {
            (StepView::CoverLetter(view), Field::JobDescription) => Some(view.job_description.as_str()),
            (StepView::CoverLetter(view), Field::CoverLetter) => Some(view.cover_letter.as_str()),
            (StepView::Send(view), Field::RecipientEmail) => Some(view.recipient_email.as_str()),
            (StepView::Send(view), Field::Subject) => Some(view.subject.as_str()),
            (StepView::Send(view), Field::EmailBody) => Some(view.email_body.as_str()),
            _ => None,
        }
    }

    pub(crate) fn edit(&mut self, field: Field, edit: TextEdit) -> bool {
        let target = match (self, field) {
            (StepView::CoverLetter(view), Field::JobDescription) => &mut view.job_description,
            (StepView::CoverLetter(view), Field::CoverLetter) => &mut view.cover_letter,
            (StepView::Send(view), Field::RecipientEmail) => &mut view.recipient_email,
            (StepView::Send(view), Field::Subject) => &mut view.subject,
            (StepView::Send(view), Field::EmailBody) => &mut view.email_body,
            _ => return false,
        };
        edit.apply(target);
        true
    }

    pub fn is_busy(&self) -> bool {
        self.pending_ticket().is_some()
    }

    pub(crate) fn pending_ticket(&self) -> Option<Ticket> {
        match self {
            StepView::Upload(view) => view.pending_ticket(),
            StepView::CoverLetter(view) => view.pending_ticket(),
            StepView::Send(_) => None,
            StepView::Confirm(view) => view.pending_ticket(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftPatch;

    #[test]
    fn mount_matches_step() {
        let draft = WizardDraft::default();
        for step in Step::ALL {
            assert_eq!(StepView::mount(step, &draft).step(), step);
        }
    }

    #[test]
    fn edits_only_reach_fields_of_the_mounted_view() {
        let draft = WizardDraft::default();
        let mut view = StepView::mount(Step::CoverLetter, &draft);

        assert!(view.edit(Field::JobDescription, TextEdit::Paste("Rust dev".into())));
        assert!(view.edit(Field::JobDescription, TextEdit::Backspace));
        assert!(view.edit(Field::JobDescription, TextEdit::Insert('!')));
        assert_eq!(view.field(Field::JobDescription), Some("Rust de!"));

        assert!(!view.edit(Field::Subject, TextEdit::Insert('x')));
        assert_eq!(view.field(Field::Subject), None);
    }

    #[test]
    fn send_view_is_seeded_from_draft() {
        let mut draft = WizardDraft::default();
        draft.merge(DraftPatch::new().recipient_email("hr@acme.com"));
        let view = StepView::mount(Step::Send, &draft);

        assert_eq!(view.field(Field::RecipientEmail), Some("hr@acme.com"));
        assert_eq!(view.field(Field::Subject), Some(DEFAULT_SUBJECT));
        assert_eq!(view.field(Field::EmailBody), Some(DEFAULT_EMAIL_BODY));
    }
}
