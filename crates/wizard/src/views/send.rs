use crate::draft::{DraftPatch, WizardDraft};
use crate::error::WizardResult;
use crate::validation::validate_email;

pub const DEFAULT_SUBJECT: &str = "Job Application - [Your Name]";

pub const DEFAULT_EMAIL_BODY: &str = "Dear Hiring Manager,

I am writing to express my interest in the position at your company. Please find my CV and cover letter attached for your review.

I am excited about the opportunity to contribute to your team and would welcome the chance to discuss my qualifications further.

Thank you for your consideration.

Best regards,
[Your Name]";

#[derive(Debug)]
pub struct SendView {
    pub(super) recipient_email: String,
    pub(super) subject: String,
    pub(super) email_body: String,
}

impl SendView {
    pub(super) fn mount(draft: &WizardDraft) -> Self {
        Self {
            recipient_email: draft.recipient_email().unwrap_or_default().to_string(),
            subject: draft.subject().unwrap_or(DEFAULT_SUBJECT).to_string(),
            email_body: draft.email_body().unwrap_or(DEFAULT_EMAIL_BODY).to_string(),
        }
    }

    pub(crate) fn continue_patch(&self) -> WizardResult<DraftPatch> {
        validate_email(&self.recipient_email)?;
        Ok(DraftPatch::new()
            .recipient_email(self.recipient_email.clone())
            .subject(self.subject.clone())
            .email_body(self.email_body.clone()))
    }
}
