use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl CvFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    pub fn size_mib(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardDraft {
    cv: Option<CvFile>,
    job_description: Option<String>,
    cover_letter: Option<String>,
    recipient_email: Option<String>,
    subject: Option<String>,
    email_body: Option<String>,
}

impl WizardDraft {
    pub fn cv(&self) -> Option<&CvFile> {
        self.cv.as_ref()
    }

    pub fn job_description(&self) -> Option<&str> {
        self.job_description.as_deref()
    }

    pub fn cover_letter(&self) -> Option<&str> {
        self.cover_letter.as_deref()
    }

    pub fn recipient_email(&self) -> Option<&str> {
        self.recipient_email.as_deref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn email_body(&self) -> Option<&str> {
        self.email_body.as_deref()
    }

    pub fn merge(&mut self, patch: DraftPatch) {
        if let Some(cv) = patch.cv {
            self.cv = cv;
        }
        if let Some(job_description) = patch.job_description {
            self.job_description = Some(job_description);
        }
        if let Some(cover_letter) = patch.cover_letter {
            self.cover_letter = Some(cover_letter);
        }
        if let Some(recipient_email) = patch.recipient_email {
            self.recipient_email = Some(recipient_email);
        }
        if let Some(subject) = patch.subject {
            self.subject = Some(subject);
        }
        if let Some(email_body) = patch.email_body {
            self.email_body = Some(email_body);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    // Outer `None` leaves the cv alone, `Some(None)` clears it.
    cv: Option<Option<CvFile>>,
    job_description: Option<String>,
    cover_letter: Option<String>,
    recipient_email: Option<String>,
    subject: Option<String>,
    email_body: Option<String>,
}

impl DraftPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cv(mut self, file: CvFile) -> Self {
        self.cv = Some(Some(file));
        self
    }

    pub fn clear_cv(mut self) -> Self {
        self.cv = Some(None);
        self
    }

    pub fn job_description(mut self, text: impl Into<String>) -> Self {
        self.job_description = Some(text.into());
        self
    }

    pub fn cover_letter(mut self, text: impl Into<String>) -> Self {
        self.cover_letter = Some(text.into());
        self
    }

    pub fn recipient_email(mut self, email: impl Into<String>) -> Self {
        self.recipient_email = Some(email.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn email_body(mut self, body: impl Into<String>) -> Self {
        self.email_body = Some(body.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub daily_jobs: bool,
    pub weekly_tips: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub cv: CvFile,
    pub cover_letter: String,
    pub recipient_email: String,
    pub subject: String,
    pub email_body: String,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub recipient_email: String,
    pub sent_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> CvFile {
        CvFile::new("resume.pdf", 2 * 1024 * 1024, "application/pdf")
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let mut draft = WizardDraft::default();
        draft.merge(DraftPatch::new().cv(pdf()).job_description("Rust role"));
        draft.merge(DraftPatch::new().cover_letter("Dear team"));

        assert_eq!(draft.cv(), Some(&pdf()));
        assert_eq!(draft.job_description(), Some("Rust role"));
        assert_eq!(draft.cover_letter(), Some("Dear team"));
        assert_eq!(draft.recipient_email(), None);
    }

    #[test]
    fn clear_cv_removes_the_file() {
        let mut draft = WizardDraft::default();
        draft.merge(DraftPatch::new().cv(pdf()));
        draft.merge(DraftPatch::new().clear_cv());
        assert!(draft.cv().is_none());
    }

    #[test]
    fn empty_patch_is_a_noop() {
        let mut draft = WizardDraft::default();
        draft.merge(DraftPatch::new().subject("Hello"));
        let before = draft.clone();

        let patch = DraftPatch::new();
        assert!(patch.is_empty());
        draft.merge(patch);
        assert_eq!(draft, before);
    }

    #[test]
    fn size_is_reported_in_mebibytes() {
        assert!((pdf().size_mib() - 2.0).abs() < f64::EPSILON);
    }
}
