use crate::controller::{CompletionPolicy, StepController};
use crate::draft::{CvFile, DraftPatch, Receipt, WizardDraft};
use crate::error::{RequiredField, WizardError};
use crate::job::{Job, JobOutput, Ticket};
use crate::notice::Notice;
use crate::step::Step;
use crate::views::{Field, Preference, StepView, TextEdit};
use std::collections::VecDeque;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitted(Receipt),
}

#[derive(Debug)]
pub struct Wizard {
    draft: WizardDraft,
    controller: StepController,
    view: StepView,
    phase: Phase,
    notices: VecDeque<Notice>,
    last_ticket: Ticket,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(CompletionPolicy::default())
    }
}

impl Wizard {
    pub fn new(policy: CompletionPolicy) -> Self {
        let draft = WizardDraft::default();
        let controller = StepController::new(policy);
        let view = StepView::mount(controller.current(), &draft);
        Self {
            draft,
            controller,
            view,
            phase: Phase::Editing,
            notices: VecDeque::new(),
            last_ticket: 0,
        }
    }

    pub fn draft(&self) -> &WizardDraft {
        &self.draft
    }

    pub fn controller(&self) -> &StepController {
        &self.controller
    }

    pub fn current_step(&self) -> Step {
        self.controller.current()
    }

    pub fn view(&self) -> &StepView {
        &self.view
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted(_))
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        match &self.phase {
            Phase::Submitted(receipt) => Some(receipt),
            Phase::Editing => None,
        }
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn can_advance(&self) -> bool {
        if self.is_submitted() || self.view.is_busy() {
            return false;
        }
        match &self.view {
            StepView::Upload(_) => self.draft.cv().is_some(),
            StepView::CoverLetter(view) => view.has_letter(),
            StepView::Send(_) => true,
            StepView::Confirm(_) => false,
        }
    }

    pub fn can_send(&self) -> bool {
        match &self.view {
            StepView::Confirm(view) => !self.is_submitted() && view.can_send(&self.draft),
            _ => false,
        }
    }

    pub fn select_cv(&mut self, file: CvFile) -> Option<Job> {
        if self.is_submitted() {
            return None;
        }
        let ticket = self.next_ticket();
        let StepView::Upload(view) = &mut self.view else {
            return None;
        };
        match view.begin(file, ticket) {
            Ok(job) => {
                if let Some(job) = &job {
                    debug!("Upload started (ticket {})", job.ticket);
                }
                job
            }
            Err(e) => {
                self.reject(e);
                None
            }
        }
    }

    pub fn remove_cv(&mut self) -> bool {
        let StepView::Upload(view) = &self.view else {
            return false;
        };
        if self.is_submitted() || view.is_uploading() || self.draft.cv().is_none() {
            return false;
        }
        self.draft.merge(DraftPatch::new().clear_cv());
        info!("CV removed");
        true
    }

    pub fn edit(&mut self, field: Field, edit: TextEdit) -> bool {
        if self.is_submitted() {
            return false;
        }
        self.view.edit(field, edit)
    }

    pub fn generate_cover_letter(&mut self) -> Option<Job> {
        if self.is_submitted() {
            return None;
        }
        let ticket = self.next_ticket();
        let StepView::CoverLetter(view) = &mut self.view else {
            return None;
        };
        match view.begin_generation(ticket) {
            Ok(job) => job,
            Err(e) => {
                self.reject(e);
                None
            }
        }
    }

    pub fn set_preference(&mut self, preference: Preference, value: bool) -> bool {
        if self.is_submitted() {
            return false;
        }
        match &mut self.view {
            StepView::Confirm(view) => {
                view.set(preference, value);
                true
            }
            _ => false,
        }
    }

    pub fn toggle_preference(&mut self, preference: Preference) -> bool {
        let current = match &self.view {
            StepView::Confirm(view) => view.is_set(preference),
            _ => return false,
        };
        self.set_preference(preference, !current)
    }

    pub fn send(&mut self) -> Option<Job> {
        if self.is_submitted() {
            return None;
        }
        let ticket = self.next_ticket();
        let StepView::Confirm(view) = &mut self.view else {
            return None;
        };
        match view.begin_send(&self.draft, ticket) {
            Ok(job) => job,
            Err(e) => {
                self.reject(e);
                None
            }
        }
    }

    pub fn advance(&mut self) -> bool {
        if self.is_submitted() || self.view.is_busy() {
            return false;
        }
        let patch = match &self.view {
            StepView::Upload(_) => match self.draft.cv() {
                Some(_) => Ok(DraftPatch::new()),
                None => Err(WizardError::MissingField(RequiredField::Cv)),
            },
            StepView::CoverLetter(view) => view.continue_patch(),
            StepView::Send(view) => view.continue_patch(),
            StepView::Confirm(_) => return false,
        };
        let patch = match patch {
            Ok(patch) => patch,
            Err(e) => {
                self.reject(e);
                return false;
            }
        };

        self.draft.merge(patch);
        if !self.controller.advance() {
            return false;
        }
        info!("Advanced to step {}", self.controller.current().number());
        self.remount();
        true
    }

    pub fn retreat(&mut self) -> bool {
        if self.is_submitted() || !self.controller.retreat() {
            return false;
        }
        info!("Retreated to step {}", self.controller.current().number());
        self.remount();
        true
    }

    /// Applies the result of a job. Results for views that are gone, or for
    /// tickets the current view no longer waits on, are dropped.
    pub fn complete(&mut self, ticket: Ticket, output: JobOutput) -> bool {
        if self.view.pending_ticket() != Some(ticket) {
            debug!("Dropping stale result for ticket {}", ticket);
            return false;
        }

        match (output, &mut self.view) {
            (JobOutput::Uploaded(file), StepView::Upload(view)) => {
                view.finish();
                info!("CV stored: {} ({} bytes)", file.name, file.size);
                self.notices.push_back(Notice::success(
                    "CV Uploaded Successfully! 🎉",
                    format!("{} has been uploaded and is ready to use.", file.name),
                ));
                self.draft.merge(DraftPatch::new().cv(file));
            }
            (JobOutput::Generated(letter), StepView::CoverLetter(view)) => {
                let patch = view.finish_generation(letter);
                self.draft.merge(patch);
                info!("Cover letter generated");
                self.notices.push_back(Notice::success(
                    "Cover Letter Generated! ✨",
                    "Your personalized cover letter is ready for review.",
                ));
            }
            (JobOutput::Sent(receipt), StepView::Confirm(view)) => {
                view.finish_send();
                info!("Application sent to {}", receipt.recipient_email);
                self.notices.push_back(Notice::success(
                    "Application Sent Successfully! 🎉",
                    "Your application has been sent to the employer. Good luck!",
                ));
                self.phase = Phase::Submitted(receipt);
            }
            _ => return false,
        }
        true
    }

    fn remount(&mut self) {
        // Replacing the view drops the old one, which cancels its in-flight job.
        self.view = StepView::mount(self.controller.current(), &self.draft);
    }

    fn next_ticket(&mut self) -> Ticket {
        self.last_ticket += 1;
        self.last_ticket
    }

    fn reject(&mut self, error: WizardError) {
        debug!("Rejected on step {}: {}", self.current_step().number(), error);
        self.notices.push_back(error.notice());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Preferences;
    use crate::job::JobKind;
    use crate::notice::Severity;
    use crate::validation::{MAX_CV_BYTES, PDF_MIME_TYPE};
    use crate::views::LetterMode;
    use chrono::Utc;

    const LETTER: &str = "Dear Hiring Manager,\n\nTemplate.";

    fn valid_pdf() -> CvFile {
        CvFile::new("resume.pdf", 2 * 1024 * 1024, PDF_MIME_TYPE)
    }

    fn type_into(wizard: &mut Wizard, field: Field, text: &str) {
        wizard.edit(field, TextEdit::Clear);
        assert!(wizard.edit(field, TextEdit::Paste(text.to_string())));
    }

    fn upload(wizard: &mut Wizard, file: CvFile) {
        let job = wizard.select_cv(file).expect("upload job");
        let JobKind::ProcessUpload(file) = job.kind else {
            panic!("unexpected job kind");
        };
        assert!(wizard.complete(job.ticket, JobOutput::Uploaded(file)));
    }

    fn wizard_at_confirm() -> Wizard {
        let mut wizard = Wizard::default();
        upload(&mut wizard, valid_pdf());
        assert!(wizard.advance());
        type_into(&mut wizard, Field::CoverLetter, LETTER);
        assert!(wizard.advance());
        type_into(&mut wizard, Field::RecipientEmail, "hr@acme.com");
        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), Step::Confirm);
        wizard
    }

    #[test]
    fn rejected_uploads_never_touch_the_cv() {
        let mut wizard = Wizard::default();
        let png = CvFile::new("photo.png", 1024, "image/png");
        let huge = CvFile::new("cv.pdf", MAX_CV_BYTES + 1, PDF_MIME_TYPE);

        assert!(wizard.select_cv(png).is_none());
        assert!(wizard.select_cv(huge).is_none());
        assert!(wizard.draft().cv().is_none());
        assert!(!wizard.can_advance());

        let notices = wizard.take_notices();
        let titles: Vec<_> = notices.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Invalid File Type", "File Too Large"]);
        assert!(notices.iter().all(|n| n.severity == Severity::Destructive));
    }

    #[test]
    fn valid_upload_stores_exact_file_and_enables_advance() {
        let mut wizard = Wizard::default();
        let job = wizard.select_cv(valid_pdf()).expect("upload job");
        assert!(wizard.draft().cv().is_none());
        assert!(!wizard.can_advance());

        assert!(wizard.complete(job.ticket, JobOutput::Uploaded(valid_pdf())));
        assert_eq!(wizard.draft().cv(), Some(&valid_pdf()));
        assert!(wizard.can_advance());
    }

    #[test]
    fn removing_cv_returns_to_empty_state() {
        let mut wizard = Wizard::default();
        upload(&mut wizard, valid_pdf());
        assert!(wizard.remove_cv());
        assert!(wizard.draft().cv().is_none());
        assert!(!wizard.can_advance());
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), Step::Upload);
    }

    #[test]
    fn empty_description_generation_changes_nothing() {
        let mut wizard = Wizard::default();
        upload(&mut wizard, valid_pdf());
        wizard.advance();
        wizard.take_notices();

        assert!(wizard.generate_cover_letter().is_none());
        assert!(wizard.draft().cover_letter().is_none());
        let StepView::CoverLetter(view) = wizard.view() else {
            panic!("expected cover letter view");
        };
        assert_eq!(view.mode(), LetterMode::Input);
        assert_eq!(wizard.take_notices()[0].title, "Job Description Required");
    }

    #[test]
    fn generated_letter_is_stored_with_description() {
        let mut wizard = Wizard::default();
        upload(&mut wizard, valid_pdf());
        wizard.advance();
        type_into(&mut wizard, Field::JobDescription, "Senior Engineer role...");

        let job = wizard.generate_cover_letter().expect("generation job");
        assert!(wizard.generate_cover_letter().is_none());
        assert!(wizard.complete(job.ticket, JobOutput::Generated(LETTER.to_string())));

        assert_eq!(wizard.draft().cover_letter(), Some(LETTER));
        assert_eq!(
            wizard.draft().job_description(),
            Some("Senior Engineer role...")
        );
        assert!(wizard.can_advance());
    }

    #[test]
    fn retreat_cancels_running_generation() {
        let mut wizard = Wizard::default();
        upload(&mut wizard, valid_pdf());
        wizard.advance();
        type_into(&mut wizard, Field::JobDescription, "Rust role");
        let job = wizard.generate_cover_letter().expect("generation job");

        assert!(wizard.retreat());
        assert!(job.cancel.is_cancelled());
        assert!(!wizard.complete(job.ticket, JobOutput::Generated(LETTER.to_string())));
        assert!(wizard.draft().cover_letter().is_none());
    }

    #[test]
    fn mismatched_ticket_is_ignored() {
        let mut wizard = Wizard::default();
        let job = wizard.select_cv(valid_pdf()).expect("upload job");
        assert!(!wizard.complete(job.ticket + 100, JobOutput::Uploaded(valid_pdf())));
        assert!(wizard.draft().cv().is_none());
        assert!(wizard.view().is_busy());
    }

    #[test]
    fn email_validation_blocks_advance() {
        let mut wizard = Wizard::default();
        upload(&mut wizard, valid_pdf());
        wizard.advance();
        type_into(&mut wizard, Field::CoverLetter, LETTER);
        wizard.advance();
        wizard.take_notices();

        for bad in ["not-an-email", ""] {
            type_into(&mut wizard, Field::RecipientEmail, bad);
            assert!(!wizard.advance());
            assert_eq!(wizard.current_step(), Step::Send);
            assert!(wizard.draft().recipient_email().is_none());
        }
        let titles: Vec<_> = wizard.take_notices().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["Invalid Email", "Email Required"]);

        type_into(&mut wizard, Field::RecipientEmail, "hr@company.com");
        assert!(wizard.advance());
        assert_eq!(wizard.draft().recipient_email(), Some("hr@company.com"));
    }

    #[test]
    fn send_requires_terms() {
        let mut wizard = wizard_at_confirm();
        assert!(!wizard.can_send());
        assert!(wizard.send().is_none());
        assert_eq!(wizard.take_notices()[0].title, "Terms Required");

        assert!(wizard.toggle_preference(Preference::AgreeTerms));
        assert!(wizard.can_send());

        let _job = wizard.send().expect("send job");
        assert!(!wizard.can_send());
        assert!(wizard.send().is_none());
        assert!(wizard.view().is_busy());
    }

    #[test]
    fn leaving_confirmation_cancels_pending_send() {
        let mut wizard = wizard_at_confirm();
        wizard.set_preference(Preference::AgreeTerms, true);
        let job = wizard.send().expect("send job");

        assert!(wizard.retreat());
        assert!(job.cancel.is_cancelled());
        let receipt = Receipt {
            recipient_email: "hr@acme.com".to_string(),
            sent_at: Utc::now(),
        };
        assert!(!wizard.complete(job.ticket, JobOutput::Sent(receipt)));
        assert!(!wizard.is_submitted());
    }

    #[test]
    fn submitted_wizard_is_terminal() {
        let mut wizard = wizard_at_confirm();
        wizard.set_preference(Preference::AgreeTerms, true);
        let job = wizard.send().expect("send job");
        let JobKind::SendApplication(application) = &job.kind else {
            panic!("unexpected job kind");
        };
        assert_eq!(application.preferences, Preferences::default());

        let receipt = Receipt {
            recipient_email: "hr@acme.com".to_string(),
            sent_at: Utc::now(),
        };
        assert!(wizard.complete(job.ticket, JobOutput::Sent(receipt)));
        assert!(wizard.is_submitted());
        assert_eq!(
            wizard.receipt().map(|r| r.recipient_email.as_str()),
            Some("hr@acme.com")
        );

        assert!(!wizard.retreat());
        assert!(!wizard.advance());
        assert!(!wizard.edit(Field::RecipientEmail, TextEdit::Insert('x')));
        assert_eq!(wizard.current_step(), Step::Confirm);
    }
}
