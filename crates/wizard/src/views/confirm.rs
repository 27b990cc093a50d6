use super::Preference;
use crate::draft::{Application, Preferences, WizardDraft};
use crate::error::{RequiredField, WizardError, WizardResult};
use crate::job::{InFlight, Job, JobKind, Ticket};

#[derive(Debug, Default)]
pub struct ConfirmView {
    preferences: Preferences,
    agree_terms: bool,
    in_flight: Option<InFlight>,
}

impl ConfirmView {
    pub fn is_set(&self, preference: Preference) -> bool {
        match preference {
            Preference::DailyJobs => self.preferences.daily_jobs,
            Preference::WeeklyTips => self.preferences.weekly_tips,
            Preference::AgreeTerms => self.agree_terms,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_send(&self, draft: &WizardDraft) -> bool {
        self.agree_terms && !self.is_sending() && application_from(draft, self.preferences).is_ok()
    }

    pub(crate) fn set(&mut self, preference: Preference, value: bool) {
        match preference {
            Preference::DailyJobs => self.preferences.daily_jobs = value,
            Preference::WeeklyTips => self.preferences.weekly_tips = value,
            Preference::AgreeTerms => self.agree_terms = value,
        }
    }

    pub(crate) fn pending_ticket(&self) -> Option<Ticket> {
        self.in_flight.as_ref().map(InFlight::ticket)
    }

    pub(crate) fn begin_send(
        &mut self,
        draft: &WizardDraft,
        ticket: Ticket,
    ) -> WizardResult<Option<Job>> {
        if self.is_sending() {
            return Ok(None);
        }
        if !self.agree_terms {
            return Err(WizardError::MissingConsent);
        }
        let application = application_from(draft, self.preferences)?;
        let (in_flight, job) = InFlight::start(ticket, JobKind::SendApplication(application));
        self.in_flight = Some(in_flight);
        Ok(Some(job))
    }

    pub(crate) fn finish_send(&mut self) {
        self.in_flight = None;
    }
}

fn application_from(draft: &WizardDraft, preferences: Preferences) -> WizardResult<Application> {
    let cv = draft
        .cv()
        .cloned()
        .ok_or(WizardError::MissingField(RequiredField::Cv))?;
    let cover_letter = draft
        .cover_letter()
        .filter(|text| !text.trim().is_empty())
        .ok_or(WizardError::MissingField(RequiredField::CoverLetter))?;
    let recipient_email = draft
        .recipient_email()
        .filter(|email| !email.trim().is_empty())
        .ok_or(WizardError::MissingField(RequiredField::RecipientEmail))?;

    Ok(Application {
        cv,
        cover_letter: cover_letter.to_string(),
        recipient_email: recipient_email.to_string(),
        subject: draft.subject().unwrap_or_default().to_string(),
        email_body: draft.email_body().unwrap_or_default().to_string(),
        preferences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{CvFile, DraftPatch};

    fn complete_draft() -> WizardDraft {
        let mut draft = WizardDraft::default();
        draft.merge(
            DraftPatch::new()
                .cv(CvFile::new("cv.pdf", 1024, "application/pdf"))
                .cover_letter("Dear...")
                .recipient_email("hr@acme.com")
                .subject("Application")
                .email_body("Hello"),
        );
        draft
    }

    #[test]
    fn send_control_follows_terms_toggle() {
        let draft = complete_draft();
        let mut view = ConfirmView::default();
        view.set(Preference::DailyJobs, true);
        view.set(Preference::WeeklyTips, true);
        assert!(!view.can_send(&draft));

        view.set(Preference::AgreeTerms, true);
        assert!(view.can_send(&draft));

        view.set(Preference::AgreeTerms, false);
        assert!(!view.can_send(&draft));
    }

    #[test]
    fn send_without_consent_is_rejected() {
        let draft = complete_draft();
        let mut view = ConfirmView::default();
        assert!(matches!(
            view.begin_send(&draft, 1),
            Err(WizardError::MissingConsent)
        ));
        assert!(!view.is_sending());
    }

    #[test]
    fn incomplete_draft_disables_send_even_with_consent() {
        let mut view = ConfirmView::default();
        view.set(Preference::AgreeTerms, true);
        assert!(!view.can_send(&WizardDraft::default()));
        assert!(matches!(
            view.begin_send(&WizardDraft::default(), 1),
            Err(WizardError::MissingField(RequiredField::Cv))
        ));
    }

    #[test]
    fn application_carries_preferences() {
        let draft = complete_draft();
        let mut view = ConfirmView::default();
        view.set(Preference::WeeklyTips, true);
        view.set(Preference::AgreeTerms, true);

        let job = view
            .begin_send(&draft, 9)
            .expect("consent given")
            .expect("not already sending");
        match job.kind {
            JobKind::SendApplication(application) => {
                assert_eq!(application.recipient_email, "hr@acme.com");
                assert!(application.preferences.weekly_tips);
                assert!(!application.preferences.daily_jobs);
            }
            other => panic!("unexpected job {other:?}"),
        }
        assert!(!view.can_send(&draft));
    }
}
