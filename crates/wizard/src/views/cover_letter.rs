use crate::draft::{DraftPatch, WizardDraft};
use crate::error::{RequiredField, WizardResult};
use crate::job::{InFlight, Job, JobKind, Ticket};
use crate::validation::require_text;

pub const COVER_LETTER_PLACEHOLDER: &str =
    "Write your cover letter here or generate one with AI...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterMode {
    #[default]
    Input,
    Generated,
}

#[derive(Debug, Default)]
pub struct CoverLetterView {
    pub(super) job_description: String,
    pub(super) cover_letter: String,
    mode: LetterMode,
    // The description the running generation was requested with.
    in_flight: Option<(InFlight, String)>,
}

impl CoverLetterView {
    pub(super) fn mount(draft: &WizardDraft) -> Self {
        Self {
            job_description: draft.job_description().unwrap_or_default().to_string(),
            cover_letter: draft.cover_letter().unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> LetterMode {
        self.mode
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_letter(&self) -> bool {
        !self.cover_letter.trim().is_empty()
    }

    pub fn can_generate(&self) -> bool {
        !self.is_generating() && !self.job_description.trim().is_empty()
    }

    pub(crate) fn pending_ticket(&self) -> Option<Ticket> {
        self.in_flight.as_ref().map(|(in_flight, _)| in_flight.ticket())
    }

    pub(crate) fn begin_generation(&mut self, ticket: Ticket) -> WizardResult<Option<Job>> {
        if self.is_generating() {
            return Ok(None);
        }
        require_text(&self.job_description, RequiredField::JobDescription)?;
        let job_description = self.job_description.clone();
        let (in_flight, job) = InFlight::start(
            ticket,
            JobKind::GenerateCoverLetter {
                job_description: job_description.clone(),
            },
        );
        self.in_flight = Some((in_flight, job_description));
        Ok(Some(job))
    }

    pub(crate) fn finish_generation(&mut self, letter: String) -> DraftPatch {
        let job_description = self
            .in_flight
            .take()
            .map(|(_, description)| description)
            .unwrap_or_else(|| self.job_description.clone());
        self.cover_letter = letter.clone();
        self.mode = LetterMode::Generated;
        DraftPatch::new()
            .job_description(job_description)
            .cover_letter(letter)
    }

    pub(crate) fn continue_patch(&self) -> WizardResult<DraftPatch> {
        require_text(&self.cover_letter, RequiredField::CoverLetter)?;
        Ok(DraftPatch::new()
            .cover_letter(self.cover_letter.clone())
            .job_description(self.job_description.clone()))
    }
}
