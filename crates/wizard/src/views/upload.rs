use crate::draft::CvFile;
use crate::error::WizardResult;
use crate::job::{InFlight, Job, JobKind, Ticket};
use crate::validation::validate_cv;

#[derive(Debug, Default)]
pub struct UploadView {
    in_flight: Option<InFlight>,
    pending_file: Option<CvFile>,
}

impl UploadView {
    pub fn is_uploading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn pending_file(&self) -> Option<&CvFile> {
        self.pending_file.as_ref()
    }

    pub(crate) fn pending_ticket(&self) -> Option<Ticket> {
        self.in_flight.as_ref().map(InFlight::ticket)
    }

    pub(crate) fn begin(&mut self, file: CvFile, ticket: Ticket) -> WizardResult<Option<Job>> {
        if self.is_uploading() {
            return Ok(None);
        }
        validate_cv(&file)?;
        let (in_flight, job) = InFlight::start(ticket, JobKind::ProcessUpload(file.clone()));
        self.in_flight = Some(in_flight);
        self.pending_file = Some(file);
        Ok(Some(job))
    }

    pub(crate) fn finish(&mut self) {
        self.in_flight = None;
        self.pending_file = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WizardError;
    use crate::validation::PDF_MIME_TYPE;

    #[test]
    fn second_selection_is_ignored_while_processing() {
        let mut view = UploadView::default();
        let first = CvFile::new("a.pdf", 1024, PDF_MIME_TYPE);
        let second = CvFile::new("b.pdf", 1024, PDF_MIME_TYPE);

        let job = view.begin(first.clone(), 1).expect("valid pdf");
        assert!(job.is_some());
        assert!(matches!(view.begin(second, 2), Ok(None)));
        assert_eq!(view.pending_file(), Some(&first));
        assert_eq!(view.pending_ticket(), Some(1));
    }

    #[test]
    fn invalid_file_leaves_view_idle() {
        let mut view = UploadView::default();
        let png = CvFile::new("a.png", 1024, "image/png");

        assert!(matches!(
            view.begin(png, 1),
            Err(WizardError::WrongFileType { .. })
        ));
        assert!(!view.is_uploading());
        assert!(view.pending_file().is_none());
    }
}
