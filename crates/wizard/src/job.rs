use crate::draft::{Application, CvFile, Receipt};
use tokio_util::sync::CancellationToken;

pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobKind {
    ProcessUpload(CvFile),
    GenerateCoverLetter { job_description: String },
    SendApplication(Application),
}

impl JobKind {
    pub fn label(&self) -> &'static str {
        match self {
            JobKind::ProcessUpload(_) => "upload",
            JobKind::GenerateCoverLetter { .. } => "generation",
            JobKind::SendApplication(_) => "send",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutput {
    Uploaded(CvFile),
    Generated(String),
    Sent(Receipt),
}

#[derive(Debug, Clone)]
pub struct Job {
    pub ticket: Ticket,
    pub kind: JobKind,
    pub cancel: CancellationToken,
}

/// The view-side half of a [`Job`]. Dropping it cancels the job.
#[derive(Debug)]
pub(crate) struct InFlight {
    ticket: Ticket,
    cancel: CancellationToken,
}

impl InFlight {
    pub(crate) fn start(ticket: Ticket, kind: JobKind) -> (Self, Job) {
        let cancel = CancellationToken::new();
        let job = Job {
            ticket,
            kind,
            cancel: cancel.clone(),
        };
        (Self { ticket, cancel }, job)
    }

    pub(crate) fn ticket(&self) -> Ticket {
        self.ticket
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
