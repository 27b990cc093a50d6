use crate::templates::COVER_LETTER_TEMPLATE;
use chrono::Utc;
use cvkick_wizard::{Application, CvFile, Job, JobKind, JobOutput, Receipt, Ticket};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendConfig {
    pub upload_delay: Duration,
    pub generation_delay: Duration,
    pub send_delay: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            upload_delay: Duration::from_millis(1500),
            generation_delay: Duration::from_millis(3000),
            send_delay: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    Finished { ticket: Ticket, output: JobOutput },
    Cancelled { ticket: Ticket },
}

#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    config: BackendConfig,
}

impl SimulatedBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub async fn process_upload(&self, file: CvFile) -> CvFile {
        debug!("Processing upload {} ({} bytes)", file.name, file.size);
        sleep(self.config.upload_delay).await;
        file
    }

    pub async fn generate_cover_letter(&self, job_description: &str) -> String {
        debug!(
            "Generating cover letter from {} chars of job description",
            job_description.len()
        );
        sleep(self.config.generation_delay).await;
        COVER_LETTER_TEMPLATE.to_string()
    }

    pub async fn send_application(&self, application: &Application) -> Receipt {
        info!(
            "Dispatching application to {} (cv={}, daily_jobs={}, weekly_tips={})",
            application.recipient_email,
            application.cv.name,
            application.preferences.daily_jobs,
            application.preferences.weekly_tips
        );
        sleep(self.config.send_delay).await;
        Receipt {
            recipient_email: application.recipient_email.clone(),
            sent_at: Utc::now(),
        }
    }

    pub async fn run(&self, kind: JobKind) -> JobOutput {
        match kind {
            JobKind::ProcessUpload(file) => JobOutput::Uploaded(self.process_upload(file).await),
            JobKind::GenerateCoverLetter { job_description } => {
                JobOutput::Generated(self.generate_cover_letter(&job_description).await)
            }
            JobKind::SendApplication(application) => {
                JobOutput::Sent(self.send_application(&application).await)
            }
        }
    }

    pub async fn run_job(&self, job: Job) -> JobEvent {
        let Job {
            ticket,
            kind,
            cancel,
        } = job;
        let label = kind.label();

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Cancelled {} job (ticket {})", label, ticket);
                JobEvent::Cancelled { ticket }
            }
            output = self.run(kind) => JobEvent::Finished { ticket, output },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvkick_wizard::Preferences;
    use tokio::time::Instant;
    use tokio_util::sync::CancellationToken;

    fn pdf() -> CvFile {
        CvFile::new("resume.pdf", 2 * 1024 * 1024, "application/pdf")
    }

    #[tokio::test(start_paused = true)]
    async fn upload_returns_the_same_file_after_delay() {
        let backend = SimulatedBackend::default();
        let started = Instant::now();

        let file = backend.process_upload(pdf()).await;

        assert_eq!(file, pdf());
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn generation_is_deterministic() {
        let backend = SimulatedBackend::default();
        let first = backend.generate_cover_letter("Senior Engineer role...").await;
        let second = backend.generate_cover_letter("Senior Engineer role...").await;
        let other = backend.generate_cover_letter("Barista").await;

        assert_eq!(first, COVER_LETTER_TEMPLATE);
        assert_eq!(first, second);
        assert_eq!(first, other);
    }

    #[tokio::test(start_paused = true)]
    async fn send_produces_receipt_for_recipient() {
        let backend = SimulatedBackend::new(BackendConfig {
            send_delay: Duration::from_secs(5),
            ..BackendConfig::default()
        });
        let application = Application {
            cv: pdf(),
            cover_letter: "Dear...".to_string(),
            recipient_email: "hr@acme.com".to_string(),
            subject: "Application".to_string(),
            email_body: "Dear...".to_string(),
            preferences: Preferences::default(),
        };
        let started = Instant::now();

        let receipt = backend.send_application(&application).await;

        assert_eq!(receipt.recipient_email, "hr@acme.com");
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_job_reports_cancellation() {
        let backend = SimulatedBackend::default();
        let cancel = CancellationToken::new();
        let job = Job {
            ticket: 4,
            kind: JobKind::ProcessUpload(pdf()),
            cancel: cancel.clone(),
        };

        let handle = tokio::spawn(async move { backend.run_job(job).await });
        tokio::time::sleep(Duration::from_millis(200)).await;
        cancel.cancel();

        assert_eq!(
            handle.await.expect("job task"),
            JobEvent::Cancelled { ticket: 4 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn uncancelled_job_finishes() {
        let backend = SimulatedBackend::default();
        let job = Job {
            ticket: 1,
            kind: JobKind::GenerateCoverLetter {
                job_description: "Rust".to_string(),
            },
            cancel: CancellationToken::new(),
        };

        assert_eq!(
            backend.run_job(job).await,
            JobEvent::Finished {
                ticket: 1,
                output: JobOutput::Generated(COVER_LETTER_TEMPLATE.to_string()),
            }
        );
    }
}
