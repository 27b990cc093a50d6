pub mod controller;
pub mod draft;
pub mod error;
pub mod job;
pub mod notice;
pub mod step;
pub mod validation;
pub mod views;
pub mod wizard;

pub use controller::{CompletionPolicy, ProgressEntry, StepController, StepStatus};
pub use draft::{Application, CvFile, DraftPatch, Preferences, Receipt, WizardDraft};
pub use error::{RequiredField, WizardError, WizardResult};
pub use job::{Job, JobKind, JobOutput, Ticket};
pub use notice::{Notice, Severity};
pub use step::Step;
pub use views::{Field, LetterMode, Preference, StepView, TextEdit};
pub use wizard::{Phase, Wizard};
