use crate::notice::Notice;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Cv,
    JobDescription,
    CoverLetter,
    RecipientEmail,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequiredField::Cv => "cv",
            RequiredField::JobDescription => "job description",
            RequiredField::CoverLetter => "cover letter",
            RequiredField::RecipientEmail => "recipient email",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Missing required field: {0}")]
    MissingField(RequiredField),

    #[error("Unsupported file type: {found}")]
    WrongFileType { found: String },

    #[error("File too large: {size} bytes exceeds {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Malformed email address: {0}")]
    MalformedEmail(String),

    #[error("Terms and conditions not accepted")]
    MissingConsent,
}

impl WizardError {
    pub fn notice(&self) -> Notice {
        let (title, description) = match self {
            WizardError::MissingField(RequiredField::Cv) => {
                ("CV Required", "Please upload your CV to continue.")
            }
            WizardError::MissingField(RequiredField::JobDescription) => (
                "Job Description Required",
                "Please enter a job description to generate a cover letter.",
            ),
            WizardError::MissingField(RequiredField::CoverLetter) => (
                "Cover Letter Required",
                "Please generate or write a cover letter to continue.",
            ),
            WizardError::MissingField(RequiredField::RecipientEmail) => (
                "Email Required",
                "Please enter the recipient's email address.",
            ),
            WizardError::WrongFileType { .. } => ("Invalid File Type", "Please upload a PDF file."),
            WizardError::FileTooLarge { .. } => {
                ("File Too Large", "Please upload a file smaller than 10MB.")
            }
            WizardError::MalformedEmail(_) => {
                ("Invalid Email", "Please enter a valid email address.")
            }
            WizardError::MissingConsent => (
                "Terms Required",
                "Please agree to the terms and conditions to continue.",
            ),
        };
        Notice::destructive(title, description)
    }
}

pub type WizardResult<T> = Result<T, WizardError>;
