use crate::draft::CvFile;
use crate::error::{RequiredField, WizardError, WizardResult};
use regex::Regex;
use std::sync::OnceLock;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const MAX_CV_BYTES: u64 = 10 * 1024 * 1024;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Type is checked before size, so an oversized non-PDF reports the type.
pub fn validate_cv(file: &CvFile) -> WizardResult<()> {
    if file.mime_type != PDF_MIME_TYPE {
        return Err(WizardError::WrongFileType {
            found: file.mime_type.clone(),
        });
    }
    if file.size > MAX_CV_BYTES {
        return Err(WizardError::FileTooLarge {
            size: file.size,
            limit: MAX_CV_BYTES,
        });
    }
    Ok(())
}

pub fn validate_email(email: &str) -> WizardResult<()> {
    if email.trim().is_empty() {
        return Err(WizardError::MissingField(RequiredField::RecipientEmail));
    }
    if !email_pattern().is_match(email) {
        return Err(WizardError::MalformedEmail(email.to_string()));
    }
    Ok(())
}

pub fn require_text(text: &str, field: RequiredField) -> WizardResult<()> {
    if text.trim().is_empty() {
        Err(WizardError::MissingField(field))
    } else {
        Ok(())
    }
}
