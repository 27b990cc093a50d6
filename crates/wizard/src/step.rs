#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Upload,
    CoverLetter,
    Send,
    Confirm,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Upload, Step::CoverLetter, Step::Send, Step::Confirm];

    pub fn number(self) -> u8 {
        match self {
            Step::Upload => 1,
            Step::CoverLetter => 2,
            Step::Send => 3,
            Step::Confirm => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Step::Upload),
            2 => Some(Step::CoverLetter),
            3 => Some(Step::Send),
            4 => Some(Step::Confirm),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Upload => "Upload CV",
            Step::CoverLetter => "Cover Letter",
            Step::Send => "Send Application",
            Step::Confirm => "Confirmation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::Upload => "Upload your resume",
            Step::CoverLetter => "Generate or write your cover letter",
            Step::Send => "Enter recipient details",
            Step::Confirm => "Review and send",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number().checked_sub(1)?)
    }
}
