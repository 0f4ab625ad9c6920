use serde::{Deserialize, Serialize};

use super::domain::{optional, split_list, Address, Education, StudentProfile, User};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupStep {
    PersonalDetails,
    EducationDetails,
    Preferences,
}

impl SignupStep {
    pub fn number(self) -> u8 {
        match self {
            Self::PersonalDetails => 1,
            Self::EducationDetails => 2,
            Self::Preferences => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalDetails => "Personal Details",
            Self::EducationDetails => "Education Details",
            Self::Preferences => "Interests & Goals",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl PersonalDetails {
    fn validate(&self) -> Result<(), SignupError> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(SignupError::MissingRequired);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationDetails {
    #[serde(default)]
    pub current_level: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub year_of_study: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

impl EducationDetails {
    fn validate(&self) -> Result<(), SignupError> {
        if self.current_level.is_empty() || self.institution.is_empty() {
            return Err(SignupError::MissingEducation);
        }
        Ok(())
    }
}

/// Final step. Interests and goals arrive as comma separated text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub goals: String,
}

/// All three steps submitted at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    pub personal: PersonalDetails,
    pub education: EducationDetails,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    pub user: User,
    pub profile: StudentProfile,
}

/// Three-step signup flow. Each step is validated before the wizard advances.
#[derive(Debug, Clone)]
pub struct SignupWizard {
    step: SignupStep,
    personal: Option<PersonalDetails>,
    education: Option<EducationDetails>,
}

impl Default for SignupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupWizard {
    pub fn new() -> Self {
        Self {
            step: SignupStep::PersonalDetails,
            personal: None,
            education: None,
        }
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn submit_personal(&mut self, details: PersonalDetails) -> Result<SignupStep, SignupError> {
        self.expect_step(SignupStep::PersonalDetails)?;
        details.validate()?;
        self.personal = Some(details);
        self.step = SignupStep::EducationDetails;
        Ok(self.step)
    }

    pub fn submit_education(
        &mut self,
        details: EducationDetails,
    ) -> Result<SignupStep, SignupError> {
        self.expect_step(SignupStep::EducationDetails)?;
        details.validate()?;
        self.education = Some(details);
        self.step = SignupStep::Preferences;
        Ok(self.step)
    }

    /// Returns to the previous step, keeping what was already entered.
    pub fn back(&mut self) -> Result<SignupStep, SignupError> {
        self.step = match self.step {
            SignupStep::PersonalDetails => return Err(SignupError::NoPreviousStep),
            SignupStep::EducationDetails => SignupStep::PersonalDetails,
            SignupStep::Preferences => SignupStep::EducationDetails,
        };
        Ok(self.step)
    }

    pub fn complete(self, preferences: Preferences) -> Result<SignupOutcome, SignupError> {
        self.expect_step(SignupStep::Preferences)?;
        let (Some(personal), Some(education)) = (self.personal, self.education) else {
            return Err(SignupError::OutOfOrder {
                expected: SignupStep::PersonalDetails,
                actual: self.step,
            });
        };

        let user = User::new(personal.name.clone(), personal.email.clone());
        let profile = StudentProfile {
            name: personal.name,
            email: personal.email,
            phone: optional(personal.phone),
            date_of_birth: optional(personal.date_of_birth),
            gender: optional(personal.gender),
            education: Education {
                current_level: education.current_level,
                institution: education.institution,
                field_of_study: optional(education.field_of_study),
                year_of_study: optional(education.year_of_study),
                grade: optional(education.grade),
            },
            address: Address {
                city: optional(preferences.city),
                state: optional(preferences.state),
                pincode: optional(preferences.pincode),
            },
            interests: split_list(&preferences.interests),
            goals: split_list(&preferences.goals),
        };

        Ok(SignupOutcome { user, profile })
    }

    /// Drives a fresh wizard through every step.
    pub fn run(request: SignupRequest) -> Result<SignupOutcome, SignupError> {
        let mut wizard = Self::new();
        wizard.submit_personal(request.personal)?;
        wizard.submit_education(request.education)?;
        wizard.complete(request.preferences)
    }

    fn expect_step(&self, expected: SignupStep) -> Result<(), SignupError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(SignupError::OutOfOrder {
                expected,
                actual: self.step,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please fill in your education details")]
    MissingEducation,
    #[error("already on the first step")]
    NoPreviousStep,
    #[error("expected the {expected:?} step but the wizard is on {actual:?}")]
    OutOfOrder {
        expected: SignupStep,
        actual: SignupStep,
    },
}
