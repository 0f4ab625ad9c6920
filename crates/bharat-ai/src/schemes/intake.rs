use serde::{Deserialize, Deserializer};

use super::domain::Applicant;

/// Raw eligibility checker form as submitted by a browser or CLI.
///
/// Numeric fields arrive as text (JSON numbers are accepted too) and are only
/// interpreted by [`EligibilityForm::into_applicant`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EligibilityForm {
    #[serde(default)]
    pub occupation: String,
    #[serde(default, deserialize_with = "form_text")]
    pub income: String,
    #[serde(default, deserialize_with = "form_text")]
    pub age: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl EligibilityForm {
    /// Validate required fields and read the numeric answers.
    ///
    /// Required means non-empty: a whitespace-only income is accepted here and
    /// then reads as not-a-number.
    pub fn into_applicant(self) -> Result<Applicant, IntakeError> {
        if self.occupation.is_empty() {
            return Err(IntakeError::MissingField("occupation"));
        }
        if self.income.is_empty() {
            return Err(IntakeError::MissingField("income"));
        }
        if self.age.is_empty() {
            return Err(IntakeError::MissingField("age"));
        }

        let annual_income = read_non_negative("income", &self.income)?;
        let age = read_non_negative("age", &self.age)?
            .map(|value| u32::try_from(value).unwrap_or(u32::MAX));

        Ok(Applicant {
            occupation: self.occupation,
            annual_income,
            age,
            state: self.state.filter(|value| !value.is_empty()),
            social_category: self.category.filter(|value| !value.is_empty()),
        })
    }
}

fn read_non_negative(field: &'static str, raw: &str) -> Result<Option<u64>, IntakeError> {
    match parse_leading_integer(raw) {
        LeadingInteger::NotANumber => Ok(None),
        LeadingInteger::Negative => Err(IntakeError::Negative(field)),
        LeadingInteger::Value(value) => Ok(Some(value)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LeadingInteger {
    NotANumber,
    Negative,
    Value(u64),
}

/// Read the integer at the start of `raw`: leading whitespace, an optional sign,
/// then decimal digits up to the first non-digit. Overflow saturates.
pub(crate) fn parse_leading_integer(raw: &str) -> LeadingInteger {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(byte - b'0'));
    }

    match (seen_digit, negative) {
        (false, _) => LeadingInteger::NotANumber,
        (true, true) if value > 0 => LeadingInteger::Negative,
        (true, _) => LeadingInteger::Value(value),
    }
}

fn form_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Unsigned(value) => value.to_string(),
        Raw::Signed(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}

/// Validation failure raised before evaluation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} cannot be negative")]
    Negative(&'static str),
}

impl IntakeError {
    pub fn field(&self) -> &'static str {
        match self {
            IntakeError::MissingField(field) | IntakeError::Negative(field) => field,
        }
    }
}
