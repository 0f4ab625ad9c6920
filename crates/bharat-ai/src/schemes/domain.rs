use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemeId(pub u32);

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed category tag used as the sole key into the eligibility rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeCategory {
    Education,
    Health,
    Agriculture,
    Business,
    Housing,
    Employment,
    SocialSecurity,
}

impl SchemeCategory {
    pub const ALL: [SchemeCategory; 7] = [
        SchemeCategory::Education,
        SchemeCategory::Health,
        SchemeCategory::Agriculture,
        SchemeCategory::Business,
        SchemeCategory::Housing,
        SchemeCategory::Employment,
        SchemeCategory::SocialSecurity,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SchemeCategory::Education => "education",
            SchemeCategory::Health => "health",
            SchemeCategory::Agriculture => "agriculture",
            SchemeCategory::Business => "business",
            SchemeCategory::Housing => "housing",
            SchemeCategory::Employment => "employment",
            SchemeCategory::SocialSecurity => "social_security",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SchemeCategory::Education => "Education",
            SchemeCategory::Health => "Health",
            SchemeCategory::Agriculture => "Agriculture",
            SchemeCategory::Business => "Business",
            SchemeCategory::Housing => "Housing",
            SchemeCategory::Employment => "Employment",
            SchemeCategory::SocialSecurity => "Social Security",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

/// One government benefit programme as published in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: SchemeId,
    pub name: String,
    pub category: SchemeCategory,
    pub description: String,
    pub full_description: String,
    pub eligibility: Vec<String>,
    pub benefits: String,
    pub documents: Vec<String>,
    pub how_to_apply: Vec<String>,
    pub official_link: String,
    pub ministry: String,
    /// Static display flag shipped with the demo data; the evaluator never reads it.
    pub eligible: bool,
    pub is_active: bool,
}

/// Applicant answers after intake validation.
///
/// `annual_income` and `age` are `None` when the submitted text was not a number.
/// Every numeric criterion treats `None` as failed, so unreadable input only ever
/// narrows the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub occupation: String,
    pub annual_income: Option<u64>,
    pub age: Option<u32>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub social_category: Option<String>,
}

impl Applicant {
    pub fn new(occupation: impl Into<String>, annual_income: u64, age: u32) -> Self {
        Self {
            occupation: occupation.into(),
            annual_income: Some(annual_income),
            age: Some(age),
            state: None,
            social_category: None,
        }
    }
}

/// Occupation values offered by the eligibility checker form.
pub const OCCUPATION_OPTIONS: [(&str, &str); 7] = [
    ("student", "Student"),
    ("farmer", "Farmer"),
    ("business", "Business Owner"),
    ("self-employed", "Self-Employed"),
    ("salaried", "Salaried Employee"),
    ("unemployed", "Unemployed"),
    ("other", "Other"),
];

/// Optional social category values offered by the form. Recorded, not evaluated.
pub const SOCIAL_CATEGORY_OPTIONS: [(&str, &str); 5] = [
    ("general", "General"),
    ("sc", "SC"),
    ("st", "ST"),
    ("obc", "OBC"),
    ("minority", "Minority"),
];
