use serde::Serialize;

use super::super::domain::{Applicant, SchemeCategory};

/// Single condition inside a category rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Criterion {
    /// Occupation must equal one of the listed values exactly (no trimming or case folding).
    OccupationIn { accepted: &'static [&'static str] },
    /// Annual income strictly below the limit.
    IncomeBelow { limit: u64 },
    /// Age within the inclusive range.
    AgeBetween { min: u32, max: u32 },
}

pub(crate) struct CriterionCheck {
    pub passed: bool,
    pub note: String,
}

impl Criterion {
    pub(crate) fn check(&self, applicant: &Applicant) -> CriterionCheck {
        match self {
            Criterion::OccupationIn { accepted } => {
                let passed = accepted.contains(&applicant.occupation.as_str());
                let note = if passed {
                    format!("occupation '{}' qualifies", applicant.occupation)
                } else {
                    format!(
                        "occupation '{}' not in {}",
                        applicant.occupation,
                        accepted.join(", ")
                    )
                };
                CriterionCheck { passed, note }
            }
            Criterion::IncomeBelow { limit } => match applicant.annual_income {
                Some(income) if income < *limit => CriterionCheck {
                    passed: true,
                    note: format!("income {income} below limit {limit}"),
                },
                Some(income) => CriterionCheck {
                    passed: false,
                    note: format!("income {income} not below limit {limit}"),
                },
                None => CriterionCheck {
                    passed: false,
                    note: "income is not a number".to_string(),
                },
            },
            Criterion::AgeBetween { min, max } => match applicant.age {
                Some(age) if (*min..=*max).contains(&age) => CriterionCheck {
                    passed: true,
                    note: format!("age {age} within {min}-{max}"),
                },
                Some(age) => CriterionCheck {
                    passed: false,
                    note: format!("age {age} outside {min}-{max}"),
                },
                None => CriterionCheck {
                    passed: false,
                    note: "age is not a number".to_string(),
                },
            },
        }
    }
}

/// Conjunction of criteria keyed by scheme category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRule {
    pub category: SchemeCategory,
    pub criteria: Vec<Criterion>,
}

/// Category to rule lookup. Categories without an entry are never eligible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<CategoryRule>,
}

impl RuleTable {
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// First rule registered for the category.
    pub fn rule_for(&self, category: SchemeCategory) -> Option<&CategoryRule> {
        self.rules.iter().find(|rule| rule.category == category)
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}

// Housing has no entry. Kept that way until the intended criteria are confirmed.
fn standard_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule {
            category: SchemeCategory::Education,
            criteria: vec![
                Criterion::OccupationIn {
                    accepted: &["student", "unemployed"],
                },
                Criterion::IncomeBelow { limit: 600_000 },
            ],
        },
        CategoryRule {
            category: SchemeCategory::Health,
            criteria: vec![Criterion::IncomeBelow { limit: 500_000 }],
        },
        CategoryRule {
            category: SchemeCategory::Agriculture,
            criteria: vec![Criterion::OccupationIn {
                accepted: &["farmer"],
            }],
        },
        CategoryRule {
            category: SchemeCategory::Business,
            criteria: vec![Criterion::OccupationIn {
                accepted: &["self-employed", "business"],
            }],
        },
        CategoryRule {
            category: SchemeCategory::Employment,
            criteria: vec![Criterion::AgeBetween { min: 15, max: 45 }],
        },
        CategoryRule {
            category: SchemeCategory::SocialSecurity,
            criteria: vec![
                Criterion::AgeBetween { min: 18, max: 40 },
                Criterion::IncomeBelow { limit: 1_000_000 },
            ],
        },
    ]
}
