mod rules;

pub use rules::{CategoryRule, Criterion, RuleTable};

use super::domain::{Applicant, Scheme, SchemeCategory, SchemeId};
use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies the category rule table to an applicant.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    rules: RuleTable,
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(RuleTable::standard())
    }
}

impl EligibilityEngine {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Assess a single scheme. Every criterion is checked so the notes show the full picture.
    pub fn assess(&self, scheme: &Scheme, applicant: &Applicant) -> SchemeAssessment {
        let Some(rule) = self.rules.rule_for(scheme.category) else {
            return SchemeAssessment {
                scheme_id: scheme.id,
                category: scheme.category,
                eligible: false,
                notes: vec![format!(
                    "no eligibility rule defined for {}",
                    scheme.category.code()
                )],
            };
        };

        let mut eligible = true;
        let mut notes = Vec::with_capacity(rule.criteria.len());
        for criterion in &rule.criteria {
            let check = criterion.check(applicant);
            eligible &= check.passed;
            notes.push(check.note);
        }

        SchemeAssessment {
            scheme_id: scheme.id,
            category: scheme.category,
            eligible,
            notes,
        }
    }

    /// Partition the catalog into eligible and ineligible schemes, preserving catalog order.
    pub fn evaluate(&self, schemes: &[Scheme], applicant: &Applicant) -> EligibilityPartition {
        let mut partition = EligibilityPartition::default();
        for scheme in schemes {
            if self.assess(scheme, applicant).eligible {
                partition.eligible.push(scheme.clone());
            } else {
                partition.ineligible.push(scheme.clone());
            }
        }
        partition
    }
}

/// Per-scheme verdict with the criteria notes behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeAssessment {
    pub scheme_id: SchemeId,
    pub category: SchemeCategory,
    pub eligible: bool,
    pub notes: Vec<String>,
}

/// Every catalog scheme lands in exactly one of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityPartition {
    pub eligible: Vec<Scheme>,
    pub ineligible: Vec<Scheme>,
}

impl EligibilityPartition {
    pub fn eligible_ids(&self) -> Vec<SchemeId> {
        self.eligible.iter().map(|scheme| scheme.id).collect()
    }

    pub fn ineligible_ids(&self) -> Vec<SchemeId> {
        self.ineligible.iter().map(|scheme| scheme.id).collect()
    }

    pub fn total(&self) -> usize {
        self.eligible.len() + self.ineligible.len()
    }
}
