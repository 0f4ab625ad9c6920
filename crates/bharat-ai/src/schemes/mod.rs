//! Government scheme catalog and the eligibility checker.
//!
//! The catalog is static, read-only data. Eligibility is a pure partition of
//! that catalog computed fresh for every request; results are returned to the
//! caller rather than kept anywhere.

pub mod catalog;
pub mod domain;
pub mod eligibility;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    category_options, CatalogError, CatalogOverview, CategoryFilter, CategoryOption,
    SchemeCatalog, SchemeFilter,
};
pub use domain::{
    Applicant, Scheme, SchemeCategory, SchemeId, OCCUPATION_OPTIONS, SOCIAL_CATEGORY_OPTIONS,
};
pub use eligibility::{
    CategoryRule, Criterion, EligibilityEngine, EligibilityPartition, RuleTable,
    SchemeAssessment,
};
pub use intake::{EligibilityForm, IntakeError};
pub use router::scheme_router;
pub use service::{EligibilityReport, SchemeDirectory};
