use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::catalog::{CatalogError, SchemeCatalog};
use super::domain::{Applicant, Scheme};
use super::eligibility::{EligibilityEngine, EligibilityPartition, SchemeAssessment};
use super::intake::{EligibilityForm, IntakeError};

/// Service composing the scheme catalog with the eligibility engine.
pub struct SchemeDirectory {
    catalog: Arc<SchemeCatalog>,
    engine: Arc<EligibilityEngine>,
}

impl SchemeDirectory {
    pub fn new(catalog: SchemeCatalog, engine: EligibilityEngine) -> Self {
        Self {
            catalog: Arc::new(catalog),
            engine: Arc::new(engine),
        }
    }

    /// Embedded catalog with the standard rule table.
    pub fn standard() -> Result<Self, CatalogError> {
        Ok(Self::new(
            SchemeCatalog::standard()?,
            EligibilityEngine::default(),
        ))
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    /// Validate a checker form and evaluate it against the full catalog.
    pub fn check(&self, form: EligibilityForm) -> Result<EligibilityReport, IntakeError> {
        let applicant = form.into_applicant().inspect_err(|err| {
            debug!(field = err.field(), "eligibility form rejected");
        })?;
        Ok(self.evaluate(&applicant))
    }

    pub fn evaluate(&self, applicant: &Applicant) -> EligibilityReport {
        let schemes = self.catalog.schemes();
        let partition = self.engine.evaluate(schemes, applicant);
        let assessments = schemes
            .iter()
            .map(|scheme| self.engine.assess(scheme, applicant))
            .collect();

        info!(
            occupation = %applicant.occupation,
            eligible = partition.eligible.len(),
            ineligible = partition.ineligible.len(),
            "eligibility evaluated"
        );

        EligibilityReport {
            eligible_count: partition.eligible.len(),
            ineligible_count: partition.ineligible.len(),
            partition,
            assessments,
        }
    }
}

/// Evaluation response handed straight to the result view.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityReport {
    pub eligible_count: usize,
    pub ineligible_count: usize,
    #[serde(flatten)]
    pub partition: EligibilityPartition,
    pub assessments: Vec<SchemeAssessment>,
}

impl EligibilityReport {
    pub fn eligible(&self) -> &[Scheme] {
        &self.partition.eligible
    }

    pub fn ineligible(&self) -> &[Scheme] {
        &self.partition.ineligible
    }
}
