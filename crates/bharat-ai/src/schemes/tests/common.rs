use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::schemes::domain::{Applicant, Scheme, SchemeCategory, SchemeId};
use crate::schemes::eligibility::EligibilityEngine;
use crate::schemes::{SchemeCatalog, SchemeDirectory};

pub(super) fn standard_catalog() -> SchemeCatalog {
    SchemeCatalog::standard().expect("embedded catalog parses")
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::default()
}

pub(super) fn directory() -> Arc<SchemeDirectory> {
    Arc::new(SchemeDirectory::standard().expect("directory builds"))
}

pub(super) fn scheme(id: u32, category: SchemeCategory) -> Scheme {
    Scheme {
        id: SchemeId(id),
        name: format!("Test scheme {id}"),
        category,
        description: "Synthetic scheme".to_string(),
        full_description: "Synthetic scheme used by the evaluator tests".to_string(),
        eligibility: vec!["Indian citizen".to_string()],
        benefits: "None".to_string(),
        documents: vec!["Aadhaar Card".to_string()],
        how_to_apply: vec!["Apply online".to_string()],
        official_link: "https://example.gov.in/".to_string(),
        ministry: "Ministry of Testing".to_string(),
        eligible: false,
        is_active: true,
    }
}

pub(super) fn one_of_each() -> Vec<Scheme> {
    SchemeCategory::ALL
        .iter()
        .enumerate()
        .map(|(index, category)| scheme(index as u32 + 1, *category))
        .collect()
}

pub(super) fn applicant(occupation: &str, income: u64, age: u32) -> Applicant {
    Applicant::new(occupation, income, age)
}

pub(super) fn is_eligible(category: SchemeCategory, applicant: &Applicant) -> bool {
    engine().assess(&scheme(1, category), applicant).eligible
}

pub(super) fn ids(schemes: &[Scheme]) -> Vec<u32> {
    schemes.iter().map(|scheme| scheme.id.0).collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
