use super::common::*;
use crate::schemes::domain::{Applicant, SchemeCategory, SchemeId};
use std::collections::HashSet;

#[test]
fn partition_covers_catalog_without_overlap() {
    let catalog = standard_catalog();
    let engine = engine();

    for (occupation, income, age) in [
        ("student", 300_000, 20),
        ("farmer", 0, 60),
        ("business", 2_000_000, 35),
        ("other", 999_999, 14),
    ] {
        let partition = engine.evaluate(catalog.schemes(), &applicant(occupation, income, age));
        assert_eq!(partition.total(), catalog.len());

        let eligible: HashSet<SchemeId> = partition.eligible_ids().into_iter().collect();
        let ineligible: HashSet<SchemeId> = partition.ineligible_ids().into_iter().collect();
        assert!(eligible.is_disjoint(&ineligible));
        let all: HashSet<SchemeId> = catalog.schemes().iter().map(|scheme| scheme.id).collect();
        assert_eq!(&eligible | &ineligible, all);
    }
}

#[test]
fn partition_preserves_catalog_order() {
    let catalog = standard_catalog();
    let partition = engine().evaluate(catalog.schemes(), &applicant("farmer", 100_000, 30));

    let eligible = ids(&partition.eligible);
    let ineligible = ids(&partition.ineligible);
    let mut sorted_eligible = eligible.clone();
    sorted_eligible.sort_unstable();
    let mut sorted_ineligible = ineligible.clone();
    sorted_ineligible.sort_unstable();
    assert_eq!(eligible, sorted_eligible);
    assert_eq!(ineligible, sorted_ineligible);
}

#[test]
fn evaluation_is_deterministic() {
    let catalog = standard_catalog();
    let engine = engine();
    let profile = applicant("unemployed", 450_000, 38);

    let first = engine.evaluate(catalog.schemes(), &profile);
    let second = engine.evaluate(catalog.schemes(), &profile);
    assert_eq!(first, second);
}

#[test]
fn health_income_limit_is_exclusive() {
    assert!(is_eligible(SchemeCategory::Health, &applicant("other", 400_000, 70)));
    assert!(is_eligible(SchemeCategory::Health, &applicant("salaried", 499_999, 5)));
    assert!(!is_eligible(SchemeCategory::Health, &applicant("student", 500_000, 20)));
}

#[test]
fn agriculture_requires_exact_farmer_occupation() {
    assert!(is_eligible(SchemeCategory::Agriculture, &applicant("farmer", 9_000_000, 80)));
    assert!(!is_eligible(SchemeCategory::Agriculture, &applicant("farmer ", 0, 30)));
    assert!(!is_eligible(SchemeCategory::Agriculture, &applicant("Farmer", 0, 30)));
    assert!(!is_eligible(SchemeCategory::Agriculture, &applicant("student", 0, 30)));
}

#[test]
fn employment_age_bounds_are_inclusive() {
    assert!(!is_eligible(SchemeCategory::Employment, &applicant("other", 0, 14)));
    assert!(is_eligible(SchemeCategory::Employment, &applicant("other", 0, 15)));
    assert!(is_eligible(SchemeCategory::Employment, &applicant("other", 0, 45)));
    assert!(!is_eligible(SchemeCategory::Employment, &applicant("other", 0, 46)));
}

#[test]
fn social_security_checks_age_and_income() {
    assert!(is_eligible(SchemeCategory::SocialSecurity, &applicant("other", 999_999, 25)));
    assert!(!is_eligible(SchemeCategory::SocialSecurity, &applicant("other", 1_000_000, 25)));
    assert!(!is_eligible(SchemeCategory::SocialSecurity, &applicant("other", 0, 41)));
    assert!(!is_eligible(SchemeCategory::SocialSecurity, &applicant("other", 0, 17)));
    assert!(is_eligible(SchemeCategory::SocialSecurity, &applicant("other", 0, 18)));
    assert!(is_eligible(SchemeCategory::SocialSecurity, &applicant("other", 0, 40)));
}

#[test]
fn education_needs_student_or_unemployed_below_income_limit() {
    assert!(is_eligible(SchemeCategory::Education, &applicant("student", 599_999, 19)));
    assert!(is_eligible(SchemeCategory::Education, &applicant("unemployed", 0, 50)));
    assert!(!is_eligible(SchemeCategory::Education, &applicant("student", 600_000, 19)));
    assert!(!is_eligible(SchemeCategory::Education, &applicant("salaried", 100_000, 19)));
}

#[test]
fn business_accepts_self_employed_and_business_owners() {
    assert!(is_eligible(SchemeCategory::Business, &applicant("self-employed", 5_000_000, 60)));
    assert!(is_eligible(SchemeCategory::Business, &applicant("business", 0, 18)));
    assert!(!is_eligible(SchemeCategory::Business, &applicant("self employed", 0, 18)));
}

#[test]
fn housing_is_never_eligible() {
    let engine = engine();
    let housing = scheme(5, SchemeCategory::Housing);
    for profile in [
        applicant("student", 0, 20),
        applicant("farmer", 100_000, 40),
        applicant("business", 1_000, 30),
        applicant("unemployed", 0, 18),
    ] {
        let assessment = engine.assess(&housing, &profile);
        assert!(!assessment.eligible);
        assert!(assessment.notes[0].contains("no eligibility rule"));
    }
}

#[test]
fn unreadable_numbers_fail_every_numeric_criterion() {
    let profile = Applicant {
        occupation: "farmer".to_string(),
        annual_income: None,
        age: None,
        state: None,
        social_category: None,
    };

    let partition = engine().evaluate(&one_of_each(), &profile);
    let eligible: Vec<SchemeCategory> = partition
        .eligible
        .iter()
        .map(|scheme| scheme.category)
        .collect();
    assert_eq!(eligible, vec![SchemeCategory::Agriculture]);
}

#[test]
fn student_scenario_matches_several_schemes_at_once() {
    let catalog = standard_catalog();
    let partition = engine().evaluate(catalog.schemes(), &applicant("student", 300_000, 20));

    // Health, both education schemes, skill training and the pension scheme.
    assert_eq!(ids(&partition.eligible), vec![2, 3, 6, 7, 10]);
    assert_eq!(ids(&partition.ineligible), vec![1, 4, 5, 8, 9]);
}

#[test]
fn assessment_notes_explain_each_criterion() {
    let assessment = engine().assess(
        &scheme(1, SchemeCategory::Education),
        &applicant("salaried", 700_000, 30),
    );

    assert!(!assessment.eligible);
    assert_eq!(assessment.notes.len(), 2);
    assert!(assessment.notes[0].contains("not in student, unemployed"));
    assert!(assessment.notes[1].contains("not below limit 600000"));
}

#[test]
fn static_display_flag_does_not_influence_evaluation() {
    let mut flagged = scheme(1, SchemeCategory::Housing);
    flagged.eligible = true;
    let partition = engine().evaluate(&[flagged], &applicant("student", 0, 20));
    assert!(partition.eligible.is_empty());
}
