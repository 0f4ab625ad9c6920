//! Career guidance content: skill assessment, courses, paths and openings.

mod content;

pub use content::{
    CareerPath, Compensation, Course, EmploymentType, JobOpening, ResumeTip, SkillCategory,
    SkillLevel,
};

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// The career guidance page served as one document.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CareerGuide {
    pub skills: &'static [SkillLevel],
    pub recommended_skills: &'static [&'static str],
    pub courses: &'static [Course],
    pub career_paths: &'static [CareerPath],
    pub jobs: &'static [JobOpening],
    pub resume_tips: &'static [ResumeTip],
}

impl CareerGuide {
    pub fn standard() -> Self {
        Self {
            skills: content::SKILLS,
            recommended_skills: content::RECOMMENDED_SKILLS,
            courses: content::COURSES,
            career_paths: content::CAREER_PATHS,
            jobs: content::JOB_OPENINGS,
            resume_tips: content::RESUME_TIPS,
        }
    }

    /// Skills at or below `threshold`, weakest first.
    pub fn skills_to_improve(&self, threshold: u8) -> Vec<&SkillLevel> {
        let mut weak: Vec<&SkillLevel> = self
            .skills
            .iter()
            .filter(|skill| skill.level <= threshold)
            .collect();
        weak.sort_by_key(|skill| skill.level);
        weak
    }

    pub fn internships(&self) -> impl Iterator<Item = &JobOpening> {
        self.jobs
            .iter()
            .filter(|job| job.employment == EmploymentType::Internship)
    }
}

pub fn career_router() -> Router {
    Router::new().route("/api/v1/career", get(guide_handler))
}

async fn guide_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(CareerGuide::standard()))
}
