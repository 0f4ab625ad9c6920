//! Student support: study, test and wellness tracking plus static study resources.

pub mod resources;
pub mod router;
pub mod tracker;

pub use resources::{Doubt, DoubtStatus, PlannedSlot, StudyResources, SubjectProgress, WellnessTip};
pub use router::student_router;
pub use tracker::{
    NewStudySession, NewTestResult, NewWellnessEntry, StudentTracker, StudySession, TestResult,
    TrackerError, WeeklySummary, WellnessEntry,
};
