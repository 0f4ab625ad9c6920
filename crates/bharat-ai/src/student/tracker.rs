use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Days covered by the weekly statistics.
const WEEK_DAYS: i64 = 7;
/// Number of most recent wellness entries averaged into the mood score.
const MOOD_WINDOW: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: String,
    pub subject: String,
    pub topic: String,
    pub duration_minutes: u32,
    pub date: DateTime<Utc>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    pub subject: String,
    pub score: u32,
    pub total_marks: u32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessEntry {
    pub id: String,
    /// Self-reported mood from 1 (low) to 5 (great).
    pub mood: u8,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewStudySession {
    pub subject: String,
    pub topic: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTestResult {
    pub subject: String,
    pub score: u32,
    pub total_marks: u32,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWellnessEntry {
    pub mood: u8,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Weekly figures for the progress dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub study_hours: f64,
    pub progress_pct: u32,
    pub average_mood: f64,
}

/// Per-student study, test and wellness log. Lists are append-only, so ids are
/// assigned from list positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentTracker {
    study_sessions: Vec<StudySession>,
    test_results: Vec<TestResult>,
    wellness_entries: Vec<WellnessEntry>,
}

impl StudentTracker {
    /// Tracker seeded with the sample history shown to new accounts.
    pub fn with_demo_data(now: DateTime<Utc>) -> Self {
        let days_ago = |days: i64| now - Duration::days(days);
        let study_sessions = vec![
            StudySession {
                id: "1".to_string(),
                subject: "Mathematics".to_string(),
                topic: "Algebra".to_string(),
                duration_minutes: 60,
                date: days_ago(2),
                completed: true,
            },
            StudySession {
                id: "2".to_string(),
                subject: "Science".to_string(),
                topic: "Physics".to_string(),
                duration_minutes: 45,
                date: days_ago(1),
                completed: true,
            },
            StudySession {
                id: "3".to_string(),
                subject: "English".to_string(),
                topic: "Grammar".to_string(),
                duration_minutes: 30,
                date: now,
                completed: false,
            },
        ];
        let test_results = vec![
            TestResult {
                id: "1".to_string(),
                subject: "Mathematics".to_string(),
                score: 85,
                total_marks: 100,
                date: days_ago(3),
            },
            TestResult {
                id: "2".to_string(),
                subject: "Science".to_string(),
                score: 78,
                total_marks: 100,
                date: days_ago(1),
            },
        ];
        let wellness_entries = [4, 3, 5, 4, 3, 4, 5]
            .into_iter()
            .enumerate()
            .map(|(index, mood)| WellnessEntry {
                id: (index + 1).to_string(),
                mood,
                date: days_ago(6 - index as i64),
                note: None,
            })
            .collect();

        Self {
            study_sessions,
            test_results,
            wellness_entries,
        }
    }

    pub fn study_sessions(&self) -> &[StudySession] {
        &self.study_sessions
    }

    pub fn test_results(&self) -> &[TestResult] {
        &self.test_results
    }

    pub fn wellness_entries(&self) -> &[WellnessEntry] {
        &self.wellness_entries
    }

    pub fn add_study_session(
        &mut self,
        session: NewStudySession,
        now: DateTime<Utc>,
    ) -> Result<&StudySession, TrackerError> {
        if session.subject.trim().is_empty() {
            return Err(TrackerError::MissingSubject);
        }
        let id = (self.study_sessions.len() + 1).to_string();
        self.study_sessions.push(StudySession {
            id,
            subject: session.subject,
            topic: session.topic,
            duration_minutes: session.duration_minutes,
            date: session.date.unwrap_or(now),
            completed: session.completed,
        });
        Ok(&self.study_sessions[self.study_sessions.len() - 1])
    }

    pub fn complete_study_session(&mut self, id: &str) -> Result<&StudySession, TrackerError> {
        let session = self
            .study_sessions
            .iter_mut()
            .find(|session| session.id == id)
            .ok_or_else(|| TrackerError::SessionNotFound(id.to_string()))?;
        session.completed = true;
        Ok(session)
    }

    pub fn add_test_result(
        &mut self,
        result: NewTestResult,
        now: DateTime<Utc>,
    ) -> Result<&TestResult, TrackerError> {
        if result.subject.trim().is_empty() {
            return Err(TrackerError::MissingSubject);
        }
        if result.total_marks == 0 || result.score > result.total_marks {
            return Err(TrackerError::InvalidScore {
                score: result.score,
                total_marks: result.total_marks,
            });
        }
        let id = (self.test_results.len() + 1).to_string();
        self.test_results.push(TestResult {
            id,
            subject: result.subject,
            score: result.score,
            total_marks: result.total_marks,
            date: result.date.unwrap_or(now),
        });
        Ok(&self.test_results[self.test_results.len() - 1])
    }

    pub fn add_wellness_entry(
        &mut self,
        entry: NewWellnessEntry,
        now: DateTime<Utc>,
    ) -> Result<&WellnessEntry, TrackerError> {
        if !(1..=5).contains(&entry.mood) {
            return Err(TrackerError::MoodOutOfRange(entry.mood));
        }
        let id = (self.wellness_entries.len() + 1).to_string();
        self.wellness_entries.push(WellnessEntry {
            id,
            mood: entry.mood,
            date: entry.date.unwrap_or(now),
            note: entry.note.filter(|note| !note.trim().is_empty()),
        });
        Ok(&self.wellness_entries[self.wellness_entries.len() - 1])
    }

    /// Hours of completed study in the last seven days, to one decimal.
    pub fn weekly_study_hours(&self, now: DateTime<Utc>) -> f64 {
        let since = now - Duration::days(WEEK_DAYS);
        let minutes: u64 = self
            .study_sessions
            .iter()
            .filter(|session| session.completed && session.date >= since)
            .map(|session| u64::from(session.duration_minutes))
            .sum();
        round_tenths(minutes as f64 / 60.0)
    }

    /// Share of the last seven days' sessions that are completed, as a whole percentage.
    pub fn weekly_progress(&self, now: DateTime<Utc>) -> u32 {
        let since = now - Duration::days(WEEK_DAYS);
        let (completed, total) = self
            .study_sessions
            .iter()
            .filter(|session| session.date >= since)
            .fold((0u32, 0u32), |(completed, total), session| {
                (completed + u32::from(session.completed), total + 1)
            });
        if total == 0 {
            return 0;
        }
        (f64::from(completed) / f64::from(total) * 100.0).round() as u32
    }

    /// Mean of the most recent wellness entries, to one decimal; 0 when none exist.
    pub fn average_mood(&self) -> f64 {
        let start = self.wellness_entries.len().saturating_sub(MOOD_WINDOW);
        let recent = &self.wellness_entries[start..];
        if recent.is_empty() {
            return 0.0;
        }
        let sum: u32 = recent.iter().map(|entry| u32::from(entry.mood)).sum();
        round_tenths(f64::from(sum) / recent.len() as f64)
    }

    pub fn weekly_summary(&self, now: DateTime<Utc>) -> WeeklySummary {
        WeeklySummary {
            study_hours: self.weekly_study_hours(now),
            progress_pct: self.weekly_progress(now),
            average_mood: self.average_mood(),
        }
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("study session {0} not found")]
    SessionNotFound(String),
    #[error("subject is required")]
    MissingSubject,
    #[error("score {score} is not valid for a test out of {total_marks}")]
    InvalidScore { score: u32, total_marks: u32 },
    #[error("mood must be between 1 and 5, got {0}")]
    MoodOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 14, 9, 30, 0).single().expect("valid timestamp")
    }

    #[test]
    fn demo_data_produces_dashboard_figures() {
        let tracker = StudentTracker::with_demo_data(now());

        // 60 + 45 completed minutes.
        assert_eq!(tracker.weekly_study_hours(now()), 1.8);
        // Two of three sessions this week completed.
        assert_eq!(tracker.weekly_progress(now()), 67);
        // (4 + 3 + 5 + 4 + 3 + 4 + 5) / 7 = 4.0
        assert_eq!(tracker.average_mood(), 4.0);
    }

    #[test]
    fn sessions_older_than_a_week_are_ignored() {
        let mut tracker = StudentTracker::default();
        tracker
            .add_study_session(
                NewStudySession {
                    subject: "History".to_string(),
                    topic: "Mughal era".to_string(),
                    duration_minutes: 120,
                    date: Some(now() - Duration::days(8)),
                    completed: true,
                },
                now(),
            )
            .expect("session added");

        assert_eq!(tracker.weekly_study_hours(now()), 0.0);
        assert_eq!(tracker.weekly_progress(now()), 0);
    }

    #[test]
    fn completing_a_session_updates_progress() {
        let mut tracker = StudentTracker::with_demo_data(now());
        let session = tracker.complete_study_session("3").expect("session exists");
        assert!(session.completed);
        assert_eq!(tracker.weekly_progress(now()), 100);
        assert_eq!(tracker.weekly_study_hours(now()), 2.3);

        assert_eq!(
            tracker.complete_study_session("99").unwrap_err(),
            TrackerError::SessionNotFound("99".to_string())
        );
    }

    #[test]
    fn mood_average_uses_last_seven_entries() {
        let mut tracker = StudentTracker::with_demo_data(now());
        tracker
            .add_wellness_entry(
                NewWellnessEntry {
                    mood: 1,
                    note: Some("exam week".to_string()),
                    date: None,
                },
                now(),
            )
            .expect("entry added");

        // Drops the first entry (4) and adds 1: (3 + 5 + 4 + 3 + 4 + 5 + 1) / 7 = 3.571...
        assert_eq!(tracker.average_mood(), 3.6);
        assert_eq!(tracker.wellness_entries().len(), 8);
        assert_eq!(tracker.wellness_entries()[7].id, "8");
    }

    #[test]
    fn rejects_out_of_range_mood_and_scores() {
        let mut tracker = StudentTracker::default();
        assert_eq!(tracker.average_mood(), 0.0);
        assert_eq!(
            tracker
                .add_wellness_entry(
                    NewWellnessEntry {
                        mood: 6,
                        note: None,
                        date: None,
                    },
                    now(),
                )
                .unwrap_err(),
            TrackerError::MoodOutOfRange(6)
        );
        assert!(matches!(
            tracker.add_test_result(
                NewTestResult {
                    subject: "Science".to_string(),
                    score: 110,
                    total_marks: 100,
                    date: None,
                },
                now(),
            ),
            Err(TrackerError::InvalidScore { .. })
        ));
    }
}
