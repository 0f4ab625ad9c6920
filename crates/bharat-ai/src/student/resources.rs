use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectProgress {
    pub name: &'static str,
    pub progress_pct: u8,
    pub next_topic: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedSlot {
    pub time: &'static str,
    pub subject: &'static str,
    pub topic: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubtStatus {
    Answered,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Doubt {
    pub id: u32,
    pub question: &'static str,
    pub subject: &'static str,
    pub status: DoubtStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WellnessTip {
    pub title: &'static str,
    pub description: &'static str,
}

/// Static content behind the student-support pages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StudyResources {
    pub subjects: &'static [SubjectProgress],
    pub todays_plan: &'static [PlannedSlot],
    pub doubts: &'static [Doubt],
    pub wellness_tips: &'static [WellnessTip],
}

impl StudyResources {
    pub fn standard() -> Self {
        Self {
            subjects: SUBJECTS,
            todays_plan: TODAYS_PLAN,
            doubts: DOUBTS,
            wellness_tips: WELLNESS_TIPS,
        }
    }

    pub fn pending_doubts(&self) -> impl Iterator<Item = &Doubt> {
        self.doubts
            .iter()
            .filter(|doubt| doubt.status == DoubtStatus::Pending)
    }
}

const SUBJECTS: &[SubjectProgress] = &[
    SubjectProgress {
        name: "Mathematics",
        progress_pct: 75,
        next_topic: "Algebra",
    },
    SubjectProgress {
        name: "Science",
        progress_pct: 60,
        next_topic: "Physics",
    },
    SubjectProgress {
        name: "English",
        progress_pct: 85,
        next_topic: "Grammar",
    },
    SubjectProgress {
        name: "Social Studies",
        progress_pct: 70,
        next_topic: "Geography",
    },
];

const TODAYS_PLAN: &[PlannedSlot] = &[
    PlannedSlot {
        time: "6:00 AM - 7:00 AM",
        subject: "Mathematics",
        topic: "Practice Problems",
        completed: true,
    },
    PlannedSlot {
        time: "4:00 PM - 5:00 PM",
        subject: "Science",
        topic: "Chapter Review",
        completed: false,
    },
    PlannedSlot {
        time: "7:00 PM - 8:00 PM",
        subject: "English",
        topic: "Essay Writing",
        completed: false,
    },
];

const DOUBTS: &[Doubt] = &[
    Doubt {
        id: 1,
        question: "How to solve quadratic equations?",
        subject: "Mathematics",
        status: DoubtStatus::Answered,
    },
    Doubt {
        id: 2,
        question: "Explain photosynthesis process",
        subject: "Science",
        status: DoubtStatus::Pending,
    },
    Doubt {
        id: 3,
        question: "What is past perfect tense?",
        subject: "English",
        status: DoubtStatus::Answered,
    },
];

const WELLNESS_TIPS: &[WellnessTip] = &[
    WellnessTip {
        title: "Take Regular Breaks",
        description: "Study for 45 minutes, then take a 10-minute break",
    },
    WellnessTip {
        title: "Stay Hydrated",
        description: "Drink water regularly to keep your mind fresh",
    },
    WellnessTip {
        title: "Get Enough Sleep",
        description: "Aim for 7-8 hours of sleep every night",
    },
    WellnessTip {
        title: "Exercise Daily",
        description: "Physical activity helps reduce stress and anxiety",
    },
];
