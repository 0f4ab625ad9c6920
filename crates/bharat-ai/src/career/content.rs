use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    SoftSkills,
    Technical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillLevel {
    pub skill: &'static str,
    /// Self-assessed proficiency, 0 to 100.
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub provider: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub price: &'static str,
    pub rating: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerPath {
    pub title: &'static str,
    pub growth: &'static str,
    pub salary: &'static str,
    pub skills: &'static [&'static str],
    pub demand: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmploymentType {
    Internship,
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
}

/// Internships advertise a stipend, other openings a salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Compensation {
    Stipend(&'static str),
    Salary(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobOpening {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    #[serde(rename = "type")]
    pub employment: EmploymentType,
    #[serde(flatten)]
    pub compensation: Compensation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResumeTip {
    pub title: &'static str,
    pub description: &'static str,
}

pub(crate) const SKILLS: &[SkillLevel] = &[
    SkillLevel {
        skill: "Communication",
        level: 75,
        category: SkillCategory::SoftSkills,
    },
    SkillLevel {
        skill: "Problem Solving",
        level: 65,
        category: SkillCategory::SoftSkills,
    },
    SkillLevel {
        skill: "Programming",
        level: 50,
        category: SkillCategory::Technical,
    },
    SkillLevel {
        skill: "Data Analysis",
        level: 40,
        category: SkillCategory::Technical,
    },
    SkillLevel {
        skill: "Leadership",
        level: 55,
        category: SkillCategory::SoftSkills,
    },
];

pub(crate) const RECOMMENDED_SKILLS: &[&str] = &[
    "Cloud Computing",
    "Machine Learning",
    "UI/UX Design",
    "Project Management",
];

pub(crate) const COURSES: &[Course] = &[
    Course {
        title: "Full Stack Web Development",
        provider: "Coursera",
        duration: "6 months",
        level: "Beginner",
        price: "Free (with certificate option)",
        rating: 4.8,
    },
    Course {
        title: "Data Science with Python",
        provider: "edX",
        duration: "4 months",
        level: "Intermediate",
        price: "Free (with certificate option)",
        rating: 4.7,
    },
    Course {
        title: "Digital Marketing",
        provider: "Google Digital Garage",
        duration: "3 months",
        level: "Beginner",
        price: "Free",
        rating: 4.6,
    },
];

pub(crate) const CAREER_PATHS: &[CareerPath] = &[
    CareerPath {
        title: "Software Developer",
        growth: "+22%",
        salary: "₹5-15 LPA",
        skills: &["Programming", "Problem Solving", "Teamwork"],
        demand: "High",
    },
    CareerPath {
        title: "Data Analyst",
        growth: "+28%",
        salary: "₹4-10 LPA",
        skills: &["Data Analysis", "Excel", "SQL"],
        demand: "Very High",
    },
    CareerPath {
        title: "Digital Marketing Specialist",
        growth: "+18%",
        salary: "₹3-8 LPA",
        skills: &["Marketing", "Social Media", "Analytics"],
        demand: "High",
    },
];

pub(crate) const JOB_OPENINGS: &[JobOpening] = &[
    JobOpening {
        title: "Frontend Developer Intern",
        company: "Tech Startup India",
        location: "Remote",
        employment: EmploymentType::Internship,
        compensation: Compensation::Stipend("₹10,000/month"),
    },
    JobOpening {
        title: "Data Entry Operator",
        company: "Government Portal",
        location: "Delhi",
        employment: EmploymentType::FullTime,
        compensation: Compensation::Salary("₹3-4 LPA"),
    },
    JobOpening {
        title: "Content Writer",
        company: "Digital Agency",
        location: "Bangalore",
        employment: EmploymentType::PartTime,
        compensation: Compensation::Salary("₹15,000/month"),
    },
];

pub(crate) const RESUME_TIPS: &[ResumeTip] = &[
    ResumeTip {
        title: "Keep it concise",
        description: "1-2 pages maximum, highlight key achievements",
    },
    ResumeTip {
        title: "Use action verbs",
        description: "Start bullet points with strong action words",
    },
    ResumeTip {
        title: "Quantify achievements",
        description: "Use numbers and metrics to show impact",
    },
    ResumeTip {
        title: "Proofread carefully",
        description: "No spelling or grammar errors",
    },
];
