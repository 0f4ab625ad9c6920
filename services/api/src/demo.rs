use crate::infra::{parse_category, parse_language, InMemorySessionStore};
use bharat_ai::accounts::{
    AccountService, EducationDetails, LoginRequest, PersonalDetails, Preferences, SignupError,
    SignupOutcome, SignupWizard,
};
use bharat_ai::assistant::ChatAssistant;
use bharat_ai::career::{CareerGuide, Compensation};
use bharat_ai::error::AppError;
use bharat_ai::language::{translate, Language};
use bharat_ai::schemes::{
    CategoryFilter, EligibilityEngine, EligibilityForm, EligibilityReport, SchemeCatalog,
    SchemeDirectory, SchemeFilter,
};
use bharat_ai::student::{NewWellnessEntry, StudyResources};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Category code (education, health, agriculture, ...) or "all"
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<CategoryFilter>,
    /// Case-insensitive text matched against scheme names and descriptions
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Load the catalog from a JSON file instead of the embedded one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Applicant occupation, e.g. student, farmer, self-employed
    #[arg(long, default_value = "")]
    pub(crate) occupation: String,
    /// Annual household income in rupees
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) income: String,
    /// Applicant age in years
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) age: String,
    /// State of residence (informational)
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// Social category (informational)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Print the criteria notes behind every verdict
    #[arg(long)]
    pub(crate) explain: bool,
    /// Load the catalog from a JSON file instead of the embedded one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    /// Message for the assistant
    #[arg(long)]
    pub(crate) message: String,
    /// Reply language code (en, hi, ta, te, bn, mr, gu, kn)
    #[arg(long, default_value = "en", value_parser = parse_language)]
    pub(crate) language: Language,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Language used for UI labels and assistant replies
    #[arg(long, default_value = "hi", value_parser = parse_language)]
    pub(crate) language: Language,
    /// Skip the signup and student tracker portion of the demo
    #[arg(long)]
    pub(crate) skip_student: bool,
}

const DEMO_PASSWORD: &str = "padhai2025";

fn load_directory(catalog: Option<PathBuf>) -> Result<SchemeDirectory, AppError> {
    let catalog = match catalog {
        Some(path) => SchemeCatalog::from_path(path)?,
        None => SchemeCatalog::standard()?,
    };
    Ok(SchemeDirectory::new(catalog, EligibilityEngine::default()))
}

pub(crate) fn run_scheme_list(args: ListArgs) -> Result<(), AppError> {
    let ListArgs {
        category,
        query,
        catalog,
    } = args;

    let directory = load_directory(catalog)?;
    let filter = SchemeFilter {
        category: category.unwrap_or_default(),
        query: query.unwrap_or_default(),
    };
    let schemes = directory.catalog().browse(&filter);

    println!("{} matching schemes", schemes.len());
    for scheme in schemes {
        println!(
            "- [{}] {} ({})",
            scheme.id,
            scheme.name,
            scheme.category.label()
        );
        println!("    {}", scheme.description);
        println!("    Benefits: {}", scheme.benefits);
    }
    Ok(())
}

pub(crate) fn run_scheme_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        occupation,
        income,
        age,
        state,
        category,
        explain,
        catalog,
    } = args;

    let directory = load_directory(catalog)?;
    let report = directory.check(EligibilityForm {
        occupation,
        income,
        age,
        state,
        category,
    })?;
    render_report(&report, explain);
    Ok(())
}

pub(crate) fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let reply = ChatAssistant::default().respond(&args.message, args.language)?;
    println!("{}", reply.text);
    if let Some(topic) = reply.topic {
        println!("  (topic: {topic})");
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        language,
        skip_student,
    } = args;

    println!(
        "{} | {} ({})",
        translate("welcome", language),
        language.native_name(),
        language.english_name()
    );

    let directory = SchemeDirectory::standard()?;
    let overview = directory.catalog().overview();
    println!("\n{}", translate("govSchemes", language));
    println!(
        "- {} active schemes | {} marked eligible | {} saved",
        overview.active_schemes, overview.eligible_schemes, overview.saved_schemes
    );

    println!("\nEligibility check: student, income 300000, age 20");
    let report = directory.check(EligibilityForm {
        occupation: "student".to_string(),
        income: "300000".to_string(),
        age: "20".to_string(),
        ..EligibilityForm::default()
    })?;
    render_report(&report, false);

    println!("\n{}", translate("aiAssistant", language));
    let assistant = ChatAssistant::default();
    println!("  > {}", assistant.greeting(language).text);
    for message in ["I need a scholarship", "मुझे नौकरी चाहिए"] {
        let reply = assistant.respond(message, language)?;
        println!("  {message}");
        println!("  > {}", reply.text);
    }

    let guide = CareerGuide::standard();
    println!("\n{}", translate("careerGuidance", language));
    for skill in guide.skills_to_improve(55) {
        println!("- Improve {} (currently {}%)", skill.skill, skill.level);
    }
    for job in guide.jobs {
        let pay = match job.compensation {
            Compensation::Stipend(amount) => format!("stipend {amount}"),
            Compensation::Salary(amount) => format!("salary {amount}"),
        };
        println!("- {} at {}, {} ({pay})", job.title, job.company, job.location);
    }

    if skip_student {
        return Ok(());
    }

    println!("\n{}", translate("signup", language));
    let outcome = match demo_signup() {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Signup rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Created {} <{}> with interests {}",
        outcome.user.name,
        outcome.user.email,
        outcome.profile.interests.join(", ")
    );

    let accounts = AccountService::new(Arc::new(InMemorySessionStore::default()), language);
    let session = match accounts.login(LoginRequest {
        email: outcome.user.email.clone(),
        password: DEMO_PASSWORD.to_string(),
    }) {
        Ok(session) => session,
        Err(err) => {
            println!("  Login failed: {}", err);
            return Ok(());
        }
    };

    let now = Utc::now();
    let summary = match accounts.update_session(&session.token, |session| {
        session.tracker_mut().add_wellness_entry(
            NewWellnessEntry {
                mood: 5,
                note: Some("finished the demo".to_string()),
                date: None,
            },
            now,
        )?;
        Ok(session.tracker().weekly_summary(now))
    }) {
        Ok(summary) => summary,
        Err(err) => {
            println!("  Tracker unavailable: {}", err);
            return Ok(());
        }
    };

    println!("\n{}", translate("studentSupport", language));
    println!(
        "- {:.1} study hours this week | {}% of planned sessions done | mood {:.1}/5",
        summary.study_hours, summary.progress_pct, summary.average_mood
    );
    let resources = StudyResources::standard();
    for slot in resources.todays_plan {
        let marker = if slot.completed { "x" } else { " " };
        println!("  [{marker}] {} {}: {}", slot.time, slot.subject, slot.topic);
    }
    for tip in resources.wellness_tips {
        println!("  * {}: {}", tip.title, tip.description);
    }

    Ok(())
}

fn demo_signup() -> Result<SignupOutcome, SignupError> {
    let mut wizard = SignupWizard::new();
    println!("  Step {} of 3: {}", wizard.step().number(), wizard.step().title());

    let step = wizard.submit_personal(PersonalDetails {
        name: "Anjali Sharma".to_string(),
        email: "anjali@example.in".to_string(),
        password: DEMO_PASSWORD.to_string(),
        ..PersonalDetails::default()
    })?;
    println!("  Step {} of 3: {}", step.number(), step.title());

    let step = wizard.submit_education(EducationDetails {
        current_level: "12th".to_string(),
        institution: "Government Senior Secondary School".to_string(),
        ..EducationDetails::default()
    })?;
    println!("  Step {} of 3: {}", step.number(), step.title());

    wizard.complete(Preferences {
        state: Some("Rajasthan".to_string()),
        interests: "science, debate".to_string(),
        goals: "NEET".to_string(),
        ..Preferences::default()
    })
}

fn render_report(report: &EligibilityReport, explain: bool) {
    println!(
        "- {} eligible | {} not eligible",
        report.eligible_count, report.ineligible_count
    );
    println!("Eligible:");
    for scheme in report.eligible() {
        println!("  + [{}] {} ({})", scheme.id, scheme.name, scheme.ministry);
    }
    println!("Not eligible:");
    for scheme in report.ineligible() {
        println!("  - [{}] {}", scheme.id, scheme.name);
    }

    if explain {
        println!("Criteria:");
        for assessment in &report.assessments {
            println!(
                "  [{}] {}: {}",
                assessment.scheme_id,
                assessment.category.code(),
                assessment.notes.join("; ")
            );
        }
    }
}
