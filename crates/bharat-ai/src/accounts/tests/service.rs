use std::sync::Arc;
use std::thread;

use chrono::Utc;

use super::common::*;
use crate::accounts::{
    AccountError, AccountService, LoginRequest, PersonalDetails, SessionToken, SignupError,
};
use crate::language::Language;
use crate::student::NewWellnessEntry;

#[test]
fn login_accepts_any_non_empty_credentials() {
    let (service, store) = build_service();

    let session = service
        .login(LoginRequest {
            email: "meera@example.in".to_string(),
            password: "x".to_string(),
        })
        .expect("login succeeds");

    assert_eq!(session.user.id, "1");
    assert_eq!(session.user.name, "User Name");
    assert_eq!(session.user.email, "meera@example.in");
    assert_eq!(session.language, Language::English);
    assert!(session.profile.is_none());
    assert_eq!(session.tracker.study_sessions().len(), 3);
    assert_eq!(store.len(), 1);
}

#[test]
fn login_requires_email_and_password() {
    let (service, store) = build_service();

    let error = service
        .login(LoginRequest {
            email: "meera@example.in".to_string(),
            password: String::new(),
        })
        .unwrap_err();

    assert!(matches!(error, AccountError::MissingCredentials));
    assert_eq!(error.to_string(), "Please fill in all fields");
    assert_eq!(store.len(), 0);
}

#[test]
fn signup_stores_profile_with_session() {
    let (service, _) = build_service();

    let session = service.signup(signup_request()).expect("signup succeeds");
    let stored = service.session(&session.token).expect("session stored");

    let profile = stored.profile().expect("profile saved");
    assert_eq!(stored.user().name, "Ravi Kumar");
    assert_eq!(profile.interests, vec!["finance", "cricket"]);
    assert_eq!(profile.address.state.as_deref(), Some("Delhi"));
    assert_eq!(profile.education.field_of_study.as_deref(), Some("Commerce"));
}

#[test]
fn signup_surfaces_step_validation() {
    let (service, store) = build_service();
    let mut request = signup_request();
    request.personal = PersonalDetails {
        password: "abc".to_string(),
        ..request.personal
    };

    let error = service.signup(request).unwrap_err();

    assert!(matches!(
        error,
        AccountError::Signup(SignupError::PasswordTooShort)
    ));
    assert_eq!(store.len(), 0);
}

#[test]
fn language_change_persists_in_session() {
    let (service, _) = build_service();
    let session = service.signup(signup_request()).expect("signup succeeds");

    let updated = service
        .set_language(&session.token, Language::Tamil)
        .expect("language updated");
    assert_eq!(updated.language(), Language::Tamil);

    let stored = service.session(&session.token).expect("session stored");
    assert_eq!(stored.language(), Language::Tamil);
}

#[test]
fn failed_updates_leave_session_untouched() {
    let (service, _) = build_service();
    let session = service.signup(signup_request()).expect("signup succeeds");

    let result = service.update_session(&session.token, |session| {
        session.language = Language::Hindi;
        session.tracker_mut().complete_study_session("404")?;
        Ok(())
    });

    assert!(matches!(result, Err(AccountError::Tracker(_))));
    let stored = service.session(&session.token).expect("session stored");
    assert_eq!(stored.language(), Language::English);
}

#[test]
fn logout_removes_session() {
    let (service, store) = build_service();
    let session = service.signup(signup_request()).expect("signup succeeds");

    service.logout(&session.token).expect("logout succeeds");

    assert_eq!(store.len(), 0);
    assert!(matches!(
        service.session(&session.token),
        Err(AccountError::Unauthorized)
    ));
    assert!(matches!(
        service.logout(&session.token),
        Err(AccountError::Unauthorized)
    ));
}

#[test]
fn unknown_tokens_are_unauthorized() {
    let (service, _) = build_service();
    let token = SessionToken("session-999999".to_string());

    assert!(matches!(
        service.set_language(&token, Language::Hindi),
        Err(AccountError::Unauthorized)
    ));
}

#[test]
fn store_outages_propagate() {
    let service = AccountService::new(Arc::new(UnavailableStore), Language::English);

    let error = service.signup(signup_request()).unwrap_err();

    assert!(matches!(error, AccountError::Store(_)));
    assert!(error.to_string().contains("store offline"));
}

#[test]
fn concurrent_tracker_writes_are_all_kept() {
    let (service, _) = build_service();
    let session = service.signup(signup_request()).expect("signup succeeds");

    let writers: Vec<_> = (0..16)
        .map(|_| {
            let service = Arc::clone(&service);
            let token = session.token.clone();
            thread::spawn(move || {
                service.update_session(&token, |session| {
                    session.tracker_mut().add_wellness_entry(
                        NewWellnessEntry {
                            mood: 4,
                            note: None,
                            date: None,
                        },
                        Utc::now(),
                    )?;
                    Ok(())
                })
            })
        })
        .collect();
    for writer in writers {
        writer
            .join()
            .expect("writer thread")
            .expect("entry recorded");
    }

    let stored = service.session(&session.token).expect("session stored");
    assert_eq!(stored.tracker().wellness_entries().len(), 7 + 16);
}

#[test]
fn neighbouring_tokens_do_not_open_other_sessions() {
    let (service, _) = build_service();
    let first = service
        .login(LoginRequest {
            email: "first@example.in".to_string(),
            password: "one".to_string(),
        })
        .expect("first login");
    let second = service
        .login(LoginRequest {
            email: "second@example.in".to_string(),
            password: "two".to_string(),
        })
        .expect("second login");

    let secret = u128::from_str_radix(second.token.as_str().trim_start_matches("session-"), 16)
        .expect("hex token");
    for guess in [secret.wrapping_sub(1), secret.wrapping_add(1)] {
        let guess = SessionToken(format!("session-{guess:032x}"));
        assert_ne!(guess, first.token);
        assert!(matches!(
            service.session(&guess),
            Err(AccountError::Unauthorized)
        ));
    }
}
