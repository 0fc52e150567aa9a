use std::rc::Rc;

use super::*;
use crate::codec::Record;
use crate::store::MemoryStore;

fn filled_wizard() -> ProfileWizard {
    let mut wizard = ProfileWizard::prefilled(&SignupDraft {
        name: "Asha Reddy".to_owned(),
        phone: "9800000001".to_owned(),
        email: "asha@example.in".to_owned(),
    });
    let draft = wizard.draft_mut();
    draft.location = Some(LocationPreference::new("Telangana", "Warangal"));
    draft.farm_size = "4.25".to_owned();
    draft.soil_type = SoilType::RedLaterite;
    wizard
}

#[test]
fn new_wizard_starts_on_personal_step_at_quarter_progress() {
    let wizard = ProfileWizard::new();
    assert_eq!(wizard.step(), WizardStep::Personal);
    assert_eq!(wizard.progress_percent(), 25);
    assert_eq!(wizard.step().title(), "Personal Information");
}

#[test]
fn prefilled_wizard_copies_signup_contact() {
    let wizard = ProfileWizard::prefilled(&SignupDraft {
        name: "Ravi".to_owned(),
        phone: "1".to_owned(),
        email: "r@x.in".to_owned(),
    });
    assert_eq!(wizard.draft().name, "Ravi");
    assert_eq!(wizard.draft().email, "r@x.in");
    assert_eq!(wizard.draft().soil_type, SoilType::Loamy);
    assert!(wizard.draft().notifications_enabled);
}

#[test]
fn advance_blocks_on_missing_personal_details() {
    let mut wizard = ProfileWizard::new();
    wizard.draft_mut().name = "Asha".to_owned();
    let err = wizard.advance().expect_err("phone and email missing");
    assert!(matches!(err, WizardError::MissingPersonalDetails));
    assert_eq!(wizard.step(), WizardStep::Personal);
}

#[test]
fn advance_blocks_on_missing_location() {
    let mut wizard = filled_wizard();
    wizard.draft_mut().location = None;
    assert_eq!(wizard.advance().expect("personal ok"), Advance::Moved(WizardStep::Location));
    let err = wizard.advance().expect_err("no location");
    assert!(matches!(err, WizardError::MissingLocation));
    assert_eq!(err.to_string(), "Please select your location from the dropdown");
}

#[test]
fn farm_step_requires_positive_size() {
    let mut wizard = filled_wizard();
    wizard.advance().expect("personal");
    wizard.advance().expect("location");

    wizard.draft_mut().farm_size = " ".to_owned();
    assert!(matches!(wizard.advance(), Err(WizardError::MissingFarmSize)));

    wizard.draft_mut().farm_size = "-2".to_owned();
    assert!(matches!(wizard.advance(), Err(WizardError::InvalidFarmSize(_))));

    wizard.draft_mut().farm_size = "2".to_owned();
    assert_eq!(wizard.advance().expect("farm"), Advance::Moved(WizardStep::Preferences));
    assert_eq!(wizard.progress_percent(), 100);
}

#[test]
fn last_step_reports_complete_without_moving() {
    let mut wizard = filled_wizard();
    for _ in 0..3 {
        wizard.advance().expect("step");
    }
    assert_eq!(wizard.advance().expect("preferences"), Advance::Complete);
    assert_eq!(wizard.step(), WizardStep::Preferences);
}

#[test]
fn back_stops_at_first_step() {
    let mut wizard = filled_wizard();
    wizard.advance().expect("personal");
    assert!(wizard.back());
    assert_eq!(wizard.step(), WizardStep::Personal);
    assert!(!wizard.back());
}

#[test]
fn build_produces_typed_profile() {
    let profile = filled_wizard().build().expect("complete draft");
    assert_eq!(profile.name, "Asha Reddy");
    assert_eq!(profile.region, "Telangana");
    assert_eq!(profile.subregion, "Warangal");
    assert_eq!(profile.farm_size_acres.as_str(), "4.25");
    assert_eq!(profile.main_crop, None);
    assert_eq!(profile.water_source, WaterSource::Rainwater);
}

#[test]
fn build_edit_allows_missing_contact_details() {
    let mut wizard = filled_wizard();
    wizard.draft_mut().phone.clear();
    wizard.draft_mut().email = "  ".to_owned();

    assert!(matches!(wizard.build(), Err(WizardError::MissingPersonalDetails)));
    let profile = wizard.build_edit().expect("contact details optional when editing");
    assert_eq!(profile.phone, None);
    assert_eq!(profile.email, None);
}

#[test]
fn build_edit_still_requires_name_and_farm_size() {
    let mut wizard = filled_wizard();
    wizard.draft_mut().farm_size.clear();
    assert!(matches!(wizard.build_edit(), Err(WizardError::MissingFarmSize)));

    wizard.draft_mut().farm_size = "3".to_owned();
    wizard.draft_mut().name = " ".to_owned();
    assert!(matches!(wizard.build_edit(), Err(WizardError::MissingPersonalDetails)));
}

#[test]
fn finish_writes_location_and_profile_and_drops_signup_draft() {
    let store = Rc::new(MemoryStore::new());
    let mut session = Session::start(Rc::clone(&store));
    session
        .signup(&SignupDraft { name: "Asha Reddy".to_owned(), ..SignupDraft::default() })
        .expect("signup");

    let profile = filled_wizard().finish(&mut session).expect("finish");

    assert_eq!(session.profile().value(), Some(&profile));
    assert_eq!(session.location().value(), Some(&LocationPreference::new("Telangana", "Warangal")));
    assert!(store.get(UserProfile::KEY).is_some());
    assert_eq!(store.get(SignupDraft::KEY), None);
}

#[test]
fn finish_with_invalid_draft_writes_nothing() {
    let store = Rc::new(MemoryStore::new());
    let mut session = Session::start(Rc::clone(&store));
    let mut wizard = filled_wizard();
    wizard.draft_mut().farm_size.clear();

    assert!(matches!(wizard.finish(&mut session), Err(WizardError::MissingFarmSize)));
    assert!(store.is_empty());
}

#[test]
fn finish_on_disabled_storage_keeps_session_values() {
    let store = Rc::new(MemoryStore::disabled());
    let mut session = Session::start(Rc::clone(&store));

    let err = filled_wizard().finish(&mut session).expect_err("storage disabled");

    assert!(matches!(err, WizardError::Storage(StorageWriteFailure::Unavailable)));
    assert!(session.profile().get().is_loaded());
    assert!(session.location().get().is_loaded());
}
