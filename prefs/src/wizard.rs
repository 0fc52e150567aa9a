//! Four-step profile setup: personal details, location, farm, preferences.
//!
//! DESIGN
//! ======
//! The wizard holds free-form form input (`ProfileDraft`) and only turns it
//! into a typed [`UserProfile`] at the end. Each step validates its own
//! fields before the user may move forward; `finish` re-validates everything
//! so a draft edited out of order still cannot produce an invalid profile.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use tracing::info;

use crate::codec::ParseError;
use crate::records::{FarmSize, Language, LocationPreference, SignupDraft, SoilType, UserProfile, UserRole, WaterSource};
use crate::session::Session;
use crate::store::{BackingStore, StorageWriteFailure};

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Please fill in all required fields")]
    MissingPersonalDetails,
    #[error("Please select your location from the dropdown")]
    MissingLocation,
    #[error("Please provide your farm size")]
    MissingFarmSize,
    #[error("farm size: {0}")]
    InvalidFarmSize(#[source] ParseError),
    #[error("profile saved for this session only: {0}")]
    Storage(#[from] StorageWriteFailure),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    Personal,
    Location,
    Farm,
    Preferences,
}

impl WizardStep {
    pub const COUNT: u8 = 4;

    /// 1-based position.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Location => 2,
            Self::Farm => 3,
            Self::Preferences => 4,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Location => "Location Details",
            Self::Farm => "Farm Information",
            Self::Preferences => "Preferences",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Location),
            Self::Location => Some(Self::Farm),
            Self::Farm => Some(Self::Preferences),
            Self::Preferences => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Location => Some(Self::Personal),
            Self::Farm => Some(Self::Location),
            Self::Preferences => Some(Self::Farm),
        }
    }
}

/// Result of [`ProfileWizard::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved(WizardStep),
    /// The last step validated; call [`ProfileWizard::finish`].
    Complete,
}

/// Raw form input collected across the steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: UserRole,
    pub location: Option<LocationPreference>,
    pub farm_size: String,
    pub soil_type: SoilType,
    pub water_source: WaterSource,
    pub main_crop: String,
    pub language: Language,
    pub notifications_enabled: bool,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            role: UserRole::Farmer,
            location: None,
            farm_size: String::new(),
            soil_type: SoilType::Loamy,
            water_source: WaterSource::Rainwater,
            main_crop: String::new(),
            language: Language::English,
            notifications_enabled: true,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[derive(Clone, Debug, Default)]
pub struct ProfileWizard {
    step: WizardStep,
    draft: ProfileDraft,
}

impl ProfileWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with contact details captured at signup.
    #[must_use]
    pub fn prefilled(signup: &SignupDraft) -> Self {
        let draft = ProfileDraft {
            name: signup.name.clone(),
            phone: signup.phone.clone(),
            email: signup.email.clone(),
            ..ProfileDraft::default()
        };
        Self { step: WizardStep::Personal, draft }
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    /// Completion percentage shown by the progress bar.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.step().number() * (100 / WizardStep::COUNT)
    }

    /// Validate the fields owned by `step`.
    ///
    /// # Errors
    ///
    /// Returns the [`WizardError`] describing the first missing field.
    pub fn validate(&self, step: WizardStep) -> Result<(), WizardError> {
        let d = &self.draft;
        match step {
            WizardStep::Personal => {
                if [&d.name, &d.phone, &d.email].iter().any(|v| v.trim().is_empty()) {
                    return Err(WizardError::MissingPersonalDetails);
                }
            }
            WizardStep::Location => {
                if d.location.is_none() {
                    return Err(WizardError::MissingLocation);
                }
            }
            WizardStep::Farm => {
                if d.farm_size.trim().is_empty() {
                    return Err(WizardError::MissingFarmSize);
                }
                FarmSize::parse(&d.farm_size).map_err(WizardError::InvalidFarmSize)?;
            }
            WizardStep::Preferences => {}
        }
        Ok(())
    }

    /// Validate the current step and move to the next one.
    ///
    /// # Errors
    ///
    /// Returns the current step's validation error; the step does not change.
    pub fn advance(&mut self) -> Result<Advance, WizardError> {
        let current = self.step();
        self.validate(current)?;
        match current.next() {
            Some(next) => {
                self.step = next;
                Ok(Advance::Moved(next))
            }
            None => Ok(Advance::Complete),
        }
    }

    /// Go back one step. Returns `false` on the first step.
    pub fn back(&mut self) -> bool {
        match self.step().previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Build the typed profile from the draft.
    ///
    /// # Errors
    ///
    /// Returns the first step validation error in step order.
    pub fn build(&self) -> Result<UserProfile, WizardError> {
        for step in [WizardStep::Personal, WizardStep::Location, WizardStep::Farm, WizardStep::Preferences] {
            self.validate(step)?;
        }
        self.assemble()
    }

    /// Build the profile for the edit screen. Phone and email are optional
    /// there; only the name is required from the personal step.
    ///
    /// # Errors
    ///
    /// Returns the first validation error in step order.
    pub fn build_edit(&self) -> Result<UserProfile, WizardError> {
        if self.draft.name.trim().is_empty() {
            return Err(WizardError::MissingPersonalDetails);
        }
        self.validate(WizardStep::Location)?;
        self.validate(WizardStep::Farm)?;
        self.assemble()
    }

    fn assemble(&self) -> Result<UserProfile, WizardError> {
        let d = &self.draft;
        let location = d.location.clone().ok_or(WizardError::MissingLocation)?;
        Ok(UserProfile {
            name: d.name.trim().to_owned(),
            role: d.role,
            phone: non_blank(&d.phone),
            email: non_blank(&d.email),
            region: location.region,
            subregion: location.subregion,
            locality: location.locality,
            farm_size_acres: FarmSize::parse(&d.farm_size).map_err(WizardError::InvalidFarmSize)?,
            soil_type: d.soil_type,
            water_source: d.water_source,
            main_crop: non_blank(&d.main_crop),
            language: d.language,
            notifications_enabled: d.notifications_enabled,
        })
    }

    /// Save the location and profile into `session` and drop the signup
    /// draft.
    ///
    /// Both providers are updated even if the store rejects a write; the
    /// first write failure is then returned as [`WizardError::Storage`].
    ///
    /// # Errors
    ///
    /// Returns a validation error (nothing is written) or a storage error.
    pub fn finish<S: BackingStore + Clone>(&self, session: &mut Session<S>) -> Result<UserProfile, WizardError> {
        let profile = self.build()?;
        let location_written = session.location_mut().set_value(profile.location());
        let profile_written = session.profile_mut().set_value(profile.clone());
        session.discard_signup_draft();
        info!(region = %profile.region, subregion = %profile.subregion, "profile setup complete");
        location_written.and(profile_written)?;
        Ok(profile)
    }
}
