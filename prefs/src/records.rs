//! Persisted preference records and their closed value sets.
//!
//! DESIGN
//! ======
//! Every field that the UI offers as a fixed choice is an enum here, so an
//! unknown value fails to decode instead of travelling through the app as a
//! free-form string. Decoding also accepts the key names and role spellings
//! written by earlier front-end builds (`state`/`district`/`village`,
//! `krishi_kendra`, `farmSize`, `notifications`); encoding always writes the
//! current names.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{ParseError, Record, require_non_empty};

// =============================================================================
// LOCATION
// =============================================================================

/// The user's selected farm location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPreference {
    /// Administrative region (state).
    #[serde(alias = "state")]
    pub region: String,
    /// Sub-administrative area (district).
    #[serde(alias = "district")]
    pub subregion: String,
    /// Village or city.
    #[serde(default, alias = "village", skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
}

impl LocationPreference {
    pub fn new(region: impl Into<String>, subregion: impl Into<String>) -> Self {
        Self { region: region.into(), subregion: subregion.into(), locality: None }
    }

    #[must_use]
    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }
}

impl fmt::Display for LocationPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(locality) = &self.locality {
            write!(f, "{locality}, ")?;
        }
        write!(f, "{}, {}", self.subregion, self.region)
    }
}

impl Record for LocationPreference {
    const KEY: &'static str = "userLocation";

    fn validate(&self) -> Result<(), ParseError> {
        require_non_empty("region", &self.region)?;
        require_non_empty("subregion", &self.subregion)
    }
}

// =============================================================================
// ENUMS
// =============================================================================

/// Who is using the app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    #[serde(rename = "farmer")]
    Farmer,
    #[serde(rename = "extension-officer", alias = "extension_officer", alias = "krishi_kendra")]
    ExtensionOfficer,
    #[serde(rename = "agricultural-officer", alias = "agricultural_officer")]
    AgriculturalOfficer,
}

impl UserRole {
    pub const ALL: [Self; 3] = [Self::Farmer, Self::ExtensionOfficer, Self::AgriculturalOfficer];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::ExtensionOfficer => "Krishi Kendra Officer",
            Self::AgriculturalOfficer => "Agricultural Officer",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Clay,
    Sandy,
    #[default]
    Loamy,
    #[serde(alias = "black")]
    BlackCotton,
    #[serde(alias = "red")]
    RedLaterite,
    Alluvial,
}

impl SoilType {
    pub const ALL: [Self; 6] =
        [Self::Clay, Self::Sandy, Self::Loamy, Self::BlackCotton, Self::RedLaterite, Self::Alluvial];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clay => "Clay Soil",
            Self::Sandy => "Sandy Soil",
            Self::Loamy => "Loamy Soil",
            Self::BlackCotton => "Black Cotton Soil",
            Self::RedLaterite => "Red Laterite Soil",
            Self::Alluvial => "Alluvial Soil",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    #[default]
    Rainwater,
    BoreWell,
    Canal,
    River,
    Tank,
}

impl WaterSource {
    pub const ALL: [Self; 5] = [Self::Rainwater, Self::BoreWell, Self::Canal, Self::River, Self::Tank];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rainwater => "Rainwater",
            Self::BoreWell => "Bore Well",
            Self::Canal => "Canal",
            Self::River => "River",
            Self::Tank => "Tank/Pond",
        }
    }
}

/// UI language. Only English content exists today.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::English, Self::Hindi, Self::Marathi];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Marathi => "Marathi",
        }
    }
}

// =============================================================================
// FARM SIZE
// =============================================================================

/// Farm area in acres, kept as the decimal text the user entered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FarmSize(String);

impl FarmSize {
    /// Parse a positive, finite decimal acreage.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Invalid`] for empty, non-numeric, zero, negative
    /// or non-finite input.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        let acres: f64 = trimmed
            .parse()
            .map_err(|_| ParseError::invalid("farmSizeAcres", format!("`{trimmed}` is not a decimal number")))?;
        if !acres.is_finite() || acres <= 0.0 {
            return Err(ParseError::invalid("farmSizeAcres", "must be a positive number of acres"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn acres(&self) -> f64 {
        self.0.parse().unwrap_or_default()
    }
}

impl TryFrom<String> for FarmSize {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FarmSize> for String {
    fn from(value: FarmSize) -> Self {
        value.0
    }
}

impl fmt::Display for FarmSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} acres", self.0)
    }
}

// =============================================================================
// USER PROFILE
// =============================================================================

fn default_true() -> bool {
    true
}

/// Profile captured by the setup wizard and edited on the profile screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(alias = "state")]
    pub region: String,
    #[serde(alias = "district")]
    pub subregion: String,
    #[serde(default, alias = "village", skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    #[serde(alias = "farmSize")]
    pub farm_size_acres: FarmSize,
    pub soil_type: SoilType,
    #[serde(default)]
    pub water_source: WaterSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_crop: Option<String>,

    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_true", alias = "notifications")]
    pub notifications_enabled: bool,
}

impl UserProfile {
    /// The profile's location as a standalone preference.
    #[must_use]
    pub fn location(&self) -> LocationPreference {
        LocationPreference {
            region: self.region.clone(),
            subregion: self.subregion.clone(),
            locality: self.locality.clone(),
        }
    }

    /// Replace the profile's location fields.
    pub fn set_location(&mut self, location: &LocationPreference) {
        self.region.clone_from(&location.region);
        self.subregion.clone_from(&location.subregion);
        self.locality.clone_from(&location.locality);
    }
}

impl Record for UserProfile {
    const KEY: &'static str = "userProfile";

    fn validate(&self) -> Result<(), ParseError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("region", &self.region)?;
        require_non_empty("subregion", &self.subregion)
    }
}

// =============================================================================
// SIGNUP DRAFT
// =============================================================================

/// Contact details captured at signup, used to prefill the profile wizard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Record for SignupDraft {
    const KEY: &'static str = "tempUserData";
}
