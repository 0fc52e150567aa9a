//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the preference signals it needs at render time and writes
//! only through `Preferences`. Everything except `login` sits behind the
//! session-flag guard.

pub mod byproducts;
pub mod crop_advisor;
pub mod dashboard;
pub mod location_selector;
pub mod login;
pub mod profile;
pub mod profile_setup;
