//! Helpers shared across pages.

pub mod auth;
