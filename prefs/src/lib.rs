//! Location-scoped preference store for the Krishi advisor front-end.
//!
//! This crate owns the persisted preference records (selected location, user
//! profile, session flag) and the machinery that keeps them in a durable
//! key-value backing store: the store trait and its native implementations,
//! the JSON record codec, and the reactive provider that pages read from.
//! It is shared by `client` (browser storage), `cli` (file storage) and
//! `server` (opportunity wire types).

pub mod catalog;
pub mod codec;
pub mod file_store;
pub mod opportunity;
pub mod provider;
pub mod records;
pub mod session;
pub mod store;
pub mod wizard;

pub use codec::{ParseError, Record, decode, encode};
pub use file_store::FileStore;
pub use opportunity::{Opportunity, OpportunityRequest, OpportunityResponse};
pub use provider::{PreferenceProvider, PreferenceState, SubscriptionId};
pub use records::{Language, LocationPreference, SignupDraft, SoilType, UserProfile, UserRole, WaterSource};
pub use session::Session;
pub use store::{BackingStore, MemoryStore, StorageWriteFailure};
