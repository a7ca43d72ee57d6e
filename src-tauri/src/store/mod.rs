//! Store Layer
//!
//! Thin adapter over the external real-time record store: record access
//! behind [`RealtimeStore`], magic-code auth, and shared session state.

pub mod auth;
pub mod client;
pub mod memory;
pub mod session;
pub mod traits;

#[cfg(test)]
mod tests;

pub use auth::AuthClient;
pub use client::StoreClient;
pub use memory::MemoryStore;
pub use session::{AuthUser, SessionState};
pub use traits::{RealtimeStore, VersionedUserData};
