//! Solace Core - Identity, Thread Identity, and Messaging Policy
//!
//! This crate provides the pure decision core of the Solace DM platform:
//! role inference from raw identifier strings, canonical thread-id
//! derivation (with legacy-format parsing), and the messaging/posting
//! permission tables. Everything here is synchronous and side-effect-free;
//! route handlers resolve identities and permissions through this crate
//! before touching persistence.

pub mod error;
pub mod id;
pub mod identity;
pub mod policy;
pub mod thread;

pub use error::{CoreError, Result};
pub use id::{Role, UserId, is_guest_id};
pub use identity::{FixedIdentity, GuestIdentity, IdentityProvider};
pub use policy::{TherapistStatus, can_send_dm, can_send_post};
pub use thread::{DmThread, ThreadId, is_current_format, parse_participants};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        CoreError, DmThread, FixedIdentity, GuestIdentity, IdentityProvider, Result, Role,
        TherapistStatus, ThreadId, UserId, can_send_dm, can_send_post, is_current_format,
        is_guest_id, parse_participants,
    };
}
