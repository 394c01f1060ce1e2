//! Injected source of the current session identity
//!
//! The original client read "who am I" from hidden browser-local storage.
//! Here it is an explicit dependency: route handlers hold a provider and
//! pass resolved ids/roles into the pure policy and thread functions, which
//! never consult the provider themselves.

use crate::id::{Role, UserId};

/// Source of the current session's raw identifier.
pub trait IdentityProvider: Send + Sync {
    /// The raw identifier of the current session, if any.
    fn current_user(&self) -> Option<UserId>;

    /// Role of the current session; an absent identity is a guest.
    fn current_role(&self) -> Role {
        match self.current_user() {
            Some(id) => id.role(),
            None => Role::Guest,
        }
    }
}

/// Provider pinned to a known identifier (an authenticated session, or a
/// fixture in tests).
#[derive(Debug, Clone)]
pub struct FixedIdentity {
    id: UserId,
}

impl FixedIdentity {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into() }
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> Option<UserId> {
        Some(self.id.clone())
    }
}

/// Provider for anonymous sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuestIdentity;

impl IdentityProvider for GuestIdentity {
    fn current_user(&self) -> Option<UserId> {
        None
    }
}
