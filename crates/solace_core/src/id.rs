//! User identifiers and role inference
//!
//! Solace identifiers are opaque strings whose shape encodes a coarse role.
//! Four historical schemes coexist in stored data: anonymous `guest` /
//! `guest-*` ids, the legacy `u_` / `t_` / `s_` prefixes, and bare UUIDs
//! issued by the current identity provider. This module derives a [`Role`]
//! from the shape alone; it never validates authenticity (the session layer
//! owns that).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::CoreError;

/// Opaque user identifier.
///
/// The inner string may be in any of the historical shapes; [`UserId::role`]
/// resolves which. An empty string is the "unknown participant" sentinel
/// produced by lenient thread-id parsing, never a real user.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[repr(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// False for the empty-string sentinel from malformed thread ids.
    pub fn is_known(&self) -> bool {
        !self.0.is_empty()
    }

    /// Coarse role derived from the identifier shape.
    pub fn role(&self) -> Role {
        Role::infer(Some(&self.0))
    }

    pub fn is_guest(&self) -> bool {
        is_guest_id(Some(&self.0))
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for UserId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Coarse access-control category derived from the identifier shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    User,
    Therapist,
    Store,
}

impl Role {
    /// Derive the role for a raw identifier.
    ///
    /// Total over every input: an absent, empty, or unrecognized identifier
    /// resolves to `Guest`, the least-privileged role. Prefix rules win over
    /// the UUID-shape check.
    pub fn infer(id: Option<&str>) -> Role {
        let Some(id) = id else {
            return Role::Guest;
        };
        if id.is_empty() || id == "guest" || id.starts_with("guest-") {
            return Role::Guest;
        }
        if id.starts_with("u_") {
            return Role::User;
        }
        if id.starts_with("t_") {
            return Role::Therapist;
        }
        if id.starts_with("s_") {
            return Role::Store;
        }
        if looks_like_provider_uuid(id) {
            // Current identity provider issues bare UUIDs; those accounts are
            // general users unless the backend says otherwise.
            return Role::User;
        }
        Role::Guest
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Therapist => "therapist",
            Role::Store => "store",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Role::Guest),
            "user" => Ok(Role::User),
            "therapist" => Ok(Role::Therapist),
            "store" => Ok(Role::Store),
            other => Err(CoreError::UnknownRole {
                name: other.to_string(),
            }),
        }
    }
}

/// True when the identifier denotes an anonymous session: absent, exactly
/// `"guest"`, or `"guest-"`-prefixed.
pub fn is_guest_id(id: Option<&str>) -> bool {
    match id {
        None => true,
        Some(id) => id == "guest" || id.starts_with("guest-"),
    }
}

/// Shape check for provider-issued ids: at least 30 chars, at least one
/// hyphen, nothing but hex digits and hyphens. Deliberately a heuristic, not
/// a UUID parse; stored ids predate strict validation.
fn looks_like_provider_uuid(id: &str) -> bool {
    id.len() >= 30
        && id.contains('-')
        && id.bytes().all(|b| b == b'-' || b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_or_empty_ids_are_guests() {
        assert_eq!(Role::infer(None), Role::Guest);
        assert_eq!(Role::infer(Some("")), Role::Guest);
    }

    #[test]
    fn guest_literal_and_prefix() {
        assert_eq!(Role::infer(Some("guest")), Role::Guest);
        assert_eq!(Role::infer(Some("guest-4f2a")), Role::Guest);
        // "guestlike" has no hyphen after the literal, falls through to the
        // unrecognized branch and still lands on Guest
        assert_eq!(Role::infer(Some("guestlike")), Role::Guest);
    }

    #[test]
    fn legacy_prefixes() {
        assert_eq!(Role::infer(Some("u_alice")), Role::User);
        assert_eq!(Role::infer(Some("t_bob")), Role::Therapist);
        assert_eq!(Role::infer(Some("s_corner-shop")), Role::Store);
    }

    #[test]
    fn provider_uuid_shape_is_user() {
        let id = uuid::Uuid::new_v4().to_string();
        assert_eq!(Role::infer(Some(&id)), Role::User);
        // uppercase hex is fine too
        assert_eq!(Role::infer(Some(&id.to_uppercase())), Role::User);
    }

    #[test]
    fn near_uuid_shapes_are_guests() {
        // too short
        assert_eq!(Role::infer(Some("abc-def")), Role::Guest);
        // long and hex but no hyphen
        assert_eq!(
            Role::infer(Some("0123456789abcdef0123456789abcdef")),
            Role::Guest
        );
        // non-hex character
        assert_eq!(
            Role::infer(Some("z1234567-89ab-cdef-0123-456789abcdef")),
            Role::Guest
        );
    }

    #[test]
    fn unrecognized_ids_are_guests() {
        assert_eq!(Role::infer(Some("admin")), Role::Guest);
        assert_eq!(Role::infer(Some("x_whatever")), Role::Guest);
    }

    #[test]
    fn is_guest_id_agrees_with_infer_on_guest_shapes() {
        for id in [None, Some("guest"), Some("guest-123")] {
            assert!(is_guest_id(id));
            assert_eq!(Role::infer(id), Role::Guest);
        }
        assert!(!is_guest_id(Some("u_alice")));
        assert!(!is_guest_id(Some("t_bob")));
    }

    #[test]
    fn role_round_trips_through_strings() {
        for role in [Role::Guest, Role::User, Role::Therapist, Role::Store] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
        }
        assert!("moderator".parse::<Role>().is_err());
    }

    #[test]
    fn user_id_helpers() {
        let id = UserId::new("t_bob");
        assert_eq!(id.role(), Role::Therapist);
        assert!(id.is_known());
        assert!(!id.is_guest());
        assert!(!UserId::new("").is_known());
    }
}
