//! Messaging and posting permission tables
//!
//! Stateless decision tables over already-resolved roles. Block lists and
//! affiliation lookups live in external storage; callers resolve those first
//! and act on the booleans returned here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::trace;

use crate::error::CoreError;
use crate::id::Role;

/// Whether a therapist currently belongs to a store. Sourced from external
/// persistence; consumed here, never produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TherapistStatus {
    #[default]
    Active,
    Unaffiliated,
}

impl TherapistStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TherapistStatus::Active => "active",
            TherapistStatus::Unaffiliated => "unaffiliated",
        }
    }
}

impl Display for TherapistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TherapistStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TherapistStatus::Active),
            "unaffiliated" => Ok(TherapistStatus::Unaffiliated),
            other => Err(CoreError::UnknownTherapistStatus {
                name: other.to_string(),
            }),
        }
    }
}

/// Whether `from` may send a DM to `to`.
/// Policy, in precedence order:
/// - Guest senders: never, reply or not.
/// - Replies: any non-guest sender may reply inside an established thread;
///   block lists are enforced elsewhere.
/// - New threads: users may open to therapists; therapists may open to
///   stores but never cold-open to users; stores may open to anyone;
///   user-to-user and any untabled pairing is denied.
pub fn can_send_dm(from: Role, to: Role, is_reply: bool) -> bool {
    use Role::*;

    let allowed = match (from, to, is_reply) {
        (Guest, _, _) => false,
        (_, _, true) => true,
        (User, Therapist, false) => true,
        (Therapist, Store, false) => true,
        (Store, _, false) => true,
        _ => false,
    };
    trace!(%from, %to, is_reply, allowed, "dm policy decision");
    allowed
}

/// Whether `role` may create a post.
///
/// Therapists post only while affiliated with a store; users and stores post
/// unconditionally; guests never do. Callers without a status at hand pass
/// `TherapistStatus::default()` (irrelevant for non-therapist roles).
pub fn can_send_post(role: Role, status: TherapistStatus) -> bool {
    let allowed = match role {
        Role::Therapist => status == TherapistStatus::Active,
        Role::User | Role::Store => true,
        Role::Guest => false,
    };
    trace!(%role, %status, allowed, "post policy decision");
    allowed
}
