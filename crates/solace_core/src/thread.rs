//! Canonical thread identifiers and DM thread records
//!
//! A thread id is the canonical key for an unordered pair of participants.
//! The current format sorts the pair ordinally and joins with `|`; rows
//! written before the migration use `_` instead. Derivation only ever
//! produces the current format; parsing accepts both.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use tracing::warn;

use crate::id::UserId;

/// Canonical identifier for a two-party conversation, order-independent in
/// its participants.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[repr(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    /// Derive the canonical id for a pair of participants.
    ///
    /// The pair is sorted with ordinal byte-wise comparison, never a
    /// locale-aware collation, so the same pair yields the same id on every
    /// platform and regardless of argument order. A self-thread (`a == b`)
    /// derives to `"a|a"`; whether that is meaningful is the caller's call.
    pub fn for_pair(a: &UserId, b: &UserId) -> Self {
        let (first, second) = sort_pair(a.as_str(), b.as_str());
        Self(format!("{first}|{second}"))
    }

    /// Derive the legacy-format id for the same pair.
    ///
    /// Exists only so migration tooling can compare against rows keyed in
    /// the old underscore format. New threads always use
    /// [`ThreadId::for_pair`].
    pub fn legacy_for_pair(a: &UserId, b: &UserId) -> String {
        let (first, second) = sort_pair(a.as_str(), b.as_str());
        format!("{first}_{second}")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two participants encoded in this id, via [`parse_participants`].
    pub fn participants(&self) -> (UserId, UserId) {
        parse_participants(&self.0)
    }
}

impl Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ThreadId> for String {
    fn from(id: ThreadId) -> Self {
        id.0
    }
}

fn sort_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Split a raw thread id into its two participant ids.
///
/// Current-format ids split at the first `|`; everything after it, further
/// pipes included, belongs to the second participant. Legacy ids split at
/// the *last* underscore: legacy participant ids can themselves contain
/// underscores, and the right-hand id is the less likely of the two to. A
/// right-hand id that does contain one still mis-splits; the legacy data
/// shape allows nothing better, so the heuristic stays as documented.
///
/// Never panics. An empty-string member means "unknown participant", not a
/// valid user id.
pub fn parse_participants(raw: &str) -> (UserId, UserId) {
    if let Some((left, rest)) = raw.split_once('|') {
        return (UserId::new(left), UserId::new(rest));
    }
    if let Some((left, right)) = raw.rsplit_once('_') {
        return (UserId::new(left), UserId::new(right));
    }
    if !raw.is_empty() {
        return (UserId::new(raw), UserId::new(""));
    }
    (UserId::new(""), UserId::new(""))
}

/// Whether a raw thread id is in the current pipe-separated format.
pub fn is_current_format(raw: &str) -> bool {
    raw.contains('|')
}

/// A DM thread row as persistence hands it to us.
///
/// This crate only reads these records; creation, delivery, and unread
/// bookkeeping all live in the backend RPC layer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DmThread {
    /// Raw thread key; may be in either the current or the legacy format.
    pub id: String,

    /// First participant (slot assignment is persistence's, not sorted here)
    pub user_a: UserId,

    /// Second participant
    pub user_b: UserId,

    /// Unread messages waiting for participant A
    #[serde(default)]
    pub unread_for_a: u32,

    /// Unread messages waiting for participant B
    #[serde(default)]
    pub unread_for_b: u32,

    /// Preview of the most recent message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Additional metadata
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl DmThread {
    /// The other participant, or `None` when the viewer is in neither slot.
    ///
    /// `None` means the record and the session disagree about who is in the
    /// thread; callers must treat the viewer as not being a participant.
    pub fn partner_of(&self, viewer: &UserId) -> Option<&UserId> {
        if &self.user_a == viewer {
            Some(&self.user_b)
        } else if &self.user_b == viewer {
            Some(&self.user_a)
        } else {
            warn!(
                thread_id = %self.id,
                viewer = %viewer,
                "viewer is not a participant of this thread"
            );
            None
        }
    }

    /// Unread counter for the viewer's side, `0` when the viewer is in
    /// neither slot.
    pub fn unread_for(&self, viewer: &UserId) -> u32 {
        if &self.user_a == viewer {
            self.unread_for_a
        } else if &self.user_b == viewer {
            self.unread_for_b
        } else {
            0
        }
    }
}
