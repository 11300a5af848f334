//! Test helpers for generating unique fixture identifiers
//!
//! ULID-backed values keep fixtures from different tests apart even when
//! they share a database file.

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`.
///
/// # Examples
/// ```
/// use ingest_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("game");
/// let id2 = unique_str("game");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique game id shaped like the hex digests replays carry.
pub fn unique_game_id() -> String {
    format!("{:032x}", Ulid::new().0)
}

/// Generate a unique, positive external user id.
pub fn unique_user_id() -> i64 {
    (Ulid::new().random() as i64 & 0x7fff_ffff_ffff).max(1)
}
