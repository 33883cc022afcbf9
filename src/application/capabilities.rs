//! Capabilities checked by this service, as `(resource, action)` pairs.

/// Read the activity feeds and per-user panels.
pub const USERS_ACTIVITY: (&str, &str) = ("users", "activity");

/// Deliver domain events over HTTP.
pub const ACTIVITY_PUBLISH: (&str, &str) = ("activity", "publish");
