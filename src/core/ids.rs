// Note identifiers. The table has no auto-increment, so the client picks ids
// itself from the clock. Two notes in the same millisecond-modulus window
// collide; what happens then is up to the server's primary key handling.

use chrono::Utc;

/// Modulus applied to the millisecond clock
pub const ID_MODULUS: i64 = 1_000_000;

/// Source of ids for new notes
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> i64;
}

/// Current Unix time in milliseconds, modulo one million
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockIds;

impl IdSource for ClockIds {
    fn next_id(&self) -> i64 {
        Utc::now().timestamp_millis().rem_euclid(ID_MODULUS)
    }
}

/// Always the same id
#[derive(Debug, Clone, Copy)]
pub struct FixedId(pub i64);

impl IdSource for FixedId {
    fn next_id(&self) -> i64 {
        self.0
    }
}
