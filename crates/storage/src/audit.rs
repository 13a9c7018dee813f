//! Audit timestamps for the write path.
//!
//! Every insert and update in both backends takes its `created_date` /
//! `modified_date` values from here, so callers never set them.

use chrono::{NaiveDateTime, SubsecRound, TimeDelta, Utc};

/// Current wall-clock time in UTC, truncated to the microsecond precision
/// Postgres keeps for `TIMESTAMP` columns.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}

/// Stamps for a freshly created row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditStamp {
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
}

impl AuditStamp {
    pub fn created() -> Self {
        Self::created_at(now())
    }

    pub fn created_at(at: NaiveDateTime) -> Self {
        Self {
            created_date: at,
            modified_date: at,
        }
    }
}

/// Modified date for a write that follows one stamped at `previous`.
pub fn touch(previous: NaiveDateTime) -> NaiveDateTime {
    touch_at(previous, now())
}

/// Never returns a value at or before `previous`, even if the clock has not
/// advanced (or went backwards) since the last write.
pub fn touch_at(previous: NaiveDateTime, now: NaiveDateTime) -> NaiveDateTime {
    now.max(previous + TimeDelta::microseconds(1))
}
