use chrono::{DateTime, Duration, Utc};

/// Where quiz start and completion times come from.
///
/// The system clock is wall time and can step backwards; sessions clamp
/// completion to the start time instead of trusting it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

// 2023-11-14T22:13:20Z
const TEST_EPOCH_SECS: i64 = 1_700_000_000;

/// Test instant `offset_secs` seconds after a fixed reference point.
///
/// # Panics
///
/// Panics if the result falls outside chrono's range.
#[must_use]
pub fn fixed_at(offset_secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(TEST_EPOCH_SECS, 0)
        .and_then(|epoch| epoch.checked_add_signed(Duration::seconds(offset_secs)))
        .expect("test timestamp out of range")
}

#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    fixed_at(0)
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
