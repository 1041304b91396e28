//! Computing a day's calorie goal from the days before it.

use std::fmt;

use log::debug;

use crate::calendar::ClockDay;
use crate::entry::{Entry, DEFAULT_GOAL};
use crate::store::EntryStore;

/// How many days before the target day are averaged.
pub const LOOKBACK_DAYS: i64 = 9;

/// Goals are rounded to multiples of this.
const GOAL_STEP: u32 = 50;

/// The goal for `day`.
///
/// An `override_goal` is used as is. Otherwise the calories of the
/// [`LOOKBACK_DAYS`] days before `day` are averaged, skipping days without an
/// entry or without any calories. The result is at least [`DEFAULT_GOAL`] and
/// rounded to the nearest multiple of 50, with ties rounding up.
///
/// `lookup` must not create entries. Days for which it fails count as days
/// without an entry.
pub fn compute_goal<F, E>(day: ClockDay, override_goal: Option<u32>, mut lookup: F) -> u32
where
    F: FnMut(ClockDay) -> Result<Option<Entry>, E>,
    E: fmt::Display,
{
    let base = match override_goal {
        Some(goal) => goal,
        None => average_intake(day, &mut lookup).unwrap_or(DEFAULT_GOAL),
    };
    round_goal(base)
}

/// [`compute_goal`] with lookups going to `store`.
pub fn goal_for<S>(store: &S, day: ClockDay, override_goal: Option<u32>) -> u32
where
    S: EntryStore + ?Sized,
{
    compute_goal(day, override_goal, |day| store.lookup(day))
}

fn average_intake<F, E>(day: ClockDay, lookup: &mut F) -> Option<u32>
where
    F: FnMut(ClockDay) -> Result<Option<Entry>, E>,
    E: fmt::Display,
{
    let mut total: u64 = 0;
    let mut count: u64 = 0;
    for offset in 1..=LOOKBACK_DAYS {
        let prior = day.add_days(-offset);
        match lookup(prior) {
            Ok(Some(entry)) if entry.calories > 0 => {
                total += u64::from(entry.calories);
                count += 1;
            }
            Ok(_) => {}
            Err(error) => {
                debug!("event=goal_lookup status=skipped day={prior} error={error}");
            }
        }
    }

    if count == 0 {
        return None;
    }
    // An average of u32 values always fits into a u32.
    u32::try_from(total / count).ok()
}

/// Clamps to [`DEFAULT_GOAL`] and rounds half up to a multiple of 50.
///
/// Goals too close to `u32::MAX` to round up are rounded down instead, so the
/// result is always a multiple of 50.
pub fn round_goal(goal: u32) -> u32 {
    let goal = goal.max(DEFAULT_GOAL);
    let remainder = goal % GOAL_STEP;
    let down = goal - remainder;
    if remainder >= GOAL_STEP / 2 {
        goal.checked_add(GOAL_STEP - remainder).unwrap_or(down)
    } else {
        down
    }
}
