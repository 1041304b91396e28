use crate::calendar::ClockDay;

/// Goal of a freshly created entry when nothing better is known.
pub const DEFAULT_GOAL: u32 = 100;

/// One day's calorie log. The day identifies the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub day: ClockDay,
    pub goal: u32,
    pub calories: u32,
}

impl Entry {
    pub fn new(day: ClockDay, goal: u32) -> Self {
        Self {
            day,
            goal,
            calories: 0,
        }
    }

    /// Calories left until the goal is reached. Negative once it is exceeded.
    pub fn remaining(&self) -> i64 {
        i64::from(self.goal) - i64::from(self.calories)
    }

    pub fn eat(&mut self, calories: u32) {
        self.calories = self.calories.saturating_add(calories);
    }
}
