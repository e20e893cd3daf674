use crate::models::analytics::GoalProgress;

/// Computes savings-goal progress as a bounded integer percentage.
///
/// Policies, applied uniformly:
/// - any non-finite input → 0% (the result is never NaN),
/// - `goal <= 0` is a degenerate target and counts as met (100%) as long
///   as `current >= 0` — it must not block rendering,
/// - otherwise `round(current / goal * 100)` clamped to [0, 100].
pub struct GoalService;

impl GoalService {
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn percent(&self, current: f64, goal: f64) -> u8 {
        if !current.is_finite() || !goal.is_finite() {
            return 0;
        }
        if goal <= 0.0 {
            return if current >= 0.0 { 100 } else { 0 };
        }
        let pct = (current / goal * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    #[must_use]
    pub fn progress(&self, current_usd: f64, goal_usd: f64) -> GoalProgress {
        GoalProgress {
            current_usd,
            goal_usd,
            percent: self.percent(current_usd, goal_usd),
        }
    }
}

impl Default for GoalService {
    fn default() -> Self {
        Self::new()
    }
}
