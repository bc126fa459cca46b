//! Point totals to displayed bonus and back.
//!
//! The game shows `points^0.75`. Going back rounds to the nearest point
//! (ties to even), so the pair is only an approximate inverse.

const EXPONENT: f64 = 0.75;

/// Displayed bonus for a raw point total.
///
/// Defined for `points >= 0`; negative totals yield NaN.
#[must_use]
pub fn apply_diminishing_returns(points: i32) -> f64 {
    f64::from(points).powf(EXPONENT)
}

/// Point total closest to a displayed bonus.
///
/// Results beyond the `i32` range saturate.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn reverse_diminishing_returns(bonus: f64) -> i32 {
    bonus.powf(1.0 / EXPONENT).round_ties_even() as i32
}

/// Largest bonus any stat can show.
#[must_use]
pub fn max_reward() -> f64 {
    apply_diminishing_returns(i32::MAX)
}

/// Bonus change caused by one point at `points`, for sizing UI steps.
///
/// Uses a forward difference at or below zero, a backward difference at
/// `i32::MAX` and a centered difference everywhere else.
#[must_use]
pub fn reward_interval(points: i32) -> f64 {
    if points <= 0 {
        apply_diminishing_returns(points + 1) - apply_diminishing_returns(points)
    } else if points == i32::MAX {
        apply_diminishing_returns(points) - apply_diminishing_returns(points - 1)
    } else {
        (apply_diminishing_returns(points + 1) - apply_diminishing_returns(points - 1)) / 2.0
    }
}
