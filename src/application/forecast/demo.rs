use crate::domain::forecast::WINDOW_SIZE;
use rand::Rng;

const START_MIN: i64 = 50;
const START_MAX: i64 = 100;
const STEP_DOWN: i64 = -15;
const STEP_UP: i64 = 20;
const FLOOR: i64 = 10;
const FLOOR_RESET: i64 = 20;

/// Synthetic week of readings for the demo button.
///
/// Starts somewhere in [50, 100] and drifts by [-15, +20] per day. A day
/// that would fall below 10 is reset to 20.
pub fn random_walk<R: Rng + ?Sized>(rng: &mut R) -> Vec<i64> {
    let mut walk = Vec::with_capacity(WINDOW_SIZE);
    walk.push(rng.random_range(START_MIN..=START_MAX));

    for _ in 1..WINDOW_SIZE {
        let prev = walk[walk.len() - 1];
        let mut next = prev + rng.random_range(STEP_DOWN..=STEP_UP);
        if next < FLOOR {
            next = FLOOR_RESET;
        }
        walk.push(next);
    }
    walk
}

/// Same walk, formatted for the input box.
pub fn random_walk_text<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_walk(rng)
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
