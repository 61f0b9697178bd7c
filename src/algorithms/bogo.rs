//! Bogo sort, capped at [`SortPolicy::bogo_max_shuffles`]

use super::errors::require_finite;
use super::{SortError, SortPolicy};
use crate::steps::{SortRun, Step, StepRecorder, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

pub fn run(input: &[Value], policy: &SortPolicy) -> Result<SortRun, SortError> {
    require_finite(input)?;
    let mut rec = StepRecorder::new(input);
    let mut rng = match policy.bogo_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut shuffles = 0;
    loop {
        if is_sorted(&mut rec) {
            return Ok(rec.finish());
        }
        if shuffles >= policy.bogo_max_shuffles {
            rec.mark(Step::Info(format!(
                "Gave up after {} shuffles without reaching sorted order",
                shuffles
            )));
            return Ok(rec.time_out());
        }
        shuffle(&mut rec, &mut rng);
        shuffles += 1;
    }
}

/// Adjacent sortedness check, stopping at the first inversion
fn is_sorted(rec: &mut StepRecorder) -> bool {
    (1..rec.len()).all(|i| rec.compare(i - 1, i) != Ordering::Greater)
}

/// Fisher-Yates shuffle; every exchanged pair is recorded
fn shuffle(rec: &mut StepRecorder, rng: &mut StdRng) {
    for i in (1..rec.len()).rev() {
        let j = rng.gen_range(0..=i);
        rec.shuffle(i, j);
    }
}
