//! Random selection helpers shared by every generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::{Date, Duration};
use uuid::Uuid;

use crate::config::Bounds;

/// Namespace for deriving per-tenant random streams.
const SEED_NAMESPACE: Uuid = Uuid::from_u128(0x6c1f_83a2_5d47_4b1e_9f20_3a8e_c4d5_7b19);

/// Returns a random stream for one (tenant, scope) pair.
///
/// The same base seed, tenant email, and scope always yield the same stream,
/// so repeated runs sample the same templates.
pub fn tenant_rng(seed: u64, tenant_email: &str, scope: &str) -> StdRng {
    let digest = Uuid::new_v5(
        &SEED_NAMESPACE,
        format!("{seed}/{tenant_email}/{scope}").as_bytes(),
    );
    let (high, low) = digest.as_u64_pair();
    StdRng::seed_from_u64(high ^ low.rotate_left(17))
}

/// Picks a record count uniformly in `bounds`, capped at `available`.
pub fn sample_count(bounds: Bounds, available: usize, rng: &mut impl Rng) -> usize {
    let capped = bounds.capped(available);
    if capped.min == capped.max {
        capped.min
    } else {
        rng.gen_range(capped.min..=capped.max)
    }
}

/// Draws `k` distinct items uniformly without replacement, or all of them if
/// `k` exceeds the slice length.
///
/// Partial Fisher-Yates over an index vector: only the first `k` positions are
/// shuffled before truncating.
pub fn sample_without_replacement<'a, T>(
    items: &'a [T],
    k: usize,
    rng: &mut impl Rng,
) -> Vec<&'a T> {
    let k = k.min(items.len());
    let mut indices: Vec<usize> = (0..items.len()).collect();

    for i in 0..k {
        let j = rng.gen_range(i..indices.len());
        indices.swap(i, j);
    }
    indices.truncate(k);

    indices.into_iter().map(|i| &items[i]).collect()
}

/// Uniform choice; `None` on an empty slice.
pub fn pick<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.gen_range(0..items.len())])
    }
}

/// Uniform choice made only when a `probability` roll succeeds.
pub fn pick_with_probability<'a, T>(
    items: &'a [T],
    probability: f64,
    rng: &mut impl Rng,
) -> Option<&'a T> {
    if chance(probability, rng) {
        pick(items, rng)
    } else {
        None
    }
}

/// Returns true with the given probability.
pub fn chance(probability: f64, rng: &mut impl Rng) -> bool {
    rng.r#gen::<f64>() < probability
}

/// A date between `from` and `to` inclusive. Returns `from` when `to` is earlier.
pub fn date_between(from: Date, to: Date, rng: &mut impl Rng) -> Date {
    let span = (to - from).whole_days();
    if span <= 0 {
        return from;
    }
    from + Duration::days(rng.gen_range(0..=span))
}

/// A date offset from `anchor` by a uniform number of days in `[min_days, max_days]`.
pub fn date_around(anchor: Date, min_days: i64, max_days: i64, rng: &mut impl Rng) -> Date {
    let (lo, hi) = if min_days <= max_days {
        (min_days, max_days)
    } else {
        (max_days, min_days)
    };
    anchor + Duration::days(rng.gen_range(lo..=hi))
}
