use rand::seq::IndexedRandom;
use strum::VariantArray;

use crate::{Day, WeeklyPlan};

const MEALS_PER_DAY: [usize; 2] = [2, 3];

/// Builds a random plan: each day gets two or three recipes drawn uniformly
/// with replacement from `recipes`. An empty pool yields an empty plan.
pub fn generate<R: Clone>(recipes: &[R]) -> WeeklyPlan<R> {
    generate_with(recipes, &mut rand::rng())
}

/// Same as [`generate`] with an explicit random source, so a seeded
/// generator reproduces the same plan.
pub fn generate_with<R, G>(recipes: &[R], rng: &mut G) -> WeeklyPlan<R>
where
    R: Clone,
    G: rand::Rng + ?Sized,
{
    let mut plan = WeeklyPlan::default();

    if recipes.is_empty() {
        return plan;
    }

    for day in Day::VARIANTS {
        let count = MEALS_PER_DAY.choose(rng).copied().unwrap_or(2);
        let meals = (0..count)
            .filter_map(|_| recipes.choose(rng).cloned())
            .collect();

        plan.insert(*day, meals);
    }

    plan
}
