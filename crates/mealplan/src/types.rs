use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Days covered by a weekly plan. Sunday is a rest day and never planned.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Recipes assigned to each planned day, keyed in week order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPlan<R>(BTreeMap<Day, Vec<R>>);

impl<R> Default for WeeklyPlan<R> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<R> WeeklyPlan<R> {
    pub fn get(&self, day: Day) -> Option<&[R]> {
        self.0.get(&day).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn days(&self) -> impl Iterator<Item = (Day, &[R])> {
        self.0.iter().map(|(day, recipes)| (*day, recipes.as_slice()))
    }

    pub fn into_inner(self) -> BTreeMap<Day, Vec<R>> {
        self.0
    }

    pub(crate) fn insert(&mut self, day: Day, recipes: Vec<R>) {
        self.0.insert(day, recipes);
    }
}
