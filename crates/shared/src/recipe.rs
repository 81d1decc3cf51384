use serde::{Deserialize, Serialize};

/// A named list of ingredients, the unit a weekly plan is built from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}
