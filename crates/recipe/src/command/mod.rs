use std::ops::Deref;

use validator::ValidationError;

mod create;
mod delete;
mod update;

pub use create::CreateInput;
pub use update::UpdateInput;

#[derive(Clone)]
pub struct Command {
    state: mealweek_shared::State,
}

impl Deref for Command {
    type Target = mealweek_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: mealweek_shared::State) -> Self {
        Self { state }
    }
}

fn validate_ingredients(ingredients: &[String]) -> Result<(), ValidationError> {
    if ingredients.iter().any(|ingredient| ingredient.trim().is_empty()) {
        return Err(ValidationError::new("blank_ingredient")
            .with_message("ingredients must not contain empty entries".into()));
    }

    Ok(())
}

fn now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
