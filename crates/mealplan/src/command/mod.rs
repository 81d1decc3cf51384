use std::ops::Deref;

mod create;
mod delete;
mod update;

pub use create::CreateInput;
pub use update::UpdateInput;

/// Weekly plan record store.
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

fn now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
