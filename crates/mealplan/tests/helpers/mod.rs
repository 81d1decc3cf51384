#![allow(dead_code)]

use mealweek_mealplan::CreateInput;
use mealweek_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    mealweek_db::migrate(&pool).await?;

    Ok(State {
        read_db: pool.clone(),
        write_db: pool,
    })
}

pub fn create_input(name: &str, plan_data: serde_json::Value) -> CreateInput {
    CreateInput {
        name: name.to_owned(),
        plan_data: plan_data.as_object().cloned().unwrap_or_default(),
    }
}
