#![allow(dead_code)]

use mealweek_recipe::CreateInput;
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

pub fn create_input(name: &str, ingredients: &[&str]) -> CreateInput {
    CreateInput {
        name: name.to_owned(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        instructions: None,
    }
}
