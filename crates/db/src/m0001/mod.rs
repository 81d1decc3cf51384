mod recipe;
mod weekly_plan;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealweek",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIdx1,
        weekly_plan::CreateTable,
        weekly_plan::CreateIdx1,
    ]
);
