use mealweek_db::table::Recipe;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use super::validate_ingredients;

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "ingredients must contain at least one entry"),
        custom(function = "validate_ingredients")
    )]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl super::Command {
    pub async fn create(&self, input: CreateInput) -> mealweek_shared::Result<i64> {
        input.validate()?;

        let now = super::now();
        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Name,
                Recipe::Ingredients,
                Recipe::Instructions,
                Recipe::CreatedAt,
                Recipe::UpdatedAt,
            ])
            .values_panic([
                input.name.into(),
                serde_json::to_value(&input.ingredients)?.into(),
                input.instructions.unwrap_or_default().into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(recipe.id = id, "Recipe created");

        Ok(id)
    }
}
