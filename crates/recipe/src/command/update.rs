use mealweek_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::validate_ingredients;

/// Partial update: only the fields that are `Some` are written.
#[derive(Validate, Deserialize, Clone, Debug, Default)]
#[validate(schema(function = "validate_has_field"))]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: Option<String>,
    #[validate(
        length(min = 1, message = "ingredients must contain at least one entry"),
        custom(function = "validate_ingredients")
    )]
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
}

fn validate_has_field(input: &UpdateInput) -> Result<(), ValidationError> {
    if input.name.is_none() && input.ingredients.is_none() && input.instructions.is_none() {
        return Err(ValidationError::new("empty_update")
            .with_message("at least one of name, ingredients or instructions is required".into()));
    }

    Ok(())
}

impl super::Command {
    pub async fn update(&self, id: i64, input: UpdateInput) -> mealweek_shared::Result<()> {
        input.validate()?;

        let mut statement = Query::update()
            .table(Recipe::Table)
            .value(Recipe::UpdatedAt, super::now())
            .and_where(Expr::col(Recipe::Id).eq(id))
            .to_owned();

        if let Some(name) = input.name {
            statement.value(Recipe::Name, name);
        }

        if let Some(ingredients) = input.ingredients {
            statement.value(Recipe::Ingredients, serde_json::to_value(&ingredients)?);
        }

        if let Some(instructions) = input.instructions {
            statement.value(Recipe::Instructions, instructions);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealweek_shared::not_found!("Recipe not found");
        }

        tracing::info!(recipe.id = id, "Recipe updated");

        Ok(())
    }
}
