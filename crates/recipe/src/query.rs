use mealweek_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(FromRow)]
struct RecipeRow {
    id: i64,
    name: String,
    ingredients: sqlx::types::Json<Vec<String>>,
    instructions: String,
    created_at: i64,
    updated_at: i64,
}

/// A recipe as persisted by the store.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecipeRecord {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl RecipeRow {
    fn into_record(self) -> RecipeRecord {
        RecipeRecord {
            id: self.id,
            name: self.name,
            ingredients: self.ingredients.0,
            instructions: self.instructions,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<RecipeRecord> for mealweek_shared::recipe::Recipe {
    fn from(value: RecipeRecord) -> Self {
        Self {
            name: value.name,
            ingredients: value.ingredients,
        }
    }
}

fn select() -> SelectStatement {
    Query::select()
        .columns([
            Recipe::Id,
            Recipe::Name,
            Recipe::Ingredients,
            Recipe::Instructions,
            Recipe::CreatedAt,
            Recipe::UpdatedAt,
        ])
        .from(Recipe::Table)
        .to_owned()
}

impl super::Command {
    /// Every stored recipe, newest first.
    pub async fn list(&self) -> mealweek_shared::Result<Vec<RecipeRecord>> {
        let statement = select()
            .order_by(Recipe::CreatedAt, Order::Desc)
            .order_by(Recipe::Id, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(RecipeRow::into_record).collect())
    }

    pub async fn find(&self, id: i64) -> mealweek_shared::Result<Option<RecipeRecord>> {
        let statement = select()
            .and_where(Expr::col(Recipe::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(RecipeRow::into_record))
    }

    pub async fn load(&self, id: i64) -> mealweek_shared::Result<RecipeRecord> {
        let Some(recipe) = self.find(id).await? else {
            mealweek_shared::not_found!("Recipe not found");
        };

        Ok(recipe)
    }
}
