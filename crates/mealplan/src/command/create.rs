use mealweek_db::table::WeeklyPlan as PlanTable;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
    pub plan_data: Map<String, Value>,
}

impl super::Command {
    pub async fn create(&self, input: CreateInput) -> mealweek_shared::Result<i64> {
        input.validate()?;

        let now = super::now();
        let statement = Query::insert()
            .into_table(PlanTable::Table)
            .columns([
                PlanTable::Name,
                PlanTable::PlanData,
                PlanTable::CreatedAt,
                PlanTable::UpdatedAt,
            ])
            .values_panic([
                input.name.into(),
                Value::Object(input.plan_data).into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(plan.id = id, "Weekly plan saved");

        Ok(id)
    }
}
