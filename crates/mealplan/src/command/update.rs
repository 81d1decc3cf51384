use mealweek_db::table::WeeklyPlan as PlanTable;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

#[derive(Validate, Deserialize, Clone, Debug, Default)]
#[validate(schema(function = "validate_has_field"))]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: Option<String>,
    pub plan_data: Option<Map<String, Value>>,
}

fn validate_has_field(input: &UpdateInput) -> Result<(), ValidationError> {
    if input.name.is_none() && input.plan_data.is_none() {
        return Err(ValidationError::new("empty_update")
            .with_message("at least one of name or plan_data is required".into()));
    }

    Ok(())
}

impl super::Command {
    pub async fn update(&self, id: i64, input: UpdateInput) -> mealweek_shared::Result<()> {
        input.validate()?;

        let mut statement = Query::update()
            .table(PlanTable::Table)
            .value(PlanTable::UpdatedAt, super::now())
            .and_where(Expr::col(PlanTable::Id).eq(id))
            .to_owned();

        if let Some(name) = input.name {
            statement.value(PlanTable::Name, name);
        }

        if let Some(plan_data) = input.plan_data {
            statement.value(PlanTable::PlanData, Value::Object(plan_data));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealweek_shared::not_found!("Plan not found");
        }

        tracing::info!(plan.id = id, "Weekly plan updated");

        Ok(())
    }
}
