use mealweek_db::table::WeeklyPlan as PlanTable;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn delete(&self, id: i64) -> mealweek_shared::Result<()> {
        let statement = Query::delete()
            .from_table(PlanTable::Table)
            .and_where(Expr::col(PlanTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealweek_shared::not_found!("Plan not found");
        }

        tracing::info!(plan.id = id, "Weekly plan deleted");

        Ok(())
    }
}
