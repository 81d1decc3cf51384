use mealweek_db::table::WeeklyPlan as PlanTable;
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::prelude::FromRow;

#[derive(FromRow)]
struct PlanRow {
    id: i64,
    name: String,
    plan_data: sqlx::types::Json<Map<String, Value>>,
    created_at: i64,
    updated_at: i64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlanRecord {
    pub id: i64,
    pub name: String,
    pub plan_data: Map<String, Value>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PlanRow {
    fn into_record(self) -> PlanRecord {
        PlanRecord {
            id: self.id,
            name: self.name,
            plan_data: self.plan_data.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn select() -> SelectStatement {
    Query::select()
        .columns([
            PlanTable::Id,
            PlanTable::Name,
            PlanTable::PlanData,
            PlanTable::CreatedAt,
            PlanTable::UpdatedAt,
        ])
        .from(PlanTable::Table)
        .to_owned()
}

impl super::Command {
    pub async fn list(&self) -> mealweek_shared::Result<Vec<PlanRecord>> {
        let statement = select()
            .order_by(PlanTable::CreatedAt, Order::Desc)
            .order_by(PlanTable::Id, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(PlanRow::into_record).collect())
    }

    pub async fn find(&self, id: i64) -> mealweek_shared::Result<Option<PlanRecord>> {
        let statement = select()
            .and_where(Expr::col(PlanTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(PlanRow::into_record))
    }

    pub async fn load(&self, id: i64) -> mealweek_shared::Result<PlanRecord> {
        let Some(plan) = self.find(id).await? else {
            mealweek_shared::not_found!("Plan not found");
        };

        Ok(plan)
    }
}
