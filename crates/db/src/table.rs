use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum Recipe {
    Table,
    Id,
    Name,
    Ingredients,
    Instructions,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum WeeklyPlan {
    Table,
    Id,
    Name,
    PlanData,
    CreatedAt,
    UpdatedAt,
}
