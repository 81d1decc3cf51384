use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[tracing::instrument(skip(config))]
pub async fn print(config: mealweek::config::Config, seed: Option<u64>) -> Result<()> {
    let pool = mealweek::create_pool(&config.database.url, 1).await?;
    mealweek_db::migrate(&pool).await?;

    let command = mealweek_recipe::Command::new(mealweek_shared::State {
        read_db: pool.clone(),
        write_db: pool.clone(),
    });

    let recipes = command
        .list()
        .await?
        .into_iter()
        .map(mealweek_shared::recipe::Recipe::from)
        .collect::<Vec<_>>();

    if recipes.is_empty() {
        tracing::warn!("No recipes stored, the plan is empty");
    }

    let plan = match seed {
        Some(seed) => mealweek_mealplan::generate_with(&recipes, &mut StdRng::seed_from_u64(seed)),
        None => mealweek_mealplan::generate(&recipes),
    };

    println!("{}", serde_json::to_string_pretty(&plan)?);

    pool.close().await;

    Ok(())
}
