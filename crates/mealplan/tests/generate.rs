use mealweek_mealplan::Day;
use strum::VariantArray;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_generate_from_stored_recipes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    for name in ["Pho", "Banh mi", "Com tam"] {
        sqlx::query(
            "INSERT INTO recipe (name, ingredients, instructions, created_at, updated_at) VALUES (?, ?, '', 0, 0)",
        )
        .bind(name)
        .bind(r#"["rice"]"#)
        .execute(&state.write_db)
        .await?;
    }

    let names = sqlx::query_scalar::<_, String>("SELECT name FROM recipe")
        .fetch_all(&state.read_db)
        .await?;

    let plan = mealweek_mealplan::generate(&names);

    assert_eq!(plan.len(), Day::VARIANTS.len());
    for day in Day::VARIANTS {
        let meals = plan.get(*day).unwrap();
        assert!(meals.len() == 2 || meals.len() == 3);
        assert!(meals.iter().all(|m| names.contains(m)));
    }

    Ok(())
}
