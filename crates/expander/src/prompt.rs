use mealweek_shared::recipe::Recipe;

pub fn prompt(recipe: &Recipe, language: Option<&str>) -> String {
    let mut prompt = format!(
        "Please provide a detailed cooking recipe for \"{}\" with these ingredients: {}.\n\
         Include step-by-step instructions, cooking time, serving size, and any cooking tips.\n\
         Format the response in a clear, readable way with sections for ingredients, instructions, cooking time, and tips.",
        recipe.name,
        recipe.ingredients.join(", ")
    );

    if let Some(language) = language.map(str::trim).filter(|l| !l.is_empty()) {
        prompt.push_str(&format!(" Respond in {language}."));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_name_and_ingredients() {
        let recipe = Recipe::new("Pho", vec!["rice noodles".to_owned(), "beef".to_owned()]);
        let prompt = prompt(&recipe, None);

        assert!(prompt.contains("recipe for \"Pho\""));
        assert!(prompt.contains("ingredients: rice noodles, beef."));
        assert!(prompt.contains("cooking time"));
        assert!(!prompt.contains("Respond in"));
    }

    #[test]
    fn test_prompt_language() {
        let recipe = Recipe::new("Pho", vec!["beef".to_owned()]);

        assert!(prompt(&recipe, Some("Vietnamese")).ends_with(" Respond in Vietnamese."));
        assert!(!prompt(&recipe, Some("  ")).contains("Respond in"));
    }
}
