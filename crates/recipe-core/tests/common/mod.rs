use recipe_core::recipe::{Ingredient, Quantity, Recipe};
use recipe_core::store::RecipeStore;

/// Build an ingredient with a numeric amount.
pub fn ingredient(label: &str, amount: f64, unit: &str) -> Ingredient {
    Ingredient {
        label: label.to_string(),
        quantity: Quantity::Amount(amount),
        unit: unit.to_string(),
    }
}

/// Build a minimal recipe with a single ingredient and step.
pub fn recipe(label: &str, tags: &[&str]) -> Recipe {
    Recipe {
        label: label.to_string(),
        ingredients: vec![ingredient("farine", 100.0, "g")],
        steps: vec!["Mélanger".to_string()],
        img: format!("img/{label}.jpg"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Five recipes, deliberately out of order and with mixed label casing.
///
/// Sorted order: Crêpes, houmous, Sorbet citron, Tartare, Tarte aux pommes.
pub fn sample_store() -> RecipeStore {
    RecipeStore::from_records(vec![
        recipe("Tarte aux pommes", &["dessert", "vegetarien"]),
        recipe("houmous", &["vegan", "entree"]),
        recipe("Tartare", &["plat", "rapide"]),
        recipe("Sorbet citron", &["vegan", "dessert"]),
        recipe("Crêpes", &["dessert"]),
    ])
    .expect("valid sample store")
}

/// The single-recipe store used in the end-to-end scenario.
pub fn crepes_store() -> RecipeStore {
    let json = r#"[
        {
            "label": "Crêpes",
            "ingredients": [{ "label": "Farine", "quantity": 250, "unit": "g" }],
            "steps": ["Mélanger", "Cuire"],
            "img": "img/crepes.jpg",
            "tags": ["dessert"]
        }
    ]"#;
    RecipeStore::from_json_str(json).expect("valid crepes store")
}

/// Write `content` to a temp file with the given extension.
///
/// The file stays alive as long as the returned `NamedTempFile` is not dropped.
pub fn write_temp(content: &str, extension: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("create temp file");
    f.write_all(content.as_bytes()).expect("write temp data");
    f.flush().expect("flush");
    f
}

pub fn labels(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.label.clone()).collect()
}
