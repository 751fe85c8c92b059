use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{RecipeError, Result};
use crate::recipe::Recipe;

/// Recipe collection shipped with the library.
const BUNDLED_RECIPES: &str = include_str!("../data/recipes.json");

/// Immutable, label-sorted recipe collection.
///
/// Records are validated and sorted once, on construction. The tag
/// vocabulary is derived lazily and cached for the lifetime of the store.
#[derive(Debug)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    tags: OnceLock<Vec<String>>,
}

/// TOML layout: one `[[recipe]]` table per record.
#[derive(Deserialize)]
struct TomlRecipes {
    #[serde(default)]
    recipe: Vec<Recipe>,
}

impl RecipeStore {
    /// Validate `recipes` and sort them by case-insensitive label.
    pub fn from_records(mut recipes: Vec<Recipe>) -> Result<Self> {
        validate(&recipes)?;
        recipes.sort_by(|a, b| compare_labels(&a.label, &b.label));
        debug!(count = recipes.len(), "Recipe store loaded");
        Ok(Self {
            recipes,
            tags: OnceLock::new(),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::from_records(recipes)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TomlRecipes = toml::from_str(content)?;
        Self::from_records(file.recipe)
    }

    /// Load a `.json` or `.toml` recipe file.
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Reading recipe file");
        match ext.as_str() {
            "json" => Self::from_json_str(&content),
            "toml" => Self::from_toml_str(&content),
            other => Err(RecipeError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                format!(".{other}")
            })),
        }
    }

    /// The collection compiled into the library.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_RECIPES)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by its exact label.
    pub fn get(&self, label: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.label == label)
    }

    /// Every tag used in the store, deduplicated and sorted alphabetically.
    pub fn tag_vocabulary(&self) -> &[String] {
        self.tags.get_or_init(|| collect_tags(&self.recipes))
    }
}

impl<'a> IntoIterator for &'a RecipeStore {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// Case-insensitive ordering, falling back to the raw string so the order
/// is total.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn collect_tags(recipes: &[Recipe]) -> Vec<String> {
    let mut tags: Vec<String> = recipes
        .iter()
        .flat_map(|r| r.tags.iter())
        .collect::<HashSet<_>>()
        .into_iter()
        .cloned()
        .collect();
    tags.sort_by(|a, b| compare_tags(a, b));
    tags
}

/// Alphabetical tag ordering: accented letters sort with their base
/// letter (`épicé` between `entrée` and `été`), then case-insensitive,
/// then raw.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    fold_diacritics(a)
        .cmp(&fold_diacritics(b))
        .then_with(|| compare_labels(a, b))
}

/// Lowercase, with Latin accents reduced to the base letter.
fn fold_diacritics(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => folded.push('a'),
            'ç' => folded.push('c'),
            'è' | 'é' | 'ê' | 'ë' => folded.push('e'),
            'ì' | 'í' | 'î' | 'ï' => folded.push('i'),
            'ñ' => folded.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => folded.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => folded.push('u'),
            'ý' | 'ÿ' => folded.push('y'),
            'æ' => folded.push_str("ae"),
            'œ' => folded.push_str("oe"),
            'ß' => folded.push_str("ss"),
            _ => folded.push(c),
        }
    }
    folded
}

fn validate(recipes: &[Recipe]) -> Result<()> {
    let mut seen = HashSet::with_capacity(recipes.len());
    for (index, recipe) in recipes.iter().enumerate() {
        if recipe.label.trim().is_empty() {
            return Err(RecipeError::EmptyLabel { index });
        }
        if !seen.insert(recipe.label.as_str()) {
            return Err(RecipeError::DuplicateLabel(recipe.label.clone()));
        }
        for ingredient in &recipe.ingredients {
            match ingredient.quantity.amount() {
                Some(v) if v < 0.0 => {
                    return Err(RecipeError::InvalidQuantity {
                        recipe: recipe.label.clone(),
                        ingredient: ingredient.label.clone(),
                        reason: format!("negative amount {v}"),
                    });
                }
                Some(_) => {}
                None => warn!(
                    recipe = %recipe.label,
                    ingredient = %ingredient.label,
                    "Quantity is not a number"
                ),
            }
        }
    }
    Ok(())
}
