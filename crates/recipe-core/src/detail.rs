use std::fmt;

use crate::recipe::{capitalize, Quantity, Recipe};
use crate::scale::{emphasizes, ScaleControl};

/// Display projection of one recipe at a given scale.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeDetail {
    pub title: String,
    pub img: String,
    pub ingredients: Vec<IngredientLine>,
    pub steps: Vec<StepLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IngredientLine {
    pub label: String,
    pub amount: Quantity,
    pub unit: String,
    /// Drawn in bold when the recipe is scaled above 1.
    pub emphasized: bool,
}

impl IngredientLine {
    /// Amount followed by its unit, e.g. `500g`.
    pub fn quantity_text(&self) -> String {
        format!("{}{}", self.amount, self.unit)
    }
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}{}", self.label, self.amount, self.unit)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepLine {
    /// 1-based position.
    pub number: usize,
    pub text: String,
}

impl fmt::Display for StepLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.text)
    }
}

impl RecipeDetail {
    /// Project `recipe` at the scale held by `scale`. No recipe, no detail.
    pub fn project(recipe: Option<&Recipe>, scale: &ScaleControl) -> Option<Self> {
        recipe.map(|r| Self::build(r, scale.value(), scale.is_emphasized()))
    }

    /// Project with a raw factor. NaN renders every amount as `NaN`.
    pub fn with_factor(recipe: &Recipe, factor: f64) -> Self {
        Self::build(recipe, factor, emphasizes(factor))
    }

    fn build(recipe: &Recipe, factor: f64, emphasized: bool) -> Self {
        let ingredients = recipe
            .ingredients
            .iter()
            .map(|ingredient| IngredientLine {
                label: capitalize(&ingredient.label),
                amount: ingredient.quantity.scaled(factor),
                unit: ingredient.unit.clone(),
                emphasized,
            })
            .collect();
        let steps = recipe
            .steps
            .iter()
            .enumerate()
            .map(|(i, text)| StepLine {
                number: i + 1,
                text: text.clone(),
            })
            .collect();

        Self {
            title: recipe.label.clone(),
            img: recipe.img.clone(),
            ingredients,
            steps,
        }
    }
}
