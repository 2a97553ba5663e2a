use std::fmt;

use indexmap::IndexMap;
use log::debug;

use super::Ingredient;
use crate::error::{RecipeError, Result};

/// A single recipe held in memory
///
/// Every ingredient name keeps the quantity it was first added with. Scaling and
/// resetting always start from that baseline, never from the current quantity.
#[derive(Debug, Clone, Default)]
pub struct Recipe {
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
    original_quantities: IndexMap<String, f64>, // name -> first-seen quantity
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ingredient, recording its quantity as the baseline if the name is new
    pub fn add_ingredient(
        &mut self,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) {
        let ingredient = Ingredient::new(name, quantity, unit);

        if !self.original_quantities.contains_key(ingredient.name()) {
            self.original_quantities
                .insert(ingredient.name().to_string(), quantity);
        }

        self.ingredients.push(ingredient);
    }

    pub fn add_step(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    /// Set every quantity to its original value multiplied by `factor`
    pub fn scale_quantities(&mut self, factor: f64) -> Result<()> {
        debug!(
            "Scaling {} ingredients by {}",
            self.ingredients.len(),
            factor
        );
        self.apply_to_originals(|original| original * factor)
    }

    /// Discard any scaling and restore the original quantities
    pub fn reset_quantities(&mut self) -> Result<()> {
        debug!("Resetting {} ingredients", self.ingredients.len());
        self.apply_to_originals(|original| original)
    }

    /// Remove all ingredients, steps and recorded baselines
    pub fn clear(&mut self) {
        debug!(
            "Clearing recipe ({} ingredients, {} steps)",
            self.ingredients.len(),
            self.steps.len()
        );
        self.ingredients.clear();
        self.steps.clear();
        self.original_quantities.clear();
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn original_quantity(&self, name: &str) -> Option<f64> {
        self.original_quantities.get(name).copied()
    }

    pub fn original_quantity_count(&self) -> usize {
        self.original_quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.steps.is_empty()
    }

    fn apply_to_originals(&mut self, quantity_for: impl Fn(f64) -> f64) -> Result<()> {
        for ingredient in &mut self.ingredients {
            let original = self
                .original_quantities
                .get(ingredient.name())
                .copied()
                .ok_or_else(|| {
                    RecipeError::MissingOriginalQuantity(ingredient.name().to_string())
                })?;

            ingredient.set_quantity(quantity_for(original));
        }

        Ok(())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe Details:")?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "- {}", ingredient)?;
        }

        writeln!(f, "\nSteps:")?;
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, step)?;
        }

        Ok(())
    }
}
