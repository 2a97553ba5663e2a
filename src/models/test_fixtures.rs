use rstest::*;

use super::Recipe;

/// A recipe with nothing added yet
#[fixture]
pub fn empty_recipe() -> Recipe {
    Recipe::new()
}

/// Pancake recipe with three ingredients and two steps
///
/// Shared by the model and session tests so they agree on the same baseline.
#[fixture]
pub fn pancake_recipe() -> Recipe {
    let mut recipe = Recipe::new();
    recipe.add_ingredient("Flour", 2.0, "cups");
    recipe.add_ingredient("Milk", 1.5, "cups");
    recipe.add_ingredient("Egg", 1.0, "whole");
    recipe.add_step("Mix");
    recipe.add_step("Bake");
    recipe
}
