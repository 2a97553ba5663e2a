mod ingredient;
mod recipe;

#[cfg(test)]
pub mod test_fixtures;

pub use ingredient::Ingredient;
pub use recipe::Recipe;
