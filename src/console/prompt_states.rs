use log::{debug, warn};

use super::app::{SessionContext, SessionState};
use super::parse::{is_yes, parse_count, parse_decimal};
use crate::error::Result;

pub(crate) struct IngredientCount;

impl SessionState for IngredientCount {
    fn prompt(&self) -> String {
        "Enter the number of ingredients:".to_string()
    }

    fn handle_line(
        &mut self,
        line: &str,
        _context: &mut SessionContext,
    ) -> Result<Option<Box<dyn SessionState>>> {
        let count = parse_count(line)?;
        if count < 0 {
            warn!("Ingredient count {} is negative, adding none", count);
        }

        if count > 0 {
            Ok(Some(Box::new(IngredientName::new(1, count))))
        } else {
            Ok(Some(Box::new(StepCount)))
        }
    }
}

pub(crate) struct IngredientName {
    position: i32,
    total: i32,
}

impl IngredientName {
    pub fn new(position: i32, total: i32) -> Self {
        Self { position, total }
    }
}

impl SessionState for IngredientName {
    fn prompt(&self) -> String {
        format!("Enter ingredient {} name:", self.position)
    }

    fn handle_line(
        &mut self,
        line: &str,
        _context: &mut SessionContext,
    ) -> Result<Option<Box<dyn SessionState>>> {
        Ok(Some(Box::new(IngredientQuantity {
            position: self.position,
            total: self.total,
            name: line.to_string(),
        })))
    }
}

pub(crate) struct IngredientQuantity {
    position: i32,
    total: i32,
    name: String,
}

impl SessionState for IngredientQuantity {
    fn prompt(&self) -> String {
        format!("Enter ingredient {} quantity:", self.position)
    }

    fn handle_line(
        &mut self,
        line: &str,
        _context: &mut SessionContext,
    ) -> Result<Option<Box<dyn SessionState>>> {
        let quantity = parse_decimal(line)?;

        Ok(Some(Box::new(IngredientUnit {
            position: self.position,
            total: self.total,
            name: std::mem::take(&mut self.name),
            quantity,
        })))
    }
}

pub(crate) struct IngredientUnit {
    position: i32,
    total: i32,
    name: String,
    quantity: f64,
}

impl SessionState for IngredientUnit {
    fn prompt(&self) -> String {
        format!("Enter ingredient {} unit:", self.position)
    }

    fn handle_line(
        &mut self,
        line: &str,
        context: &mut SessionContext,
    ) -> Result<Option<Box<dyn SessionState>>> {
        let name = std::mem::take(&mut self.name);
        debug!("Adding ingredient {} of {}: {}", self.position, self.total, name);
        context.recipe.add_ingredient(name, self.quantity, line);

        // Next ingredient, or onto steps
        if self.position < self.total {
            Ok(Some(Box::new(IngredientName::new(
                self.position + 1,
                self.total,
            ))))
        } else {
            Ok(Some(Box::new(StepCount)))
        }
    }
}

pub(crate) struct StepCount;

impl SessionState for StepCount {
    fn prompt(&self) -> String {
        "Enter the number of steps:".to_string()
    }

    fn handle_line(
        &mut self,
        line: &str,
        _context: &mut SessionContext,
    ) -> Result<Option<Box<dyn SessionState>>> {
        let count = parse_count(line)?;
        if count < 0 {
            warn!("Step count {} is negative, adding none", count);
        }

        if count > 0 {
            Ok(Some(Box::new(StepText {
                position: 1,
                total: count,
            })))
        } else {
            Ok(Some(Box::new(ScalingFactor)))
        }
    }
}

pub(crate) struct StepText {
    position: i32,
    total: i32,
}

impl SessionState for StepText {
    fn prompt(&self) -> String {
        format!("Enter step {}:", self.position)
    }

    fn handle_line(
        &mut self,
        line: &str,
        context: &mut SessionContext,
    ) -> Result<Option<Box<dyn SessionState>>> {
        context.recipe.add_step(line);

        if self.position < self.total {
            Ok(Some(Box::new(StepText {
                position: self.position + 1,
                total: self.total,
            })))
        } else {
            Ok(Some(Box::new(ScalingFactor)))
        }
    }
}

pub(crate) struct ScalingFactor;

impl SessionState for ScalingFactor {
    fn prompt(&self) -> String {
        "Enter the scaling factor (0.5 for half, 2 for double, 3 for triple):".to_string()
    }

    fn handle_line(
        &mut self,
        line: &str,
        context: &mut SessionContext,
    ) -> Result<Option<Box<dyn SessionState>>> {
        let factor = parse_decimal(line)?;
        context.recipe.scale_quantities(factor)?;
        context.display_recipe();

        Ok(Some(Box::new(ResetChoice)))
    }
}

pub(crate) struct ResetChoice;

impl SessionState for ResetChoice {
    fn prompt(&self) -> String {
        "Would you like to reset the quantities to original? (yes/no)".to_string()
    }

    fn handle_line(
        &mut self,
        line: &str,
        context: &mut SessionContext,
    ) -> Result<Option<Box<dyn SessionState>>> {
        if is_yes(line) {
            context.recipe.reset_quantities()?;
            context.display_recipe();
        }

        Ok(Some(Box::new(ClearChoice)))
    }
}

pub(crate) struct ClearChoice;

impl SessionState for ClearChoice {
    fn prompt(&self) -> String {
        "Would you like to clear the recipe to start a new one? (yes/no)".to_string()
    }

    fn handle_line(
        &mut self,
        line: &str,
        context: &mut SessionContext,
    ) -> Result<Option<Box<dyn SessionState>>> {
        if is_yes(line) {
            context.recipe.clear();
        }

        context.finished = true;
        Ok(None)
    }
}
