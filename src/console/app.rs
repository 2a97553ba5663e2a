use crate::error::Result;
use crate::models::Recipe;

use super::prompt_states::IngredientCount;

pub enum SessionAction {
    Continue, // More prompts to answer
    Finished, // Last prompt answered
}

pub struct RecipeSession {
    state: Box<dyn SessionState>,
    context: SessionContext,
}

pub struct SessionContext {
    pub recipe: Recipe,
    pub output: String, // Rendered text waiting to be written
    pub finished: bool,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            recipe: Recipe::new(),
            output: String::new(),
            finished: false,
        }
    }

    /// Queue the current recipe rendering for output
    pub fn display_recipe(&mut self) {
        self.output.push_str(&self.recipe.to_string());
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) trait SessionState {
    fn prompt(&self) -> String;
    fn handle_line(
        &mut self,
        line: &str,
        context: &mut SessionContext,
    ) -> Result<Option<Box<dyn SessionState>>>;
}

impl RecipeSession {
    pub fn new() -> Self {
        Self {
            state: Box::new(IngredientCount),
            context: SessionContext::new(),
        }
    }

    pub fn prompt(&self) -> String {
        self.state.prompt()
    }

    pub fn handle_line(&mut self, line: &str) -> Result<SessionAction> {
        if let Some(next_state) = self.state.handle_line(line, &mut self.context)? {
            self.state = next_state
        }

        if self.context.finished {
            Ok(SessionAction::Finished)
        } else {
            Ok(SessionAction::Continue)
        }
    }

    /// Take whatever output the last answer produced
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.context.output)
    }

    #[cfg(test)]
    pub fn recipe(&self) -> &Recipe {
        &self.context.recipe
    }

    /// Consume the session and return the recipe
    pub fn into_recipe(self) -> Recipe {
        self.context.recipe
    }
}

impl Default for RecipeSession {
    fn default() -> Self {
        Self::new()
    }
}
