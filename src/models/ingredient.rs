use std::fmt;

/// A single ingredient line within a recipe
///
/// Name and unit are fixed once created; only the owning recipe changes the quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    name: String,
    quantity: f64,
    unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub(crate) fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} of {}",
            format_quantity(self.quantity),
            self.unit,
            self.name
        )
    }
}

/// Shortest round-trip form, switching to `1E+21` / `1.5E-07` style for
/// decimal exponents of 15 and above or below -5.
fn format_quantity(quantity: f64) -> String {
    if !quantity.is_finite() {
        return quantity.to_string();
    }

    let scientific = format!("{:e}", quantity);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return quantity.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return quantity.to_string();
    };

    if (-5..15).contains(&exponent) {
        quantity.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}E{}{:02}", mantissa, sign, exponent.abs())
    }
}
