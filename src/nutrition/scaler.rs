use serde::{Deserialize, Serialize};

/// Quantity the reference values are expressed for.
pub const REFERENCE_GRAMS: f64 = 100.0;

/// Calories and macro-nutrients, either per 100 g or for a serving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub const ZERO: Macros = Macros {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    fn map(self, f: impl Fn(f64) -> f64) -> Macros {
        Macros {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fat: f(self.fat),
        }
    }

    pub fn rounded(self) -> Macros {
        self.map(round2)
    }
}

/// Two decimal places, halves rounded away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn scale(reference: Macros, quantity_g: f64) -> Macros {
    reference.map(|v| round2(v * quantity_g / REFERENCE_GRAMS))
}

/// Parses a quantity typed by the user. Blank, non-numeric, negative or
/// non-finite input yields `None`.
pub fn parse_quantity(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q >= 0.0)
}

/// Scales by a raw quantity string; an unusable quantity zeroes every value.
pub fn scale_input(reference: Macros, quantity: &str) -> Macros {
    match parse_quantity(quantity) {
        Some(q) => scale(reference, q),
        None => Macros::ZERO,
    }
}

/// Form model behind the meal entry: one reference tuple, the quantity the
/// user is typing, and the values shown for that quantity.
#[derive(Debug, Clone)]
pub struct MacroScaler {
    reference: Macros,
    quantity: String,
    values: Macros,
}

impl Default for MacroScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroScaler {
    pub fn new() -> Self {
        Self::with_reference(Macros::ZERO)
    }

    pub fn with_reference(reference: Macros) -> Self {
        let mut scaler = Self {
            reference,
            quantity: String::new(),
            values: Macros::ZERO,
        };
        scaler.reset();
        scaler
    }

    /// Switching food discards whatever was typed and starts from 100 g.
    pub fn select_food(&mut self, reference: Macros) {
        self.reference = reference;
        self.reset();
    }

    pub fn set_quantity(&mut self, text: impl Into<String>) {
        self.quantity = text.into();
        self.recompute();
    }

    pub fn set_reference(&mut self, reference: Macros) {
        self.reference = reference;
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.quantity = format_grams(REFERENCE_GRAMS);
        self.values = self.reference.rounded();
    }

    pub fn reference(&self) -> Macros {
        self.reference
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn values(&self) -> Macros {
        self.values
    }

    fn recompute(&mut self) {
        self.values = scale_input(self.reference, &self.quantity);
    }
}

fn format_grams(grams: f64) -> String {
    format!("{}", grams)
}
