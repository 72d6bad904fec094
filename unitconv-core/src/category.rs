//! Category definitions - six categories with their unit sets and rules

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::rule::{AffinePair, AffineTransform, ConversionRule};

/// Global category registry, built once and never mutated
pub static CATEGORIES: LazyLock<CategoryRegistry> = LazyLock::new(CategoryRegistry::new);

/// A conversion category: identifier, ordered unit set, and conversion rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The category identifier (e.g. "Length")
    pub id: String,
    /// Unit names in display order
    pub units: Vec<String>,
    /// How values move between this category's units
    pub rule: ConversionRule,
}

impl Category {
    pub fn contains_unit(&self, unit: &str) -> bool {
        self.units.iter().any(|u| u == unit)
    }
}

/// Registry of all known categories, in display order
#[derive(Debug)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        let mut registry = CategoryRegistry {
            categories: Vec::new(),
        };
        registry.register_all_categories();
        registry
    }

    /// Get a category by identifier
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All categories, in display order
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    fn register_linear(&mut self, id: &str, factors: &[(&str, f64)]) {
        self.categories.push(Category {
            id: id.to_string(),
            units: factors.iter().map(|(name, _)| name.to_string()).collect(),
            rule: ConversionRule::Linear {
                factors: factors
                    .iter()
                    .map(|(name, f)| (name.to_string(), *f))
                    .collect(),
            },
        });
    }

    fn register_all_categories(&mut self) {
        self.register_length();
        self.register_weight();
        self.register_temperature();
        self.register_volume();
        self.register_time();
        self.register_currency();
    }

    fn register_length(&mut self) {
        // Base: meter
        self.register_linear(
            "Length",
            &[
                ("Meter", 1.0),
                ("Kilometer", 1000.0),
                ("Centimeter", 0.01),
                ("Millimeter", 0.001),
                ("Inch", 0.0254),
                ("Foot", 0.3048),
            ],
        );
    }

    fn register_weight(&mut self) {
        // Base: gram. "Miligram" spelling is intentional, it is the key
        // callers must pass.
        self.register_linear(
            "Weight",
            &[
                ("Kilogram", 1000.0),
                ("Gram", 1.0),
                ("Miligram", 0.001),
                ("Pound", 453.592),
                ("Ounce", 28.3495),
            ],
        );
    }

    fn register_temperature(&mut self) {
        let units = ["Celsius", "Fahrenheit", "Kelvin"];

        // All 9 ordered pairs, identities included. Each transform evaluates
        // as (value - pre) * scale + post.
        let pair = |from: &str, to: &str, t: AffineTransform| AffinePair {
            from: from.to_string(),
            to: to.to_string(),
            transform: t,
        };

        let pairs = vec![
            pair("Celsius", "Celsius", AffineTransform::IDENTITY),
            pair("Celsius", "Fahrenheit", AffineTransform::new(0.0, 9.0 / 5.0, 32.0)),
            pair("Celsius", "Kelvin", AffineTransform::new(0.0, 1.0, 273.15)),
            pair("Fahrenheit", "Celsius", AffineTransform::new(32.0, 5.0 / 9.0, 0.0)),
            pair("Fahrenheit", "Fahrenheit", AffineTransform::IDENTITY),
            pair("Fahrenheit", "Kelvin", AffineTransform::new(32.0, 5.0 / 9.0, 273.15)),
            pair("Kelvin", "Celsius", AffineTransform::new(0.0, 1.0, -273.15)),
            pair("Kelvin", "Fahrenheit", AffineTransform::new(273.15, 9.0 / 5.0, 32.0)),
            pair("Kelvin", "Kelvin", AffineTransform::IDENTITY),
        ];

        self.categories.push(Category {
            id: "Temperature".to_string(),
            units: units.iter().map(|u| u.to_string()).collect(),
            rule: ConversionRule::Affine { pairs },
        });
    }

    fn register_volume(&mut self) {
        // Base: liter. "Cubic Meter" carries factor 1, same as Liter, even
        // though 1 m^3 = 1000 L. Known table discrepancy, kept as-is:
        // correcting it would change observable results.
        self.register_linear(
            "Volume",
            &[
                ("Liter", 1.0),
                ("Milliliter", 0.001),
                ("Gallon", 3.78541),
                ("Cubic Meter", 1.0),
                ("Cubic Foot", 0.0283168),
                ("Cubic Inch", 0.0000163871),
            ],
        );
    }

    fn register_time(&mut self) {
        // Base: second. Month and Year use the mean Gregorian lengths.
        self.register_linear(
            "Time",
            &[
                ("Second", 1.0),
                ("Minute", 60.0),
                ("Hour", 3600.0),
                ("Day", 86400.0),
                ("Week", 604800.0),
                ("Month", 2629746.0),
                ("Year", 31556952.0),
            ],
        );
    }

    fn register_currency(&mut self) {
        // Base: dollar. Static rates, no refresh.
        self.register_linear(
            "Currency",
            &[
                ("Dollar", 1.0),
                ("Euro", 0.85),
                ("Pound", 0.72),
                ("Rupee", 82.5),
                ("Yen", 110.5),
                ("Ruble", 75.5),
                ("PKR", 200.0),
            ],
        );
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
