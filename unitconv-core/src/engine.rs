//! The conversion engine: category listing and value conversion

use crate::category::{Category, CategoryRegistry, CATEGORIES};
use crate::ConvertError;

/// Pure conversion engine over the static category registry.
///
/// The registry is built once behind a `LazyLock` and never mutated, so the
/// engine is freely shareable across threads without locking.
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine {
    registry: &'static CategoryRegistry,
}

impl ConversionEngine {
    pub fn new() -> Self {
        ConversionEngine {
            registry: &CATEGORIES,
        }
    }

    /// All categories with their ordered unit lists, for display population
    pub fn list_categories(&self) -> &[Category] {
        self.registry.all()
    }

    /// Convert `value` from `from_unit` to `to_unit` within `category`.
    ///
    /// Returns the full-precision result; display rounding is the caller's
    /// concern.
    pub fn convert(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
        value: f64,
    ) -> Result<f64, ConvertError> {
        if !value.is_finite() {
            return Err(ConvertError::InvalidValue(value));
        }

        let category = self
            .registry
            .get(category)
            .ok_or_else(|| ConvertError::UnknownCategory(category.to_string()))?;

        if !category.contains_unit(from_unit) {
            return Err(ConvertError::UnknownUnit(from_unit.to_string()));
        }
        if !category.contains_unit(to_unit) {
            return Err(ConvertError::UnknownUnit(to_unit.to_string()));
        }

        category.rule.convert(from_unit, to_unit, value)
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn engine() -> ConversionEngine {
        ConversionEngine::new()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_length_kilometer_to_meter() {
        assert_eq!(engine().convert("Length", "Kilometer", "Meter", 1.0), Ok(1000.0));
    }

    #[test]
    fn test_length_inch_to_centimeter() {
        assert_close(engine().convert("Length", "Inch", "Centimeter", 1.0).unwrap(), 2.54);
    }

    #[test]
    fn test_weight_pound_to_kilogram() {
        assert_close(engine().convert("Weight", "Pound", "Kilogram", 1.0).unwrap(), 0.453592);
    }

    #[test]
    fn test_currency_dollar_to_pkr() {
        assert_eq!(engine().convert("Currency", "Dollar", "PKR", 1.0), Ok(200.0));
    }

    #[test]
    fn test_time_hour_to_minute() {
        assert_eq!(engine().convert("Time", "Hour", "Minute", 2.0), Ok(120.0));
    }

    #[test]
    fn test_volume_cubic_meter_matches_source_table() {
        // Cubic Meter shares factor 1 with Liter in the factor table.
        assert_eq!(engine().convert("Volume", "Cubic Meter", "Liter", 1.0), Ok(1.0));
    }

    #[test]
    fn test_temperature_celsius_to_fahrenheit() {
        assert_eq!(engine().convert("Temperature", "Celsius", "Fahrenheit", 0.0), Ok(32.0));
        assert_eq!(engine().convert("Temperature", "Celsius", "Fahrenheit", 100.0), Ok(212.0));
    }

    #[test]
    fn test_temperature_celsius_to_kelvin() {
        assert_eq!(engine().convert("Temperature", "Celsius", "Kelvin", 0.0), Ok(273.15));
    }

    #[test]
    fn test_temperature_fahrenheit_to_celsius() {
        assert_eq!(engine().convert("Temperature", "Fahrenheit", "Celsius", 32.0), Ok(0.0));
    }

    #[test]
    fn test_temperature_kelvin_to_celsius() {
        assert_eq!(engine().convert("Temperature", "Kelvin", "Celsius", 273.15), Ok(0.0));
    }

    #[test]
    fn test_temperature_fahrenheit_to_kelvin() {
        assert_close(
            engine().convert("Temperature", "Fahrenheit", "Kelvin", 32.0).unwrap(),
            273.15,
        );
    }

    #[test]
    fn test_temperature_kelvin_to_fahrenheit() {
        assert_close(
            engine().convert("Temperature", "Kelvin", "Fahrenheit", 273.15).unwrap(),
            32.0,
        );
    }

    #[test]
    fn test_temperature_below_zero() {
        assert_eq!(engine().convert("Temperature", "Celsius", "Fahrenheit", -40.0), Ok(-40.0));
    }

    #[test]
    fn test_identity_law_all_linear_categories() {
        let engine = engine();
        for category in engine.list_categories() {
            if category.id == "Temperature" {
                continue;
            }
            for unit in &category.units {
                let result = engine.convert(&category.id, unit, unit, 12.5).unwrap();
                assert_close(result, 12.5);
            }
        }
    }

    #[test]
    fn test_round_trip_all_linear_pairs() {
        let engine = engine();
        let value = 3.7;
        for category in engine.list_categories() {
            if category.id == "Temperature" {
                continue;
            }
            for from in &category.units {
                for to in &category.units {
                    let there = engine.convert(&category.id, from, to, value).unwrap();
                    let back = engine.convert(&category.id, to, from, there).unwrap();
                    assert!(
                        (back - value).abs() < EPSILON * value.abs(),
                        "{}: {} -> {} -> {}",
                        category.id,
                        from,
                        to,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_invertibility_linear_pairs() {
        let engine = engine();
        for category in engine.list_categories() {
            if category.id == "Temperature" {
                continue;
            }
            for from in &category.units {
                for to in &category.units {
                    let forward = engine.convert(&category.id, from, to, 1.0).unwrap();
                    let inverse = engine.convert(&category.id, to, from, 1.0).unwrap();
                    assert!(
                        (forward * inverse - 1.0).abs() < EPSILON,
                        "{}: {} <-> {}",
                        category.id,
                        from,
                        to
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(
            engine().convert("Bogus", "Meter", "Foot", 1.0),
            Err(ConvertError::UnknownCategory("Bogus".to_string()))
        );
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            engine().convert("Length", "Meter", "Lightyear", 1.0),
            Err(ConvertError::UnknownUnit("Lightyear".to_string()))
        );
        assert_eq!(
            engine().convert("Length", "Furlong", "Meter", 1.0),
            Err(ConvertError::UnknownUnit("Furlong".to_string()))
        );
    }

    #[test]
    fn test_unit_from_another_category_is_unknown() {
        // "Second" exists, but not in Length.
        assert_eq!(
            engine().convert("Length", "Meter", "Second", 1.0),
            Err(ConvertError::UnknownUnit("Second".to_string()))
        );
    }

    #[test]
    fn test_invalid_value() {
        let engine = engine();
        assert!(matches!(
            engine.convert("Length", "Meter", "Foot", f64::NAN),
            Err(ConvertError::InvalidValue(_))
        ));
        assert_eq!(
            engine.convert("Length", "Meter", "Foot", f64::INFINITY),
            Err(ConvertError::InvalidValue(f64::INFINITY))
        );
        assert_eq!(
            engine.convert("Length", "Meter", "Foot", f64::NEG_INFINITY),
            Err(ConvertError::InvalidValue(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_negative_values_allowed() {
        assert_close(
            engine().convert("Temperature", "Celsius", "Kelvin", -10.0).unwrap(),
            263.15,
        );
        assert_eq!(engine().convert("Length", "Meter", "Kilometer", -500.0), Ok(-0.5));
    }

    #[test]
    fn test_list_categories_for_display() {
        let engine = engine();
        let categories = engine.list_categories();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].id, "Length");
        assert_eq!(categories[2].units, ["Celsius", "Fahrenheit", "Kelvin"]);
    }
}
