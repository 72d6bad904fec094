//! Unitconv Core - Conversion Engine
//!
//! Pure conversion logic over a static registry of categories:
//! - Length (Meter, Kilometer, Centimeter, Millimeter, Inch, Foot)
//! - Weight (Kilogram, Gram, Miligram, Pound, Ounce)
//! - Temperature (Celsius, Fahrenheit, Kelvin)
//! - Volume (Liter, Milliliter, Gallon, Cubic Meter, Cubic Foot, Cubic Inch)
//! - Time (Second, Minute, Hour, Day, Week, Month, Year)
//! - Currency (Dollar, Euro, Pound, Rupee, Yen, Ruble, PKR — static rates)
//!
//! Linear categories rescale through a common base unit; Temperature uses an
//! explicit affine pair table. The registry is immutable after construction
//! and every conversion is a bounded-time table lookup plus arithmetic.

mod category;
mod engine;
mod error;
mod rule;

pub use category::{Category, CategoryRegistry, CATEGORIES};
pub use engine::ConversionEngine;
pub use error::ConvertError;
pub use rule::{AffinePair, AffineTransform, ConversionRule};
