use crate::config::CM_TO_IN_CONVERSION_RATIO;

/// Returned whenever the input cannot be read as a number.
pub const NOT_AVAILABLE: &str = "n/a";

/// Enough fractional digits to print any `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Numeric coercion used by the height converter.
pub trait ToCentimeters {
    fn to_centimeters(&self) -> Option<f64>;
}

impl ToCentimeters for f64 {
    fn to_centimeters(&self) -> Option<f64> {
        Some(*self)
    }
}

impl ToCentimeters for f32 {
    fn to_centimeters(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl ToCentimeters for i32 {
    fn to_centimeters(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl ToCentimeters for i64 {
    fn to_centimeters(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl ToCentimeters for u32 {
    fn to_centimeters(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl ToCentimeters for u64 {
    fn to_centimeters(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl ToCentimeters for str {
    fn to_centimeters(&self) -> Option<f64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Some(0.0);
        }
        // Rust also parses "inf"/"nan" spellings; those are not heights.
        if !trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
        {
            return None;
        }
        trimmed.parse::<f64>().ok()
    }
}

impl ToCentimeters for String {
    fn to_centimeters(&self) -> Option<f64> {
        self.as_str().to_centimeters()
    }
}

impl ToCentimeters for serde_json::Value {
    fn to_centimeters(&self) -> Option<f64> {
        match self {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.to_centimeters(),
            _ => None,
        }
    }
}

impl<T: ToCentimeters> ToCentimeters for Option<T> {
    fn to_centimeters(&self) -> Option<f64> {
        self.as_ref().and_then(ToCentimeters::to_centimeters)
    }
}

impl<T: ToCentimeters + ?Sized> ToCentimeters for &T {
    fn to_centimeters(&self) -> Option<f64> {
        (**self).to_centimeters()
    }
}

/// Converts centimeters to a display string in inches, e.g. `50"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightConverter {
    ratio: f64,
}

impl Default for HeightConverter {
    fn default() -> Self {
        Self::new(CM_TO_IN_CONVERSION_RATIO)
    }
}

impl HeightConverter {
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    pub fn convert<V: ToCentimeters + ?Sized>(&self, value: &V, decimals: usize) -> String {
        let Some(centimeters) = value.to_centimeters() else {
            return NOT_AVAILABLE.to_string();
        };
        let inches = centimeters * self.ratio;
        if !inches.is_finite() {
            return NOT_AVAILABLE.to_string();
        }
        format!("{}\"", to_fixed(inches, decimals))
    }
}

/// Converts with the default ratio.
pub fn convert_height<V: ToCentimeters + ?Sized>(value: &V, decimals: usize) -> String {
    HeightConverter::default().convert(value, decimals)
}

/// Fixed-point formatting with exact ties rounded away from zero.
fn to_fixed(value: f64, decimals: usize) -> String {
    let magnitude = value.abs();
    // std formatting sends exact ties to the even digit.
    let magnitude = if is_exact_tie(magnitude, decimals) {
        magnitude.next_up()
    } else {
        magnitude
    };
    let digits = format!("{:.*}", decimals, magnitude);
    if value < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

fn is_exact_tie(magnitude: f64, decimals: usize) -> bool {
    let exact = format!("{:.*}", EXACT_DIGITS, magnitude);
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let fraction = fraction.as_bytes();
    fraction.get(decimals) == Some(&b'5') && fraction[decimals + 1..].iter().all(|&b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_value_is_not_available() {
        assert_eq!(convert_height(&None::<f64>, 0), "n/a");
        assert_eq!(convert_height(&json!(null), 0), "n/a");
    }

    #[test]
    fn test_converts_with_rounding() {
        assert_eq!(convert_height(&127, 0), "50\"");
        assert_eq!(convert_height(&0, 0), "0\"");
        assert_eq!(convert_height(&100, 2), "39.37\"");
        assert_eq!(convert_height(&180.0, 1), "70.9\"");
    }

    #[test]
    fn test_non_numeric_strings() {
        assert_eq!(convert_height("abc", 0), "n/a");
        assert_eq!(convert_height("unknown", 0), "n/a");
        assert_eq!(convert_height("n/a", 0), "n/a");
        assert_eq!(convert_height("inf", 0), "n/a");
        assert_eq!(convert_height("NaN", 0), "n/a");
        assert_eq!(convert_height(&f64::NAN, 0), "n/a");
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(convert_height("127", 0), "50\"");
        assert_eq!(convert_height(" 200 ", 0), "79\"");
        assert_eq!(convert_height("", 0), "0\"");
        assert_eq!(convert_height(&json!("66"), 0), "26\"");
        assert_eq!(convert_height(&json!(66), 0), "26\"");
    }

    #[test]
    fn test_negative_values_keep_sign() {
        assert_eq!(convert_height(&-127, 0), "-50\"");
        assert_eq!(convert_height(&-1, 0), "-0\"");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        let identity = HeightConverter::new(1.0);
        assert_eq!(identity.convert(&2.5, 0), "3\"");
        assert_eq!(identity.convert(&0.125, 2), "0.13\"");
        assert_eq!(identity.convert(&-2.5, 0), "-3\"");
        assert_eq!(identity.convert(&2.4, 0), "2\"");
    }

    #[test]
    fn test_huge_values_print_positionally() {
        let identity = HeightConverter::new(1.0);
        assert_eq!(identity.convert(&1e21, 0), "1000000000000000000000\"");
        assert_eq!(identity.convert(&1e21, 1), "1000000000000000000000.0\"");
        assert_eq!(identity.convert(&-1e21, 0), "-1000000000000000000000\"");
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let converter = HeightConverter::default();
        let first = converter.convert("172", 2);
        for _ in 0..10 {
            assert_eq!(converter.convert("172", 2), first);
        }
    }
}
