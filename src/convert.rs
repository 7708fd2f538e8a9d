// Conversion: one request to the rates endpoint, one output line per
// target currency.

use crate::api::ApiClient;
use crate::error::ConvertError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A resolved conversion job.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub base: String,
    /// Target codes in output order.
    pub targets: Vec<String>,
    /// `None` prints unit rates instead of converted amounts.
    pub quantity: Option<f64>,
}

/// One printed result.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionLine {
    pub base: String,
    pub target: String,
    pub quantity: Option<f64>,
    pub value: f64,
}

impl fmt::Display for ConversionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantity {
            Some(q) => write!(f, "{:.6} {} = {:.6} {}", q, self.base, self.value, self.target),
            None => write!(f, "1 {} = {:.6} {}", self.base, self.value, self.target),
        }
    }
}

/// Fetch rates and compute a line per target, in request order. A code
/// missing from the response converts to zero.
pub fn convert(api: &ApiClient, request: &ConversionRequest) -> Result<Vec<ConversionLine>, ConvertError> {
    let rates = api.latest(&request.base, &request.targets)?.data;
    let lines = request
        .targets
        .iter()
        .map(|target| {
            let rate = rates.get(target).copied().unwrap_or_else(|| {
                log::debug!("no rate for {} in response, using 0", target);
                0.0
            });
            ConversionLine {
                base: request.base.clone(),
                target: target.clone(),
                quantity: request.quantity,
                value: request.quantity.unwrap_or(1.0) * rate,
            }
        })
        .collect();
    Ok(lines)
}

/// Turn the amount field into a number. An empty field falls back to
/// `placeholder`. Every run of ASCII digits is concatenated, so
/// separators and signs vanish: `"12.5"` reads as `125`.
pub fn parse_amount(text: &str, placeholder: &str) -> Result<f64, ConvertError> {
    let source = if text.is_empty() { placeholder } else { text };
    let digits: String = digit_runs().find_iter(source).map(|m| m.as_str()).collect();
    log::debug!("text input: {:?}", source);
    log::debug!("digits: {:?}", digits);
    let quantity = digits.parse::<f64>().map_err(|_| ConvertError::Amount {
        input: source.to_string(),
    })?;
    log::debug!("quantity: {}", quantity);
    Ok(quantity)
}

fn digit_runs() -> &'static Regex {
    static DIGIT_RUNS: OnceLock<Regex> = OnceLock::new();
    DIGIT_RUNS.get_or_init(|| Regex::new("[0-9]+").expect("digit pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_pattern_is_compiled_once() {
        assert!(std::ptr::eq(digit_runs(), digit_runs()));
    }

    #[test]
    fn decimal_point_is_dropped() {
        assert_eq!(parse_amount("12.5", "1").unwrap(), 125.0);
    }

    #[test]
    fn stray_keys_are_ignored() {
        assert_eq!(parse_amount(" j3 0k", "1").unwrap(), 30.0);
    }

    #[test]
    fn empty_field_uses_placeholder() {
        assert_eq!(parse_amount("", "1").unwrap(), 1.0);
    }

    #[test]
    fn no_digits_is_an_error() {
        let err = parse_amount("abc", "1").unwrap_err();
        assert!(matches!(err, ConvertError::Amount { ref input } if input == "abc"));
    }

    #[test]
    fn lines_format_with_six_decimals() {
        let line = ConversionLine {
            base: "EUR".into(),
            target: "USD".into(),
            quantity: Some(2.0),
            value: 2.2,
        };
        assert_eq!(line.to_string(), "2.000000 EUR = 2.200000 USD");
        let unit = ConversionLine {
            quantity: None,
            value: 1.1,
            ..line
        };
        assert_eq!(unit.to_string(), "1 EUR = 1.100000 USD");
    }
}
