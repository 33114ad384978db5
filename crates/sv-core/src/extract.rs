//! Numeric parameter extraction from free-form input text.
//!
//! Recognizes `name = number`, `name: number` and `name number`. Each
//! pattern is applied to the whole text in that order; the last match for a
//! name wins.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Lowercased parameter name -> value.
pub type ParameterMap = BTreeMap<String, f64>;

const NUMBER: &str = r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?";

/// Compiled once, applied in this order.
static PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(&format!(r"(?i)(\w+)\s*=\s*({NUMBER})")).expect("valid regex"),
        Regex::new(&format!(r"(?i)(\w+):\s*({NUMBER})")).expect("valid regex"),
        Regex::new(&format!(r"(?i)(\w+)\s+({NUMBER})")).expect("valid regex"),
    ]
});

/// Scan `content` and return every numeric `name -> value` pair found.
///
/// Tokens that look numeric but do not parse as `f64` are skipped. An empty
/// map is a valid result.
pub fn extract_parameters(content: &str) -> ParameterMap {
    let mut parameters = ParameterMap::new();
    for pattern in PATTERNS.iter() {
        for caps in pattern.captures_iter(content) {
            let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            if let Ok(value) = value.as_str().parse::<f64>() {
                parameters.insert(name.as_str().to_lowercase(), value);
            }
        }
    }
    parameters
}
