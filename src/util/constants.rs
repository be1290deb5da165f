/// Names that evaluate to a fixed value wherever a number is expected.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Looks up a named constant.
///
/// # Example
/// ```
/// use dualcalc::util::constants::lookup;
///
/// assert_eq!(lookup("pi"), Some(std::f64::consts::PI));
/// assert_eq!(lookup("tau"), None);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<f64> {
    CONSTANTS.iter()
             .find(|(candidate, _)| *candidate == name)
             .map(|&(_, value)| value)
}
