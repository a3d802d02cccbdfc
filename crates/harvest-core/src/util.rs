/// Round to two decimal places; exact ties go to the even digit.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Split a comma-separated id list, trimming whitespace and skipping blanks.
///
/// Example: `" 1740, 3529,,78638 "` → `["1740", "3529", "78638"]`
pub fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
