pub fn lex(s: &str) -> Vec<String> {
    s.trim_end_matches(|c: char| c == '\r' || c == '\n')
        .split(is_rpn_whitespace)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_rpn_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Parse a whole word as a floating point number.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, and the words `inf`, `infinity` and `nan` in any case.
/// The entire word must be consumed.
pub fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() || s.chars().any(|c| c.is_whitespace()) {
        return None;
    }
    s.parse::<f64>().ok()
}
