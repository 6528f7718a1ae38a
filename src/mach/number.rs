/// Compact display of a result, similar to C's `%g` but always
/// round-trippable. Very large and very small magnitudes switch to
/// exponent form.
pub fn format(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    let abs = n.abs();
    if n == 0.0 || (1e-5..1e15).contains(&abs) {
        format!("{}", n)
    } else {
        format!("{:e}", n)
    }
}
