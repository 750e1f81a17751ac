/// Canonical number rendering used for every emitted value.
///
/// Rounds to three decimals, then drops trailing zeros and a dangling
/// point: `85.700` -> `85.7`, `90.000` -> `90`.
pub fn canon(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        // -0.0001 rounds to "-0.000"
        "0".to_string()
    } else {
        s.to_string()
    }
}
