/// Reads the leading number of a computed CSS length such as `"80px"`.
///
/// Mirrors the browser's `parseFloat`: trailing units are ignored and values
/// without a numeric prefix (`"auto"`, `""`) yield `None`.
pub fn parse_css_length(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    for (i, c) in value.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '+' | '-' if seen_exp && value[..i].ends_with(['e', 'E']) => {}
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
                continue;
            }
            '.' if !seen_dot && !seen_exp => seen_dot = true,
            'e' | 'E' if seen_digit && !seen_exp => seen_exp = true,
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    value[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
