/// Return the first whitespace/comma delimited token that parses as a float.
///
/// This is greedy and purely lexical, the first parseable token wins even if a
/// later one looks more relevant. Units or brackets glued to a number
/// (`42.5%`, `(3)`, `$12`) are stripped before parsing; letters are not.
pub fn extract_first_number(text: &str) -> Option<f64> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .find_map(parse_token)
}

fn parse_token(token: &str) -> Option<f64> {
    if let Ok(value) = token.parse::<f64>() {
        return Some(value);
    }
    let trimmed = token.trim_matches(is_decoration);
    if trimmed.is_empty() || trimmed.len() == token.len() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn is_decoration(c: char) -> bool {
    !(c.is_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Render a sample the way change lines show it: shortest round-trip form,
/// integral values keep a trailing `.0`.
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}
