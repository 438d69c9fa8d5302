//! Literal formatting shared by the Lua emitter and the AST printer.

/// Double-quoted Lua string literal for `value`.
pub fn quote_string(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for c in value.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            // Lua reads up to three decimal digits after `\`.
            '\0' => result.push_str("\\000"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Integral values print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 {
            "math.huge".to_owned()
        } else {
            "-math.huge".to_owned()
        };
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{value}")
}
