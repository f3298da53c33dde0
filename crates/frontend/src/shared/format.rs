//! Number formatting for list views.

/// Formats a currency amount the way the back office expects it:
/// no decimals, dot as thousands separator, "$" prefix.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_cop(1234567.0), "$ 1.234.567");
/// ```
pub fn format_cop(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();

    // Insert dots every 3 digits from the right
    let mut grouped = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if rounded < 0 {
        format!("$ -{}", grouped)
    } else {
        format!("$ {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cop() {
        assert_eq!(format_cop(0.0), "$ 0");
        assert_eq!(format_cop(950.0), "$ 950");
        assert_eq!(format_cop(1234.0), "$ 1.234");
        assert_eq!(format_cop(1234567.0), "$ 1.234.567");
    }

    #[test]
    fn test_format_cop_rounds_decimals() {
        assert_eq!(format_cop(1234.56), "$ 1.235");
        assert_eq!(format_cop(999.4), "$ 999");
    }

    #[test]
    fn test_format_cop_negative() {
        assert_eq!(format_cop(-1234.0), "$ -1.234");
    }
}
