//! Hardware-literal parsing and formatting helpers.
//!
//! Covers the literal forms that flow through testbench generation: scalar
//! argument values from the configuration (decimal or `0x`-prefixed hex,
//! underscore separators allowed), register address tokens rewritten from
//! `0x` form into Verilog `'h` form, and 32-bit stimulus word literals.

/// Parses a scalar value in decimal (`42`) or hex (`0x2a`) form.
///
/// Underscore separators are accepted in either form (`1_000`, `0xdead_beef`).
/// Returns `None` for empty input, unknown prefixes, or out-of-range values.
pub fn parse_value(text: &str) -> Option<u64> {
    let text = text.trim().replace('_', "");
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).ok();
    }
    text.parse::<u64>().ok()
}

/// Rewrites a `0x`-prefixed address token into Verilog hex-literal form.
///
/// `0x1c` becomes `'h1c`. A token without the `0x` prefix is prefixed
/// as-is, so already-rewritten tokens pass through unchanged apart from
/// the marker.
pub fn hex_addr_token(addr: &str) -> String {
    let digits = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);
    format!("'h{digits}")
}

/// Formats a 32-bit stimulus word as a sized Verilog hex literal.
///
/// `10` becomes `32'h0000000a`.
pub fn word_literal(word: u32) -> String {
    format!("32'h{word:08x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal() {
        assert_eq!(parse_value("42"), Some(42));
        assert_eq!(parse_value("0"), Some(0));
        assert_eq!(parse_value("1_000"), Some(1000));
    }

    #[test]
    fn parse_hex() {
        assert_eq!(parse_value("0x1c"), Some(0x1c));
        assert_eq!(parse_value("0X1C"), Some(0x1c));
        assert_eq!(parse_value("0xdead_beef"), Some(0xdead_beef));
        assert_eq!(parse_value("0x0000000a"), Some(10));
    }

    #[test]
    fn parse_whitespace() {
        assert_eq!(parse_value(" 42 "), Some(42));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("0x"), None);
        assert_eq!(parse_value("ten"), None);
        assert_eq!(parse_value("-1"), None);
    }

    #[test]
    fn parse_u64_range() {
        assert_eq!(
            parse_value("0xffffffffffffffff"),
            Some(u64::MAX),
        );
        assert_eq!(parse_value("0x1ffffffffffffffff"), None);
    }

    #[test]
    fn addr_rewrite() {
        assert_eq!(hex_addr_token("0x1c"), "'h1c");
        assert_eq!(hex_addr_token("0x00"), "'h00");
        assert_eq!(hex_addr_token("10"), "'h10");
    }

    #[test]
    fn word_formatting() {
        assert_eq!(word_literal(10), "32'h0000000a");
        assert_eq!(word_literal(0), "32'h00000000");
        assert_eq!(word_literal(0xdeadbeef), "32'hdeadbeef");
    }
}
