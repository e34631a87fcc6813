//! Display formatting helpers for gas figures, costs and addresses.

/// Format an integer with thousands separators: 171000 -> "171,000"
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Compact gas display: 171000 -> "171.0k"
pub fn kilo_gas(n: u64) -> String {
    format!("{:.1}k", n as f64 / 1000.0)
}

/// Dollar display with two decimals: 6.84 -> "$6.84"
pub fn usd(value: f64) -> String {
    format!("${:.2}", value)
}

/// Shorten an address-looking string for list display:
/// "0x742d35Cc...3d6Ac" -> "0x742d...d6Ac"
///
/// Short strings (and anything that is not address-shaped) pass through
/// untouched, since destinations are free text.
pub fn short_address(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() <= 12 {
        return addr.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(21000), "21,000");
        assert_eq!(thousands(171000), "171,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_kilo_gas() {
        assert_eq!(kilo_gas(21000), "21.0k");
        assert_eq!(kilo_gas(171000), "171.0k");
        assert_eq!(kilo_gas(45500), "45.5k");
    }

    #[test]
    fn test_usd() {
        assert_eq!(usd(0.0), "$0.00");
        assert_eq!(usd(6.84), "$6.84");
        assert_eq!(usd(6.8399999), "$6.84");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x742d35Cc6639C0532fEb5027f11d6E5a3d6Ac"),
            "0x742d...d6Ac"
        );
        assert_eq!(short_address("vitalik.eth"), "vitalik.eth");
        assert_eq!(short_address(""), "");
    }
}
