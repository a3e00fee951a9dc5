// Utility helpers shared by components

pub fn clog(msg: &str) {
    gloo::console::log!(msg);
}

pub fn cwarn(msg: &str) {
    gloo::console::warn!(msg);
}

/// Append a two-digit hex alpha to a `#RRGGBB` accent, e.g. `#4ECDC4` + `30`.
pub fn with_alpha(color: &str, alpha_hex: &str) -> String {
    format!("{color}{alpha_hex}")
}

pub fn percent(fraction: f64) -> String {
    format!("{}%", (fraction.clamp(0.0, 1.0) * 100.0).round())
}

/// `bytes` random bytes as lowercase hex; `rng` yields samples in `[0, 1)`.
pub fn random_hex(bytes: usize, mut rng: impl FnMut() -> f64) -> String {
    (0..bytes)
        .map(|_| format!("{:02x}", (rng() * 256.0).floor().clamp(0.0, 255.0) as u8))
        .collect()
}

/// `0x1234…abcd` form of a long address.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_suffix() {
        assert_eq!(with_alpha("#4ECDC4", "30"), "#4ECDC430");
    }

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(percent(0.4), "40%");
        assert_eq!(percent(2.0), "100%");
        assert_eq!(percent(-1.0), "0%");
    }

    #[test]
    fn hex_is_two_chars_per_byte() {
        let mut samples = [0.0, 0.999_999, 0.5].into_iter().cycle();
        let hex = random_hex(3, || samples.next().unwrap_or(0.0));
        assert_eq!(hex, "00ff80");
    }

    #[test]
    fn short_address_keeps_ends() {
        assert_eq!(short_address("0xabcdef0123456789"), "0xabcd…6789");
        assert_eq!(short_address("0xabc"), "0xabc");
    }
}
