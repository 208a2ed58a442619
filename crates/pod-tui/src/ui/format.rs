//! Small display-formatting helpers shared across views.

/// Compact counter formatting: 1_200_000 -> "1.2M", 450_000 -> "450K".
pub fn format_compact(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.0}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Thousands-separated counter: 12840 -> "12,840".
pub fn format_grouped(n: u64) -> String {
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

/// Shortened wallet address for the header button: "ABCD...WXYZ".
pub fn short_address(address: &str) -> String {
    if address.chars().count() <= 11 {
        return address.to_string();
    }
    let head: String = address.chars().take(4).collect();
    let tail: String = address.chars().skip(address.chars().count() - 4).collect();
    format!("{head}...{tail}")
}

/// Relative age of a listing: "2d ago", "3w ago".
pub fn format_relative_time(timestamp: u64) -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let diff = now.saturating_sub(timestamp);

    if diff < 60 {
        "just now".to_string()
    } else if diff < 3600 {
        format!("{}m ago", diff / 60)
    } else if diff < 86400 {
        format!("{}h ago", diff / 3600)
    } else if diff < 604800 {
        format!("{}d ago", diff / 86400)
    } else {
        format!("{}w ago", diff / 604800)
    }
}

/// Star row for a 1..=5 review rating.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    let mut out = String::with_capacity(5 * 3);
    for _ in 0..filled {
        out.push('★');
    }
    for _ in filled..5 {
        out.push('☆');
    }
    out
}

/// Truncate with a trailing ellipsis when over `max_len` characters.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let mut truncated: String = s.chars().take(max_len - 3).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(892), "892");
        assert_eq!(format_compact(1_000), "1K");
        assert_eq!(format_compact(450_000), "450K");
        assert_eq!(format_compact(1_200_000), "1.2M");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(12_840), "12,840");
        assert_eq!(format_grouped(1_200_000), "1,200,000");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("ABCD1234567890WXYZ1234567890ABCD1234567890WXYZ"),
            "ABCD...WXYZ"
        );
        assert_eq!(short_address("SHORT"), "SHORT");
    }

    #[test]
    fn test_stars_clamps_rating() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello...");
        assert_eq!(truncate_with_ellipsis("hello", 2), "..");
    }
}
