use std::net::IpAddr;

pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut value = bytes as f64;
    let mut unit = 0usize;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}

/// Rewrites an IP address so that byte-wise string order matches numeric
/// address order. Anything that does not parse as an address is returned
/// unchanged.
pub fn ip_to_padded_string(value: &str) -> String {
    match value.trim().parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => pad_octets(&addr.octets()),
        Ok(IpAddr::V6(addr)) => pad_octets(&addr.octets()),
        Err(_) => value.to_owned(),
    }
}

fn pad_octets(octets: &[u8]) -> String {
    octets
        .iter()
        .map(|octet| format!("{octet:03}"))
        .collect::<Vec<_>>()
        .join(".")
}

/// Parses the longest leading float literal, e.g. `"12.5 MB"` is `12.5`.
/// Returns NaN when no prefix parses.
pub fn parse_float_prefix(value: &str) -> f64 {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        let infinite = if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return infinite;
    }

    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        mantissa_digits += cursor - fraction_start;
        if mantissa_digits > 0 {
            end = cursor;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_start = cursor;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}
