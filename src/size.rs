// ============================================================================
// File: packages/ramdisk/src/size.rs
// ----------------------------------------------------------------------------
// Human-readable size parsing ("16mb", "32mib", "1G", "128").
// ============================================================================

use crate::error::{RamDiskError, RamDiskResult};

const KIB: u64 = 1024;
const KB: u64 = 1000;

/// Parse a size expression into a byte count
///
/// A bare integer is a byte count. Otherwise the input must be an integer
/// followed by a unit, optionally separated by whitespace. Units are
/// case-insensitive and a trailing plural `s` is ignored. Single-letter and
/// `*ib` units are binary, two-letter `*b` units are decimal.
pub fn parse_size(input: &str) -> RamDiskResult<u64> {
    let invalid = || RamDiskError::InvalidSize {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digits_end == 0 {
        return Err(invalid());
    }

    let number: u64 = trimmed[..digits_end].parse().map_err(|_| invalid())?;
    let rest = &trimmed[digits_end..];
    if rest.is_empty() {
        return Ok(number);
    }

    let unit = rest.trim_start();
    if !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }

    let mut unit = unit.to_ascii_lowercase();
    if unit.ends_with('s') {
        unit.pop();
    }

    let multiplier = match unit.as_str() {
        "b" | "byte" => 1,
        "k" | "kib" => KIB,
        "kb" => KB,
        "m" | "mib" => KIB.pow(2),
        "mb" => KB.pow(2),
        "g" | "gib" => KIB.pow(3),
        "gb" => KB.pow(3),
        "t" | "tib" => KIB.pow(4),
        "tb" => KB.pow(4),
        _ => return Err(invalid()),
    };

    number.checked_mul(multiplier).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_integers_are_bytes() {
        assert_eq!(parse_size("128").unwrap(), 128);
        assert_eq!(parse_size("0").unwrap(), 0);
    }

    #[test]
    fn decimal_and_binary_units() {
        assert_eq!(parse_size("16mb").unwrap(), 16_000_000);
        assert_eq!(parse_size("16mib").unwrap(), 16_777_216);
        assert_eq!(parse_size("1G").unwrap(), 1_073_741_824);
        assert_eq!(parse_size("8gib").unwrap(), 8_589_934_592);
        assert_eq!(parse_size("4kb").unwrap(), 4_000);
        assert_eq!(parse_size("2t").unwrap(), 2 * 1024_u64.pow(4));
        assert_eq!(parse_size("3TB").unwrap(), 3_000_000_000_000);
    }

    #[test]
    fn whitespace_and_plurals() {
        assert_eq!(parse_size("512 bytes").unwrap(), 512);
        assert_eq!(parse_size("2 MiBs").unwrap(), 2 * 1024 * 1024);
        assert_eq!(parse_size("  64m ").unwrap(), 64 * 1024 * 1024);
    }

    #[test]
    fn rejects_unknown_units_and_garbage() {
        for input in ["", "mb", "16pb", "16 m b", "1.5g", "-4m", "16s", "12mb!"] {
            match parse_size(input) {
                Err(RamDiskError::InvalidSize { input: got }) => assert_eq!(got, input),
                other => panic!("expected InvalidSize for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn overflow_is_invalid() {
        assert!(matches!(
            parse_size("99999999999tb"),
            Err(RamDiskError::InvalidSize { .. })
        ));
    }
}
