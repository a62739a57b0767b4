//! # Shared Utility Functions
//!
//! HBAR amount helpers used by the connector core and the web frontend.
//!
//! ## Units
//!
//! Transfers are expressed in tinybars, the ledger's smallest denomination:
//! 1 HBAR = 100,000,000 tinybars.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_hbar, hbar_to_tinybars};
//!
//! assert_eq!(hbar_to_tinybars(1.5), Some(150_000_000));
//! assert_eq!(format_hbar(42.5), "42.5 ℏ");
//! ```

/// Tinybars in one HBAR
pub const TINYBARS_PER_HBAR: i64 = 100_000_000;

/// Convert an HBAR amount to tinybars, rounding to the nearest tinybar.
///
/// Returns `None` for non-finite input or amounts outside the `i64` tinybar range.
///
/// # Examples
///
/// ```rust
/// use shared::utils::hbar_to_tinybars;
///
/// assert_eq!(hbar_to_tinybars(0.00000001), Some(1));
/// assert_eq!(hbar_to_tinybars(-2.0), Some(-200_000_000));
/// assert_eq!(hbar_to_tinybars(f64::NAN), None);
/// ```
pub fn hbar_to_tinybars(hbar: f64) -> Option<i64> {
    let tinybars = (hbar * TINYBARS_PER_HBAR as f64).round();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if !tinybars.is_finite() || tinybars >= i64::MAX as f64 || tinybars < i64::MIN as f64 {
        return None;
    }
    Some(tinybars as i64)
}

/// Format a balance for the balance field (e.g. `"42.5 ℏ"`)
pub fn format_hbar(hbar: f64) -> String {
    format!("{} ℏ", hbar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hbar_to_tinybars() {
        assert_eq!(hbar_to_tinybars(1.5), Some(150_000_000));
        assert_eq!(hbar_to_tinybars(1.0), Some(TINYBARS_PER_HBAR));
        assert_eq!(hbar_to_tinybars(0.1), Some(10_000_000));
        assert_eq!(hbar_to_tinybars(0.0), Some(0));
    }

    #[test]
    fn test_hbar_to_tinybars_out_of_range() {
        assert_eq!(hbar_to_tinybars(f64::INFINITY), None);
        assert_eq!(hbar_to_tinybars(1e12), None);
        assert_eq!(hbar_to_tinybars(-1e12), None);
    }

    #[test]
    fn test_format_hbar() {
        assert_eq!(format_hbar(100.0), "100 ℏ");
        assert_eq!(format_hbar(0.25), "0.25 ℏ");
    }
}
