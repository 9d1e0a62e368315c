//! Conversion between smallest-unit integers and human decimal strings.

use alloy::primitives::U256;

pub const ETHER_DECIMALS: u8 = 18;
pub const GWEI_DECIMALS: u8 = 9;
/// Decimals assumed for tokens whose metadata does not report any
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

fn pow10(exp: usize) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exp))
}

/// `value` with its last `places` digits after the decimal point
fn place_point(value: U256, places: usize) -> String {
    if places == 0 {
        return value.to_string();
    }

    let (whole, frac) = match pow10(places) {
        Some(unit) => (value / unit, value % unit),
        // 10^places exceeds U256, so every digit is fractional
        None => (U256::ZERO, value),
    };
    let frac = frac.to_string();
    format!("{whole}.{frac:0>places$}")
}

/// Format `value` (in units of 10^-`decimals`) with exactly `precision`
/// fractional digits, rounding half up.
pub fn format_units_fixed(value: U256, decimals: u8, precision: usize) -> String {
    let decimals = decimals as usize;

    if precision >= decimals {
        // Exact; only trailing zeros are added
        let exact = place_point(value, decimals);
        let padding = "0".repeat(precision - decimals);
        return if decimals == 0 && precision > 0 {
            format!("{exact}.{padding}")
        } else {
            format!("{exact}{padding}")
        };
    }

    let rounded = match pow10(decimals - precision) {
        Some(divisor) => {
            let (quotient, remainder) = (value / divisor, value % divisor);
            if remainder >= divisor - remainder {
                quotient + U256::from(1u8)
            } else {
                quotient
            }
        }
        // Divisor exceeds U256, so every value rounds to zero
        None => U256::ZERO,
    };

    place_point(rounded, precision)
}

/// Wei as ETH, e.g. `1.0000 ETH` at precision 4
pub fn format_ether(wei: U256, precision: usize) -> String {
    format!(
        "{} ETH",
        format_units_fixed(wei, ETHER_DECIMALS, precision)
    )
}

pub fn format_gwei(wei: u128) -> String {
    format!(
        "{} Gwei",
        format_units_fixed(U256::from(wei), GWEI_DECIMALS, 2)
    )
}

/// Token balance at its own decimals, four fractional digits
pub fn format_token_amount(amount: U256, decimals: Option<u8>) -> String {
    format_units_fixed(amount, decimals.unwrap_or(DEFAULT_TOKEN_DECIMALS), 4)
}
