//! Pricing engine.
//!
//! The bond price decays exponentially toward the terms' minimum while the
//! teller is idle and is pushed up after every purchase:
//!
//! - `bond_price = max(minimum_price, next_price * 0.5^(elapsed / half_life))`
//! - after a deposit: `next_price = price + price * amount_in * adj_num / (adj_denom * principal_unit)`
//!
//! The decay factor is computed in 1e18 fixed point. Whole half-lives are
//! applied with a right shift; the remaining fraction `f` uses a truncated
//! Taylor series of `e^(-f * ln 2)`. Every step rounds down, so the factor is
//! non-increasing in `elapsed`.

use bond_errors::ContractError;

use crate::math::{add_i128, mul_div_floor, mul_i128};
use crate::types::Terms;

/// 1.0 in 18-decimal fixed point.
pub const WAD: i128 = 1_000_000_000_000_000_000;

/// ln(2) in 18-decimal fixed point, truncated.
const LN_2_WAD: i128 = 693_147_180_559_945_309;

/// Series terms for e^-x with x < ln 2; the 22nd term is below 1e-22.
const EXP_TERMS: i128 = 22;

/// Past this many half-lives the factor is zero at 18 decimals.
const MAX_HALVINGS: u64 = 64;

/// `e^(-x)` for `0 <= x < 1` in WAD, via the alternating Taylor series.
fn exp_neg_wad(x: i128) -> i128 {
    let mut sum = WAD;
    let mut term = WAD;
    let mut k = 1;
    while k <= EXP_TERMS && term != 0 {
        term = term * x / WAD / k;
        if k % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        k += 1;
    }
    sum
}

/// `0.5^(elapsed / half_life)` in WAD, rounded down.
///
/// `half_life` must be non-zero; `set_terms` rejects zero.
pub fn decay_factor(elapsed: u64, half_life: u64) -> Result<i128, ContractError> {
    if half_life == 0 {
        return Err(ContractError::InvalidHalfLife);
    }
    let halvings = elapsed / half_life;
    if halvings >= MAX_HALVINGS {
        return Ok(0);
    }
    let remainder = elapsed % half_life;
    let fraction = mul_div_floor(remainder as i128, WAD, half_life as i128)?;
    let exponent = mul_div_floor(fraction, LN_2_WAD, WAD)?;
    Ok(exp_neg_wad(exponent) >> halvings)
}

/// Current price given the stored pricing state.
///
/// Returns `max(minimum_price, decayed)`; callers reject a zero result.
pub fn current_price(
    terms: &Terms,
    next_price: i128,
    last_price_update: u64,
    now: u64,
) -> Result<i128, ContractError> {
    let elapsed = now.saturating_sub(last_price_update);
    let factor = decay_factor(elapsed, terms.half_life)?;
    let decayed = mul_div_floor(next_price, factor, WAD)?;
    Ok(decayed.max(terms.minimum_price))
}

/// Price the next buyer starts from after a purchase of `amount_in` at `price`.
pub fn advanced_price(
    terms: &Terms,
    price: i128,
    amount_in: i128,
    principal_unit: i128,
) -> Result<i128, ContractError> {
    let numerator = mul_i128(price, amount_in)?;
    let denominator = mul_i128(terms.price_adj_denom as i128, principal_unit)?;
    let bump = mul_div_floor(numerator, terms.price_adj_num as i128, denominator)?;
    add_i128(price, bump)
}
