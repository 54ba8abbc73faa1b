//! Overflow-safe arithmetic helpers for pricing, fee and vesting math.
//!
//! All functions use checked arithmetic and report overflow or division by
//! zero as a `ContractError` instead of wrapping. Division floors toward zero;
//! every amount passed here is non-negative.

use bond_errors::ContractError;

/// Basis-point denominator (100% = 10_000).
pub const MAX_BPS: u32 = 10_000;

#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` division (floor for non-negative operands).
#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    if b == 0 {
        return Err(ContractError::DivisionByZero);
    }
    a.checked_div(b).ok_or(ContractError::Overflow)
}

/// `a * b / denominator`, rounded down.
#[inline]
pub fn mul_div_floor(a: i128, b: i128, denominator: i128) -> Result<i128, ContractError> {
    div_i128(mul_i128(a, b)?, denominator)
}

/// `a * b / denominator`, rounded up. Operands must be non-negative.
#[inline]
pub fn mul_div_ceil(a: i128, b: i128, denominator: i128) -> Result<i128, ContractError> {
    let numerator = mul_i128(a, b)?;
    let quotient = div_i128(numerator, denominator)?;
    if numerator % denominator == 0 {
        Ok(quotient)
    } else {
        add_i128(quotient, 1)
    }
}

/// Calculate a basis-point share of an amount: `amount * bps / 10_000`.
#[inline]
pub fn bps(amount: i128, bps: u32) -> Result<i128, ContractError> {
    mul_div_floor(amount, bps as i128, MAX_BPS as i128)
}

/// `10^exp` as an `i128` unit, used to turn token decimals into a base unit.
pub fn pow10(exp: u32) -> Result<i128, ContractError> {
    10_i128.checked_pow(exp).ok_or(ContractError::Overflow)
}
