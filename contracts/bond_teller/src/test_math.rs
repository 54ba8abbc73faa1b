//! Tests for checked arithmetic, the fee splitter and the vesting calculator.

#![cfg(test)]

use crate::fees;
use crate::math;
use crate::types::{Bond, PayoutToken};
use crate::vesting;
use bond_errors::ContractError;

fn bond(payout_amount: i128, claimed: i128, vesting_start: u64, term: u64) -> Bond {
    Bond {
        id: 1,
        principal_paid: 3,
        payout_token: PayoutToken::Direct,
        payout_amount,
        payout_already_claimed: claimed,
        vesting_start,
        local_vesting_term: term,
    }
}

// ─── math ──────────────────────────────────────────────────────────────────

#[test]
fn test_bps_basic() {
    assert_eq!(math::bps(10_000, 100), Ok(100));
    assert_eq!(math::bps(3, 200), Ok(0));
}

#[test]
fn test_bps_overflow_is_error() {
    assert_eq!(math::bps(i128::MAX, 10_000), Err(ContractError::Overflow));
}

#[test]
fn test_div_by_zero_is_error() {
    assert_eq!(math::div_i128(1, 0), Err(ContractError::DivisionByZero));
    assert_eq!(math::mul_div_ceil(1, 1, 0), Err(ContractError::DivisionByZero));
}

#[test]
fn test_mul_div_rounding() {
    assert_eq!(math::mul_div_floor(7, 3, 2), Ok(10));
    assert_eq!(math::mul_div_ceil(7, 3, 2), Ok(11));
    assert_eq!(math::mul_div_ceil(8, 3, 2), Ok(12));
}

#[test]
fn test_sub_overflow_is_error() {
    assert_eq!(math::sub_i128(i128::MIN, 1), Err(ContractError::Overflow));
}

#[test]
fn test_pow10() {
    assert_eq!(math::pow10(0), Ok(1));
    assert_eq!(math::pow10(7), Ok(10_000_000));
    assert_eq!(math::pow10(39), Err(ContractError::Overflow));
}

// ─── fees ──────────────────────────────────────────────────────────────────

#[test]
fn test_split_principal() {
    let split = fees::split_principal(30_000_000, 200).unwrap();
    assert_eq!(split.dao_cut, 600_000);
    assert_eq!(split.pool_cut, 29_400_000);
}

#[test]
fn test_split_payout() {
    let split = fees::split_payout(15_000_000, 300).unwrap();
    assert_eq!(split.stake_cut, 450_000);
    assert_eq!(split.net_payout, 14_550_000);
}

#[test]
fn test_split_edges() {
    let all = fees::split_payout(1_000, 10_000).unwrap();
    assert_eq!(all.stake_cut, 1_000);
    assert_eq!(all.net_payout, 0);

    let none = fees::split_principal(1_000, 0).unwrap();
    assert_eq!(none.dao_cut, 0);
    assert_eq!(none.pool_cut, 1_000);
}

#[test]
fn test_validate_fee_bps() {
    assert_eq!(fees::validate_fee_bps(10_000), Ok(()));
    assert_eq!(fees::validate_fee_bps(10_001), Err(ContractError::InvalidFee));
}

// ─── vesting ───────────────────────────────────────────────────────────────

#[test]
fn test_vested_linear() {
    let b = bond(1_000, 0, 100, 400);
    assert_eq!(vesting::vested_amount(&b, 100), Ok(0));
    assert_eq!(vesting::vested_amount(&b, 200), Ok(250));
    assert_eq!(vesting::vested_amount(&b, 300), Ok(500));
    assert_eq!(vesting::vested_amount(&b, 500), Ok(1_000));
    assert_eq!(vesting::vested_amount(&b, 10_000), Ok(1_000));
}

#[test]
fn test_vested_floors() {
    let b = bond(10, 0, 0, 3);
    assert_eq!(vesting::vested_amount(&b, 1), Ok(3));
    assert_eq!(vesting::vested_amount(&b, 2), Ok(6));
}

#[test]
fn test_vested_before_start_is_zero() {
    let b = bond(1_000, 0, 100, 400);
    assert_eq!(vesting::vested_amount(&b, 50), Ok(0));
}

#[test]
fn test_zero_term_vests_immediately() {
    let b = bond(1_000, 0, 100, 0);
    assert_eq!(vesting::vested_amount(&b, 100), Ok(1_000));
    assert_eq!(vesting::is_fully_vested(&b, 100), Ok(true));
}

#[test]
fn test_claimable_subtracts_claimed() {
    let b = bond(1_000, 250, 100, 400);
    assert_eq!(vesting::claimable(&b, 300), Ok(250));
    assert_eq!(vesting::claimable(&b, 150), Ok(0));
    assert_eq!(vesting::is_fully_vested(&b, 300), Ok(false));
}
