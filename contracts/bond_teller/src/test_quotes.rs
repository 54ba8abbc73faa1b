//! Tests for `calculate_amount_out` and `calculate_amount_in`.

#![cfg(test)]

use crate::test_helpers::*;
use bond_errors::ContractError;

#[test]
fn test_amount_out_direct_and_staked() {
    let s = setup();
    assert_eq!(s.teller.calculate_amount_out(&(3 * UNIT), &false), 14_550_000);
    assert_eq!(s.teller.calculate_amount_out(&(3 * UNIT), &true), 7_275_000);
}

#[test]
fn test_amount_out_matches_deposit() {
    let s = setup();
    s.advance(ONE_DAY * 2 + 17);
    for amount in [UNIT / 3, UNIT, 7 * UNIT / 4] {
        let quote = s.teller.calculate_amount_out(&amount, &false);
        let bond = s.teller.deposit(&s.user, &amount, &quote, &s.user, &false);
        assert_eq!(bond.payout_amount, quote);
    }
}

#[test]
fn test_amount_in_rounds_up() {
    let s = setup();
    let amount_in = s.teller.calculate_amount_in(&14_550_000, &false);
    assert_close(amount_in, 3 * UNIT, 6);
    assert!(s.teller.calculate_amount_out(&amount_in, &false) >= 14_550_000);
}

#[test]
fn test_in_then_out_covers_requested_amount() {
    let s = setup();
    s.advance(ONE_DAY * 5 + 3);
    for wanted in [1_000, 333_333, UNIT, 3 * UNIT + 7] {
        let amount_in = s.teller.calculate_amount_in(&wanted, &false);
        let out = s.teller.calculate_amount_out(&amount_in, &false);
        assert!(out >= wanted);
        assert!(out <= wanted + 1);
    }
}

#[test]
fn test_out_then_in_round_trip() {
    let s = setup();
    s.advance(ONE_DAY * 11);
    let price = s.teller.bond_price();
    let tolerance = 2 * price / UNIT + 2;
    for amount in [UNIT / 7, UNIT, 9 * UNIT / 2] {
        let out = s.teller.calculate_amount_out(&amount, &false);
        let back = s.teller.calculate_amount_in(&out, &false);
        assert_close(back, amount, tolerance);
    }
}

#[test]
fn test_staked_round_trip() {
    let s = setup();
    for wanted in [1_000, 2 * UNIT, 3_333_333] {
        let amount_in = s.teller.calculate_amount_in(&wanted, &true);
        let out = s.teller.calculate_amount_out(&amount_in, &true);
        assert!(out >= wanted);
    }
}

#[test]
fn test_quotes_enforce_capacity() {
    let s = setup();
    assert_eq!(
        s.teller.try_calculate_amount_out(&(10 * UNIT + 1), &false),
        Err(Ok(ContractError::BondAtCapacity))
    );
    // Six payout tokens cost more than ten principal.
    assert_eq!(
        s.teller.try_calculate_amount_in(&(6 * UNIT), &false),
        Err(Ok(ContractError::BondAtCapacity))
    );
}

#[test]
fn test_quotes_enforce_max_payout() {
    let s = setup();
    let mut terms = standard_terms(&s.env);
    terms.capacity = 100 * UNIT;
    terms.max_payout = UNIT;
    s.set_terms(&terms);

    assert_eq!(
        s.teller.try_calculate_amount_out(&(3 * UNIT), &false),
        Err(Ok(ContractError::BondTooLarge))
    );
    assert_eq!(
        s.teller.try_calculate_amount_in(&(2 * UNIT), &false),
        Err(Ok(ContractError::BondTooLarge))
    );
}

#[test]
fn test_quote_failure_predicts_deposit_failure() {
    let s = setup();
    let amount = 11 * UNIT;
    let quote = s.teller.try_calculate_amount_out(&amount, &false);
    let deposit = s.teller.try_deposit(&s.user, &amount, &0, &s.user, &false);
    assert_eq!(quote, Err(Ok(ContractError::BondAtCapacity)));
    assert_eq!(deposit.err(), Some(Ok(ContractError::BondAtCapacity)));
}

#[test]
fn test_quotes_before_terms() {
    let s = setup_uninitialized_terms();
    assert_eq!(
        s.teller.try_calculate_amount_out(&UNIT, &false),
        Err(Ok(ContractError::NotInitialized))
    );
    assert_eq!(
        s.teller.try_calculate_amount_in(&UNIT, &false),
        Err(Ok(ContractError::NotInitialized))
    );
}

#[test]
fn test_quotes_reject_non_positive_amounts() {
    let s = setup();
    assert_eq!(
        s.teller.try_calculate_amount_out(&0, &false),
        Err(Ok(ContractError::AmountMustBePositive))
    );
    assert_eq!(
        s.teller.try_calculate_amount_in(&-1, &false),
        Err(Ok(ContractError::AmountMustBePositive))
    );
}

#[test]
fn test_amount_in_with_full_bond_fee() {
    let s = setup();
    s.teller.set_fees(&s.governance, &10_000, &0);
    assert_eq!(s.teller.calculate_amount_out(&UNIT, &false), 0);
    assert_eq!(
        s.teller.try_calculate_amount_in(&1, &false),
        Err(Ok(ContractError::InvalidFee))
    );
}
