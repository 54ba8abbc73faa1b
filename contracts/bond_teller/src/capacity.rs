//! Capacity tracker.
//!
//! Each epoch sells at most `terms.capacity`, counted either in principal
//! (`capacity_is_payout == false`) or in gross payout before staking. The
//! remaining amount only shrinks until governance sets new terms.

use bond_errors::ContractError;
use soroban_sdk::Env;

use crate::math::sub_i128;
use crate::types::{DataKey, Quote, Terms};

pub fn remaining(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::Capacity).unwrap_or(0)
}

pub fn reset(e: &Env, terms: &Terms) {
    e.storage()
        .instance()
        .set(&DataKey::Capacity, &terms.capacity);
}

/// Amount a purchase draws from capacity, in the epoch's capacity unit.
fn usage(terms: &Terms, quote: &Quote) -> i128 {
    if terms.capacity_is_payout {
        quote.gross_payout
    } else {
        quote.amount_in
    }
}

/// Reject a purchase over the remaining capacity, then one over max payout.
pub fn check(terms: &Terms, remaining: i128, quote: &Quote) -> Result<(), ContractError> {
    if usage(terms, quote) > remaining {
        return Err(ContractError::BondAtCapacity);
    }
    if quote.gross_payout > terms.max_payout {
        return Err(ContractError::BondTooLarge);
    }
    Ok(())
}

/// Draw a checked purchase from capacity.
pub fn consume(e: &Env, terms: &Terms, quote: &Quote) -> Result<i128, ContractError> {
    let left = sub_i128(remaining(e), usage(terms, quote))?;
    e.storage().instance().set(&DataKey::Capacity, &left);
    Ok(left)
}
