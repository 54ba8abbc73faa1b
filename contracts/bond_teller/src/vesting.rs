//! Vesting calculator.
//!
//! A bond's payout unlocks linearly from `vesting_start` over
//! `local_vesting_term` seconds; a zero term vests immediately.

use bond_errors::ContractError;

use crate::math::{mul_div_floor, sub_i128};
use crate::types::Bond;

/// Payout unlocked at `now`: `payout_amount * min(1, elapsed / term)`, rounded down.
pub fn vested_amount(bond: &Bond, now: u64) -> Result<i128, ContractError> {
    let elapsed = now.saturating_sub(bond.vesting_start);
    if bond.local_vesting_term == 0 || elapsed >= bond.local_vesting_term {
        return Ok(bond.payout_amount);
    }
    mul_div_floor(
        bond.payout_amount,
        elapsed as i128,
        bond.local_vesting_term as i128,
    )
}

/// Unlocked payout not yet transferred. Never negative.
pub fn claimable(bond: &Bond, now: u64) -> Result<i128, ContractError> {
    let vested = vested_amount(bond, now)?;
    Ok(sub_i128(vested, bond.payout_already_claimed)?.max(0))
}

pub fn is_fully_vested(bond: &Bond, now: u64) -> Result<bool, ContractError> {
    Ok(vested_amount(bond, now)? >= bond.payout_amount)
}
