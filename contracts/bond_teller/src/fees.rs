//! Fee splitter.
//!
//! Principal is split between the treasury (DAO fee) and the pool; the gross
//! payout is split between the staking pool (bond fee) and the depositor.
//! Both rates are independent basis-point values in `0..=10_000`.

use bond_errors::ContractError;
use soroban_sdk::Env;

use crate::math::{bps, sub_i128, MAX_BPS};
use crate::types::DataKey;

/// How a deposit's principal is routed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrincipalSplit {
    pub dao_cut: i128,
    pub pool_cut: i128,
}

/// How a deposit's gross payout is routed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PayoutSplit {
    pub stake_cut: i128,
    pub net_payout: i128,
}

pub fn validate_fee_bps(fee_bps: u32) -> Result<(), ContractError> {
    if fee_bps > MAX_BPS {
        return Err(ContractError::InvalidFee);
    }
    Ok(())
}

pub fn split_principal(principal_paid: i128, dao_fee_bps: u32) -> Result<PrincipalSplit, ContractError> {
    let dao_cut = bps(principal_paid, dao_fee_bps)?;
    Ok(PrincipalSplit {
        dao_cut,
        pool_cut: sub_i128(principal_paid, dao_cut)?,
    })
}

pub fn split_payout(gross_payout: i128, bond_fee_bps: u32) -> Result<PayoutSplit, ContractError> {
    let stake_cut = bps(gross_payout, bond_fee_bps)?;
    Ok(PayoutSplit {
        stake_cut,
        net_payout: sub_i128(gross_payout, stake_cut)?,
    })
}

pub fn bond_fee_bps(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::BondFeeBps).unwrap_or(0)
}

pub fn dao_fee_bps(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::DaoFeeBps).unwrap_or(0)
}

pub fn set_fees(e: &Env, bond_fee_bps: u32, dao_fee_bps: u32) -> Result<(), ContractError> {
    validate_fee_bps(bond_fee_bps)?;
    validate_fee_bps(dao_fee_bps)?;
    e.storage()
        .instance()
        .set(&DataKey::BondFeeBps, &bond_fee_bps);
    e.storage().instance().set(&DataKey::DaoFeeBps, &dao_fee_bps);
    Ok(())
}
