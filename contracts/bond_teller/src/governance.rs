//! Governance and pause controls.
//!
//! Governance is handed over in two steps: the current governor nominates a
//! pending address, which then accepts. Pausing blocks deposits only; claims
//! and reads keep working.

use bond_errors::ContractError;
use soroban_sdk::{Address, Env, Symbol};

use crate::types::DataKey;

pub fn get_governance(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Governance)
        .ok_or(ContractError::NotInitialized)
}

pub fn get_pending_governance(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::PendingGovernance)
}

pub fn require_governance(e: &Env, caller: &Address) -> Result<(), ContractError> {
    let governance = get_governance(e)?;
    if governance != *caller {
        return Err(ContractError::NotGovernance);
    }
    caller.require_auth();
    Ok(())
}

pub fn set_pending_governance(
    e: &Env,
    caller: &Address,
    pending: &Address,
) -> Result<(), ContractError> {
    require_governance(e, caller)?;
    e.storage()
        .instance()
        .set(&DataKey::PendingGovernance, pending);
    e.events()
        .publish((Symbol::new(e, "governance_pending"),), pending.clone());
    Ok(())
}

pub fn accept_governance(e: &Env, caller: &Address) -> Result<(), ContractError> {
    let pending = get_pending_governance(e).ok_or(ContractError::NotPendingGovernance)?;
    if pending != *caller {
        return Err(ContractError::NotPendingGovernance);
    }
    caller.require_auth();

    let old = get_governance(e)?;
    e.storage().instance().set(&DataKey::Governance, caller);
    e.storage().instance().remove(&DataKey::PendingGovernance);
    e.events().publish(
        (Symbol::new(e, "governance_transferred"),),
        (old, caller.clone()),
    );
    Ok(())
}

pub fn is_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn require_not_paused(e: &Env) -> Result<(), ContractError> {
    if is_paused(e) {
        return Err(ContractError::ContractPaused);
    }
    Ok(())
}

pub fn pause(e: &Env, caller: &Address) -> Result<(), ContractError> {
    require_governance(e, caller)?;
    e.storage().instance().set(&DataKey::Paused, &true);
    e.events().publish((Symbol::new(e, "paused"),), caller.clone());
    Ok(())
}

pub fn unpause(e: &Env, caller: &Address) -> Result<(), ContractError> {
    require_governance(e, caller)?;
    e.storage().instance().set(&DataKey::Paused, &false);
    e.events()
        .publish((Symbol::new(e, "unpaused"),), caller.clone());
    Ok(())
}
