//! Bond certificate registry.
//!
//! Tracks who owns each bond, who is approved to act on it, and a per-owner
//! enumeration index. It never reads or writes `Bond` payloads, so moving a
//! certificate leaves vesting and claim state untouched.

use bond_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

use crate::events;
use crate::types::DataKey;

pub fn owner_of(e: &Env, bond_id: u64) -> Result<Address, ContractError> {
    e.storage()
        .persistent()
        .get(&DataKey::Owner(bond_id))
        .ok_or(ContractError::BondNotFound)
}

pub fn get_approved(e: &Env, bond_id: u64) -> Option<Address> {
    e.storage().persistent().get(&DataKey::Approved(bond_id))
}

pub fn balance_of(e: &Env, owner: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::OwnerBalance(owner.clone()))
        .unwrap_or(0)
}

pub fn total_supply(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn token_of_owner_by_index(e: &Env, owner: &Address, index: u32) -> Result<u64, ContractError> {
    e.storage()
        .persistent()
        .get(&DataKey::OwnedBond(owner.clone(), index))
        .ok_or(ContractError::BondNotFound)
}

/// All bond ids held by `owner`, in enumeration order.
pub fn bonds_of(e: &Env, owner: &Address) -> Vec<u64> {
    let mut ids = Vec::new(e);
    for index in 0..balance_of(e, owner) {
        if let Some(id) = e
            .storage()
            .persistent()
            .get::<_, u64>(&DataKey::OwnedBond(owner.clone(), index))
        {
            ids.push_back(id);
        }
    }
    ids
}

/// True if `spender` owns `bond_id` or is approved for it.
pub fn is_approved_or_owner(e: &Env, spender: &Address, bond_id: u64) -> Result<bool, ContractError> {
    let owner = owner_of(e, bond_id)?;
    if owner == *spender {
        return Ok(true);
    }
    Ok(get_approved(e, bond_id).map_or(false, |approved| approved == *spender))
}

fn add_to_owner(e: &Env, owner: &Address, bond_id: u64) {
    let balance = balance_of(e, owner);
    let storage = e.storage().persistent();
    storage.set(&DataKey::OwnedBond(owner.clone(), balance), &bond_id);
    storage.set(&DataKey::OwnedIndex(bond_id), &balance);
    storage.set(&DataKey::OwnerBalance(owner.clone()), &(balance + 1));
    storage.set(&DataKey::Owner(bond_id), owner);
}

/// Swap-remove `bond_id` from `owner`'s enumeration.
fn remove_from_owner(e: &Env, owner: &Address, bond_id: u64) {
    let storage = e.storage().persistent();
    let balance = balance_of(e, owner);
    let last = balance.saturating_sub(1);
    let index: u32 = storage.get(&DataKey::OwnedIndex(bond_id)).unwrap_or(last);

    if index != last {
        if let Some(moved) = storage.get::<_, u64>(&DataKey::OwnedBond(owner.clone(), last)) {
            storage.set(&DataKey::OwnedBond(owner.clone(), index), &moved);
            storage.set(&DataKey::OwnedIndex(moved), &index);
        }
    }
    storage.remove(&DataKey::OwnedBond(owner.clone(), last));
    storage.remove(&DataKey::OwnedIndex(bond_id));
    storage.set(&DataKey::OwnerBalance(owner.clone()), &last);
    storage.remove(&DataKey::Owner(bond_id));
}

fn set_total_supply(e: &Env, supply: u64) {
    e.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn mint(e: &Env, to: &Address, bond_id: u64) {
    add_to_owner(e, to, bond_id);
    set_total_supply(e, total_supply(e) + 1);
}

/// Remove the certificate and any approval. Returns the last owner.
pub fn burn(e: &Env, bond_id: u64) -> Result<Address, ContractError> {
    let owner = owner_of(e, bond_id)?;
    remove_from_owner(e, &owner, bond_id);
    e.storage().persistent().remove(&DataKey::Approved(bond_id));
    set_total_supply(e, total_supply(e).saturating_sub(1));
    Ok(owner)
}

/// Approve `spender` for a single bond, or clear the approval with `None`.
/// Caller must have authenticated as `owner`.
pub fn approve(
    e: &Env,
    owner: &Address,
    spender: Option<Address>,
    bond_id: u64,
) -> Result<(), ContractError> {
    if owner_of(e, bond_id)? != *owner {
        return Err(ContractError::NotBondOwner);
    }
    match &spender {
        Some(spender) => e
            .storage()
            .persistent()
            .set(&DataKey::Approved(bond_id), spender),
        None => e.storage().persistent().remove(&DataKey::Approved(bond_id)),
    }
    events::emit_bond_approval(e, bond_id, owner, spender);
    Ok(())
}

/// Move `bond_id` from `from` to `to` on behalf of `spender`. Clears the approval.
pub fn transfer(
    e: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    bond_id: u64,
) -> Result<(), ContractError> {
    let owner = owner_of(e, bond_id)?;
    if owner != *from || !is_approved_or_owner(e, spender, bond_id)? {
        return Err(ContractError::NotBondOwner);
    }
    remove_from_owner(e, from, bond_id);
    e.storage().persistent().remove(&DataKey::Approved(bond_id));
    add_to_owner(e, to, bond_id);
    events::emit_bond_transfer(e, bond_id, from, to);
    Ok(())
}
