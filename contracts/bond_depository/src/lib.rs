#![no_std]

//! # Bond Depository Contract
//!
//! Registry of bond teller instances and the sole source of payout-token
//! inventory for them.
//!
//! ## Features
//! - Register and deregister teller contracts
//! - Tellers pull payout tokens to cover the bonds they sell
//! - Enumerate registered tellers
//! - Emit events for all registry operations
//!
//! ## Security
//! - Governance-controlled registration
//! - `pull_payout` requires the teller's own authorization
//! - Prevents duplicate registrations

use bond_errors::ContractError;
use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env, Symbol, Vec};

/// Storage keys for the depository contract
#[contracttype]
#[derive(Clone)]
enum DataKey {
    /// Governance address
    Governance,
    /// Payout token handed out to tellers
    PayoutToken,
    /// Registration flag per teller: Teller -> bool
    Teller(Address),
    /// List of all registered tellers
    Tellers,
}

fn get_governance(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Governance)
        .ok_or(ContractError::NotInitialized)
}

fn require_governance(e: &Env, caller: &Address) -> Result<(), ContractError> {
    let governance = get_governance(e)?;
    if governance != *caller {
        return Err(ContractError::NotGovernance);
    }
    caller.require_auth();
    Ok(())
}

#[contract]
pub struct BondDepository;

#[contractimpl]
impl BondDepository {
    /// Initialize the depository with a governance address and the payout token.
    ///
    /// # Errors
    /// * `AlreadyInitialized` if called twice
    ///
    /// # Events
    /// Emits `depository_initialized` with `(governance, payout_token)`
    pub fn initialize(
        e: Env,
        governance: Address,
        payout_token: Address,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Governance) {
            return Err(ContractError::AlreadyInitialized);
        }

        governance.require_auth();

        e.storage().instance().set(&DataKey::Governance, &governance);
        e.storage()
            .instance()
            .set(&DataKey::PayoutToken, &payout_token);
        e.storage()
            .instance()
            .set(&DataKey::Tellers, &Vec::<Address>::new(&e));

        e.events().publish(
            (Symbol::new(&e, "depository_initialized"),),
            (governance, payout_token),
        );
        Ok(())
    }

    /// Register a teller so it may pull payout inventory.
    ///
    /// # Errors
    /// * `NotGovernance` if caller is not governance
    /// * `TellerAlreadyRegistered` if the teller is already registered
    ///
    /// # Events
    /// Emits `teller_added` with the teller address
    pub fn add_teller(e: Env, governance: Address, teller: Address) -> Result<(), ContractError> {
        require_governance(&e, &governance)?;

        let key = DataKey::Teller(teller.clone());
        if e.storage().instance().get(&key).unwrap_or(false) {
            return Err(ContractError::TellerAlreadyRegistered);
        }
        e.storage().instance().set(&key, &true);

        let mut tellers = Self::get_tellers(e.clone());
        tellers.push_back(teller.clone());
        e.storage().instance().set(&DataKey::Tellers, &tellers);

        e.events()
            .publish((Symbol::new(&e, "teller_added"),), teller);
        Ok(())
    }

    /// Deregister a teller. Bonds it already sold are unaffected.
    ///
    /// # Errors
    /// * `NotGovernance` if caller is not governance
    /// * `TellerNotRegistered` if the teller is unknown
    ///
    /// # Events
    /// Emits `teller_removed` with the teller address
    pub fn remove_teller(
        e: Env,
        governance: Address,
        teller: Address,
    ) -> Result<(), ContractError> {
        require_governance(&e, &governance)?;

        let key = DataKey::Teller(teller.clone());
        if !e.storage().instance().get(&key).unwrap_or(false) {
            return Err(ContractError::TellerNotRegistered);
        }
        e.storage().instance().remove(&key);

        let mut tellers = Self::get_tellers(e.clone());
        if let Some(index) = tellers.first_index_of(&teller) {
            tellers.remove(index);
            e.storage().instance().set(&DataKey::Tellers, &tellers);
        }

        e.events()
            .publish((Symbol::new(&e, "teller_removed"),), teller);
        Ok(())
    }

    /// Transfer `amount` of payout token from the depository to a registered teller.
    ///
    /// # Errors
    /// * `TellerNotRegistered` if `teller` is not registered
    /// * `AmountMustBePositive` if `amount` <= 0
    /// * `InsufficientInventory` if the depository balance is short
    ///
    /// # Events
    /// Emits `payout_pulled` with `(teller, amount)`
    pub fn pull_payout(e: Env, teller: Address, amount: i128) -> Result<(), ContractError> {
        teller.require_auth();

        if !Self::is_teller(e.clone(), teller.clone()) {
            return Err(ContractError::TellerNotRegistered);
        }
        if amount <= 0 {
            return Err(ContractError::AmountMustBePositive);
        }

        let token = Self::payout_token(e.clone())?;
        let client = TokenClient::new(&e, &token);
        let depository = e.current_contract_address();
        if client.balance(&depository) < amount {
            return Err(ContractError::InsufficientInventory);
        }
        client.transfer(&depository, &teller, &amount);

        e.events()
            .publish((Symbol::new(&e, "payout_pulled"), teller), amount);
        Ok(())
    }

    /// Check if a teller is registered.
    pub fn is_teller(e: Env, teller: Address) -> bool {
        e.storage()
            .instance()
            .get(&DataKey::Teller(teller))
            .unwrap_or(false)
    }

    /// Get all registered tellers.
    pub fn get_tellers(e: Env) -> Vec<Address> {
        e.storage()
            .instance()
            .get(&DataKey::Tellers)
            .unwrap_or_else(|| Vec::new(&e))
    }

    /// The payout token handed out to tellers.
    pub fn payout_token(e: Env) -> Result<Address, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::PayoutToken)
            .ok_or(ContractError::NotInitialized)
    }

    /// Payout tokens currently held by the depository.
    pub fn inventory(e: Env) -> Result<i128, ContractError> {
        let token = Self::payout_token(e.clone())?;
        Ok(TokenClient::new(&e, &token).balance(&e.current_contract_address()))
    }

    /// Get the governance address.
    pub fn governance(e: Env) -> Result<Address, ContractError> {
        get_governance(&e)
    }

    /// Transfer governance rights to a new address.
    ///
    /// # Events
    /// Emits `governance_transferred` with the new governance address
    pub fn transfer_governance(
        e: Env,
        governance: Address,
        new_governance: Address,
    ) -> Result<(), ContractError> {
        require_governance(&e, &governance)?;

        e.storage()
            .instance()
            .set(&DataKey::Governance, &new_governance);

        e.events()
            .publish((Symbol::new(&e, "governance_transferred"),), new_governance);
        Ok(())
    }
}
