//! Bond Teller Contract
//!
//! Sells a payout token at a programmatically decaying price. Every purchase
//! becomes a bond whose payout unlocks linearly over a fixed vesting term and
//! whose ownership is tracked as a transferable certificate.
//!
//! ## Key design decisions
//!
//! - **One epoch at a time**: governance replaces `Terms` wholesale; doing so
//!   resets price state and capacity but never touches existing bonds.
//! - **Shared quote path**: `calculate_amount_in`, `calculate_amount_out` and
//!   `deposit` run the same price, capacity and max-payout checks.
//! - **Validate, then write, then transfer**: every precondition is checked
//!   before storage is updated; token movements come last.
//! - **Injected collaborators**: depository and stake converter are plain
//!   addresses reached through client traits.

#![no_std]

mod capacity;
mod events;
mod fees;
mod governance;
mod math;
mod ownership;
mod pricing;
mod token_integration;
mod types;
mod vesting;

pub use bond_errors::ContractError;
pub use token_integration::{
    DepositoryClient, DepositoryInterface, StakeConverterClient, StakeConverterInterface,
};
pub use types::{Bond, PayoutToken, TellerAddresses, Terms};

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, Vec};
use types::{DataKey, Quote};


#[cfg(test)]
mod test_math;
#[cfg(test)]
mod test_quotes;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn load_terms(e: &Env) -> Result<Terms, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Terms)
        .ok_or(ContractError::NotInitialized)
}

fn next_price(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::NextPrice).unwrap_or(0)
}

fn last_price_update(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::LastPriceUpdate)
        .unwrap_or(0)
}

fn num_bonds(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::NumBonds).unwrap_or(0)
}

fn load_bond(e: &Env, bond_id: u64) -> Result<Bond, ContractError> {
    e.storage()
        .persistent()
        .get(&DataKey::Bond(bond_id))
        .ok_or(ContractError::BondNotFound)
}

/// Current price; zero is an error for every caller that divides by it.
fn price_now(e: &Env, terms: &Terms) -> Result<i128, ContractError> {
    let price = pricing::current_price(
        terms,
        next_price(e),
        last_price_update(e),
        e.ledger().timestamp(),
    )?;
    if price <= 0 {
        return Err(ContractError::InvalidPrice);
    }
    Ok(price)
}

/// Price a purchase of `amount_in` principal and run the capacity checks.
fn quote_out(e: &Env, terms: &Terms, amount_in: i128) -> Result<Quote, ContractError> {
    if amount_in <= 0 {
        return Err(ContractError::AmountMustBePositive);
    }
    let price = price_now(e, terms)?;
    let payout_unit = token_integration::payout_unit(e)?;
    let gross_payout = math::mul_div_floor(amount_in, payout_unit, price)?;
    let split = fees::split_payout(gross_payout, fees::bond_fee_bps(e))?;
    let quote = Quote {
        price,
        amount_in,
        gross_payout,
        stake_cut: split.stake_cut,
        net_payout: split.net_payout,
    };
    capacity::check(terms, capacity::remaining(e), &quote)?;
    Ok(quote)
}

fn payout_token_for(stake: bool) -> PayoutToken {
    if stake {
        PayoutToken::Staked
    } else {
        PayoutToken::Direct
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct BondTeller;

#[contractimpl]
impl BondTeller {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. Stores `governance` and the collaborator set.
    pub fn initialize(
        e: Env,
        governance: Address,
        addresses: TellerAddresses,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Governance) {
            return Err(ContractError::AlreadyInitialized);
        }
        governance.require_auth();
        e.storage()
            .instance()
            .set(&DataKey::Governance, &governance);
        Self::store_addresses(&e, &addresses)
    }

    /// Replace the collaborator set (governance only).
    pub fn set_addresses(
        e: Env,
        governance: Address,
        addresses: TellerAddresses,
    ) -> Result<(), ContractError> {
        governance::require_governance(&e, &governance)?;
        Self::store_addresses(&e, &addresses)
    }

    /// Start a new epoch. Resets `next_price` to `start_price`, the price clock
    /// to now and remaining capacity to `terms.capacity`. Existing bonds keep
    /// their own vesting terms.
    pub fn set_terms(e: Env, governance: Address, terms: Terms) -> Result<(), ContractError> {
        governance::require_governance(&e, &governance)?;

        if terms.start_price <= 0 || terms.minimum_price < 0 {
            return Err(ContractError::InvalidStartPrice);
        }
        if terms.price_adj_denom == 0 {
            return Err(ContractError::InvalidPriceAdjustment);
        }
        if terms.start_time > terms.end_time {
            return Err(ContractError::InvalidDates);
        }
        if terms.half_life == 0 {
            return Err(ContractError::InvalidHalfLife);
        }
        if terms.capacity < 0 || terms.max_payout < 0 {
            return Err(ContractError::InvalidCapacity);
        }

        let storage = e.storage().instance();
        storage.set(&DataKey::Terms, &terms);
        storage.set(&DataKey::NextPrice, &terms.start_price);
        storage.set(&DataKey::LastPriceUpdate, &e.ledger().timestamp());
        capacity::reset(&e, &terms);

        events::emit_terms_set(&e, &terms);
        Ok(())
    }

    /// Set the bond fee (share of payout to staking) and DAO fee (share of
    /// principal to treasury), each in basis points.
    pub fn set_fees(
        e: Env,
        governance: Address,
        bond_fee_bps: u32,
        dao_fee_bps: u32,
    ) -> Result<(), ContractError> {
        governance::require_governance(&e, &governance)?;
        fees::set_fees(&e, bond_fee_bps, dao_fee_bps)?;
        events::emit_fees_set(&e, bond_fee_bps, dao_fee_bps);
        Ok(())
    }

    pub fn pause(e: Env, governance: Address) -> Result<(), ContractError> {
        governance::pause(&e, &governance)
    }

    pub fn unpause(e: Env, governance: Address) -> Result<(), ContractError> {
        governance::unpause(&e, &governance)
    }

    /// Nominate a new governor. Takes effect once they call `accept_governance`.
    pub fn set_pending_governance(
        e: Env,
        governance: Address,
        pending: Address,
    ) -> Result<(), ContractError> {
        governance::set_pending_governance(&e, &governance, &pending)
    }

    pub fn accept_governance(e: Env, pending: Address) -> Result<(), ContractError> {
        governance::accept_governance(&e, &pending)
    }

    // ── Quotes ─────────────────────────────────────────────────────────────

    /// Payout a deposit of `amount_in` principal would receive now, net of the
    /// bond fee. In staked units when `stake` is true.
    pub fn calculate_amount_out(e: Env, amount_in: i128, stake: bool) -> Result<i128, ContractError> {
        let addresses = token_integration::get_addresses(&e)?;
        let terms = load_terms(&e)?;
        let quote = quote_out(&e, &terms, amount_in)?;
        Ok(token_integration::from_base(
            &e,
            &addresses,
            payout_token_for(stake),
            quote.net_payout,
        ))
    }

    /// Principal needed now to receive `amount_out` net payout. Rounds up.
    pub fn calculate_amount_in(e: Env, amount_out: i128, stake: bool) -> Result<i128, ContractError> {
        let addresses = token_integration::get_addresses(&e)?;
        let terms = load_terms(&e)?;
        if amount_out <= 0 {
            return Err(ContractError::AmountMustBePositive);
        }
        let price = price_now(&e, &terms)?;
        let payout_unit = token_integration::payout_unit(&e)?;

        let base_out =
            token_integration::to_base(&e, &addresses, payout_token_for(stake), amount_out);
        let keep_bps = (math::MAX_BPS - fees::bond_fee_bps(&e)) as i128;
        if keep_bps == 0 {
            return Err(ContractError::InvalidFee);
        }
        let gross_payout = math::mul_div_ceil(base_out, math::MAX_BPS as i128, keep_bps)?;
        let amount_in = math::mul_div_ceil(gross_payout, price, payout_unit)?;

        // Same checks a deposit of `amount_in` would hit.
        quote_out(&e, &terms, amount_in)?;
        Ok(amount_in)
    }

    // ── Bond lifecycle ─────────────────────────────────────────────────────

    /// Buy a bond with `amount_in` principal. Requires prior approval of the
    /// teller as spender on the principal token.
    ///
    /// The bond certificate is minted to `recipient`. With `stake` the payout is
    /// converted to the staked token and the bond pays out in it.
    pub fn deposit(
        e: Env,
        depositor: Address,
        amount_in: i128,
        min_amount_out: i128,
        recipient: Address,
        stake: bool,
    ) -> Result<Bond, ContractError> {
        depositor.require_auth();
        Self::deposit_internal(&e, &depositor, amount_in, min_amount_out, &recipient, stake, None)
    }

    /// Same as `deposit`, but the principal allowance is granted inside the
    /// call from the depositor's signed authorization.
    pub fn deposit_signed(
        e: Env,
        depositor: Address,
        amount_in: i128,
        min_amount_out: i128,
        recipient: Address,
        stake: bool,
        expiration_ledger: u32,
    ) -> Result<Bond, ContractError> {
        depositor.require_auth();
        Self::deposit_internal(
            &e,
            &depositor,
            amount_in,
            min_amount_out,
            &recipient,
            stake,
            Some(expiration_ledger),
        )
    }

    /// Claim the vested, unclaimed part of a bond's payout for its owner.
    ///
    /// `caller` must own the bond or be approved for it; the payout always goes
    /// to the owner. Once everything is claimed the bond is burned.
    pub fn claim_payout(e: Env, caller: Address, bond_id: u64) -> Result<i128, ContractError> {
        caller.require_auth();

        let mut bond = load_bond(&e, bond_id)?;
        if !ownership::is_approved_or_owner(&e, &caller, bond_id)? {
            return Err(ContractError::NotBondOwner);
        }
        let owner = ownership::owner_of(&e, bond_id)?;
        let addresses = token_integration::get_addresses(&e)?;

        let now = e.ledger().timestamp();
        let vested = vesting::vested_amount(&bond, now)?.max(bond.payout_already_claimed);
        let claim = math::sub_i128(vested, bond.payout_already_claimed)?;
        bond.payout_already_claimed = vested;

        if vesting::is_fully_vested(&bond, now)? {
            e.storage().persistent().remove(&DataKey::Bond(bond_id));
            ownership::burn(&e, bond_id)?;
            events::emit_bond_burned(&e, bond_id, &owner, bond.payout_token, bond.payout_amount);
        } else {
            e.storage().persistent().set(&DataKey::Bond(bond_id), &bond);
            if claim > 0 {
                events::emit_payout_claimed(&e, bond_id, &owner, claim, vested);
            }
        }

        token_integration::transfer_payout(&e, &addresses, bond.payout_token, &owner, claim);
        Ok(claim)
    }

    // ── Bond certificates ──────────────────────────────────────────────────

    pub fn owner_of(e: Env, bond_id: u64) -> Result<Address, ContractError> {
        ownership::owner_of(&e, bond_id)
    }

    pub fn get_approved(e: Env, bond_id: u64) -> Result<Option<Address>, ContractError> {
        ownership::owner_of(&e, bond_id)?;
        Ok(ownership::get_approved(&e, bond_id))
    }

    /// Approve `spender` to claim or transfer one bond; `None` clears it.
    pub fn approve(
        e: Env,
        owner: Address,
        spender: Option<Address>,
        bond_id: u64,
    ) -> Result<(), ContractError> {
        owner.require_auth();
        ownership::approve(&e, &owner, spender, bond_id)
    }

    /// Move a bond certificate owned by `from`.
    pub fn transfer(e: Env, from: Address, to: Address, bond_id: u64) -> Result<(), ContractError> {
        from.require_auth();
        ownership::transfer(&e, &from, &from, &to, bond_id)
    }

    /// Move a bond certificate as its approved spender.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        bond_id: u64,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        ownership::transfer(&e, &spender, &from, &to, bond_id)
    }

    pub fn balance_of(e: Env, owner: Address) -> u32 {
        ownership::balance_of(&e, &owner)
    }

    pub fn token_of_owner_by_index(
        e: Env,
        owner: Address,
        index: u32,
    ) -> Result<u64, ContractError> {
        ownership::token_of_owner_by_index(&e, &owner, index)
    }

    pub fn bonds_of(e: Env, owner: Address) -> Vec<u64> {
        ownership::bonds_of(&e, &owner)
    }

    /// Number of live (unburned) bonds.
    pub fn total_supply(e: Env) -> u64 {
        ownership::total_supply(&e)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Returns the bond record. Fails `BondNotFound` once burned.
    pub fn bonds(e: Env, bond_id: u64) -> Result<Bond, ContractError> {
        load_bond(&e, bond_id)
    }

    /// Number of bonds ever created; also the most recent bond id.
    pub fn num_bonds(e: Env) -> u64 {
        num_bonds(&e)
    }

    /// Payout `claim_payout` would transfer right now.
    pub fn pending_payout(e: Env, bond_id: u64) -> Result<i128, ContractError> {
        let bond = load_bond(&e, bond_id)?;
        vesting::claimable(&bond, e.ledger().timestamp())
    }

    /// Current unit price in principal per whole payout token.
    pub fn bond_price(e: Env) -> Result<i128, ContractError> {
        let terms = load_terms(&e)?;
        price_now(&e, &terms)
    }

    pub fn get_terms(e: Env) -> Result<Terms, ContractError> {
        load_terms(&e)
    }

    pub fn next_price(e: Env) -> i128 {
        next_price(&e)
    }

    pub fn last_price_update(e: Env) -> u64 {
        last_price_update(&e)
    }

    /// Remaining capacity of the active epoch.
    pub fn capacity(e: Env) -> i128 {
        capacity::remaining(&e)
    }

    pub fn bond_fee_bps(e: Env) -> u32 {
        fees::bond_fee_bps(&e)
    }

    pub fn dao_fee_bps(e: Env) -> u32 {
        fees::dao_fee_bps(&e)
    }

    pub fn get_addresses(e: Env) -> Result<TellerAddresses, ContractError> {
        token_integration::get_addresses(&e)
    }

    pub fn governance(e: Env) -> Result<Address, ContractError> {
        governance::get_governance(&e)
    }

    pub fn pending_governance(e: Env) -> Option<Address> {
        governance::get_pending_governance(&e)
    }

    pub fn is_paused(e: Env) -> bool {
        governance::is_paused(&e)
    }
}

impl BondTeller {
    fn store_addresses(e: &Env, addresses: &TellerAddresses) -> Result<(), ContractError> {
        let principal_decimals = TokenClient::new(e, &addresses.principal).decimals();
        let payout_decimals = TokenClient::new(e, &addresses.payout_token).decimals();
        let storage = e.storage().instance();
        storage.set(&DataKey::Addresses, addresses);
        storage.set(&DataKey::PrincipalUnit, &math::pow10(principal_decimals)?);
        storage.set(&DataKey::PayoutUnit, &math::pow10(payout_decimals)?);
        events::emit_addresses_set(e, addresses);
        Ok(())
    }

    fn deposit_internal(
        e: &Env,
        depositor: &Address,
        amount_in: i128,
        min_amount_out: i128,
        recipient: &Address,
        stake: bool,
        signed_expiration: Option<u32>,
    ) -> Result<Bond, ContractError> {
        let addresses = token_integration::get_addresses(e)?;
        let terms = load_terms(e)?;
        governance::require_not_paused(e)?;

        let now = e.ledger().timestamp();
        if now < terms.start_time {
            return Err(ContractError::BondNotStarted);
        }
        if now > terms.end_time {
            return Err(ContractError::BondConcluded);
        }

        let quote = quote_out(e, &terms, amount_in)?;
        let token = payout_token_for(stake);
        let expected_out = token_integration::from_base(e, &addresses, token, quote.net_payout);
        if expected_out < min_amount_out {
            return Err(ContractError::InsufficientOutput);
        }
        let principal_split = fees::split_principal(amount_in, fees::dao_fee_bps(e))?;
        let principal_unit = token_integration::principal_unit(e)?;
        let new_price = pricing::advanced_price(&terms, quote.price, amount_in, principal_unit)?;

        if let Some(expiration_ledger) = signed_expiration {
            token_integration::permit(e, &addresses, depositor, amount_in, expiration_ledger)?;
        }

        // Effects.
        capacity::consume(e, &terms, &quote)?;
        let storage = e.storage().instance();
        storage.set(&DataKey::NextPrice, &new_price);
        storage.set(&DataKey::LastPriceUpdate, &now);
        let bond_id = num_bonds(e)
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        storage.set(&DataKey::NumBonds, &bond_id);

        // Interactions.
        token_integration::route_principal(e, &addresses, depositor, &principal_split);
        let payout_amount = token_integration::fund_payout(
            e,
            &addresses,
            quote.gross_payout,
            quote.stake_cut,
            quote.net_payout,
            token,
        );
        if payout_amount < min_amount_out {
            return Err(ContractError::InsufficientOutput);
        }

        let bond = Bond {
            id: bond_id,
            principal_paid: amount_in,
            payout_token: token,
            payout_amount,
            payout_already_claimed: 0,
            vesting_start: now,
            local_vesting_term: terms.global_vesting_term,
        };
        e.storage().persistent().set(&DataKey::Bond(bond_id), &bond);
        ownership::mint(e, recipient, bond_id);

        events::emit_bond_created(
            e,
            bond_id,
            amount_in,
            token,
            payout_amount,
            now,
            terms.global_vesting_term,
        );
        Ok(bond)
    }
}
