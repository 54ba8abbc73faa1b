use soroban_sdk::{Address, Env, Symbol};

use crate::types::{PayoutToken, TellerAddresses, Terms};

/// Emitted when a bond is sold.
///
/// # Topics
/// * `Symbol` - "bond_created"
/// * `u64` - The bond id
///
/// # Data
/// * `i128` - Principal paid
/// * `PayoutToken` - Token the bond pays out in
/// * `i128` - Payout amount owed
/// * `u64` - Vesting start
/// * `u64` - Vesting term
pub fn emit_bond_created(
    e: &Env,
    bond_id: u64,
    principal_paid: i128,
    payout_token: PayoutToken,
    payout_amount: i128,
    vesting_start: u64,
    vesting_term: u64,
) {
    let topics = (Symbol::new(e, "bond_created"), bond_id);
    let data = (
        principal_paid,
        payout_token,
        payout_amount,
        vesting_start,
        vesting_term,
    );
    e.events().publish(topics, data);
}

/// Emitted on every claim that leaves the bond alive.
///
/// # Topics
/// * `Symbol` - "payout_claimed"
/// * `u64` - The bond id
///
/// # Data
/// * `Address` - Owner receiving the payout
/// * `i128` - Amount transferred now
/// * `i128` - Total claimed so far
pub fn emit_payout_claimed(e: &Env, bond_id: u64, owner: &Address, amount: i128, total: i128) {
    let topics = (Symbol::new(e, "payout_claimed"), bond_id);
    e.events().publish(topics, (owner.clone(), amount, total));
}

/// Emitted when the last of a bond's payout is claimed and the bond is burned.
///
/// # Topics
/// * `Symbol` - "bond_burned"
/// * `u64` - The bond id
///
/// # Data
/// * `Address` - Final owner
/// * `PayoutToken` - Token the bond paid out in
/// * `i128` - Total payout amount
pub fn emit_bond_burned(
    e: &Env,
    bond_id: u64,
    owner: &Address,
    payout_token: PayoutToken,
    payout_amount: i128,
) {
    let topics = (Symbol::new(e, "bond_burned"), bond_id);
    e.events()
        .publish(topics, (owner.clone(), payout_token, payout_amount));
}

pub fn emit_terms_set(e: &Env, terms: &Terms) {
    e.events()
        .publish((Symbol::new(e, "terms_set"),), terms.clone());
}

pub fn emit_fees_set(e: &Env, bond_fee_bps: u32, dao_fee_bps: u32) {
    e.events()
        .publish((Symbol::new(e, "fees_set"),), (bond_fee_bps, dao_fee_bps));
}

pub fn emit_addresses_set(e: &Env, addresses: &TellerAddresses) {
    e.events()
        .publish((Symbol::new(e, "addresses_set"),), addresses.clone());
}

/// Certificate moved between owners.
pub fn emit_bond_transfer(e: &Env, bond_id: u64, from: &Address, to: &Address) {
    e.events().publish(
        (Symbol::new(e, "bond_transfer"), bond_id),
        (from.clone(), to.clone()),
    );
}

/// Spender approved (or cleared, with `None`) for a single certificate.
pub fn emit_bond_approval(e: &Env, bond_id: u64, owner: &Address, spender: Option<Address>) {
    e.events().publish(
        (Symbol::new(e, "bond_approval"), bond_id),
        (owner.clone(), spender),
    );
}
