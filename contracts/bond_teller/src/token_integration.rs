//! Token plumbing for the teller.
//! Centralizes collaborator lookup, principal routing, payout inventory and
//! staking calls. Collaborator contracts are reached through client traits so
//! the depository and stake converter are injected by address only.

use bond_errors::ContractError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{contractclient, Address, Env};

use crate::fees::PrincipalSplit;
use crate::types::{DataKey, PayoutToken, TellerAddresses};

/// Source of payout-token inventory.
#[contractclient(name = "DepositoryClient")]
pub trait DepositoryInterface {
    /// Transfer `amount` payout tokens from the depository to `teller`.
    fn pull_payout(env: Env, teller: Address, amount: i128);
}

/// Exchanges payout tokens for their staked representation at a deterministic rate.
#[contractclient(name = "StakeConverterClient")]
pub trait StakeConverterInterface {
    /// Pull `amount` payout tokens from `from` (via allowance) and credit `from`
    /// with staked tokens. Returns the staked amount.
    fn stake(env: Env, from: Address, amount: i128) -> i128;
    /// Staked amount `amount` payout tokens convert to.
    fn base_to_staked(env: Env, amount: i128) -> i128;
    /// Payout tokens `amount` staked tokens are worth.
    fn staked_to_base(env: Env, amount: i128) -> i128;
}

/// Approvals handed to collaborators live for roughly one hour of ledgers.
const APPROVAL_LEDGERS: u32 = 720;

pub fn get_addresses(e: &Env) -> Result<TellerAddresses, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Addresses)
        .ok_or(ContractError::NotInitialized)
}

pub fn principal_unit(e: &Env) -> Result<i128, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::PrincipalUnit)
        .ok_or(ContractError::NotInitialized)
}

pub fn payout_unit(e: &Env) -> Result<i128, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::PayoutUnit)
        .ok_or(ContractError::NotInitialized)
}

/// Token contract a bond pays out in.
pub fn payout_token_address(addresses: &TellerAddresses, token: PayoutToken) -> Address {
    match token {
        PayoutToken::Direct => addresses.payout_token.clone(),
        PayoutToken::Staked => addresses.staked_token.clone(),
    }
}

/// Base payout amount worth `amount` of `token`.
pub fn to_base(
    e: &Env,
    addresses: &TellerAddresses,
    token: PayoutToken,
    amount: i128,
) -> i128 {
    match token {
        PayoutToken::Direct => amount,
        PayoutToken::Staked => {
            StakeConverterClient::new(e, &addresses.stake_converter).staked_to_base(&amount)
        }
    }
}

/// Amount of `token` that `amount` base payout converts to.
pub fn from_base(
    e: &Env,
    addresses: &TellerAddresses,
    token: PayoutToken,
    amount: i128,
) -> i128 {
    match token {
        PayoutToken::Direct => amount,
        PayoutToken::Staked => {
            StakeConverterClient::new(e, &addresses.stake_converter).base_to_staked(&amount)
        }
    }
}

/// Record a signed approval from `depositor` for the teller on the principal token.
///
/// The depositor's authorization tree carries the signature; a principal that
/// cannot honour `approve` fails with `PermitUnsupported`.
pub fn permit(
    e: &Env,
    addresses: &TellerAddresses,
    depositor: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), ContractError> {
    let teller = e.current_contract_address();
    match TokenClient::new(e, &addresses.principal).try_approve(
        depositor,
        &teller,
        &amount,
        &expiration_ledger,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::PermitUnsupported),
    }
}

/// Pull principal from `depositor` straight to the treasury and the pool.
/// Requires prior approval for the teller as spender.
pub fn route_principal(
    e: &Env,
    addresses: &TellerAddresses,
    depositor: &Address,
    split: &PrincipalSplit,
) {
    let teller = e.current_contract_address();
    let principal = TokenClient::new(e, &addresses.principal);
    if split.dao_cut > 0 {
        principal.transfer_from(&teller, depositor, &addresses.treasury, &split.dao_cut);
    }
    if split.pool_cut > 0 {
        principal.transfer_from(&teller, depositor, &addresses.pool, &split.pool_cut);
    }
}

/// Pull `gross_payout` from the depository, send the bond fee to the staking
/// pool and, for staked bonds, convert the rest.
///
/// Returns the bond's payout amount in `token` units.
pub fn fund_payout(
    e: &Env,
    addresses: &TellerAddresses,
    gross_payout: i128,
    stake_cut: i128,
    net_payout: i128,
    token: PayoutToken,
) -> i128 {
    let teller = e.current_contract_address();
    if gross_payout > 0 {
        DepositoryClient::new(e, &addresses.depository).pull_payout(&teller, &gross_payout);
    }

    let payout = TokenClient::new(e, &addresses.payout_token);
    if stake_cut > 0 {
        payout.transfer(&teller, &addresses.stake_converter, &stake_cut);
    }

    match token {
        PayoutToken::Direct => net_payout,
        PayoutToken::Staked => {
            if net_payout == 0 {
                return 0;
            }
            let expiration = e.ledger().sequence().saturating_add(APPROVAL_LEDGERS);
            payout.approve(&teller, &addresses.stake_converter, &net_payout, &expiration);
            StakeConverterClient::new(e, &addresses.stake_converter).stake(&teller, &net_payout)
        }
    }
}

/// Transfer `amount` of a bond's payout token from the teller to `recipient`.
pub fn transfer_payout(
    e: &Env,
    addresses: &TellerAddresses,
    token: PayoutToken,
    recipient: &Address,
    amount: i128,
) {
    if amount <= 0 {
        return;
    }
    let teller = e.current_contract_address();
    TokenClient::new(e, &payout_token_address(addresses, token)).transfer(
        &teller,
        recipient,
        &amount,
    );
}
