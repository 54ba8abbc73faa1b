use soroban_sdk::{contracttype, Address};

// ─── Terms ─────────────────────────────────────────────────────────────────

/// Pricing and schedule parameters of the active epoch.
///
/// Replaced wholesale by governance through `set_terms`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Terms {
    /// Price the epoch opens at, in principal units per whole payout token.
    pub start_price: i128,
    /// Floor the decaying price never drops below.
    pub minimum_price: i128,
    /// Largest gross payout a single bond may carry.
    pub max_payout: i128,
    /// Numerator of the post-purchase price adjustment.
    pub price_adj_num: u64,
    /// Denominator of the post-purchase price adjustment (non-zero).
    pub price_adj_denom: u64,
    /// Amount sellable this epoch, in principal or payout units.
    pub capacity: i128,
    /// true: capacity counts gross payout; false: capacity counts principal.
    pub capacity_is_payout: bool,
    /// First ledger timestamp at which deposits are accepted.
    pub start_time: u64,
    /// Last ledger timestamp at which deposits are accepted.
    pub end_time: u64,
    /// Vesting duration copied into every bond created under these terms.
    pub global_vesting_term: u64,
    /// Seconds for an idle price to fall by half.
    pub half_life: u64,
}

// ─── Bonds ─────────────────────────────────────────────────────────────────

/// Which token a bond pays out in.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayoutToken {
    /// The base payout token.
    Direct,
    /// The staked representation minted by the stake converter.
    Staked,
}

/// A single vesting bond. Ownership lives in the certificate registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bond {
    pub id: u64,
    /// Principal paid by the depositor.
    pub principal_paid: i128,
    pub payout_token: PayoutToken,
    /// Net payout owed, in `payout_token` units. Fixed at creation.
    pub payout_amount: i128,
    /// Portion of `payout_amount` already transferred out.
    pub payout_already_claimed: i128,
    pub vesting_start: u64,
    /// Frozen copy of the global vesting term at creation.
    pub local_vesting_term: u64,
}

// ─── Collaborators ─────────────────────────────────────────────────────────

/// External contracts the teller talks to.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TellerAddresses {
    /// Token depositors pay with.
    pub principal: Address,
    /// Base reward token sold by the teller.
    pub payout_token: Address,
    /// Staked representation of the payout token.
    pub staked_token: Address,
    /// Converts payout token into its staked representation; also the staking pool.
    pub stake_converter: Address,
    /// Receives the DAO fee share of principal.
    pub treasury: Address,
    /// Receives the remaining principal.
    pub pool: Address,
    /// Supplies payout-token inventory.
    pub depository: Address,
}

/// Result of pricing a purchase, shared by the quote and deposit paths.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    pub price: i128,
    pub amount_in: i128,
    /// Payout before the bond fee and before staking.
    pub gross_payout: i128,
    /// Bond fee routed to the staking pool.
    pub stake_cut: i128,
    /// Payout owed to the depositor, in base payout units.
    pub net_payout: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    Governance,
    PendingGovernance,
    Paused,
    Addresses,
    /// 10^decimals of the principal token.
    PrincipalUnit,
    /// 10^decimals of the payout token.
    PayoutUnit,
    Terms,
    NextPrice,
    LastPriceUpdate,
    /// Remaining capacity of the active epoch.
    Capacity,
    BondFeeBps,
    DaoFeeBps,
    /// Number of bonds ever created; doubles as the last issued id.
    NumBonds,
    Bond(u64),
    // Certificate registry
    Owner(u64),
    Approved(u64),
    OwnerBalance(Address),
    OwnedBond(Address, u32),
    OwnedIndex(u64),
    TotalSupply,
}
