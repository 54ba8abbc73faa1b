#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by failure domain for monitoring and off-chain display.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup, pause state and unset terms (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Rejected terms or fee parameters (codes 200-299).
    Configuration,
    /// Bond window and price-decay errors (codes 300-399).
    Temporal,
    /// Capacity and max-payout ceilings (codes 400-499).
    Capacity,
    /// Output below the caller's floor (codes 500-599).
    Slippage,
    /// Token interaction errors raised by the teller itself (codes 600-699).
    Token,
    /// Unknown or already-burned records (codes 700-799).
    NotFound,
    /// Depository teller registry and inventory errors (codes 800-899).
    Registry,
    /// Safe-math errors (codes 900-999).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by the teller and depository contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Configuration
///   300 - 399 : Temporal
///   400 - 499 : Capacity
///   500 - 599 : Slippage
///   600 - 699 : Token
///   700 - 799 : NotFound
///   800 - 899 : Registry
///   900 - 999 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized, or no terms have been set yet.
    /// Contracts: teller, depository
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    /// Contracts: teller, depository
    AlreadyInitialized = 2,

    /// Contract is paused; state-changing bond operations are rejected.
    /// Contracts: teller
    ContractPaused = 3,

    // --- Authorization (100-199) ---
    /// Caller is not the governance address.
    /// Contracts: teller, depository
    NotGovernance = 100,

    /// Caller is not the pending governance address.
    /// Contracts: teller
    NotPendingGovernance = 101,

    /// Caller is neither the owner of the bond nor approved for it ("!bonder").
    /// Contracts: teller
    NotBondOwner = 102,

    // --- Configuration (200-299) ---
    /// Terms start price must be strictly positive.
    InvalidStartPrice = 200,

    /// Price adjustment denominator must be non-zero ("1/0").
    InvalidPriceAdjustment = 201,

    /// Terms start time must not be after end time.
    InvalidDates = 202,

    /// Half-life must be strictly positive whenever decay applies.
    InvalidHalfLife = 203,

    /// Fee basis-points value must be in the range 0-10000.
    InvalidFee = 204,

    /// Amount argument must be strictly positive (> 0).
    AmountMustBePositive = 205,

    /// Capacity and max payout must be non-negative.
    InvalidCapacity = 206,

    // --- Temporal (300-399) ---
    /// The bond window has not opened yet.
    BondNotStarted = 300,

    /// The bond window has closed.
    BondConcluded = 301,

    /// The current price is zero ("invalid price").
    InvalidPrice = 302,

    // --- Capacity (400-499) ---
    /// The purchase exceeds the remaining capacity of the epoch.
    BondAtCapacity = 400,

    /// The purchase exceeds the per-bond max payout.
    BondTooLarge = 401,

    // --- Slippage (500-599) ---
    /// Payout is below the caller's minimum ("insufficient output").
    InsufficientOutput = 500,

    // --- Token (600-699) ---
    /// The principal token rejected a signed approval.
    PermitUnsupported = 600,

    // --- NotFound (700-799) ---
    /// No bond exists for the given id ("nonexistent").
    BondNotFound = 700,

    // --- Registry (800-899) ---
    /// Teller is already registered with the depository.
    TellerAlreadyRegistered = 800,

    /// Teller is not registered with the depository.
    TellerNotRegistered = 801,

    /// Depository holds less payout token than requested.
    InsufficientInventory = 802,

    // --- Arithmetic (900-999) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 900,

    /// Division by zero detected during a checked arithmetic operation.
    DivisionByZero = 901,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::ContractPaused => ErrorCategory::Initialization,

            ContractError::NotGovernance
            | ContractError::NotPendingGovernance
            | ContractError::NotBondOwner => ErrorCategory::Authorization,

            ContractError::InvalidStartPrice
            | ContractError::InvalidPriceAdjustment
            | ContractError::InvalidDates
            | ContractError::InvalidHalfLife
            | ContractError::InvalidFee
            | ContractError::AmountMustBePositive
            | ContractError::InvalidCapacity => ErrorCategory::Configuration,

            ContractError::BondNotStarted
            | ContractError::BondConcluded
            | ContractError::InvalidPrice => ErrorCategory::Temporal,

            ContractError::BondAtCapacity | ContractError::BondTooLarge => {
                ErrorCategory::Capacity
            }

            ContractError::InsufficientOutput => ErrorCategory::Slippage,

            ContractError::PermitUnsupported => ErrorCategory::Token,

            ContractError::BondNotFound => ErrorCategory::NotFound,

            ContractError::TellerAlreadyRegistered
            | ContractError::TellerNotRegistered
            | ContractError::InsufficientInventory => ErrorCategory::Registry,

            ContractError::Overflow | ContractError::DivisionByZero => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "not initialized",
            ContractError::AlreadyInitialized => "already initialized",
            ContractError::ContractPaused => "paused",
            ContractError::NotGovernance => "!governance",
            ContractError::NotPendingGovernance => "!pending governance",
            ContractError::NotBondOwner => "!bonder",
            ContractError::InvalidStartPrice => "invalid start price",
            ContractError::InvalidPriceAdjustment => "1/0",
            ContractError::InvalidDates => "invalid dates",
            ContractError::InvalidHalfLife => "invalid halflife",
            ContractError::InvalidFee => "invalid fee",
            ContractError::AmountMustBePositive => "amount must be positive",
            ContractError::InvalidCapacity => "invalid capacity",
            ContractError::BondNotStarted => "bond not yet started",
            ContractError::BondConcluded => "bond concluded",
            ContractError::InvalidPrice => "invalid price",
            ContractError::BondAtCapacity => "bond at capacity",
            ContractError::BondTooLarge => "bond too large",
            ContractError::InsufficientOutput => "slippage protection: insufficient output",
            ContractError::PermitUnsupported => "principal does not support signed approval",
            ContractError::BondNotFound => "query for nonexistent token",
            ContractError::TellerAlreadyRegistered => "teller already registered",
            ContractError::TellerNotRegistered => "!teller",
            ContractError::InsufficientInventory => "insufficient payout inventory",
            ContractError::Overflow => "integer overflow in checked arithmetic",
            ContractError::DivisionByZero => "division by zero in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
