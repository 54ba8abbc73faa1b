#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ContractError, ErrorCategory, ErrorExt};
    use std::vec::Vec;

    fn all_variants() -> Vec<ContractError> {
        std::vec![
            ContractError::NotInitialized,
            ContractError::AlreadyInitialized,
            ContractError::ContractPaused,
            ContractError::NotGovernance,
            ContractError::NotPendingGovernance,
            ContractError::NotBondOwner,
            ContractError::InvalidStartPrice,
            ContractError::InvalidPriceAdjustment,
            ContractError::InvalidDates,
            ContractError::InvalidHalfLife,
            ContractError::InvalidFee,
            ContractError::AmountMustBePositive,
            ContractError::InvalidCapacity,
            ContractError::BondNotStarted,
            ContractError::BondConcluded,
            ContractError::InvalidPrice,
            ContractError::BondAtCapacity,
            ContractError::BondTooLarge,
            ContractError::InsufficientOutput,
            ContractError::PermitUnsupported,
            ContractError::BondNotFound,
            ContractError::TellerAlreadyRegistered,
            ContractError::TellerNotRegistered,
            ContractError::InsufficientInventory,
            ContractError::Overflow,
            ContractError::DivisionByZero,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::AlreadyInitialized as u32, 2);
        assert_eq!(ContractError::ContractPaused as u32, 3);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(ContractError::NotGovernance as u32, 100);
        assert_eq!(ContractError::NotPendingGovernance as u32, 101);
        assert_eq!(ContractError::NotBondOwner as u32, 102);
    }

    #[test]
    fn test_codes_configuration() {
        assert_eq!(ContractError::InvalidStartPrice as u32, 200);
        assert_eq!(ContractError::InvalidPriceAdjustment as u32, 201);
        assert_eq!(ContractError::InvalidDates as u32, 202);
        assert_eq!(ContractError::InvalidHalfLife as u32, 203);
        assert_eq!(ContractError::InvalidFee as u32, 204);
        assert_eq!(ContractError::AmountMustBePositive as u32, 205);
        assert_eq!(ContractError::InvalidCapacity as u32, 206);
    }

    #[test]
    fn test_codes_bond_flow() {
        assert_eq!(ContractError::BondNotStarted as u32, 300);
        assert_eq!(ContractError::BondConcluded as u32, 301);
        assert_eq!(ContractError::InvalidPrice as u32, 302);
        assert_eq!(ContractError::BondAtCapacity as u32, 400);
        assert_eq!(ContractError::BondTooLarge as u32, 401);
        assert_eq!(ContractError::InsufficientOutput as u32, 500);
        assert_eq!(ContractError::PermitUnsupported as u32, 600);
        assert_eq!(ContractError::BondNotFound as u32, 700);
    }

    #[test]
    fn test_codes_registry_and_arithmetic() {
        assert_eq!(ContractError::TellerAlreadyRegistered as u32, 800);
        assert_eq!(ContractError::TellerNotRegistered as u32, 801);
        assert_eq!(ContractError::InsufficientInventory as u32, 802);
        assert_eq!(ContractError::Overflow as u32, 900);
        assert_eq!(ContractError::DivisionByZero as u32, 901);
    }

    // --- Category mapping tests ---

    #[test]
    fn test_category_matches_code_block() {
        for e in all_variants() {
            let expected = match e as u32 {
                1..=99 => ErrorCategory::Initialization,
                100..=199 => ErrorCategory::Authorization,
                200..=299 => ErrorCategory::Configuration,
                300..=399 => ErrorCategory::Temporal,
                400..=499 => ErrorCategory::Capacity,
                500..=599 => ErrorCategory::Slippage,
                600..=699 => ErrorCategory::Token,
                700..=799 => ErrorCategory::NotFound,
                800..=899 => ErrorCategory::Registry,
                _ => ErrorCategory::Arithmetic,
            };
            assert_eq!(e.category(), expected, "{:?} is in the wrong block", e);
        }
    }

    #[test]
    fn test_category_capacity() {
        assert_eq!(
            ContractError::BondAtCapacity.category(),
            ErrorCategory::Capacity
        );
        assert_eq!(
            ContractError::BondTooLarge.category(),
            ErrorCategory::Capacity
        );
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_non_empty() {
        for e in all_variants() {
            assert!(!e.description().is_empty(), "{:?} has empty description", e);
        }
    }

    #[test]
    fn test_descriptions_unique() {
        let variants = all_variants();
        for i in 0..variants.len() {
            for j in (i + 1)..variants.len() {
                assert_ne!(variants[i].description(), variants[j].description());
            }
        }
    }

    #[test]
    fn test_well_known_reasons() {
        assert_eq!(
            ContractError::InsufficientOutput.description(),
            "slippage protection: insufficient output"
        );
        assert_eq!(ContractError::BondAtCapacity.description(), "bond at capacity");
        assert_eq!(ContractError::BondTooLarge.description(), "bond too large");
        assert_eq!(ContractError::NotBondOwner.description(), "!bonder");
        assert_eq!(ContractError::InvalidPriceAdjustment.description(), "1/0");
    }

    // --- Variant count guard ---

    #[test]
    fn test_all_variants_count() {
        assert_eq!(
            all_variants().len(),
            26,
            "Update all_variants() and this count when adding new errors"
        );
    }

    // --- Result integration tests (mirrors real contract call sites) ---

    fn mock_capacity(amount: i128, remaining: i128) -> Result<i128, ContractError> {
        if amount > remaining {
            return Err(ContractError::BondAtCapacity);
        }
        Ok(remaining - amount)
    }

    fn mock_slippage(out: i128, min_out: i128) -> Result<(), ContractError> {
        if out < min_out {
            return Err(ContractError::InsufficientOutput);
        }
        Ok(())
    }

    fn mock_deposit(amount: i128, remaining: i128, min_out: i128) -> Result<i128, ContractError> {
        let left = mock_capacity(amount, remaining)?;
        mock_slippage(amount, min_out)?;
        Ok(left)
    }

    #[test]
    fn test_question_mark_propagates_first_failure() {
        assert_eq!(mock_deposit(5, 10, 1), Ok(5));
        assert_eq!(mock_deposit(11, 10, 1), Err(ContractError::BondAtCapacity));
        assert_eq!(mock_deposit(5, 10, 6), Err(ContractError::InsufficientOutput));
    }
}
