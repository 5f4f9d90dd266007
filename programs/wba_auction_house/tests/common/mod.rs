pub use anchor_lang::prelude::*;
pub use wba_auction_house::{
    pda::*, Bid, BidState, EscrowVault, Listing, ListingState, MarketConfig,
};

pub use solana_program_test::*;
pub use solana_sdk::{
    instruction::InstructionError, signature::Keypair, signer::Signer,
    transaction::TransactionError,
};
pub use std::assert_eq;

pub const ALREADY_INITIALIZED: u32 = 6000;
pub const INVALID_FEE_BPS: u32 = 6001;
pub const INVALID_PRICE: u32 = 6002;
pub const INVALID_DERIVATION: u32 = 6003;
pub const INVALID_ACCOUNT_OWNER: u32 = 6004;
pub const UNAUTHORIZED: u32 = 6005;
pub const INVALID_STATE: u32 = 6006;
pub const PUBLIC_KEY_MISMATCH: u32 = 6009;
pub const FEE_RECIPIENT_NOT_RENT_EXEMPT: u32 = 6012;
pub const INVALID_AUCTION_DURATION: u32 = 6013;

/// Asserts that the first instruction of a failed transaction returned the custom `code`.
#[macro_export]
macro_rules! assert_error {
    ($error:expr, $code:expr) => {
        match $error {
            BanksClientError::TransactionError(TransactionError::InstructionError(
                0,
                InstructionError::Custom(x),
            ))
            | BanksClientError::SimulationError {
                err: TransactionError::InstructionError(0, InstructionError::Custom(x)),
                ..
            } => assert_eq!(x, $code),
            error => panic!("unexpected error: {:?}", error),
        };
    };
}
