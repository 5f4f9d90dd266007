use anchor_lang::{error::Error, prelude::*};
use std::result::Result as StdResult;

#[error_code]
pub enum AuctionHouseError {
    // 6000
    #[msg("Market config is already initialized")]
    AlreadyInitialized,

    // 6001
    #[msg("Fee basis points must be less than or equal to 10000")]
    InvalidFeeBps,

    // 6002
    #[msg("Price or amount must be greater than zero and cover the listing price")]
    InvalidPrice,

    // 6003
    #[msg("Account address does not match its derivation")]
    InvalidDerivation,

    // 6004
    #[msg("Account is not owned by this program or has the wrong role")]
    InvalidAccountOwner,

    // 6005
    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,

    // 6006
    #[msg("Account is not in a state that allows this action")]
    InvalidState,

    // 6007
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // 6008
    #[msg("Conflicting write on a locked account, retry the transaction")]
    TransientConflict,

    // 6009
    #[msg("PublicKeyMismatch")]
    PublicKeyMismatch,

    // 6010
    #[msg("Escrow vault holds less than the bid amount")]
    InsufficientEscrow,

    // 6011
    #[msg("Asset token account does not hold the listed amount")]
    InvalidAssetAmount,

    // 6012
    #[msg("Fee recipient must hold a rent-exempt balance")]
    FeeRecipientNotRentExempt,

    // 6013
    #[msg("Auction duration must be greater than zero")]
    InvalidAuctionDuration,
}

impl AuctionHouseError {
    /// Whether a client may resubmit the same transaction unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AuctionHouseError::TransientConflict)
    }
}

pub trait OrArithError<T> {
    fn or_arith_error(self) -> StdResult<T, Error>;
}

impl OrArithError<u64> for Option<u64> {
    fn or_arith_error(self) -> StdResult<u64, Error> {
        self.ok_or_else(|| AuctionHouseError::ArithmeticOverflow.into())
    }
}

impl OrArithError<i64> for Option<i64> {
    fn or_arith_error(self) -> StdResult<i64, Error> {
        self.ok_or_else(|| AuctionHouseError::ArithmeticOverflow.into())
    }
}

impl OrArithError<u128> for Option<u128> {
    fn or_arith_error(self) -> StdResult<u128, Error> {
        self.ok_or_else(|| AuctionHouseError::ArithmeticOverflow.into())
    }
}
