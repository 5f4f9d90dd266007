use anchor_lang::prelude::*;

use crate::{constants::MAX_BASIS_POINTS, errors::AuctionHouseError};

/// Role discriminant stored as the first field of every record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKey {
    Uninitialized,
    MarketConfigV1,
    ListingV1,
    BidV1,
    EscrowVaultV1,
}

/// Records that carry an [`AccountKey`] role discriminant.
pub trait Keyed {
    const KEY: AccountKey;

    fn account_key(&self) -> AccountKey;

    fn is_initialized(&self) -> bool {
        self.account_key() == Self::KEY
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingState {
    Open,
    Sold,
    Cancelled,
}

impl ListingState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ListingState::Open)
    }

    /// Only `Open -> Sold` and `Open -> Cancelled` are allowed.
    pub fn transition(self, to: ListingState) -> Result<ListingState> {
        match (self, to) {
            (ListingState::Open, ListingState::Sold)
            | (ListingState::Open, ListingState::Cancelled) => Ok(to),
            _ => Err(AuctionHouseError::InvalidState.into()),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidState {
    Active,
    Accepted,
    Withdrawn,
}

impl BidState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BidState::Active)
    }

    /// Only `Active -> Accepted` and `Active -> Withdrawn` are allowed.
    pub fn transition(self, to: BidState) -> Result<BidState> {
        match (self, to) {
            (BidState::Active, BidState::Accepted) | (BidState::Active, BidState::Withdrawn) => {
                Ok(to)
            }
            _ => Err(AuctionHouseError::InvalidState.into()),
        }
    }
}

/// Per-market configuration, created once by `initialize`.
#[account]
#[derive(Debug)]
pub struct MarketConfig {
    pub key: AccountKey,
    /// Wallet that created the market; part of the market address seeds.
    pub creator: Pubkey,
    pub market_id: u64,
    pub authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub fee_basis_points: u16,
    pub created_at: i64,
    pub bump: u8,
}

impl MarketConfig {
    pub fn validate_fee_basis_points(fee_basis_points: u16) -> Result<()> {
        if fee_basis_points > MAX_BASIS_POINTS {
            return Err(AuctionHouseError::InvalidFeeBps.into());
        }
        Ok(())
    }
}

impl Keyed for MarketConfig {
    const KEY: AccountKey = AccountKey::MarketConfigV1;

    fn account_key(&self) -> AccountKey {
        self.key
    }
}

/// A seller's offer of one unit of `mint` for at least `price` lamports.
#[account]
#[derive(Debug)]
pub struct Listing {
    pub key: AccountKey,
    pub market: Pubkey,
    pub seller: Pubkey,
    pub mint: Pubkey,
    pub price: u64,
    pub state: ListingState,
    pub created_at: i64,
    pub closed_at: Option<i64>,
    /// Bidding closes at this timestamp for timed auctions.
    pub end_at: Option<i64>,
    /// Highest amount ever bid on a timed auction. Withdrawals do not lower it.
    pub highest_bid: u64,
    pub bump: u8,
    pub asset_vault_bump: u8,
}

impl Listing {
    pub fn assert_open(&self) -> Result<()> {
        if self.state != ListingState::Open {
            msg!("Listing is {:?}", self.state);
            return Err(AuctionHouseError::InvalidState.into());
        }
        Ok(())
    }

    pub fn is_timed(&self) -> bool {
        self.end_at.is_some()
    }

    /// The listing is Open and, for a timed auction, `now` is before its end.
    pub fn assert_accepting_bids(&self, now: i64) -> Result<()> {
        self.assert_open()?;

        if let Some(end_at) = self.end_at {
            if now >= end_at {
                msg!("Auction ended at {}, current time {}", end_at, now);
                return Err(AuctionHouseError::InvalidState.into());
            }
        }
        Ok(())
    }

    /// A timed auction only takes bids that meet the price and beat the highest bid.
    pub fn assert_higher_bid(&self, amount: u64) -> Result<()> {
        if self.is_timed() && (amount < self.price || amount <= self.highest_bid) {
            msg!(
                "{} does not beat the highest bid {} at price {}",
                amount,
                self.highest_bid,
                self.price
            );
            return Err(AuctionHouseError::InvalidPrice.into());
        }
        Ok(())
    }

    pub fn record_bid(&mut self, amount: u64) {
        if amount > self.highest_bid {
            self.highest_bid = amount;
        }
    }

    /// A timed auction can only be settled once bidding has closed.
    pub fn assert_auction_over(&self, now: i64) -> Result<()> {
        if let Some(end_at) = self.end_at {
            if now < end_at {
                msg!("Auction runs until {}, current time {}", end_at, now);
                return Err(AuctionHouseError::InvalidState.into());
            }
        }
        Ok(())
    }

    pub fn mark_sold(&mut self, now: i64) -> Result<()> {
        self.state = self.state.transition(ListingState::Sold)?;
        self.closed_at = Some(now);
        Ok(())
    }

    pub fn mark_cancelled(&mut self, now: i64) -> Result<()> {
        self.state = self.state.transition(ListingState::Cancelled)?;
        self.closed_at = Some(now);
        Ok(())
    }
}

impl Keyed for Listing {
    const KEY: AccountKey = AccountKey::ListingV1;

    fn account_key(&self) -> AccountKey {
        self.key
    }
}

#[account]
#[derive(Debug)]
pub struct Bid {
    pub key: AccountKey,
    pub listing: Pubkey,
    pub bidder: Pubkey,
    pub amount: u64,
    pub state: BidState,
    pub created_at: i64,
    pub bump: u8,
    pub escrow_bump: u8,
}

impl Bid {
    pub fn assert_active(&self) -> Result<()> {
        if self.state != BidState::Active {
            msg!("Bid is {:?}", self.state);
            return Err(AuctionHouseError::InvalidState.into());
        }
        Ok(())
    }

    /// A bid record may be reused for a new bid only once it was withdrawn.
    pub fn can_reopen(&self) -> bool {
        !self.is_initialized() || self.state == BidState::Withdrawn
    }

    pub fn mark_accepted(&mut self) -> Result<()> {
        self.state = self.state.transition(BidState::Accepted)?;
        Ok(())
    }

    pub fn mark_withdrawn(&mut self) -> Result<()> {
        self.state = self.state.transition(BidState::Withdrawn)?;
        Ok(())
    }
}

impl Keyed for Bid {
    const KEY: AccountKey = AccountKey::BidV1;

    fn account_key(&self) -> AccountKey {
        self.key
    }
}

/// Program-owned lamport holder bound to exactly one [`Bid`].
#[account]
#[derive(Debug)]
pub struct EscrowVault {
    pub key: AccountKey,
    pub bid: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Keyed for EscrowVault {
    const KEY: AccountKey = AccountKey::EscrowVaultV1;

    fn account_key(&self) -> AccountKey {
        self.key
    }
}
