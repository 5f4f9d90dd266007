//! # WBA Auction House
//! An escrow-backed marketplace. Sellers list one unit of an SPL mint at a minimum
//! price, bidders escrow native SOL against the listing, and the seller settles the
//! sale by accepting a single bid. The market fee is taken at acceptance time from
//! the market's current configuration.

pub mod accept;
pub mod bid;
pub mod cancel;
pub mod constants;
pub mod errors;
pub mod initialize;
pub mod list;
pub mod pda;
pub mod settlement;
pub mod state;
pub mod update_market;
pub mod utils;
pub mod withdraw;

pub use state::*;

use crate::{
    accept::*, bid::*, cancel::*, initialize::*, list::*, update_market::*, withdraw::*,
};

use anchor_lang::prelude::*;

anchor_lang::declare_id!("2gcFaJwn6AcRqgZdKSmTPjHJAXpwKu3EH67DFHThzpbP");

#[program]
pub mod wba_auction_house {
    use super::*;

    /// Create the MarketConfig for (`authority`, `market_id`) with a fee of
    /// `fee_basis_points` paid to `fee_recipient` on every accepted bid.
    pub fn initialize(ctx: Context<Initialize>, market_id: u64, fee_basis_points: u16) -> Result<()> {
        initialize::initialize(ctx, market_id, fee_basis_points)
    }

    /// Replace the market authority and fee recipient, and optionally the fee rate.
    pub fn update_market(
        ctx: Context<UpdateMarket>,
        fee_basis_points: Option<u16>,
    ) -> Result<()> {
        update_market::update_market(ctx, fee_basis_points)
    }

    /// List one unit of a mint for at least `price` lamports, optionally as a
    /// timed auction lasting `auction_duration` seconds.
    pub fn list(ctx: Context<List>, price: u64, auction_duration: Option<u64>) -> Result<()> {
        list::list(ctx, price, auction_duration)
    }

    /// Escrow `amount` lamports against an Open listing.
    pub fn bid(ctx: Context<PlaceBid>, amount: u64) -> Result<()> {
        bid::bid(ctx, amount)
    }

    /// Return an Active bid's escrow to its bidder.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        withdraw::withdraw(ctx)
    }

    /// Sell the listed asset to the bidder of `bid`. Timed auctions settle once
    /// bidding has closed.
    pub fn accept(ctx: Context<Accept>) -> Result<()> {
        accept::accept(ctx)
    }

    /// Cancel an Open listing and return the asset to the seller.
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        cancel::cancel(ctx)
    }
}
