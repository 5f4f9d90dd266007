use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::*, errors::AuctionHouseError, pda::find_listing_address, settlement::*, state::*,
    utils::*,
};

/// Accounts for the [`bid` handler](wba_auction_house/fn.bid.html).
#[derive(Accounts)]
pub struct PlaceBid<'info> {
    /// Bidder wallet. Funds the escrow and pays for the new accounts.
    #[account(mut)]
    pub bidder: Signer<'info>,

    /// CHECK: Validated in bid_logic.
    /// Listing PDA being bid on. Tracks the highest bid of a timed auction.
    #[account(mut)]
    pub listing: UncheckedAccount<'info>,

    /// Mint of the listed asset.
    pub mint: Box<Account<'info, Mint>>,

    /// Bidder associated token account the asset is delivered to on acceptance.
    #[account(
        init_if_needed,
        payer = bidder,
        associated_token::mint = mint,
        associated_token::authority = bidder
    )]
    pub bidder_token_account: Box<Account<'info, TokenAccount>>,

    /// Bid PDA. Created on first use or reopened after a withdrawal.
    #[account(
        init_if_needed,
        payer = bidder,
        space = BID_SIZE,
        seeds = [
            PREFIX.as_bytes(),
            BID.as_bytes(),
            listing.key().as_ref(),
            bidder.key().as_ref()
        ],
        bump
    )]
    pub bid: Box<Account<'info, Bid>>,

    /// Escrow vault PDA holding the bid amount.
    #[account(
        init_if_needed,
        payer = bidder,
        space = ESCROW_VAULT_SIZE,
        seeds = [
            PREFIX.as_bytes(),
            ESCROW.as_bytes(),
            listing.key().as_ref(),
            bidder.key().as_ref()
        ],
        bump
    )]
    pub escrow_vault: Box<Account<'info, EscrowVault>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Escrow `amount` lamports against an Open listing. Timed auctions also require
/// the auction to be running and `amount` to beat the highest bid.
pub fn bid(ctx: Context<PlaceBid>, amount: u64) -> Result<()> {
    let bid_bump = ctx.bumps.bid;
    let escrow_bump = ctx.bumps.escrow_vault;
    bid_logic(ctx.accounts, amount, bid_bump, escrow_bump)
}

fn bid_logic(accounts: &mut PlaceBid, amount: u64, bid_bump: u8, escrow_bump: u8) -> Result<()> {
    let listing_info = accounts.listing.to_account_info();
    let mut listing = StagedAccount::<Listing>::load(&listing_info)?;
    assert_derivation(
        &listing_info,
        find_listing_address(&listing.market, &listing.seller, &listing.mint),
    )?;
    assert_keys_equal(accounts.mint.key(), listing.mint)?;

    let now = Clock::get()?.unix_timestamp;
    listing.assert_accepting_bids(now)?;

    if amount == 0 {
        return Err(AuctionHouseError::InvalidPrice.into());
    }
    listing.assert_higher_bid(amount)?;

    if !accounts.bid.can_reopen() {
        msg!(
            "Bid {} is {:?}, withdraw it before bidding again",
            accounts.bid.key(),
            accounts.bid.state
        );
        return Err(AuctionHouseError::InvalidState.into());
    }

    deposit_to_escrow(
        &accounts.bidder.to_account_info(),
        &accounts.escrow_vault.to_account_info(),
        &accounts.system_program.to_account_info(),
        amount,
    )?;

    listing.record_bid(amount);
    listing.commit()?;

    let bid = &mut accounts.bid;
    bid.key = AccountKey::BidV1;
    bid.listing = listing_info.key();
    bid.bidder = accounts.bidder.key();
    bid.amount = amount;
    bid.state = BidState::Active;
    bid.created_at = now;
    bid.bump = bid_bump;
    bid.escrow_bump = escrow_bump;

    let escrow_vault = &mut accounts.escrow_vault;
    escrow_vault.key = AccountKey::EscrowVaultV1;
    escrow_vault.bid = bid.key();
    escrow_vault.amount = amount;
    escrow_vault.bump = escrow_bump;

    msg!("Bid {} lamports on {}", amount, listing_info.key);

    Ok(())
}
