use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    errors::{AuctionHouseError, OrArithError},
    pda::find_market_config_address,
    state::*,
    utils::*,
};

/// Accounts for the [`list` handler](wba_auction_house/fn.list.html).
#[derive(Accounts)]
pub struct List<'info> {
    /// Seller wallet. Pays for the Listing and the asset vault.
    #[account(mut)]
    pub seller: Signer<'info>,

    /// CHECK: Validated in list_logic.
    /// MarketConfig PDA the listing belongs to.
    pub market_config: UncheckedAccount<'info>,

    /// Mint of the listed asset.
    pub mint: Box<Account<'info, Mint>>,

    /// Seller token account the asset is taken from.
    #[account(
        mut,
        token::mint = mint,
        token::authority = seller
    )]
    pub seller_token_account: Box<Account<'info, TokenAccount>>,

    /// Listing PDA. Created on first use; an existing record is rejected in the handler.
    #[account(
        init_if_needed,
        payer = seller,
        space = LISTING_SIZE,
        seeds = [
            PREFIX.as_bytes(),
            LISTING.as_bytes(),
            market_config.key().as_ref(),
            seller.key().as_ref(),
            mint.key().as_ref()
        ],
        bump
    )]
    pub listing: Box<Account<'info, Listing>>,

    /// Token account PDA holding the asset while the listing is open.
    #[account(
        init_if_needed,
        payer = seller,
        seeds = [
            PREFIX.as_bytes(),
            ASSET_VAULT.as_bytes(),
            listing.key().as_ref()
        ],
        bump,
        token::mint = mint,
        token::authority = listing
    )]
    pub asset_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// Create an Open listing for one unit of `mint` at a minimum of `price` lamports.
/// With `auction_duration` set the listing runs as a timed auction that closes
/// bidding `auction_duration` seconds from now.
pub fn list(ctx: Context<List>, price: u64, auction_duration: Option<u64>) -> Result<()> {
    let listing_bump = ctx.bumps.listing;
    let asset_vault_bump = ctx.bumps.asset_vault;
    list_logic(
        ctx.accounts,
        price,
        auction_duration,
        listing_bump,
        asset_vault_bump,
    )
}

fn auction_end(now: i64, auction_duration: Option<u64>) -> Result<Option<i64>> {
    match auction_duration {
        None => Ok(None),
        Some(0) => Err(AuctionHouseError::InvalidAuctionDuration.into()),
        Some(duration) => {
            let duration =
                i64::try_from(duration).map_err(|_| AuctionHouseError::ArithmeticOverflow)?;
            Ok(Some(now.checked_add(duration).or_arith_error()?))
        }
    }
}

fn list_logic(
    accounts: &mut List,
    price: u64,
    auction_duration: Option<u64>,
    listing_bump: u8,
    asset_vault_bump: u8,
) -> Result<()> {
    let market_info = accounts.market_config.to_account_info();
    let market_config = StagedAccount::<MarketConfig>::load(&market_info)?;
    assert_derivation(
        &market_info,
        find_market_config_address(&market_config.creator, market_config.market_id),
    )?;

    if accounts.listing.is_initialized() {
        msg!(
            "Listing {} already exists in state {:?}",
            accounts.listing.key(),
            accounts.listing.state
        );
        return Err(AuctionHouseError::InvalidState.into());
    }

    if price == 0 {
        return Err(AuctionHouseError::InvalidPrice.into());
    }

    if accounts.seller_token_account.amount < LISTED_TOKEN_AMOUNT {
        msg!(
            "Seller token account {} holds {} of {}",
            accounts.seller_token_account.key(),
            accounts.seller_token_account.amount,
            accounts.mint.key()
        );
        return Err(AuctionHouseError::InvalidAssetAmount.into());
    }

    let now = Clock::get()?.unix_timestamp;
    let end_at = auction_end(now, auction_duration)?;

    token::transfer(
        CpiContext::new(
            accounts.token_program.to_account_info(),
            Transfer {
                from: accounts.seller_token_account.to_account_info(),
                to: accounts.asset_vault.to_account_info(),
                authority: accounts.seller.to_account_info(),
            },
        ),
        LISTED_TOKEN_AMOUNT,
    )?;

    let listing = &mut accounts.listing;
    listing.key = AccountKey::ListingV1;
    listing.market = market_info.key();
    listing.seller = accounts.seller.key();
    listing.mint = accounts.mint.key();
    listing.price = price;
    listing.state = ListingState::Open;
    listing.created_at = now;
    listing.closed_at = None;
    listing.end_at = end_at;
    listing.highest_bid = 0;
    listing.bump = listing_bump;
    listing.asset_vault_bump = asset_vault_bump;

    msg!(
        "Listed {} at {} lamports, ends at {:?}",
        listing.mint,
        price,
        end_at
    );

    Ok(())
}
