use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, pda::*, state::*, utils::*};

/// Accounts for the [`cancel` handler](wba_auction_house/fn.cancel.html).
#[derive(Accounts)]
pub struct Cancel<'info> {
    /// Seller wallet. Receives the asset and the asset vault rent.
    #[account(mut)]
    pub seller: Signer<'info>,

    /// CHECK: Validated in cancel_logic.
    /// Listing PDA.
    #[account(mut)]
    pub listing: UncheckedAccount<'info>,

    /// Mint of the listed asset.
    pub mint: Box<Account<'info, Mint>>,

    /// Seller token account the asset and any other vault balance is returned to.
    #[account(
        mut,
        token::mint = mint,
        token::authority = seller
    )]
    pub seller_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: Validated in cancel_logic.
    /// Token account PDA holding the listed asset.
    #[account(mut)]
    pub asset_vault: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

/// Cancel an Open listing and return the asset. Bids are left for their owners to withdraw.
pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
    cancel_logic(ctx.accounts)
}

fn cancel_logic(accounts: &mut Cancel) -> Result<()> {
    let seller = accounts.seller.to_account_info();
    let listing_info = accounts.listing.to_account_info();
    let asset_vault = accounts.asset_vault.to_account_info();

    let mut listing = StagedAccount::<Listing>::load(&listing_info)?;
    assert_signer_is(&seller, &listing.seller)?;
    assert_derivation(
        &listing_info,
        find_listing_address(&listing.market, &listing.seller, &listing.mint),
    )?;
    listing.mark_cancelled(Clock::get()?.unix_timestamp)?;

    assert_keys_equal(accounts.mint.key(), listing.mint)?;
    assert_derivation(&asset_vault, find_asset_vault_address(&listing_info.key()))?;
    let vault_amount = assert_holds_listed_asset(&asset_vault, &listing.mint)?;

    let listing_seeds = [
        PREFIX.as_bytes(),
        LISTING.as_bytes(),
        listing.market.as_ref(),
        listing.seller.as_ref(),
        listing.mint.as_ref(),
        &[listing.bump],
    ];

    token::transfer(
        CpiContext::new_with_signer(
            accounts.token_program.to_account_info(),
            Transfer {
                from: asset_vault.clone(),
                to: accounts.seller_token_account.to_account_info(),
                authority: listing_info.clone(),
            },
            &[&listing_seeds],
        ),
        vault_amount,
    )?;

    token::close_account(CpiContext::new_with_signer(
        accounts.token_program.to_account_info(),
        CloseAccount {
            account: asset_vault.clone(),
            destination: seller.clone(),
            authority: listing_info.clone(),
        },
        &[&listing_seeds],
    ))?;

    listing.commit()?;

    msg!("Cancelled listing {}", listing_info.key);

    Ok(())
}
