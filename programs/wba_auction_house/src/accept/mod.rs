use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer},
};

use crate::{constants::*, errors::AuctionHouseError, pda::*, settlement::*, state::*, utils::*};

/// Accounts for the [`accept` handler](wba_auction_house/fn.accept.html).
#[derive(Accounts)]
pub struct Accept<'info> {
    /// Seller wallet. Receives the proceeds and the asset vault rent.
    #[account(mut)]
    pub seller: Signer<'info>,

    /// CHECK: Validated in accept_logic.
    /// MarketConfig PDA the listing belongs to.
    pub market_config: UncheckedAccount<'info>,

    /// CHECK: Validated in accept_logic.
    /// Listing PDA.
    #[account(mut)]
    pub listing: UncheckedAccount<'info>,

    /// Mint of the listed asset.
    pub mint: Box<Account<'info, Mint>>,

    /// CHECK: Validated in accept_logic.
    /// Winning bidder wallet. Receives the escrow rent.
    #[account(mut)]
    pub bidder: UncheckedAccount<'info>,

    /// CHECK: Validated in accept_logic.
    /// Bid PDA being accepted.
    #[account(mut)]
    pub bid: UncheckedAccount<'info>,

    /// CHECK: Validated in accept_logic.
    /// Escrow vault PDA of the bid.
    #[account(mut)]
    pub escrow_vault: UncheckedAccount<'info>,

    /// CHECK: Validated in accept_logic.
    /// Fee recipient recorded in the MarketConfig.
    #[account(mut)]
    pub fee_recipient: UncheckedAccount<'info>,

    /// CHECK: Validated in accept_logic.
    /// Token account PDA holding the listed asset.
    #[account(mut)]
    pub asset_vault: UncheckedAccount<'info>,

    /// Bidder associated token account. Recreated at the seller's expense if the
    /// bidder closed it after bidding.
    #[account(
        init_if_needed,
        payer = seller,
        associated_token::mint = mint,
        associated_token::authority = bidder
    )]
    pub bidder_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Settle the listing with `bid`: pay the market fee and the seller out of the
/// escrow and deliver the asset to the bidder.
pub fn accept(ctx: Context<Accept>) -> Result<()> {
    accept_logic(ctx.accounts, &Rent::get()?)
}

fn accept_logic(accounts: &mut Accept, rent: &Rent) -> Result<()> {
    let seller = accounts.seller.to_account_info();
    let bidder = accounts.bidder.to_account_info();
    let market_info = accounts.market_config.to_account_info();
    let listing_info = accounts.listing.to_account_info();
    let bid_info = accounts.bid.to_account_info();
    let escrow_info = accounts.escrow_vault.to_account_info();
    let fee_recipient = accounts.fee_recipient.to_account_info();
    let asset_vault = accounts.asset_vault.to_account_info();

    let mut listing = StagedAccount::<Listing>::load(&listing_info)?;
    assert_signer_is(&seller, &listing.seller)?;
    assert_derivation(
        &listing_info,
        find_listing_address(&listing.market, &listing.seller, &listing.mint),
    )?;
    listing.assert_open()?;

    let now = Clock::get()?.unix_timestamp;
    listing.assert_auction_over(now)?;

    let market_config = StagedAccount::<MarketConfig>::load(&market_info)?;
    assert_derivation(
        &market_info,
        find_market_config_address(&market_config.creator, market_config.market_id),
    )?;
    assert_keys_equal(market_info.key(), listing.market)?;
    assert_keys_equal(fee_recipient.key(), market_config.fee_recipient)?;
    assert_rent_exempt(&fee_recipient, rent)?;

    let mut bid = StagedAccount::<Bid>::load(&bid_info)?;
    assert_derivation(&bid_info, find_bid_address(&listing_info.key(), bidder.key))?;
    bid.assert_active()?;

    let escrow_vault = StagedAccount::<EscrowVault>::load(&escrow_info)?;
    assert_derivation(
        &escrow_info,
        find_escrow_vault_address(&listing_info.key(), bidder.key),
    )?;
    assert_keys_equal(escrow_vault.bid, bid_info.key())?;

    let amount = bid.amount;
    if amount < listing.price {
        msg!("Bid of {} is below the price of {}", amount, listing.price);
        return Err(AuctionHouseError::InvalidPrice.into());
    }

    assert_keys_equal(accounts.mint.key(), listing.mint)?;
    assert_derivation(&asset_vault, find_asset_vault_address(&listing_info.key()))?;
    let vault_amount = assert_holds_listed_asset(&asset_vault, &listing.mint)?;

    listing.mark_sold(now)?;
    bid.mark_accepted()?;

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
                to: accounts.bidder_token_account.to_account_info(),
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

    let payout = settle_sale(
        &escrow_info,
        &seller,
        &fee_recipient,
        amount,
        market_config.fee_basis_points,
        rent,
    )?;
    close_program_account(&escrow_info, &bidder)?;

    listing.commit()?;
    bid.commit()?;

    msg!(
        "Accepted bid {}: fee {}, proceeds {}",
        bid_info.key,
        payout.fee,
        payout.proceeds
    );

    Ok(())
}
