use anchor_lang::prelude::*;

use crate::{constants::*, errors::AuctionHouseError, state::*, utils::assert_rent_exempt};

/// Accounts for the [`initialize` handler](wba_auction_house/fn.initialize.html).
#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct Initialize<'info> {
    /// Market authority. Pays for the MarketConfig account and becomes its creator.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Validated in initialize_logic.
    /// Account credited with the fee on every accepted bid. Must be rent exempt.
    pub fee_recipient: UncheckedAccount<'info>,

    /// MarketConfig PDA. Created on first use; an existing record is rejected in the handler.
    #[account(
        init_if_needed,
        payer = authority,
        space = MARKET_CONFIG_SIZE,
        seeds = [
            PREFIX.as_bytes(),
            MARKET.as_bytes(),
            authority.key().as_ref(),
            market_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub market_config: Box<Account<'info, MarketConfig>>,

    pub system_program: Program<'info, System>,
}

/// Create the MarketConfig for `market_id`. Fails with `AlreadyInitialized` if it exists.
pub fn initialize(ctx: Context<Initialize>, market_id: u64, fee_basis_points: u16) -> Result<()> {
    let bump = ctx.bumps.market_config;
    initialize_logic(ctx.accounts, market_id, fee_basis_points, bump, &Rent::get()?)
}

fn initialize_logic(
    accounts: &mut Initialize,
    market_id: u64,
    fee_basis_points: u16,
    bump: u8,
    rent: &Rent,
) -> Result<()> {
    let market_config = &mut accounts.market_config;

    if market_config.is_initialized() {
        msg!("Market {} is already initialized", market_config.key());
        return Err(AuctionHouseError::AlreadyInitialized.into());
    }

    MarketConfig::validate_fee_basis_points(fee_basis_points)?;
    assert_rent_exempt(&accounts.fee_recipient, rent)?;

    market_config.key = AccountKey::MarketConfigV1;
    market_config.creator = accounts.authority.key();
    market_config.market_id = market_id;
    market_config.authority = accounts.authority.key();
    market_config.fee_recipient = accounts.fee_recipient.key();
    market_config.fee_basis_points = fee_basis_points;
    market_config.created_at = Clock::get()?.unix_timestamp;
    market_config.bump = bump;

    msg!(
        "Initialized market {} with fee {} bps",
        market_config.key(),
        fee_basis_points
    );

    Ok(())
}
