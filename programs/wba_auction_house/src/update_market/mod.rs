use anchor_lang::prelude::*;

use crate::{pda::find_market_config_address, state::MarketConfig, utils::*};

/// Accounts for the [`update_market` handler](wba_auction_house/fn.update_market.html).
#[derive(Accounts)]
pub struct UpdateMarket<'info> {
    /// Current market authority.
    pub authority: Signer<'info>,

    /// CHECK: Validated in update_market_logic.
    /// MarketConfig PDA.
    #[account(mut)]
    pub market_config: UncheckedAccount<'info>,

    /// CHECK: Any account may become the authority.
    pub new_authority: UncheckedAccount<'info>,

    /// CHECK: Validated in update_market_logic.
    /// Must be rent exempt.
    pub new_fee_recipient: UncheckedAccount<'info>,
}

/// Replace the authority, fee recipient and optionally the fee rate of a market.
pub fn update_market(ctx: Context<UpdateMarket>, fee_basis_points: Option<u16>) -> Result<()> {
    update_market_logic(ctx.accounts, fee_basis_points, &Rent::get()?)
}

fn update_market_logic(
    accounts: &mut UpdateMarket,
    fee_basis_points: Option<u16>,
    rent: &Rent,
) -> Result<()> {
    let market_info = accounts.market_config.to_account_info();
    let mut market_config = StagedAccount::<MarketConfig>::load(&market_info)?;

    assert_signer_is(&accounts.authority, &market_config.authority)?;
    assert_derivation(
        &market_info,
        find_market_config_address(&market_config.creator, market_config.market_id),
    )?;

    if let Some(fee_basis_points) = fee_basis_points {
        MarketConfig::validate_fee_basis_points(fee_basis_points)?;
        market_config.fee_basis_points = fee_basis_points;
    }
    assert_rent_exempt(&accounts.new_fee_recipient, rent)?;
    market_config.authority = accounts.new_authority.key();
    market_config.fee_recipient = accounts.new_fee_recipient.key();

    market_config.commit()?;

    msg!(
        "Updated market {}: authority {}, fee recipient {}, fee {} bps",
        market_info.key,
        market_config.authority,
        market_config.fee_recipient,
        market_config.fee_basis_points
    );

    Ok(())
}
