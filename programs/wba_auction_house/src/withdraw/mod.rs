use anchor_lang::prelude::*;

use crate::{
    pda::{find_bid_address, find_escrow_vault_address},
    settlement::*,
    state::*,
    utils::*,
};

/// Accounts for the [`withdraw` handler](wba_auction_house/fn.withdraw.html).
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Bidder wallet. Receives the escrowed amount and the escrow rent.
    #[account(mut)]
    pub bidder: Signer<'info>,

    /// CHECK: Only used as a derivation seed; the bid and escrow addresses are checked in withdraw_logic.
    /// Listing PDA the bid was placed on.
    pub listing: UncheckedAccount<'info>,

    /// CHECK: Validated in withdraw_logic.
    /// Bid PDA.
    #[account(mut)]
    pub bid: UncheckedAccount<'info>,

    /// CHECK: Validated in withdraw_logic.
    /// Escrow vault PDA of the bid.
    #[account(mut)]
    pub escrow_vault: UncheckedAccount<'info>,
}

/// Return an Active bid's escrow to the bidder. Allowed whatever the listing's state.
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    withdraw_logic(ctx.accounts, &Rent::get()?)
}

fn withdraw_logic(accounts: &mut Withdraw, rent: &Rent) -> Result<()> {
    let bidder = accounts.bidder.to_account_info();
    let bid_info = accounts.bid.to_account_info();
    let escrow_info = accounts.escrow_vault.to_account_info();
    let listing_key = accounts.listing.key();

    let mut bid = StagedAccount::<Bid>::load(&bid_info)?;
    assert_signer_is(&bidder, &bid.bidder)?;
    assert_derivation(&bid_info, find_bid_address(&listing_key, bidder.key))?;
    bid.mark_withdrawn()?;

    let escrow_vault = StagedAccount::<EscrowVault>::load(&escrow_info)?;
    assert_derivation(&escrow_info, find_escrow_vault_address(&listing_key, bidder.key))?;
    assert_keys_equal(escrow_vault.bid, bid_info.key())?;

    let amount = bid.amount;
    refund_escrow(&escrow_info, &bidder, amount, rent)?;
    close_program_account(&escrow_info, &bidder)?;

    bid.commit()?;

    msg!("Withdrew {} lamports from {}", amount, bid_info.key);

    Ok(())
}
