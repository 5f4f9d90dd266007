use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};
use solana_program::program_memory::sol_memset;

use crate::{
    constants::MAX_BASIS_POINTS,
    errors::{AuctionHouseError, OrArithError},
    state::MarketConfig,
};

/// How an accepted bid amount is divided between the market and the seller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub fee: u64,
    pub proceeds: u64,
}

/// `fee = floor(amount * fee_basis_points / 10000)`, `proceeds = amount - fee`.
pub fn split_payment(amount: u64, fee_basis_points: u16) -> Result<Payout> {
    MarketConfig::validate_fee_basis_points(fee_basis_points)?;

    let fee = (amount as u128)
        .checked_mul(fee_basis_points as u128)
        .or_arith_error()?
        .checked_div(MAX_BASIS_POINTS as u128)
        .or_arith_error()?;
    let fee = u64::try_from(fee).map_err(|_| AuctionHouseError::ArithmeticOverflow)?;
    let proceeds = amount.checked_sub(fee).or_arith_error()?;

    Ok(Payout { fee, proceeds })
}

/// Lamports held by `vault` above its rent-exempt minimum.
pub fn escrowed_balance(vault: &AccountInfo, rent: &Rent) -> u64 {
    vault
        .lamports()
        .saturating_sub(rent.minimum_balance(vault.data_len()))
}

/// Moves lamports out of a program-owned account.
pub fn transfer_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let from_balance = from.lamports().checked_sub(amount).or_arith_error()?;
    **from.try_borrow_mut_lamports()? = from_balance;

    let to_balance = to.lamports().checked_add(amount).or_arith_error()?;
    **to.try_borrow_mut_lamports()? = to_balance;

    Ok(())
}

pub fn deposit_to_escrow<'info>(
    bidder: &AccountInfo<'info>,
    escrow_vault: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            Transfer {
                from: bidder.clone(),
                to: escrow_vault.clone(),
            },
        ),
        amount,
    )
}

fn assert_escrow_covers(escrow_vault: &AccountInfo, amount: u64, rent: &Rent) -> Result<()> {
    let available = escrowed_balance(escrow_vault, rent);
    if available < amount {
        msg!(
            "Escrow {} holds {} lamports, {} required",
            escrow_vault.key,
            available,
            amount
        );
        return Err(AuctionHouseError::InsufficientEscrow.into());
    }
    Ok(())
}

/// Pays `amount` out of the escrow: the market fee to `fee_recipient` and the
/// rest to `seller`. The vault keeps its rent-exempt reserve.
pub fn settle_sale(
    escrow_vault: &AccountInfo,
    seller: &AccountInfo,
    fee_recipient: &AccountInfo,
    amount: u64,
    fee_basis_points: u16,
    rent: &Rent,
) -> Result<Payout> {
    let payout = split_payment(amount, fee_basis_points)?;
    assert_escrow_covers(escrow_vault, amount, rent)?;

    transfer_lamports(escrow_vault, fee_recipient, payout.fee)?;
    transfer_lamports(escrow_vault, seller, payout.proceeds)?;

    Ok(payout)
}

pub fn refund_escrow(
    escrow_vault: &AccountInfo,
    bidder: &AccountInfo,
    amount: u64,
    rent: &Rent,
) -> Result<()> {
    assert_escrow_covers(escrow_vault, amount, rent)?;
    transfer_lamports(escrow_vault, bidder, amount)
}

/// Drains every lamport of a program-owned account into `destination` and
/// zeroes its data. The runtime purges it at the end of the transaction.
pub fn close_program_account(account: &AccountInfo, destination: &AccountInfo) -> Result<()> {
    transfer_lamports(account, destination, account.lamports())?;

    let mut data = account.try_borrow_mut_data()?;
    let len = data.len();
    sol_memset(&mut data, 0, len);

    Ok(())
}
