use solana_program_test::ProgramTestContext;
use solana_sdk::{pubkey::Pubkey, signature::Keypair};

use super::get_account;

pub const ONE_SOL: u64 = 1_000_000_000;

pub struct TestMarket {
    pub authority: Keypair,
    pub fee_recipient: Pubkey,
    pub market_id: u64,
    pub address: Pubkey,
}

pub struct TestListing {
    pub seller: Keypair,
    pub market: Pubkey,
    pub mint: Pubkey,
    pub seller_token_account: Pubkey,
    pub address: Pubkey,
    pub asset_vault: Pubkey,
}

pub struct TestBid {
    pub bidder: Keypair,
    pub listing: Pubkey,
    pub bidder_token_account: Pubkey,
    pub address: Pubkey,
    pub escrow_vault: Pubkey,
}

/// Lamports an escrow vault holds above its rent-exempt minimum.
pub async fn escrowed_amount(context: &mut ProgramTestContext, escrow_vault: &Pubkey) -> u64 {
    let rent = context.banks_client.get_rent().await.unwrap();
    let account = get_account(context, escrow_vault).await;
    account.lamports - rent.minimum_balance(account.data.len())
}
