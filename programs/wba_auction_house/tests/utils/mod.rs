//! Module provide utilities for testing.

#![allow(unused)]

pub mod helpers;

use anchor_lang::AccountDeserialize;
use solana_program_test::*;
use solana_sdk::{
    account::Account, clock::Clock, program_pack::Pack, pubkey::Pubkey, signature::Signer,
    signer::keypair::Keypair, system_instruction, transaction::Transaction,
};

pub fn wba_auction_house_program_test() -> ProgramTest {
    ProgramTest::new("wba_auction_house", wba_auction_house::id(), None)
}

pub async fn airdrop(
    context: &mut ProgramTestContext,
    receiver: &Pubkey,
    amount: u64,
) -> Result<(), BanksClientError> {
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(
            &context.payer.pubkey(),
            receiver,
            amount,
        )],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await
}

/// Moves to a fresh blockhash so an identical transaction is not deduplicated.
pub async fn refresh_blockhash(context: &mut ProgramTestContext) {
    context.last_blockhash = context
        .banks_client
        .get_new_latest_blockhash(&context.last_blockhash)
        .await
        .unwrap();
}

/// Moves the cluster clock to `unix_timestamp`.
pub async fn set_clock(context: &mut ProgramTestContext, unix_timestamp: i64) {
    let mut clock = context
        .banks_client
        .get_sysvar::<Clock>()
        .await
        .unwrap();
    clock.unix_timestamp = unix_timestamp;
    context.set_sysvar(&clock);
}

pub async fn get_account(context: &mut ProgramTestContext, pubkey: &Pubkey) -> Account {
    context
        .banks_client
        .get_account(*pubkey)
        .await
        .expect("account not found")
        .expect("account empty")
}

/// `None` once the runtime has purged the account.
pub async fn try_get_account(context: &mut ProgramTestContext, pubkey: &Pubkey) -> Option<Account> {
    context
        .banks_client
        .get_account(*pubkey)
        .await
        .expect("account not found")
}

pub async fn get_lamports(context: &mut ProgramTestContext, pubkey: &Pubkey) -> u64 {
    try_get_account(context, pubkey)
        .await
        .map(|account| account.lamports)
        .unwrap_or_default()
}

pub async fn get_program_account<T: AccountDeserialize>(
    context: &mut ProgramTestContext,
    pubkey: &Pubkey,
) -> T {
    let account = get_account(context, pubkey).await;
    T::try_deserialize(&mut account.data.as_ref()).expect("failed to deserialize account")
}

pub async fn get_token_account(
    context: &mut ProgramTestContext,
    pubkey: &Pubkey,
) -> spl_token::state::Account {
    let account = get_account(context, pubkey).await;
    spl_token::state::Account::unpack(&account.data).unwrap()
}

pub async fn create_mint(
    context: &mut ProgramTestContext,
    mint: &Keypair,
    manager: &Pubkey,
    decimals: u8,
) -> Result<(), BanksClientError> {
    let rent = context.banks_client.get_rent().await.unwrap();

    let tx = Transaction::new_signed_with_payer(
        &[
            system_instruction::create_account(
                &context.payer.pubkey(),
                &mint.pubkey(),
                rent.minimum_balance(spl_token::state::Mint::LEN),
                spl_token::state::Mint::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_mint(
                &spl_token::id(),
                &mint.pubkey(),
                manager,
                None,
                decimals,
            )
            .unwrap(),
        ],
        Some(&context.payer.pubkey()),
        &[&context.payer, mint],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await
}

pub async fn create_associated_token_account(
    context: &mut ProgramTestContext,
    wallet: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, BanksClientError> {
    let tx = Transaction::new_signed_with_payer(
        &[
            spl_associated_token_account::instruction::create_associated_token_account(
                &context.payer.pubkey(),
                wallet,
                mint,
                &spl_token::id(),
            ),
        ],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await?;

    Ok(spl_associated_token_account::get_associated_token_address(
        wallet, mint,
    ))
}

pub async fn mint_tokens(
    context: &mut ProgramTestContext,
    mint: &Pubkey,
    account: &Pubkey,
    amount: u64,
    owner: &Keypair,
) -> Result<(), BanksClientError> {
    let tx = Transaction::new_signed_with_payer(
        &[spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            account,
            &owner.pubkey(),
            &[],
            amount,
        )
        .unwrap()],
        Some(&context.payer.pubkey()),
        &[&context.payer, owner],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await
}

pub async fn close_token_account(
    context: &mut ProgramTestContext,
    account: &Pubkey,
    owner: &Keypair,
) -> Result<(), BanksClientError> {
    let tx = Transaction::new_signed_with_payer(
        &[spl_token::instruction::close_account(
            &spl_token::id(),
            account,
            &owner.pubkey(),
            &owner.pubkey(),
            &[],
        )
        .unwrap()],
        Some(&context.payer.pubkey()),
        &[&context.payer, owner],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await
}
