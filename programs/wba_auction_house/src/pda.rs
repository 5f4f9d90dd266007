use anchor_lang::prelude::Pubkey;

use crate::{constants::*, id};

pub fn find_market_config_address(creator: &Pubkey, market_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PREFIX.as_bytes(),
            MARKET.as_bytes(),
            creator.as_ref(),
            &market_id.to_le_bytes(),
        ],
        &id(),
    )
}

pub fn find_listing_address(market: &Pubkey, seller: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PREFIX.as_bytes(),
            LISTING.as_bytes(),
            market.as_ref(),
            seller.as_ref(),
            mint.as_ref(),
        ],
        &id(),
    )
}

pub fn find_bid_address(listing: &Pubkey, bidder: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PREFIX.as_bytes(),
            BID.as_bytes(),
            listing.as_ref(),
            bidder.as_ref(),
        ],
        &id(),
    )
}

pub fn find_escrow_vault_address(listing: &Pubkey, bidder: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PREFIX.as_bytes(),
            ESCROW.as_bytes(),
            listing.as_ref(),
            bidder.as_ref(),
        ],
        &id(),
    )
}

pub fn find_asset_vault_address(listing: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PREFIX.as_bytes(), ASSET_VAULT.as_bytes(), listing.as_ref()],
        &id(),
    )
}
