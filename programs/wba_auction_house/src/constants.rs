pub const PREFIX: &str = "wba_auction_house";
pub const MARKET: &str = "market";
pub const LISTING: &str = "listing";
pub const BID: &str = "bid";
pub const ESCROW: &str = "escrow";
pub const ASSET_VAULT: &str = "asset_vault";

pub const MAX_BASIS_POINTS: u16 = 10_000;

/// Units of the listed mint held by the asset vault while a listing is open.
pub const LISTED_TOKEN_AMOUNT: u64 = 1;

pub const MARKET_CONFIG_SIZE: usize = 8 + // discriminator
1 +                                       // key
32 +                                      // creator
8 +                                       // market_id
32 +                                      // authority
32 +                                      // fee_recipient
2 +                                       // fee_basis_points
8 +                                       // created_at
1 +                                       // bump
64;                                       // padding

pub const LISTING_SIZE: usize = 8 +       // discriminator
1 +                                       // key
32 +                                      // market
32 +                                      // seller
32 +                                      // mint
8 +                                       // price
1 +                                       // state
8 +                                       // created_at
1 + 8 +                                   // closed_at
1 + 8 +                                   // end_at
8 +                                       // highest_bid
1 +                                       // bump
1 +                                       // asset_vault_bump
32;                                       // padding

pub const BID_SIZE: usize = 8 +           // discriminator
1 +                                       // key
32 +                                      // listing
32 +                                      // bidder
8 +                                       // amount
1 +                                       // state
8 +                                       // created_at
1 +                                       // bump
1 +                                       // escrow_bump
32;                                       // padding

pub const ESCROW_VAULT_SIZE: usize = 8 +  // discriminator
1 +                                       // key
32 +                                      // bid
8 +                                       // amount
1;                                        // bump
