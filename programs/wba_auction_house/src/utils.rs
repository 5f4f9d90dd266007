use std::ops::{Deref, DerefMut};

use anchor_lang::{prelude::*, AccountDeserialize, AccountSerialize, Owner};
use anchor_spl::token::{self, TokenAccount};
use solana_program::{program_memory::sol_memcmp, pubkey::PUBKEY_BYTES};

use crate::{constants::LISTED_TOKEN_AMOUNT, errors::AuctionHouseError, state::Keyed};

pub fn cmp_pubkeys(a: &Pubkey, b: &Pubkey) -> bool {
    sol_memcmp(a.as_ref(), b.as_ref(), PUBKEY_BYTES) == 0
}

pub fn assert_keys_equal(key1: Pubkey, key2: Pubkey) -> Result<()> {
    if !cmp_pubkeys(&key1, &key2) {
        msg!("PublicKeyMismatch: expected {}, got {}", key2, key1);
        Err(AuctionHouseError::PublicKeyMismatch.into())
    } else {
        Ok(())
    }
}

pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> Result<()> {
    if !cmp_pubkeys(account.owner, owner) {
        msg!(
            "owner assertion failed for {}: expected {}, got {}",
            account.key,
            owner,
            account.owner
        );
        Err(AuctionHouseError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

/// Compares `account` against a freshly recomputed `(address, bump)` pair and
/// returns the bump.
pub fn assert_derivation(account: &AccountInfo, expected: (Pubkey, u8)) -> Result<u8> {
    let (key, bump) = expected;
    if !cmp_pubkeys(&key, account.key) {
        msg!(
            "derivation assertion failed for {}: expected {}",
            account.key,
            key
        );
        return Err(AuctionHouseError::InvalidDerivation.into());
    }
    Ok(bump)
}

/// The account must have signed and must be the recorded `principal`.
pub fn assert_signer_is(account: &AccountInfo, principal: &Pubkey) -> Result<()> {
    if !account.is_signer || !cmp_pubkeys(account.key, principal) {
        msg!("{} is not allowed to sign for {}", account.key, principal);
        return Err(AuctionHouseError::Unauthorized.into());
    }
    Ok(())
}

/// The account must hold at least the rent-exempt minimum for its size.
pub fn assert_rent_exempt(account: &AccountInfo, rent: &Rent) -> Result<()> {
    if !rent.is_exempt(account.lamports(), account.data_len()) {
        msg!(
            "{} holds {} lamports, below the rent-exempt minimum",
            account.key,
            account.lamports()
        );
        return Err(AuctionHouseError::FeeRecipientNotRentExempt.into());
    }
    Ok(())
}

/// The asset vault must be a token account of `mint` holding the listed unit.
/// Returns the full vault balance, which may exceed the listed unit.
pub fn assert_holds_listed_asset(asset_vault: &AccountInfo, mint: &Pubkey) -> Result<u64> {
    assert_owned_by(asset_vault, &token::ID)?;

    let vault = {
        let data = asset_vault.try_borrow_data()?;
        TokenAccount::try_deserialize(&mut &data[..])?
    };
    assert_keys_equal(vault.mint, *mint)?;

    if vault.amount < LISTED_TOKEN_AMOUNT {
        msg!("Asset vault {} holds {} of {}", asset_vault.key, vault.amount, mint);
        return Err(AuctionHouseError::InvalidAssetAmount.into());
    }
    Ok(vault.amount)
}

/// In-memory copy of a program account. Mutations are only written back by
/// [`StagedAccount::commit`], which handlers call after every check and
/// transfer of the instruction has succeeded.
pub struct StagedAccount<'a, 'info, T> {
    info: &'a AccountInfo<'info>,
    data: T,
}

impl<'a, 'info, T> StagedAccount<'a, 'info, T>
where
    T: AccountSerialize + AccountDeserialize + Owner + Keyed,
{
    /// Loads `info` after checking program ownership, the Anchor discriminator
    /// and the role key.
    pub fn load(info: &'a AccountInfo<'info>) -> Result<Self> {
        assert_owned_by(info, &T::owner())?;

        let data = {
            let bytes = info.try_borrow_data()?;
            T::try_deserialize(&mut &bytes[..]).map_err(|_| {
                msg!("{} does not hold the expected account type", info.key);
                error!(AuctionHouseError::InvalidAccountOwner)
            })?
        };

        if !data.is_initialized() {
            msg!("{} has role {:?}", info.key, data.account_key());
            return Err(AuctionHouseError::InvalidAccountOwner.into());
        }

        Ok(Self { info, data })
    }

    pub fn info(&self) -> &'a AccountInfo<'info> {
        self.info
    }

    pub fn address(&self) -> Pubkey {
        *self.info.key
    }

    pub fn commit(&self) -> Result<()> {
        let mut bytes = self.info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut bytes[..];
        self.data.try_serialize(&mut writer)?;
        Ok(())
    }
}

impl<'a, 'info, T> Deref for StagedAccount<'a, 'info, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<'a, 'info, T> DerefMut for StagedAccount<'a, 'info, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}
