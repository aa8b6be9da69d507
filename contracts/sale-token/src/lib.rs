#![no_std]
//! Sale token.
//!
//! A minimal fungible token owned by the tiered sale. Only the owner can mint,
//! and holders can neither transfer nor burn until the token is finalized.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

mod types;

pub use crate::types::{DataKey, Minted, OwnershipTransferred, TokenError};

const DAY_IN_LEDGERS: u32 = 17280;
const BALANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const BALANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

pub const MINT: Symbol = symbol_short!("mint");
pub const BURN: Symbol = symbol_short!("burn");
pub const TRANSFER: Symbol = symbol_short!("transfer");

#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    /// Initialize the token with its minting owner.
    ///
    /// `deployer` signs the setup; `owner` is usually the sale contract and
    /// cannot sign for itself here. `release_time` is the moment after which
    /// anyone may finalize, so a stalled owner can never keep holders locked
    /// forever.
    pub fn initialize(
        env: Env,
        deployer: Address,
        owner: Address,
        release_time: u64,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(TokenError::AlreadyInitialized);
        }
        deployer.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage()
            .instance()
            .set(&DataKey::ReleaseTime, &release_time);
        env.storage().instance().set(&DataKey::Finalized, &false);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        Ok(())
    }

    /// Mint `amount` to `to`. Owner only.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        let owner = Self::read_owner(&env)?;
        owner.require_auth();

        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let total_supply = Self::total_supply(env.clone())
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let balance = Self::balance(env.clone(), to.clone())
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        Self::write_balance(&env, &to, balance);
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &total_supply);

        env.events().publish(
            (MINT, to.clone()),
            Minted {
                to,
                amount,
                total_supply,
            },
        );
        Ok(())
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        let key = DataKey::Balance(id);
        match env.storage().persistent().get::<_, i128>(&key) {
            Some(balance) => {
                env.storage().persistent().extend_ttl(
                    &key,
                    BALANCE_LIFETIME_THRESHOLD,
                    BALANCE_BUMP_AMOUNT,
                );
                balance
            }
            None => 0,
        }
    }

    /// Move tokens between holders. Locked until finalization.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        Self::require_finalized(&env)?;

        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        Self::write_balance(&env, &from, from_balance - amount);

        let to_balance = Self::balance(env.clone(), to.clone())
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        Self::write_balance(&env, &to, to_balance);

        env.events().publish((TRANSFER, from, to), amount);
        Ok(())
    }

    /// Destroy `amount` of the caller's own tokens. Locked until finalization.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        Self::require_finalized(&env)?;

        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let balance = Self::balance(env.clone(), from.clone());
        if balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        Self::write_balance(&env, &from, balance - amount);

        let total_supply = Self::total_supply(env.clone()) - amount;
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &total_supply);

        env.events().publish((BURN, from), amount);
        Ok(())
    }

    /// Enable transfers and burning.
    ///
    /// The owner may finalize at any time; once the release time has passed
    /// anyone may.
    pub fn finalize(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        let owner = Self::read_owner(&env)?;

        if Self::is_finalized(env.clone()) {
            return Err(TokenError::AlreadyFinalized);
        }

        let release_time: u64 = env
            .storage()
            .instance()
            .get(&DataKey::ReleaseTime)
            .ok_or(TokenError::NotInitialized)?;
        if caller != owner && env.ledger().timestamp() < release_time {
            return Err(TokenError::Unauthorized);
        }

        env.storage().instance().set(&DataKey::Finalized, &true);
        env.events()
            .publish((Symbol::new(&env, "finalized"),), caller);
        Ok(())
    }

    pub fn is_finalized(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Finalized)
            .unwrap_or(false)
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        Self::read_owner(&env)
    }

    /// Hand minting authority to `new_owner`. Owner only.
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), TokenError> {
        let owner = Self::read_owner(&env)?;
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &new_owner);
        env.events().publish(
            (Symbol::new(&env, "owner_changed"),),
            OwnershipTransferred {
                previous_owner: owner,
                new_owner,
            },
        );
        Ok(())
    }

    fn read_owner(env: &Env) -> Result<Address, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(TokenError::NotInitialized)
    }

    fn require_finalized(env: &Env) -> Result<(), TokenError> {
        if !Self::is_finalized(env.clone()) {
            return Err(TokenError::NotFinalized);
        }
        Ok(())
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        let key = DataKey::Balance(id.clone());
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }
}

#[cfg(test)]
mod test;
