use crate::config::MAX_ADMINS;
use crate::events;
use crate::ledger::SaleLedger;
use crate::types::{DataKey, Error, RoleSet};
use soroban_sdk::{Address, Env, Vec};

pub struct AccessManager;

impl AccessManager {
    /// Store the initial role set
    pub fn init(env: &Env, owner: Address, admins: Vec<Address>, wallet: Address) -> Result<(), Error> {
        Self::check_admin_count(&admins)?;

        env.storage().instance().set(
            &DataKey::Roles,
            &RoleSet {
                owner,
                admins,
                wallet,
            },
        );
        Ok(())
    }

    pub fn roles(env: &Env) -> Result<RoleSet, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Roles)
            .ok_or(Error::NotInitialized)
    }

    pub fn is_owner(roles: &RoleSet, caller: &Address) -> bool {
        &roles.owner == caller
    }

    pub fn is_admin(roles: &RoleSet, caller: &Address) -> bool {
        roles.admins.contains(caller)
    }

    /// Verify caller is the owner
    pub fn require_owner(env: &Env, caller: &Address) -> Result<RoleSet, Error> {
        let roles = Self::roles(env)?;
        if !Self::is_owner(&roles, caller) {
            return Err(Error::Unauthorized);
        }
        Ok(roles)
    }

    /// Verify caller is one of the admins
    pub fn require_admin(env: &Env, caller: &Address) -> Result<RoleSet, Error> {
        let roles = Self::roles(env)?;
        if !Self::is_admin(&roles, caller) {
            return Err(Error::Unauthorized);
        }
        Ok(roles)
    }

    /// Verify caller is the owner or an admin
    pub fn require_owner_or_admin(env: &Env, caller: &Address) -> Result<RoleSet, Error> {
        let roles = Self::roles(env)?;
        if !Self::is_owner(&roles, caller) && !Self::is_admin(&roles, caller) {
            return Err(Error::Unauthorized);
        }
        Ok(roles)
    }

    /// Replace the admin set. Owner only.
    pub fn set_admin_accounts(env: &Env, caller: &Address, admins: Vec<Address>) -> Result<(), Error> {
        SaleLedger::require_live(env)?;
        let mut roles = Self::require_owner(env, caller)?;
        Self::check_admin_count(&admins)?;

        roles.admins = admins;
        Self::save(env, &roles);
        events::admins_updated(env, &roles.admins);
        Ok(())
    }

    /// Change the wallet receiving proceeds. Owner only.
    pub fn set_main_wallet(env: &Env, caller: &Address, wallet: Address) -> Result<(), Error> {
        SaleLedger::require_live(env)?;
        let mut roles = Self::require_owner(env, caller)?;

        roles.wallet = wallet;
        Self::save(env, &roles);
        events::wallet_updated(env, &roles.wallet);
        Ok(())
    }

    /// Hand the owner role to `new_owner`. Owner only.
    pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: Address) -> Result<(), Error> {
        SaleLedger::require_live(env)?;
        let mut roles = Self::require_owner(env, caller)?;

        let previous_owner = roles.owner.clone();
        roles.owner = new_owner;
        Self::save(env, &roles);
        events::ownership_transferred(env, &previous_owner, &roles.owner);
        Ok(())
    }

    fn check_admin_count(admins: &Vec<Address>) -> Result<(), Error> {
        if admins.len() > MAX_ADMINS {
            return Err(Error::TooManyAdmins);
        }
        Ok(())
    }

    fn save(env: &Env, roles: &RoleSet) {
        env.storage().instance().set(&DataKey::Roles, roles);
        SaleLedger::bump(env);
    }
}
