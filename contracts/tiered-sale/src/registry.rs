use crate::access::AccessManager;
use crate::config::{INVESTOR_BUMP_AMOUNT, INVESTOR_LIFETIME_THRESHOLD, VERIFICATION_LIMIT};
use crate::events;
use crate::external;
use crate::ledger::SaleLedger;
use crate::types::{DataKey, EarlyBirdDraw, Error, PendingEntitlement};
use soroban_sdk::{log, Address, Env, Vec};

/// Investor whitelist and the entitlements held back until an investor is on it.
pub struct AuthorizationRegistry;

impl AuthorizationRegistry {
    pub fn is_authorized(env: &Env, investor: &Address) -> bool {
        let key = DataKey::Authorized(investor.clone());
        let authorized = env.storage().persistent().get(&key).unwrap_or(false);
        if authorized {
            env.storage().persistent().extend_ttl(
                &key,
                INVESTOR_LIFETIME_THRESHOLD,
                INVESTOR_BUMP_AMOUNT,
            );
        }
        authorized
    }

    pub fn entitlement(env: &Env, investor: &Address) -> Option<PendingEntitlement> {
        env.storage()
            .persistent()
            .get(&DataKey::Entitlement(investor.clone()))
    }

    /// Add a held-back contribution to the investor's entitlement.
    pub fn queue(
        env: &Env,
        investor: &Address,
        value: i128,
        tokens: i128,
        draw: Option<EarlyBirdDraw>,
    ) -> Result<(), Error> {
        let mut entitlement = Self::entitlement(env, investor).unwrap_or(PendingEntitlement {
            value: 0,
            tokens: 0,
            draws: Vec::new(env),
        });

        entitlement.value = entitlement
            .value
            .checked_add(value)
            .ok_or(Error::ArithmeticOverflow)?;
        entitlement.tokens = entitlement
            .tokens
            .checked_add(tokens)
            .ok_or(Error::ArithmeticOverflow)?;
        if let Some(draw) = draw {
            entitlement.draws.push_back(draw);
        }

        let key = DataKey::Entitlement(investor.clone());
        env.storage().persistent().set(&key, &entitlement);
        env.storage()
            .persistent()
            .extend_ttl(&key, INVESTOR_LIFETIME_THRESHOLD, INVESTOR_BUMP_AMOUNT);
        Ok(())
    }

    /// Value already delivered to an investor that is not yet authorized.
    pub fn unverified_total(env: &Env, investor: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Unverified(investor.clone()))
            .unwrap_or(0)
    }

    /// Count `value` against the investor's unverified allowance.
    ///
    /// Returns false, recording nothing, once the running total would reach
    /// `VERIFICATION_LIMIT`; the contribution is then held back instead.
    pub fn admit_unverified(env: &Env, investor: &Address, value: i128) -> Result<bool, Error> {
        let total = Self::unverified_total(env, investor)
            .checked_add(value)
            .ok_or(Error::ArithmeticOverflow)?;
        if total >= VERIFICATION_LIMIT {
            return Ok(false);
        }

        let key = DataKey::Unverified(investor.clone());
        env.storage().persistent().set(&key, &total);
        env.storage()
            .persistent()
            .extend_ttl(&key, INVESTOR_LIFETIME_THRESHOLD, INVESTOR_BUMP_AMOUNT);
        Ok(true)
    }

    pub fn clear_entitlement(env: &Env, investor: &Address) {
        env.storage()
            .persistent()
            .remove(&DataKey::Entitlement(investor.clone()));
    }

    /// Whitelist investors and deliver whatever they are owed.
    ///
    /// Queued tokens are minted straight away. Custodied currency moves to the
    /// wallet while the sale is open; once finalized it stays for `withdraw`.
    pub fn authorize(env: &Env, caller: &Address, investors: Vec<Address>) -> Result<(), Error> {
        let state = SaleLedger::require_live(env)?;
        let roles = AccessManager::require_owner_or_admin(env, caller)?;
        if investors.is_empty() {
            return Err(Error::EmptyList);
        }

        for investor in investors.iter() {
            let key = DataKey::Authorized(investor.clone());
            env.storage().persistent().set(&key, &true);
            env.storage().persistent().extend_ttl(
                &key,
                INVESTOR_LIFETIME_THRESHOLD,
                INVESTOR_BUMP_AMOUNT,
            );
            env.storage()
                .persistent()
                .remove(&DataKey::Unverified(investor.clone()));

            let (tokens, value) = match Self::entitlement(env, &investor) {
                Some(entitlement) => {
                    Self::clear_entitlement(env, &investor);
                    external::mint_tokens(env, &investor, entitlement.tokens)?;
                    if !state.finalized {
                        external::pay_out(env, &roles.wallet, entitlement.value)?;
                    }
                    log!(env, "entitlement released", investor, entitlement.tokens);
                    (entitlement.tokens, entitlement.value)
                }
                None => (0, 0),
            };

            events::investor_authorized(env, &investor, tokens, value);
        }

        Ok(())
    }
}
