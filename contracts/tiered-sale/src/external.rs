//! Calls out of the sale: the token it mints and the currency it custodies.

use crate::types::{DataKey, Error};
use soroban_sdk::{contractclient, token, Address, Env};

/// The part of the sale token the sale relies on.
#[allow(dead_code)]
#[contractclient(name = "SaleTokenClient")]
pub trait SaleTokenInterface {
    fn mint(env: Env, to: Address, amount: i128);
    fn finalize(env: Env, caller: Address);
    fn owner(env: Env) -> Address;
    fn transfer_ownership(env: Env, new_owner: Address);
}

pub fn token_address(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn currency_address(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Currency)
        .ok_or(Error::NotInitialized)
}

pub fn token_client(env: &Env) -> Result<SaleTokenClient<'_>, Error> {
    Ok(SaleTokenClient::new(env, &token_address(env)?))
}

pub fn mint_tokens(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount > 0 {
        token_client(env)?.mint(to, &amount);
    }
    Ok(())
}

/// Pull `amount` of currency from `from` into custody.
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    token::Client::new(env, &currency_address(env)?).transfer(
        from,
        &env.current_contract_address(),
        &amount,
    );
    Ok(())
}

/// Send custodied currency to `to`.
pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount > 0 {
        token::Client::new(env, &currency_address(env)?).transfer(
            &env.current_contract_address(),
            to,
            &amount,
        );
    }
    Ok(())
}

pub fn custodied_balance(env: &Env) -> Result<i128, Error> {
    Ok(token::Client::new(env, &currency_address(env)?).balance(&env.current_contract_address()))
}
