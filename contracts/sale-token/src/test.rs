#![cfg(test)]
extern crate std;

use super::*;
use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Ledger},
    Address, Env, IntoVal, Symbol,
};

const RELEASE_TIME: u64 = 1_725_000_000;

struct Setup {
    env: Env,
    deployer: Address,
    owner: Address,
    client: SaleTokenClient<'static>,
}

impl Setup {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|ledger| {
            ledger.timestamp = RELEASE_TIME - 1000;
        });

        let deployer = Address::generate(&env);
        let owner = Address::generate(&env);
        let token_id = env.register(SaleToken, ());
        let client = SaleTokenClient::new(&env, &token_id);
        client.initialize(&deployer, &owner, &RELEASE_TIME);

        Setup {
            env,
            deployer,
            owner,
            client,
        }
    }
}

#[test]
fn test_initialize_twice_fails() {
    let Setup {
        client,
        deployer,
        owner,
        ..
    } = Setup::new();
    assert_eq!(
        client.try_initialize(&deployer, &owner, &RELEASE_TIME),
        Err(Ok(TokenError::AlreadyInitialized))
    );
}

#[test]
fn test_initialize_requires_deployer_auth() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let owner = Address::generate(&env);
    let token_id = env.register(SaleToken, ());
    let client = SaleTokenClient::new(&env, &token_id);

    client.initialize(&deployer, &owner, &RELEASE_TIME);

    assert_eq!(
        env.auths(),
        std::vec![(
            deployer.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token_id.clone(),
                    Symbol::new(&env, "initialize"),
                    (deployer.clone(), owner.clone(), RELEASE_TIME).into_val(&env),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );
    assert_eq!(client.owner(), owner);
}

#[test]
fn test_mint_updates_balance_and_supply() {
    let Setup { env, client, .. } = Setup::new();
    let holder = Address::generate(&env);

    client.mint(&holder, &1_000);
    client.mint(&holder, &500);

    assert_eq!(client.balance(&holder), 1_500);
    assert_eq!(client.total_supply(), 1_500);
}

#[test]
fn test_mint_rejects_zero() {
    let Setup { env, client, .. } = Setup::new();
    let holder = Address::generate(&env);

    assert_eq!(
        client.try_mint(&holder, &0),
        Err(Ok(TokenError::InvalidAmount))
    );
}

#[test]
fn test_transfer_and_burn_locked_until_finalized() {
    let Setup { env, client, owner, .. } = Setup::new();
    let holder = Address::generate(&env);
    let other = Address::generate(&env);
    client.mint(&holder, &1_000);

    assert_eq!(
        client.try_transfer(&holder, &other, &100),
        Err(Ok(TokenError::NotFinalized))
    );
    assert_eq!(
        client.try_burn(&holder, &100),
        Err(Ok(TokenError::NotFinalized))
    );

    client.finalize(&owner);

    client.transfer(&holder, &other, &100);
    client.burn(&holder, &12);
    assert_eq!(client.balance(&holder), 888);
    assert_eq!(client.balance(&other), 100);
    assert_eq!(client.total_supply(), 988);
}

#[test]
fn test_transfer_insufficient_balance() {
    let Setup { env, client, owner, .. } = Setup::new();
    let holder = Address::generate(&env);
    let other = Address::generate(&env);
    client.mint(&holder, &10);
    client.finalize(&owner);

    assert_eq!(
        client.try_transfer(&holder, &other, &11),
        Err(Ok(TokenError::InsufficientBalance))
    );
}

#[test]
fn test_third_party_finalize_waits_for_release_time() {
    let Setup { env, client, .. } = Setup::new();
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_finalize(&stranger),
        Err(Ok(TokenError::Unauthorized))
    );

    env.ledger().with_mut(|ledger| {
        ledger.timestamp = RELEASE_TIME;
    });
    client.finalize(&stranger);
    assert!(client.is_finalized());

    assert_eq!(
        client.try_finalize(&stranger),
        Err(Ok(TokenError::AlreadyFinalized))
    );
}

#[test]
fn test_transfer_ownership() {
    let Setup { env, client, owner, .. } = Setup::new();
    let successor = Address::generate(&env);

    assert_eq!(client.owner(), owner);
    client.transfer_ownership(&successor);
    assert_eq!(client.owner(), successor);
}
