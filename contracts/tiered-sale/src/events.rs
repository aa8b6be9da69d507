use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

pub const PURCHASE: Symbol = symbol_short!("purchase");
pub const AUTHORIZED: Symbol = symbol_short!("authorize");
pub const PAUSED: Symbol = symbol_short!("paused");
pub const UNPAUSED: Symbol = symbol_short!("unpaused");
pub const FINALIZED: Symbol = symbol_short!("finalized");
pub const REFUNDED: Symbol = symbol_short!("refunded");
pub const WITHDRAWN: Symbol = symbol_short!("withdrawn");
pub const BOUNTY: Symbol = symbol_short!("bounty");
pub const ADMINS: Symbol = symbol_short!("admins");
pub const WALLET: Symbol = symbol_short!("wallet");
pub const OWNER: Symbol = symbol_short!("owner");
pub const DESTROYED: Symbol = symbol_short!("destroyed");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenPurchase {
    pub investor: Address,
    pub value: i128,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestorAuthorized {
    pub investor: Address,
    pub released_tokens: i128,
    pub released_value: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChanged {
    pub by: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleFinalized {
    pub by: Address,
    pub reserve: i128,
    pub tokens_sold: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestorRefunded {
    pub investor: Address,
    pub payout: i128,
    pub fee: i128,
    pub tokens: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub by: Address,
    pub wallet: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BountyGranted {
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleDestroyed {
    pub by: Address,
    pub swept: i128,
}

pub fn token_purchase(env: &Env, investor: &Address, value: i128, amount: i128) {
    env.events().publish(
        (PURCHASE, investor.clone()),
        TokenPurchase {
            investor: investor.clone(),
            value,
            amount,
        },
    );
}

pub fn investor_authorized(env: &Env, investor: &Address, tokens: i128, value: i128) {
    env.events().publish(
        (AUTHORIZED, investor.clone()),
        InvestorAuthorized {
            investor: investor.clone(),
            released_tokens: tokens,
            released_value: value,
        },
    );
}

pub fn pause_changed(env: &Env, paused: bool, by: &Address) {
    let topic = if paused { PAUSED } else { UNPAUSED };
    env.events().publish(
        (topic, by.clone()),
        PauseChanged {
            by: by.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn sale_finalized(env: &Env, event: SaleFinalized) {
    env.events().publish((FINALIZED, event.by.clone()), event);
}

pub fn investor_refunded(env: &Env, event: InvestorRefunded) {
    env.events()
        .publish((REFUNDED, event.investor.clone()), event);
}

pub fn funds_withdrawn(env: &Env, event: FundsWithdrawn) {
    env.events().publish((WITHDRAWN, event.by.clone()), event);
}

pub fn bounty_granted(env: &Env, recipient: &Address, amount: i128) {
    env.events().publish(
        (BOUNTY, recipient.clone()),
        BountyGranted {
            recipient: recipient.clone(),
            amount,
        },
    );
}

pub fn admins_updated(env: &Env, admins: &Vec<Address>) {
    env.events().publish((ADMINS,), admins.clone());
}

pub fn wallet_updated(env: &Env, wallet: &Address) {
    env.events().publish((WALLET,), wallet.clone());
}

pub fn ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (OWNER,),
        OwnershipTransferred {
            previous_owner: previous_owner.clone(),
            new_owner: new_owner.clone(),
        },
    );
}

pub fn sale_destroyed(env: &Env, by: &Address, swept: i128) {
    env.events().publish(
        (DESTROYED, by.clone()),
        SaleDestroyed {
            by: by.clone(),
            swept,
        },
    );
}
