use soroban_sdk::{contracterror, contracttype, Address, Vec};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Roles,                  // Owner, admins and wallet
    Schedule,               // Sale timing, immutable
    State,                  // Ledger totals and lifecycle flags
    Currency,               // Asset accepted as contribution
    Token,                  // Token sold by this contract
    EarlyBirdPools,         // Ordered flat bonus pools
    Authorized(Address),    // Investor -> whitelisted
    Entitlement(Address),   // Investor -> tokens and currency held back
    Unverified(Address),    // Investor -> value delivered before authorization
}

/// Sale timing. `round_ends` holds the end of rounds 1..=7, the last one is
/// the end of the sale.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleSchedule {
    pub start_time: u64,
    pub round_ends: Vec<u64>,
    pub max_finalization_time: u64,
}

/// Where a timestamp falls relative to the schedule.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SalePhase {
    NotStarted,
    Round(u32), // 1-based
    Ended,
}

/// Mutable sale ledger and lifecycle flags.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleState {
    pub total_raised: i128,
    pub tokens_sold: i128,
    pub bounty_tokens: i128,
    pub paused: bool,
    pub pause_start: Option<u64>,
    pub finalized: bool,
    pub destroyed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleSet {
    pub owner: Address,
    pub admins: Vec<Address>,
    pub wallet: Address,
}

/// Flat bonus pool for contributions of at least `min_contribution`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EarlyBirdPool {
    pub min_contribution: i128,
    pub bonus: i128,
    pub capacity: i128,
    pub remaining: i128,
}

/// One flat bonus taken from pool `pool`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EarlyBirdDraw {
    pub pool: u32,
    pub amount: i128,
}

/// Tokens and currency held back for an investor awaiting authorization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingEntitlement {
    pub value: i128,
    pub tokens: i128,
    pub draws: Vec<EarlyBirdDraw>,
}

/// Token amount a contribution yields and how it was made up.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    pub round: u32,
    pub rate: i128,
    pub flat_bonus: i128,
    pub pool: Option<u32>,
    pub tokens: i128,
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidSchedule = 3,
    TooManyAdmins = 4,
    TokenNotOwned = 5,
    EmptyList = 6,

    Unauthorized = 10,

    SaleNotStarted = 20,
    SaleEnded = 21,
    SaleNotEnded = 22,
    SalePaused = 23,
    AlreadyPaused = 24,
    NotPaused = 25,
    AlreadyFinalized = 26,
    NotYetFinalized = 27,
    Destroyed = 28,

    BelowMinimum = 40,
    AboveCap = 41,
    BountyBelowMinimum = 42,
    NothingToRefund = 43,

    ArithmeticOverflow = 50,
}
