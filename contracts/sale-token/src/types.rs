use soroban_sdk::{contracterror, contracttype, Address};

/// Storage keys for token data
#[contracttype]
pub enum DataKey {
    Owner,            // Minting authority, the sale contract until handed off
    ReleaseTime,      // After this anyone may finalize
    Finalized,        // Transfers and burns enabled
    TotalSupply,      // Sum of all balances
    Balance(Address), // Holder -> balance
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Minted {
    pub to: Address,
    pub amount: i128,
    pub total_supply: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

/// Token error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,      // Token not initialized
    AlreadyInitialized = 2,  // Token already setup
    Unauthorized = 3,        // Caller is not the owner
    InvalidAmount = 4,       // Zero or negative amount
    InsufficientBalance = 5, // Holder balance too low
    NotFinalized = 6,        // Transfers and burns are locked
    AlreadyFinalized = 7,    // Token already finalized
    Overflow = 8,            // Supply or balance overflow
}
