use soroban_sdk::{contracterror, contracttype, Address, String};

pub type CampaignId = u64;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    NativeToken,
    Paused,
    ReentrancyLock,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    ReferralCount(CampaignId),
    HasReferred(CampaignId, Address),
}

// Denomination for withdrawals: the configured base-currency asset
// contract, or an arbitrary fungible-token contract.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Currency {
    Native,
    Token(Address),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub owner: Address,
    pub title: String,
    pub redirect_url: String,
    pub base_reward: i128,
    pub reward_token: Option<Address>,
    pub token_reward: i128,
    pub referral_cap: u32,
    pub expiry_time: u64,
    pub is_active: bool,
    pub created_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    CampaignAlreadyExists = 4,
    InvalidExpiry = 5,
    InvalidAmount = 6,
    NotOwner = 7,
    InvalidOwner = 8,
    CampaignInactive = 9,
    CampaignExpired = 10,
    AlreadyReferred = 11,
    CapReached = 12,
    ContractPaused = 13,
    InsufficientPoolFunds = 14,
    InsufficientTokenFunds = 15,
    ReentrancyDetected = 16,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
