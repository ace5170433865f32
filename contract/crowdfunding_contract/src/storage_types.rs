use soroban_sdk::{contracttype, Address, String};

pub type CampaignId = u64;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    Paused,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address),
}

/// A single fundraising campaign. Ids are dense and zero-based: the campaign
/// stored under `PersistentKey::Campaign(i)` is the `i`-th ever created.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub funds_raised: i128,
    pub completed: bool,
}

// Constants
pub const MAX_PAGE_SIZE: u32 = 100; // Cap on campaigns returned per listing call
pub const TTL_THRESHOLD: u32 = 17280; // ~1 day of ledgers
pub const TTL_INSTANCE_EXTEND: u32 = 17280 * 30;
pub const TTL_PERSISTENT_EXTEND: u32 = 17280 * 90;
