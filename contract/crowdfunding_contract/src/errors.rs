use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    ContractPaused = 4,
    InvalidCampaignId = 5,
    CampaignCompleted = 6,
    GoalNotMet = 7,
    NotCreator = 8,
    InvalidAmount = 9,
}
