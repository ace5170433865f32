#![no_std]

mod admin;
mod campaign;
mod errors;
mod events;
mod storage;
mod storage_types;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use errors::ContractError;
pub use storage_types::{Campaign, CampaignId};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Initialize the contract with the admin and the token used for
    /// contributions and payouts. Can only be called once.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), ContractError> {
        admin::initialize(&env, admin, token)
    }

    // ─── Campaign Lifecycle ─────────────────────────────────────────

    /// Create a new campaign owned by `creator`. Returns the campaign id.
    /// Rejected while the contract is paused.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        goal: i128,
    ) -> Result<CampaignId, ContractError> {
        campaign::create_campaign(&env, creator, title, description, goal)
    }

    /// Contribute `amount` of the funding token to an open campaign. The
    /// tokens are escrowed by the contract until the creator withdraws.
    pub fn contribute(
        env: Env,
        contributor: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), ContractError> {
        campaign::contribute(&env, contributor, campaign_id, amount)
    }

    /// Withdraw the full escrowed balance of a campaign to its creator.
    /// Only the creator can withdraw, only once, and only after the goal
    /// has been reached.
    pub fn withdraw(env: Env, caller: Address, campaign_id: CampaignId) -> Result<(), ContractError> {
        campaign::withdraw(&env, caller, campaign_id)
    }

    // ─── Queries ────────────────────────────────────────────────────

    /// Number of campaigns ever created.
    pub fn get_campaign_count(env: Env) -> u64 {
        storage::get_campaign_count(&env)
    }

    /// Total amount contributed to a campaign so far.
    pub fn get_funds_raised(env: Env, campaign_id: CampaignId) -> Result<i128, ContractError> {
        campaign::get_funds_raised(&env, campaign_id)
    }

    /// Full campaign record.
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, ContractError> {
        campaign::get_campaign(&env, campaign_id)
    }

    /// Cumulative amount `contributor` has sent to a campaign (0 if none).
    pub fn get_contribution(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, ContractError> {
        campaign::get_contribution(&env, campaign_id, contributor)
    }

    /// Page of campaigns in id order, starting at `start`. At most 100
    /// campaigns are returned per call.
    pub fn get_campaigns(env: Env, start: CampaignId, limit: u32) -> Vec<Campaign> {
        campaign::get_campaigns(&env, start, limit)
    }

    // ─── Admin ──────────────────────────────────────────────────────

    /// Pause campaign creation. Admin only.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        admin::pause(&env, caller)
    }

    /// Resume campaign creation. Admin only.
    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        admin::unpause(&env, caller)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env)
    }
}
