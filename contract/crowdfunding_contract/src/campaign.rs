use soroban_sdk::{token, Address, Env, String, Vec};

use crate::errors::ContractError;
use crate::events;
use crate::storage;
use crate::storage_types::{Campaign, CampaignId, MAX_PAGE_SIZE};

pub fn create_campaign(
    env: &Env,
    creator: Address,
    title: String,
    description: String,
    goal: i128,
) -> Result<CampaignId, ContractError> {
    creator.require_auth();

    if !storage::has_admin(env) {
        return Err(ContractError::NotInitialized);
    }
    if storage::is_paused(env) {
        return Err(ContractError::ContractPaused);
    }
    if goal <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    // Ids are dense and assigned in creation order: the next id is the count.
    let campaign_id = storage::get_campaign_count(env);

    let campaign = Campaign {
        creator: creator.clone(),
        title,
        description,
        goal,
        funds_raised: 0,
        completed: false,
    };

    storage::set_campaign(env, campaign_id, &campaign);
    storage::set_campaign_count(env, campaign_id + 1);

    events::emit_campaign_created(
        env,
        events::CampaignCreatedEvent {
            campaign_id,
            creator,
            goal,
        },
    );

    Ok(campaign_id)
}

pub fn contribute(
    env: &Env,
    contributor: Address,
    campaign_id: CampaignId,
    amount: i128,
) -> Result<(), ContractError> {
    contributor.require_auth();

    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let mut campaign =
        storage::get_campaign(env, campaign_id).ok_or(ContractError::InvalidCampaignId)?;

    if campaign.completed {
        return Err(ContractError::CampaignCompleted);
    }

    // Escrow the contribution in the contract until a valid withdrawal.
    let token_addr = storage::get_token(env).ok_or(ContractError::NotInitialized)?;
    let token_client = token::Client::new(env, &token_addr);
    token_client.transfer(&contributor, &env.current_contract_address(), &amount);

    campaign.funds_raised += amount;
    storage::set_campaign(env, campaign_id, &campaign);

    let total = storage::get_contribution(env, campaign_id, &contributor) + amount;
    storage::set_contribution(env, campaign_id, &contributor, total);

    events::emit_contribution(
        env,
        events::ContributionEvent {
            campaign_id,
            contributor,
            amount,
            funds_raised: campaign.funds_raised,
        },
    );

    Ok(())
}

/// Pay out an escrowed campaign balance to its creator and finalize it.
///
/// Checks run in a fixed order: unknown id, unmet goal, wrong caller,
/// already withdrawn. `funds_raised` is kept after payout so a repeat
/// attempt fails with `CampaignCompleted` rather than `GoalNotMet`.
pub fn withdraw(env: &Env, caller: Address, campaign_id: CampaignId) -> Result<(), ContractError> {
    caller.require_auth();

    let mut campaign =
        storage::get_campaign(env, campaign_id).ok_or(ContractError::InvalidCampaignId)?;

    if campaign.funds_raised < campaign.goal {
        return Err(ContractError::GoalNotMet);
    }
    if caller != campaign.creator {
        return Err(ContractError::NotCreator);
    }
    if campaign.completed {
        return Err(ContractError::CampaignCompleted);
    }

    let token_addr = storage::get_token(env).ok_or(ContractError::NotInitialized)?;
    let token_client = token::Client::new(env, &token_addr);
    token_client.transfer(
        &env.current_contract_address(),
        &campaign.creator,
        &campaign.funds_raised,
    );

    campaign.completed = true;
    storage::set_campaign(env, campaign_id, &campaign);

    events::emit_withdrawal(
        env,
        events::WithdrawalEvent {
            campaign_id,
            creator: campaign.creator,
            amount: campaign.funds_raised,
        },
    );

    Ok(())
}

pub fn get_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, ContractError> {
    storage::get_campaign(env, campaign_id).ok_or(ContractError::InvalidCampaignId)
}

pub fn get_funds_raised(env: &Env, campaign_id: CampaignId) -> Result<i128, ContractError> {
    get_campaign(env, campaign_id).map(|c| c.funds_raised)
}

pub fn get_contribution(
    env: &Env,
    campaign_id: CampaignId,
    contributor: Address,
) -> Result<i128, ContractError> {
    if campaign_id >= storage::get_campaign_count(env) {
        return Err(ContractError::InvalidCampaignId);
    }
    Ok(storage::get_contribution(env, campaign_id, &contributor))
}

pub fn get_campaigns(env: &Env, start: CampaignId, limit: u32) -> Vec<Campaign> {
    let count = storage::get_campaign_count(env);
    let limit = limit.min(MAX_PAGE_SIZE);

    let mut page = Vec::new(env);
    let mut id = start;
    while id < count && page.len() < limit {
        if let Some(campaign) = storage::get_campaign(env, id) {
            page.push_back(campaign);
        }
        id += 1;
    }
    page
}
