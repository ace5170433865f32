use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub goal: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributionEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub funds_raised: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawalEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_contribution(env: &Env, event: ContributionEvent) {
    env.events()
        .publish((Symbol::new(env, "contribution"),), event);
}

pub fn emit_withdrawal(env: &Env, event: WithdrawalEvent) {
    env.events()
        .publish((Symbol::new(env, "withdrawal"),), event);
}
