use soroban_sdk::{Address, Env};

use crate::storage_types::{
    Campaign, CampaignId, DataKey, PersistentKey, TTL_INSTANCE_EXTEND, TTL_PERSISTENT_EXTEND,
    TTL_THRESHOLD,
};

// --- Admin / configuration ---

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

pub fn get_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Token)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    extend_instance_ttl(env);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    extend_instance_ttl(env);
}

// --- Campaign counter ---

pub fn get_campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn set_campaign_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::CampaignCount, &count);
    extend_instance_ttl(env);
}

// --- Campaigns ---

pub fn get_campaign(env: &Env, campaign_id: CampaignId) -> Option<Campaign> {
    let key = PersistentKey::Campaign(campaign_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_campaign(env: &Env, campaign_id: CampaignId, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign_id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent_ttl(env, &key);
}

// --- Contribution ledger ---

pub fn get_contribution(env: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_contribution(env: &Env, campaign_id: CampaignId, contributor: &Address, total: i128) {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    env.storage().persistent().set(&key, &total);
    extend_persistent_ttl(env, &key);
}

// --- TTL management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_INSTANCE_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_PERSISTENT_EXTEND);
}
