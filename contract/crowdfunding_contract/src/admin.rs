use soroban_sdk::{symbol_short, Address, Env};

use crate::errors::ContractError;
use crate::storage;

pub fn initialize(env: &Env, admin: Address, token: Address) -> Result<(), ContractError> {
    if storage::has_admin(env) {
        return Err(ContractError::AlreadyInitialized);
    }

    admin.require_auth();

    storage::set_admin(env, &admin);
    storage::set_token(env, &token);
    storage::set_paused(env, false);
    storage::set_campaign_count(env, 0);

    Ok(())
}

pub fn pause(env: &Env, caller: Address) -> Result<(), ContractError> {
    require_admin(env, &caller)?;
    storage::set_paused(env, true);

    env.events().publish((symbol_short!("paused"),), caller);

    Ok(())
}

pub fn unpause(env: &Env, caller: Address) -> Result<(), ContractError> {
    require_admin(env, &caller)?;
    storage::set_paused(env, false);

    env.events().publish((symbol_short!("unpaused"),), caller);

    Ok(())
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    storage::get_admin(env).ok_or(ContractError::NotInitialized)
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();

    let admin = storage::get_admin(env).ok_or(ContractError::NotInitialized)?;
    if caller != &admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
