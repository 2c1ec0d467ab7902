use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events::{
    ExchangeTokenSetEventData, InitializedEventData, PausedEventData, RegistryMultiSetEventData,
    RegistrySingleSetEventData, UnpausedEventData,
};
use crate::registry;
use crate::storage;
use crate::types::ItemKind;

/// Record the owner. The exchange starts unpaused.
pub fn initialize(e: &Env, owner: Address) -> Result<(), Error> {
    owner.require_auth();

    if storage::has_owner(e) {
        return Err(Error::AlreadyInitialized);
    }

    storage::set_owner(e, &owner);
    storage::set_paused(e, false);
    storage::extend_instance_ttl(e);

    InitializedEventData { owner }.publish(e);
    Ok(())
}

/// Stop every mutating engine operation (owner only).
pub fn pause(e: &Env, caller: Address) -> Result<(), Error> {
    caller.require_auth();
    require_owner(e, &caller)?;

    if storage::is_paused(e) {
        return Err(Error::InvalidState);
    }

    storage::set_paused(e, true);
    storage::extend_instance_ttl(e);

    PausedEventData { owner: caller }.publish(e);
    Ok(())
}

/// Resume mutating engine operations (owner only).
pub fn unpause(e: &Env, caller: Address) -> Result<(), Error> {
    caller.require_auth();
    require_owner(e, &caller)?;

    if !storage::is_paused(e) {
        return Err(Error::InvalidState);
    }

    storage::set_paused(e, false);
    storage::extend_instance_ttl(e);

    UnpausedEventData { owner: caller }.publish(e);
    Ok(())
}

/// Set the payment token (owner only, while paused).
pub fn set_exchange_token(e: &Env, caller: Address, token: Address) -> Result<(), Error> {
    caller.require_auth();
    require_owner(e, &caller)?;
    require_paused(e)?;

    if !registry::is_payment_token(e, &token) {
        return Err(Error::InvalidInput);
    }

    storage::set_exchange_token(e, &token);
    storage::extend_instance_ttl(e);

    ExchangeTokenSetEventData { token }.publish(e);
    Ok(())
}

/// Set the registry for the given item kind (owner only, while paused).
pub fn set_registry(e: &Env, caller: Address, kind: ItemKind, registry: Address) -> Result<(), Error> {
    caller.require_auth();
    require_owner(e, &caller)?;
    require_paused(e)?;

    let supported = match kind {
        ItemKind::Single => registry::is_single_registry(e, &registry),
        ItemKind::Multi => registry::is_multi_registry(e, &registry),
    };
    if !supported {
        return Err(Error::InvalidInput);
    }

    storage::set_registry(e, kind, &registry);
    storage::extend_instance_ttl(e);

    match kind {
        ItemKind::Single => RegistrySingleSetEventData { registry }.publish(e),
        ItemKind::Multi => RegistryMultiSetEventData { registry }.publish(e),
    }
    Ok(())
}

/// Gate for every mutating engine operation.
pub fn require_not_paused(e: &Env) -> Result<(), Error> {
    if !storage::has_owner(e) {
        return Err(Error::NotInitialized);
    }
    if storage::is_paused(e) {
        return Err(Error::InvalidState);
    }
    Ok(())
}

fn require_owner(e: &Env, caller: &Address) -> Result<(), Error> {
    let owner = storage::get_owner(e).ok_or(Error::NotInitialized)?;
    if *caller != owner {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

// Custody targets may only change while no new lots can be opened.
fn require_paused(e: &Env) -> Result<(), Error> {
    if !storage::is_paused(e) {
        return Err(Error::InvalidState);
    }
    Ok(())
}
