use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::registry::{RegistryMultiClient, RegistrySingleClient};
use crate::storage;
use crate::types::ItemKind;

/// Address of the registry holding items of the given kind.
pub fn registry_address(e: &Env, kind: ItemKind) -> Result<Address, Error> {
    storage::get_registry(e, kind).ok_or(Error::InvalidState)
}

/// Mint a new item to `to` through the configured registry. The registry
/// itself enforces who is allowed to mint.
pub fn mint_item(e: &Env, kind: ItemKind, to: &Address, id: u64, amount: u64) -> Result<(), Error> {
    let registry = registry_address(e, kind)?;
    match kind {
        ItemKind::Single => RegistrySingleClient::new(e, &registry).mint(to, &id),
        ItemKind::Multi => RegistryMultiClient::new(e, &registry).mint(to, &id, &amount),
    }
    Ok(())
}

/// Move an item between accounts: the whole unit for Single, `amount`
/// units for Multi.
pub fn transfer_item(
    e: &Env,
    kind: ItemKind,
    from: &Address,
    to: &Address,
    id: u64,
    amount: u64,
) -> Result<(), Error> {
    let registry = registry_address(e, kind)?;
    match kind {
        ItemKind::Single => RegistrySingleClient::new(e, &registry).transfer(from, to, &id),
        ItemKind::Multi => RegistryMultiClient::new(e, &registry).transfer(from, to, &id, &amount),
    }
    Ok(())
}

/// Move payment-token balance between accounts. Escrowed balances sit on
/// the contract's own address.
pub fn transfer_payment(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let token_addr = storage::get_exchange_token(e).ok_or(Error::InvalidState)?;
    token::TokenClient::new(e, &token_addr).transfer(from, to, &amount);
    Ok(())
}
