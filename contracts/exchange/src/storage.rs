use soroban_sdk::{Address, Env};

use crate::types::{
    Bid, ItemKind, Lot, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// CONFIGURATION STORAGE
// ============================================================================

/// Check if an owner has been recorded
pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Owner)
}

/// Get the contract owner
pub fn get_owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::Owner)
}

/// Record the contract owner
pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&StorageKey::Owner, owner);
}

/// Check the process-wide pause flag
pub fn is_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Paused)
        .unwrap_or(false)
}

/// Set the process-wide pause flag
pub fn set_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&StorageKey::Paused, &paused);
}

/// Get the payment token address
pub fn get_exchange_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::ExchangeToken)
}

/// Set the payment token address
pub fn set_exchange_token(e: &Env, token: &Address) {
    e.storage().instance().set(&StorageKey::ExchangeToken, token);
}

/// Get the registry address for the given item kind
pub fn get_registry(e: &Env, kind: ItemKind) -> Option<Address> {
    e.storage().instance().get(&registry_key(kind))
}

/// Set the registry address for the given item kind
pub fn set_registry(e: &Env, kind: ItemKind, registry: &Address) {
    e.storage().instance().set(&registry_key(kind), registry);
}

fn registry_key(kind: ItemKind) -> StorageKey {
    match kind {
        ItemKind::Single => StorageKey::RegistrySingle,
        ItemKind::Multi => StorageKey::RegistryMulti,
    }
}

/// Extend the TTL of instance storage.
/// Called internally during state-changing operations.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// LOT STORAGE
// ============================================================================

/// Get the active lot under (kind, id, seller)
pub fn get_lot(e: &Env, kind: ItemKind, id: u64, seller: &Address) -> Option<Lot> {
    let key = StorageKey::Lot(kind, id, seller.clone());
    let lot = e.storage().persistent().get::<_, Lot>(&key);
    if lot.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    lot
}

/// Store a lot under (kind, id, lot.seller)
pub fn set_lot(e: &Env, kind: ItemKind, id: u64, lot: &Lot) {
    let key = StorageKey::Lot(kind, id, lot.seller.clone());
    e.storage().persistent().set(&key, lot);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Clear the lot under (kind, id, seller)
pub fn remove_lot(e: &Env, kind: ItemKind, id: u64, seller: &Address) {
    e.storage()
        .persistent()
        .remove(&StorageKey::Lot(kind, id, seller.clone()));
}

// ============================================================================
// BID STORAGE
// ============================================================================

/// Get the latest bid against the lot under (kind, id, seller)
pub fn get_bid(e: &Env, kind: ItemKind, id: u64, seller: &Address) -> Option<Bid> {
    let key = StorageKey::LastBid(kind, id, seller.clone());
    let bid = e.storage().persistent().get::<_, Bid>(&key);
    if bid.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    bid
}

/// Store the latest bid against the lot under (kind, id, seller)
pub fn set_bid(e: &Env, kind: ItemKind, id: u64, seller: &Address, bid: &Bid) {
    let key = StorageKey::LastBid(kind, id, seller.clone());
    e.storage().persistent().set(&key, bid);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Clear the bid under (kind, id, seller)
pub fn remove_bid(e: &Env, kind: ItemKind, id: u64, seller: &Address) {
    e.storage()
        .persistent()
        .remove(&StorageKey::LastBid(kind, id, seller.clone()));
}
