use soroban_sdk::{Address, Env};

use crate::admin;
use crate::custody;
use crate::errors::Error;
use crate::events::{CancelledEventData, ItemCreatedEventData, ItemListedEventData, SoldEventData};
use crate::storage;
use crate::types::{ItemKind, Lot};

/// Mint a new item to `recipient` through the configured registry. No lot
/// is created; listing is a separate step.
pub fn create_item(
    e: &Env,
    kind: ItemKind,
    caller: Address,
    id: u64,
    recipient: Address,
    amount: u64,
) -> Result<(), Error> {
    caller.require_auth();
    admin::require_not_paused(e)?;

    if kind == ItemKind::Multi && amount == 0 {
        return Err(Error::InvalidInput);
    }

    let registry = custody::registry_address(e, kind)?;
    custody::mint_item(e, kind, &recipient, id, amount)?;
    storage::extend_instance_ttl(e);

    ItemCreatedEventData {
        recipient,
        registry,
        id,
        timestamp: e.ledger().timestamp(),
        amount: kind.event_amount(amount),
    }
    .publish(e);
    Ok(())
}

/// Move the item into custody and create the fixed-price lot for
/// (id, seller), or merge into it for quantity-divisible items.
pub fn list_item(
    e: &Env,
    kind: ItemKind,
    seller: Address,
    id: u64,
    price: i128,
    amount: u64,
) -> Result<(), Error> {
    seller.require_auth();
    admin::require_not_paused(e)?;

    if price <= 0 {
        return Err(Error::InvalidInput);
    }
    if kind == ItemKind::Multi && amount == 0 {
        return Err(Error::InvalidInput);
    }

    let now = e.ledger().timestamp();
    let lot = match storage::get_lot(e, kind, id, &seller) {
        None => Lot {
            seller: seller.clone(),
            start_price: price,
            amount,
            start_date: now,
            is_auction: false,
        },
        Some(existing) => {
            if existing.is_auction || kind == ItemKind::Single {
                return Err(Error::Conflict);
            }
            // Re-listing a quantity-divisible item merges: the quantity
            // accumulates, the newer price and date win.
            Lot {
                start_price: price,
                amount: existing
                    .amount
                    .checked_add(amount)
                    .ok_or(Error::InvalidInput)?,
                start_date: now,
                ..existing
            }
        }
    };

    let registry = custody::registry_address(e, kind)?;
    storage::set_lot(e, kind, id, &lot);
    storage::extend_instance_ttl(e);
    custody::transfer_item(e, kind, &seller, &e.current_contract_address(), id, amount)?;

    ItemListedEventData {
        seller,
        registry,
        id,
        price,
        amount: kind.event_amount(amount),
        timestamp: now,
        is_auction: false,
    }
    .publish(e);
    Ok(())
}

/// Exchange `amount` units of the lot for payment at the listed unit
/// price. A full purchase clears the lot; a partial one leaves the
/// remainder listed at the same price.
pub fn buy_item(
    e: &Env,
    kind: ItemKind,
    buyer: Address,
    id: u64,
    seller: Address,
    amount: u64,
) -> Result<(), Error> {
    buyer.require_auth();
    admin::require_not_paused(e)?;

    let mut lot = storage::get_lot(e, kind, id, &seller)
        .filter(|l| !l.is_auction)
        .ok_or(Error::NotFound)?;

    if amount == 0 || amount > lot.amount {
        return Err(Error::InvalidInput);
    }

    let price = lot.start_price;
    let total = price.checked_mul(amount as i128).ok_or(Error::InvalidInput)?;

    if amount == lot.amount {
        storage::remove_lot(e, kind, id, &seller);
    } else {
        lot.amount -= amount;
        storage::set_lot(e, kind, id, &lot);
    }
    storage::extend_instance_ttl(e);

    let registry = custody::registry_address(e, kind)?;
    custody::transfer_payment(e, &buyer, &seller, total)?;
    custody::transfer_item(e, kind, &e.current_contract_address(), &buyer, id, amount)?;

    SoldEventData {
        registry,
        seller,
        buyer,
        timestamp: e.ledger().timestamp(),
        id,
        price,
        amount: kind.event_amount(amount),
    }
    .publish(e);
    Ok(())
}

/// Return the remaining quantity to the seller and clear the lot.
pub fn cancel_item(
    e: &Env,
    kind: ItemKind,
    caller: Address,
    id: u64,
    seller: Address,
) -> Result<(), Error> {
    caller.require_auth();
    admin::require_not_paused(e)?;

    let lot = storage::get_lot(e, kind, id, &seller)
        .filter(|l| !l.is_auction)
        .ok_or(Error::NotFound)?;

    if caller != seller {
        return Err(Error::Unauthorized);
    }

    storage::remove_lot(e, kind, id, &seller);
    storage::extend_instance_ttl(e);

    let registry = custody::registry_address(e, kind)?;
    custody::transfer_item(e, kind, &e.current_contract_address(), &seller, id, lot.amount)?;

    CancelledEventData {
        registry,
        seller,
        id,
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);
    Ok(())
}
