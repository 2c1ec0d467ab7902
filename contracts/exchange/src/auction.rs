use soroban_sdk::{Address, Env};

use crate::admin;
use crate::custody;
use crate::errors::Error;
use crate::events::{AuctionFinishedEventData, ItemListedEventData, NewBidEventData};
use crate::storage;
use crate::types::{Bid, ItemKind, Lot};

/// Length of the bidding window, counted from the listing date.
pub const AUCTION_DURATION: u64 = 3 * 24 * 60 * 60;

/// Move the item into custody and open a bidding window for it. Auction
/// lots never merge; any existing lot under the key is a conflict.
pub fn list_item(
    e: &Env,
    kind: ItemKind,
    seller: Address,
    id: u64,
    start_price: i128,
    amount: u64,
) -> Result<(), Error> {
    seller.require_auth();
    admin::require_not_paused(e)?;

    if start_price <= 0 {
        return Err(Error::InvalidInput);
    }
    if kind == ItemKind::Multi && amount == 0 {
        return Err(Error::InvalidInput);
    }

    if storage::get_lot(e, kind, id, &seller).is_some() {
        return Err(Error::Conflict);
    }

    let now = e.ledger().timestamp();
    let lot = Lot {
        seller: seller.clone(),
        start_price,
        amount,
        start_date: now,
        is_auction: true,
    };

    let registry = custody::registry_address(e, kind)?;
    storage::set_lot(e, kind, id, &lot);
    storage::extend_instance_ttl(e);
    custody::transfer_item(e, kind, &seller, &e.current_contract_address(), id, amount)?;

    ItemListedEventData {
        seller,
        registry,
        id,
        price: start_price,
        amount: kind.event_amount(amount),
        timestamp: now,
        is_auction: true,
    }
    .publish(e);
    Ok(())
}

/// Escrow a new highest bid and refund the previous bidder in full. The
/// opening bid may match the start price exactly; after that every bid
/// must raise.
pub fn make_bid(
    e: &Env,
    kind: ItemKind,
    bidder: Address,
    id: u64,
    seller: Address,
    price: i128,
) -> Result<(), Error> {
    bidder.require_auth();
    admin::require_not_paused(e)?;

    let lot = storage::get_lot(e, kind, id, &seller)
        .filter(|l| l.is_auction)
        .ok_or(Error::NotFound)?;

    let now = e.ledger().timestamp();
    if now >= deadline(&lot) {
        return Err(Error::InvalidState);
    }

    let last = storage::get_bid(e, kind, id, &seller);
    match last.as_ref() {
        None => {
            if price < lot.start_price {
                return Err(Error::InvalidInput);
            }
        }
        Some(bid) => {
            if price <= bid.value {
                return Err(Error::InvalidInput);
            }
        }
    }

    let no = last.as_ref().map_or(0, |b| b.no) + 1;
    let bid = Bid {
        bidder: bidder.clone(),
        value: price,
        no,
    };

    let registry = custody::registry_address(e, kind)?;
    storage::set_bid(e, kind, id, &seller, &bid);
    storage::extend_instance_ttl(e);

    custody::transfer_payment(e, &bidder, &e.current_contract_address(), price)?;
    if let Some(prev) = last {
        custody::transfer_payment(e, &e.current_contract_address(), &prev.bidder, prev.value)?;
    }

    NewBidEventData {
        timestamp: now,
        bidder,
        registry,
        id,
        price,
    }
    .publish(e);
    Ok(())
}

/// Settle the auction once its window has elapsed. Callable by anyone.
///
/// Fewer than two bids means there was no contest: the item returns to
/// the seller and the sole bidder, if any, is refunded in full. With two
/// or more bids the item goes to the highest bidder and the escrowed
/// winning value to the seller.
pub fn finish(e: &Env, kind: ItemKind, id: u64, seller: Address) -> Result<(), Error> {
    admin::require_not_paused(e)?;

    let lot = storage::get_lot(e, kind, id, &seller)
        .filter(|l| l.is_auction)
        .ok_or(Error::NotFound)?;

    let now = e.ledger().timestamp();
    if now < deadline(&lot) {
        return Err(Error::InvalidState);
    }

    let last = storage::get_bid(e, kind, id, &seller);
    storage::remove_lot(e, kind, id, &seller);
    storage::remove_bid(e, kind, id, &seller);
    storage::extend_instance_ttl(e);

    let registry = custody::registry_address(e, kind)?;
    let contract = e.current_contract_address();

    let (winner, price) = match last {
        Some(bid) if bid.no >= 2 => {
            custody::transfer_item(e, kind, &contract, &bid.bidder, id, lot.amount)?;
            custody::transfer_payment(e, &contract, &lot.seller, bid.value)?;
            (Some(bid.bidder), bid.value)
        }
        sole => {
            custody::transfer_item(e, kind, &contract, &lot.seller, id, lot.amount)?;
            if let Some(bid) = sole {
                custody::transfer_payment(e, &contract, &bid.bidder, bid.value)?;
            }
            (None, 0)
        }
    };

    AuctionFinishedEventData {
        timestamp: now,
        winner,
        registry,
        id,
        amount: kind.event_amount(lot.amount),
        price,
    }
    .publish(e);
    Ok(())
}

fn deadline(lot: &Lot) -> u64 {
    lot.start_date + AUCTION_DURATION
}
