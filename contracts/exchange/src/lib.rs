#![no_std]

mod admin;
mod auction;
mod custody;
mod errors;
mod events;
mod marketplace;
mod registry;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::errors::Error;
use crate::types::{Bid, ItemKind, Lot};

/// Escrow-based exchange for single-unit and quantity-divisible items.
///
/// The contract takes temporary custody of listed items and of escrowed
/// bid balances, and settles fixed-price sales and English auctions
/// between the parties. Items live in two external registries and the
/// payment balance in an external token contract; the exchange only
/// orchestrates transfers between accounts held by those collaborators.
///
/// Every public entry point comes in two flavours: one for single-unit
/// items and a `_with_amount` variant for quantity-divisible ones. Both
/// dispatch into the same kind-generic engine.
#[contract]
pub struct ExchangeContract;

#[contractimpl]
impl ExchangeContract {
    // ========================================================================
    // INITIALIZATION & ADMINISTRATION
    // ========================================================================

    /// Initialize the exchange with its owner.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(e: &Env, owner: Address) -> Result<(), Error> {
        admin::initialize(e, owner)
    }

    /// Stop all mutating operations (owner only).
    ///
    /// # Errors
    /// * `Error::Unauthorized` - If the caller is not the owner
    /// * `Error::InvalidState` - If the exchange is already paused
    pub fn pause(e: &Env, caller: Address) -> Result<(), Error> {
        admin::pause(e, caller)
    }

    /// Resume mutating operations (owner only).
    pub fn unpause(e: &Env, caller: Address) -> Result<(), Error> {
        admin::unpause(e, caller)
    }

    /// Set the payment token every sale and bid is denominated in.
    /// Owner only, and only while paused.
    ///
    /// # Errors
    /// * `Error::InvalidState` - If the exchange is not paused
    /// * `Error::InvalidInput` - If the address does not expose the token interface
    pub fn set_exchange_token(e: &Env, caller: Address, token: Address) -> Result<(), Error> {
        admin::set_exchange_token(e, caller, token)
    }

    /// Set the registry holding single-unit items. Owner only, and only
    /// while paused; the address must expose the single-unit registry
    /// interface.
    pub fn set_registry_single(e: &Env, caller: Address, registry: Address) -> Result<(), Error> {
        admin::set_registry(e, caller, ItemKind::Single, registry)
    }

    /// Set the registry holding quantity-divisible items. Owner only, and
    /// only while paused; the address must expose the quantity-divisible
    /// registry interface.
    pub fn set_registry_multi(e: &Env, caller: Address, registry: Address) -> Result<(), Error> {
        admin::set_registry(e, caller, ItemKind::Multi, registry)
    }

    // ========================================================================
    // MARKETPLACE: FIXED-PRICE FLOW
    // ========================================================================

    /// Mint a new single-unit item to `recipient`. No lot is created.
    pub fn create_item(e: &Env, caller: Address, id: u64, recipient: Address) -> Result<(), Error> {
        marketplace::create_item(e, ItemKind::Single, caller, id, recipient, 1)
    }

    /// Mint `amount` units of a quantity-divisible item to `recipient`.
    pub fn create_item_with_amount(
        e: &Env,
        caller: Address,
        id: u64,
        recipient: Address,
        amount: u64,
    ) -> Result<(), Error> {
        marketplace::create_item(e, ItemKind::Multi, caller, id, recipient, amount)
    }

    /// List a single-unit item at a fixed price. The item moves into the
    /// exchange's custody.
    ///
    /// # Errors
    /// * `Error::Conflict` - If a lot for (id, seller) already exists
    pub fn list_item(e: &Env, seller: Address, id: u64, price: i128) -> Result<(), Error> {
        marketplace::list_item(e, ItemKind::Single, seller, id, price, 1)
    }

    /// List `amount` units of a quantity-divisible item at a fixed unit
    /// price. Re-listing the same (id, seller) accumulates quantity and
    /// takes the newer price.
    ///
    /// # Errors
    /// * `Error::Conflict` - If an auction lot exists for (id, seller)
    pub fn list_item_with_amount(
        e: &Env,
        seller: Address,
        id: u64,
        price: i128,
        amount: u64,
    ) -> Result<(), Error> {
        marketplace::list_item(e, ItemKind::Multi, seller, id, price, amount)
    }

    /// Buy a listed single-unit item at its listed price.
    ///
    /// # Errors
    /// * `Error::NotFound` - If no fixed-price lot exists for (id, seller)
    pub fn buy_item(e: &Env, buyer: Address, id: u64, seller: Address) -> Result<(), Error> {
        marketplace::buy_item(e, ItemKind::Single, buyer, id, seller, 1)
    }

    /// Buy `amount` units of a listed quantity-divisible item. A full
    /// purchase clears the lot; a partial one leaves the remainder at the
    /// same price.
    ///
    /// # Errors
    /// * `Error::InvalidInput` - If `amount` is 0 or exceeds the listed quantity
    pub fn buy_item_with_amount(
        e: &Env,
        buyer: Address,
        id: u64,
        seller: Address,
        amount: u64,
    ) -> Result<(), Error> {
        marketplace::buy_item(e, ItemKind::Multi, buyer, id, seller, amount)
    }

    /// Withdraw a fixed-price single-unit lot (seller only). Custody
    /// returns to the seller.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - If the caller is not the lot's seller
    pub fn cancel_item(e: &Env, caller: Address, id: u64, seller: Address) -> Result<(), Error> {
        marketplace::cancel_item(e, ItemKind::Single, caller, id, seller)
    }

    /// Withdraw a fixed-price quantity-divisible lot (seller only).
    pub fn cancel_item_with_amount(
        e: &Env,
        caller: Address,
        id: u64,
        seller: Address,
    ) -> Result<(), Error> {
        marketplace::cancel_item(e, ItemKind::Multi, caller, id, seller)
    }

    // ========================================================================
    // AUCTION FLOW
    // ========================================================================

    /// List a single-unit item for auction. The bidding window runs for
    /// `auction_duration()` from the listing date.
    ///
    /// # Errors
    /// * `Error::Conflict` - If any lot already exists for (id, seller)
    pub fn list_item_on_auction(
        e: &Env,
        seller: Address,
        id: u64,
        start_price: i128,
    ) -> Result<(), Error> {
        auction::list_item(e, ItemKind::Single, seller, id, start_price, 1)
    }

    /// List `amount` units of a quantity-divisible item for auction. The
    /// whole quantity is sold to the winning bidder as one block.
    pub fn list_item_with_amount_on_auction(
        e: &Env,
        seller: Address,
        id: u64,
        start_price: i128,
        amount: u64,
    ) -> Result<(), Error> {
        auction::list_item(e, ItemKind::Multi, seller, id, start_price, amount)
    }

    /// Bid on a single-unit auction lot. The bid value is escrowed and
    /// the previous bidder refunded in full.
    ///
    /// # Errors
    /// * `Error::InvalidState` - If the auction window has elapsed
    /// * `Error::InvalidInput` - If the price does not beat the current bid
    pub fn make_bid(
        e: &Env,
        bidder: Address,
        id: u64,
        seller: Address,
        price: i128,
    ) -> Result<(), Error> {
        auction::make_bid(e, ItemKind::Single, bidder, id, seller, price)
    }

    /// Bid on a quantity-divisible auction lot.
    pub fn make_bid_for_item_with_amount(
        e: &Env,
        bidder: Address,
        id: u64,
        seller: Address,
        price: i128,
    ) -> Result<(), Error> {
        auction::make_bid(e, ItemKind::Multi, bidder, id, seller, price)
    }

    /// Settle a single-unit auction after its window has elapsed.
    /// Callable by anyone.
    ///
    /// # Errors
    /// * `Error::InvalidState` - If the auction window has not elapsed yet
    pub fn finish_auction(e: &Env, id: u64, seller: Address) -> Result<(), Error> {
        auction::finish(e, ItemKind::Single, id, seller)
    }

    /// Settle a quantity-divisible auction after its window has elapsed.
    pub fn finish_auction_for_item_with_amount(
        e: &Env,
        id: u64,
        seller: Address,
    ) -> Result<(), Error> {
        auction::finish(e, ItemKind::Multi, id, seller)
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Current lot and latest bid for a single-unit item, `None` when the
    /// lot has been cleared.
    pub fn get_details_for_item(e: &Env, id: u64, seller: Address) -> (Option<Lot>, Option<Bid>) {
        (
            storage::get_lot(e, ItemKind::Single, id, &seller),
            storage::get_bid(e, ItemKind::Single, id, &seller),
        )
    }

    /// Current lot and latest bid for a quantity-divisible item.
    pub fn get_details_for_item_with_amount(
        e: &Env,
        id: u64,
        seller: Address,
    ) -> (Option<Lot>, Option<Bid>) {
        (
            storage::get_lot(e, ItemKind::Multi, id, &seller),
            storage::get_bid(e, ItemKind::Multi, id, &seller),
        )
    }

    /// Check if the exchange is paused
    pub fn is_paused(e: &Env) -> bool {
        storage::is_paused(e)
    }

    /// Get the contract owner
    pub fn get_owner(e: &Env) -> Option<Address> {
        storage::get_owner(e)
    }

    /// Get the payment token address
    pub fn get_exchange_token(e: &Env) -> Option<Address> {
        storage::get_exchange_token(e)
    }

    /// Get the single-unit registry address
    pub fn get_registry_single(e: &Env) -> Option<Address> {
        storage::get_registry(e, ItemKind::Single)
    }

    /// Get the quantity-divisible registry address
    pub fn get_registry_multi(e: &Env) -> Option<Address> {
        storage::get_registry(e, ItemKind::Multi)
    }

    /// Length of every auction's bidding window, in seconds.
    pub fn auction_duration(_e: &Env) -> u64 {
        auction::AUCTION_DURATION
    }
}
