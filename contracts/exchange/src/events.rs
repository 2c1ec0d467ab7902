use soroban_sdk::{contractevent, Address};

/// Event emitted when the exchange is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub owner: Address,
}

/// Event emitted when the exchange is paused
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedEventData {
    #[topic]
    pub owner: Address,
}

/// Event emitted when the exchange is unpaused
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnpausedEventData {
    #[topic]
    pub owner: Address,
}

/// Event emitted when the payment token is configured
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeTokenSetEventData {
    #[topic]
    pub token: Address,
}

/// Event emitted when the single-unit registry is configured
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrySingleSetEventData {
    #[topic]
    pub registry: Address,
}

/// Event emitted when the quantity-divisible registry is configured
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryMultiSetEventData {
    #[topic]
    pub registry: Address,
}

/// Event emitted when a new item is minted through the exchange.
/// `amount` is 0 for single-unit items.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemCreatedEventData {
    #[topic]
    pub recipient: Address,
    pub registry: Address,
    pub id: u64,
    pub timestamp: u64,
    pub amount: u64,
}

/// Event emitted when an item enters custody as a lot, fixed-price or
/// auction.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemListedEventData {
    #[topic]
    pub seller: Address,
    pub registry: Address,
    pub id: u64,
    pub price: i128,
    pub amount: u64,
    pub timestamp: u64,
    pub is_auction: bool,
}

/// Event emitted on a fixed-price purchase. `price` is the unit price.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SoldEventData {
    #[topic]
    pub registry: Address,
    pub seller: Address,
    pub buyer: Address,
    pub timestamp: u64,
    pub id: u64,
    pub price: i128,
    pub amount: u64,
}

/// Event emitted when a seller withdraws a fixed-price lot
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CancelledEventData {
    #[topic]
    pub registry: Address,
    pub seller: Address,
    pub id: u64,
    pub timestamp: u64,
}

/// Event emitted when a bid is escrowed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewBidEventData {
    pub timestamp: u64,
    #[topic]
    pub bidder: Address,
    pub registry: Address,
    pub id: u64,
    pub price: i128,
}

/// Event emitted when an auction is settled. `winner` is `None` and
/// `price` is 0 when the auction closed with fewer than two bids.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinishedEventData {
    pub timestamp: u64,
    pub winner: Option<Address>,
    pub registry: Address,
    #[topic]
    pub id: u64,
    pub amount: u64,
    pub price: i128,
}
