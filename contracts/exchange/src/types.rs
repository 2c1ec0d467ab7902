use soroban_sdk::{contracttype, Address};

/// Storage keys for the exchange contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Contract owner, set once at initialization
    Owner,
    /// Process-wide pause flag
    Paused,
    /// Payment token every sale and bid is denominated in
    ExchangeToken,
    /// Registry holding single-unit items
    RegistrySingle,
    /// Registry holding quantity-divisible items
    RegistryMulti,
    /// Active listing keyed by (kind, item id, seller)
    Lot(ItemKind, u64, Address),
    /// Latest bid on an auction lot, same key as the lot
    LastBid(ItemKind, u64, Address),
}

/// Whether an item is indivisible or quantity-divisible.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemKind {
    /// Uniquely identified asset, implicit quantity of one
    Single = 0,
    /// Assets sharing an id, tracked by remaining count
    Multi = 1,
}

impl ItemKind {
    /// Quantity as reported in events: single-unit items report 0.
    pub fn event_amount(&self, amount: u64) -> u64 {
        match self {
            ItemKind::Single => 0,
            ItemKind::Multi => amount,
        }
    }
}

/// An active listing. Absence of the storage entry is the "no such lot"
/// state; clearing a lot removes the entry together with its bid.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lot {
    /// Account that listed the item and receives the proceeds
    pub seller: Address,
    /// Unit price (fixed-price lots) or starting price (auction lots)
    pub start_price: i128,
    /// Remaining quantity held in custody for the seller
    pub amount: u64,
    /// Ledger timestamp of the listing; auction deadlines count from here
    pub start_date: u64,
    /// Whether the lot's lifecycle is bid-based
    pub is_auction: bool,
}

/// The latest escrowed offer against an auction lot. Earlier bids are
/// refunded when they are outbid and are not retained.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    /// Amount currently escrowed for the bidder
    pub value: i128,
    /// Bid sequence number, starting at 1 for the opening bid
    pub no: u32,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
