
use crate::registry::{AssetRegistryMulti, AssetRegistrySingle};
use crate::{ExchangeContract, ExchangeContractClient};
use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Events, Ledger},
    token, Address, Env, Val, Vec,
};

pub const TOKEN_ID: u64 = 1;
pub const TOKEN_BALANCE: i128 = 1_000;
pub const ITEM_BALANCE: u64 = 100;

/// In-memory stand-in for the single-unit registry: an id -> owner map.
#[contract]
pub struct MockRegistrySingle;

#[contractimpl]
impl AssetRegistrySingle for MockRegistrySingle {
    fn mint(env: Env, to: Address, id: u64) {
        env.storage().persistent().set(&id, &to);
    }

    fn transfer(env: Env, from: Address, to: Address, id: u64) {
        let owner: Option<Address> = env.storage().persistent().get(&id);
        if owner != Some(from) {
            panic!("not the item owner");
        }
        env.storage().persistent().set(&id, &to);
    }

    fn owner_of(env: Env, id: u64) -> Option<Address> {
        env.storage().persistent().get(&id)
    }
}

/// Stand-in for the quantity-divisible registry: (owner, id) -> balance.
#[contract]
pub struct MockRegistryMulti;

#[contractimpl]
impl AssetRegistryMulti for MockRegistryMulti {
    fn mint(env: Env, to: Address, id: u64, qty: u64) {
        let balance = Self::balance_of(env.clone(), to.clone(), id);
        env.storage().persistent().set(&(to, id), &(balance + qty));
    }

    fn transfer(env: Env, from: Address, to: Address, id: u64, qty: u64) {
        let from_balance = Self::balance_of(env.clone(), from.clone(), id);
        if from_balance < qty {
            panic!("insufficient item balance");
        }
        let to_balance = Self::balance_of(env.clone(), to.clone(), id);
        env.storage()
            .persistent()
            .set(&(from, id), &(from_balance - qty));
        env.storage().persistent().set(&(to, id), &(to_balance + qty));
    }

    fn balance_of(env: Env, owner: Address, id: u64) -> u64 {
        env.storage().persistent().get(&(owner, id)).unwrap_or(0)
    }
}

pub struct Setup {
    pub env: Env,
    pub client: ExchangeContractClient<'static>,
    pub owner: Address,
    pub seller: Address,
    pub buyer1: Address,
    pub buyer2: Address,
    pub single: MockRegistrySingleClient<'static>,
    pub multi: MockRegistryMultiClient<'static>,
    pub token: token::TokenClient<'static>,
}

/// A fully configured exchange: registries and token wired in, the seller
/// holding item `TOKEN_ID` (one unit in the single registry, `ITEM_BALANCE`
/// units in the multi registry) and everyone funded with `TOKEN_BALANCE`.
pub fn setup_test() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, ExchangeContract);
    let client = ExchangeContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer1 = Address::generate(&env);
    let buyer2 = Address::generate(&env);

    let single_id = env.register_contract(None, MockRegistrySingle);
    let single = MockRegistrySingleClient::new(&env, &single_id);
    let multi_id = env.register_contract(None, MockRegistryMulti);
    let multi = MockRegistryMultiClient::new(&env, &multi_id);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&seller, &TOKEN_BALANCE);
    token_admin_client.mint(&buyer1, &TOKEN_BALANCE);
    token_admin_client.mint(&buyer2, &TOKEN_BALANCE);

    client.initialize(&owner);
    client.pause(&owner);
    client.set_exchange_token(&owner, &token_address);
    client.set_registry_single(&owner, &single_id);
    client.set_registry_multi(&owner, &multi_id);
    client.unpause(&owner);

    single.mint(&seller, &TOKEN_ID);
    multi.mint(&seller, &TOKEN_ID, &ITEM_BALANCE);

    Setup {
        env,
        client,
        owner,
        seller,
        buyer1,
        buyer2,
        single,
        multi,
        token,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|info| {
        info.timestamp += seconds;
    });
}

/// The most recently published event, as a single-entry slice so whole
/// (contract, topics, data) entries compare deeply. Expected payloads are
/// republished through the same encoding via `env.as_contract` and compared
/// against the captured entry.
pub fn last_event(env: &Env) -> Vec<(Address, Vec<Val>, Val)> {
    let all = env.events().all();
    all.slice(all.len() - 1..)
}
