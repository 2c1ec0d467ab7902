use soroban_sdk::{contractclient, token, Address, Env};

/// Registry of single-unit items. `mint` is restricted to a minter account
/// configured on the registry itself.
#[contractclient(name = "RegistrySingleClient")]
pub trait AssetRegistrySingle {
    fn mint(env: Env, to: Address, id: u64);
    fn transfer(env: Env, from: Address, to: Address, id: u64);
    fn owner_of(env: Env, id: u64) -> Option<Address>;
}

/// Registry of quantity-divisible items sharing an id.
#[contractclient(name = "RegistryMultiClient")]
pub trait AssetRegistryMulti {
    fn mint(env: Env, to: Address, id: u64, qty: u64);
    fn transfer(env: Env, from: Address, to: Address, id: u64, qty: u64);
    fn balance_of(env: Env, owner: Address, id: u64) -> u64;
}

// ============================================================================
// CAPABILITY PROBES
// ============================================================================
//
// Each configuration slot accepts an address only if the contract behind it
// answers the view that identifies the expected interface. The probes run at
// configuration time, so a mismatched contract is rejected before any lot
// can depend on it.

/// Probe whether `addr` exposes the single-unit registry interface.
pub fn is_single_registry(e: &Env, addr: &Address) -> bool {
    matches!(
        RegistrySingleClient::new(e, addr).try_owner_of(&0),
        Ok(Ok(_))
    )
}

/// Probe whether `addr` exposes the quantity-divisible registry interface.
pub fn is_multi_registry(e: &Env, addr: &Address) -> bool {
    matches!(
        RegistryMultiClient::new(e, addr).try_balance_of(&e.current_contract_address(), &0),
        Ok(Ok(_))
    )
}

/// Probe whether `addr` exposes the standard token interface.
pub fn is_payment_token(e: &Env, addr: &Address) -> bool {
    matches!(token::TokenClient::new(e, addr).try_decimals(), Ok(Ok(_)))
}
