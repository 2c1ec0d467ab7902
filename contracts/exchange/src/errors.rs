use soroban_sdk::contracterror;

/// Error codes for the exchange contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller does not have the required role
    Unauthorized = 3,
    /// No active lot under the referenced key for the invoked flow
    NotFound = 4,
    /// A lot for the key already exists
    Conflict = 5,
    /// Malformed price or quantity, or a collaborator address that does
    /// not satisfy the expected capability
    InvalidInput = 6,
    /// Pause flag, missing configuration, or auction time window forbids
    /// the operation
    InvalidState = 7,
}
