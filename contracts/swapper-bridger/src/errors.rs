use soroban_sdk::contracterror;

#[contracterror]
#[derive(Clone, Debug, Copy, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,

    // Authorization errors
    NotOwner = 10,
    UnauthorizedCaller = 11,
    UntrustedSource = 12,

    // Validation errors
    InvalidAmount = 20,
    UnsupportedToken = 21,
    InvalidPayload = 22,
    InvalidRecipients = 23,
    InvalidDestination = 24,

    // Custody errors
    InsufficientAllowance = 30,
    InsufficientBalance = 31,

    // Swap errors
    PoolNotFound = 40,
    SlippageExceeded = 41,
    IdenticalTokens = 42,

    // Bridging errors
    InsufficientGasPayment = 50,
}
