use soroban_sdk::contracterror;

// Errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Swap id was never issued or the swap already reached a terminal state
    NotFound = 1,
    /// Caller is not eligible for the operation on this swap
    Unauthorized = 2,
    /// Funding call named a different asset than the target leg's
    AssetMismatch = 3,
    AlreadyFullyFunded = 4,
    DepositThresholdExceeded = 5,
    /// The token contract rejected a transfer (allowance, balance, ...)
    LedgerTransferFailed = 6,
    InvalidAmount = 7,
    ArithmeticOverflow = 8,
    InvalidConfig = 9,
    NotInitialized = 10,
}
