#![no_std]

// Two-party OTC swap escrow contract
// Holds both legs of a swap in custody and settles them atomically

mod otcswap;

// Re-export the contract
pub use otcswap::{OtcSwap, OtcSwapClient};
