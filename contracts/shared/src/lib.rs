#![no_std]

// Shared library for the two-party OTC swap escrow
// Contains the swap data model, policy configuration, storage layout,
// the per-address swap index, custody transfers and observer events

pub mod types;
pub mod config;
pub mod swap;
pub mod store;
pub mod index;
pub mod ledger;
pub mod events;

// Re-export commonly used types for easier imports
pub use types::Error;
pub use config::{CancelPolicy, EscrowConfig, BPS_DENOMINATOR, DEFAULT_OVERFUND_TOLERANCE_BPS};
pub use swap::{Deposit, Leg, LegSide, Swap};
pub use events::{LegRefund, LegTerms, SwapCreated, SwapFundingStatus, SwapRefunded};
pub use ledger::{pull_into_custody, release_from_custody};
