//! Off-chain replicas of the program's fee and reward accounting

pub mod collect_fees;
pub mod collect_rewards;

pub use collect_fees::*;
pub use collect_rewards::*;
