pub mod config;
pub mod fee_tier;
pub mod pool;
pub mod position;
pub mod position_bundle;
pub mod tick;
pub mod tick_array;

pub use config::*;
pub use fee_tier::*;
pub use pool::*;
pub use position::*;
pub use position_bundle::*;
pub use tick::*;
pub use tick_array::*;
