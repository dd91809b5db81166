pub mod full_math;
pub mod growth;

pub use full_math::*;
pub use growth::*;
