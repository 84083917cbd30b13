pub mod availability;
pub mod identifiers;
pub mod title;

pub use availability::*;
pub use identifiers::*;
pub use title::*;
