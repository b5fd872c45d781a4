mod detail;
mod near;
mod search;

pub use detail::*;
pub use near::*;
pub use search::*;
