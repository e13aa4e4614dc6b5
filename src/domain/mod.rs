pub mod parishes;
pub mod types;

pub use parishes::{parish_by_name, parishes};
pub use types::{Location, Tour};
