pub mod bounds;
pub mod date_range;
pub mod indicator;
pub mod state;
pub mod time;

pub use bounds::*;
pub use date_range::*;
pub use indicator::*;
pub use state::*;
pub use time::*;
