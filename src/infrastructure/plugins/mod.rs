pub mod json_lines;
pub mod simple_logger;

pub use json_lines::*;
pub use simple_logger::*;
