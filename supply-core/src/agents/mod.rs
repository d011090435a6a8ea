pub mod capabilities;
pub mod source;

pub use capabilities::*;
pub use source::*;
