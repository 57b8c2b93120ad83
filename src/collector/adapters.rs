mod collecting_and_then;
mod mapping;

pub use collecting_and_then::*;
pub use mapping::*;
