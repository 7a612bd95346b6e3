mod system;
mod todos;


pub use system::*;
pub use todos::*;
