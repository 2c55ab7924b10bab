pub mod send;
pub use send::*;
