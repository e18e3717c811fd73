mod mongo;
mod store;

#[cfg(test)]
pub mod memory;

pub use mongo::*;
pub use store::*;
