pub mod contract;
pub mod error;
pub mod execute;
pub mod guard;
pub mod msg;
pub mod query;
pub mod state;

#[cfg(test)]
pub mod testing;
