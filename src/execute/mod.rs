pub mod deposit;
pub mod fund;
pub mod initialize;
pub mod withdraw;
