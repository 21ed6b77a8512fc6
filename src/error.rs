use cosmwasm_std::{DivideByZeroError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Sale already initialized")]
    AlreadyInitialized,

    #[error("Sale has not been configured")]
    SaleNotConfigured,

    #[error("Sale not open yet: opens at {opens_at}")]
    SaleNotOpen { opens_at: u64 },

    #[error("Sale closed at {closes_at}")]
    SaleClosed { closes_at: u64 },

    #[error("Sale still running: closes at {closes_at}")]
    SaleNotEnded { closes_at: u64 },

    #[error("Sale is sold out")]
    SoldOut,

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Invalid sale token address")]
    InvalidAsset,

    #[error("Rate must be greater than zero")]
    InvalidRate,

    #[error("Wrong payment asset: expected {expected}, got {got}")]
    WrongAsset { expected: String, got: String },

    #[error("Send exactly one coin denomination")]
    MultipleDenoms,

    #[error("Sale does not collect native coins")]
    NotNativeSale,

    #[error("Sale collects native coins, not a base token")]
    NotTokenSale,

    #[error("Insufficient base token balance: have {available}, need {needed}")]
    InsufficientBalance { available: String, needed: String },

    #[error("Owner sale token balance too low: have {available}, need {needed}")]
    InsufficientOwnerBalance { available: String, needed: String },

    #[error("No sale tokens left to withdraw")]
    NothingToWithdraw,

    #[error("No native proceeds collected")]
    NoNativeCollected,

    #[error("No base tokens collected")]
    NoTokensCollected,

    #[error("Operation already in progress")]
    ReentrantCall,
}
