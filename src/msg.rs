use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;

use crate::state::Phase;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub struct InitializeParams {
    /// CW20 token to sell.
    pub sale_token: String,
    /// CW20 base token participants pay with. Omit for a native sale.
    pub base_token: Option<String>,
    /// Sale token units per base asset unit.
    pub rate: Uint128,
    /// Sale token units on offer in total.
    pub total_offered: Uint128,
    pub opens_at: u64,
    pub closes_at: u64,
    /// Pull the full offering from the owner's sale token balance now
    /// (requires an allowance). Otherwise the pool is funded separately
    /// through the receive hook.
    pub fund_from_owner: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner configures the sale. Callable exactly once.
    Initialize(InitializeParams),
    /// Buy sale tokens with attached native funds.
    Deposit {},
    /// Buy sale tokens with the configured CW20 base token. Only the
    /// retained portion is pulled via allowance.
    DepositToken { amount: Uint128 },
    /// CW20 receive hook used to fund the sale token pool.
    Receive(Cw20ReceiveMsg),
    /// Owner withdraws the entire unsold sale token balance after close.
    WithdrawSaleTokens {},
    /// Owner withdraws collected native proceeds after close.
    WithdrawNative {},
    /// Owner withdraws collected base tokens after close.
    WithdrawBaseTokens {},
}

/// CW20 receive sub-message
#[cw_serde]
pub enum ReceiveMsg {
    /// Top up the sale token pool. Any sender, any time.
    Fund {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Owner and, once initialized, the sale parameters.
    #[returns(ConfigResponse)]
    Config {},
    /// Aggregate ledger totals and the remaining supply.
    #[returns(StatusResponse)]
    Status {},
    /// Current phase derived from the clock and the ledger.
    #[returns(PhaseResponse)]
    Phase {},
    /// Sale window bounds.
    #[returns(WindowResponse)]
    Window {},
    /// One participant's cumulative deposit and allocation.
    #[returns(ParticipantResponse)]
    Participant { address: String },
    /// Cached sale token display metadata.
    #[returns(TokenMetaResponse)]
    TokenMeta {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub sale: Option<SaleParams>,
}

#[cw_serde]
pub struct SaleParams {
    pub sale_token: Addr,
    pub base_token: Option<Addr>,
    pub rate: Uint128,
    pub total_offered: Uint128,
    pub opens_at: u64,
    pub closes_at: u64,
}

#[cw_serde]
pub struct StatusResponse {
    pub total_raised: Uint128,
    pub total_sold: Uint128,
    pub participant_count: u64,
    pub remaining: Uint128,
}

#[cw_serde]
pub struct PhaseResponse {
    pub phase: Phase,
}

#[cw_serde]
pub struct WindowResponse {
    pub opens_at: u64,
    pub closes_at: u64,
}

#[cw_serde]
pub struct ParticipantResponse {
    pub deposited_base: Uint128,
    pub allocated_sale: Uint128,
}

#[cw_serde]
pub struct TokenMetaResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}
