use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

#[cw_serde]
pub struct SaleConfig {
    /// CW20 token being sold.
    pub sale_token: Addr,
    /// CW20 token participants pay with. None means the sale collects
    /// the native coin.
    pub base_token: Option<Addr>,
    /// Sale token units granted per base asset unit.
    pub rate: Uint128,
    /// Total sale token units on offer. Fixed for the sale's lifetime.
    pub total_offered: Uint128,
    /// Window bounds in unix seconds, inclusive on both ends.
    pub opens_at: u64,
    pub closes_at: u64,
}

#[cw_serde]
#[derive(Default)]
pub struct SaleStatus {
    /// Base asset units retained across all accepted deposits.
    pub total_raised: Uint128,
    /// Sale token units allocated across all accepted deposits.
    /// Never exceeds `total_offered`.
    pub total_sold: Uint128,
    /// Distinct addresses with a non-zero retained deposit.
    pub participant_count: u64,
}

#[cw_serde]
#[derive(Default)]
pub struct ParticipantRecord {
    /// Cumulative base asset units this address has paid in.
    pub deposited_base: Uint128,
    /// Cumulative sale token units allocated to this address.
    pub allocated_sale: Uint128,
}

/// Display metadata of the sale token, cached once at initialization.
/// Informational only; accounting never reads it.
#[cw_serde]
pub struct TokenMeta {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

#[cw_serde]
pub enum Phase {
    Upcoming,
    Live,
    SoldOut,
    Ended,
}

pub const OWNER: Item<Addr> = Item::new("owner");
pub const SALE: Item<SaleConfig> = Item::new("sale");
pub const STATUS: Item<SaleStatus> = Item::new("status");
pub const PARTICIPANTS: Map<&Addr, ParticipantRecord> = Map::new("participants");
pub const TOKEN_META: Item<TokenMeta> = Item::new("token_meta");

/// Load the sale configuration, rejecting calls that arrive before the
/// owner has configured the sale.
pub fn load_sale(storage: &dyn Storage) -> Result<SaleConfig, ContractError> {
    SALE.may_load(storage)?
        .ok_or(ContractError::SaleNotConfigured)
}

/// Derive the current phase from the clock and the ledger. Phases are
/// never stored. Sold-out is read off `total_sold`; `total_raised` only
/// coincides with it at a 1:1 rate.
pub fn phase_at(now: u64, config: &SaleConfig, status: &SaleStatus) -> Phase {
    if now < config.opens_at {
        Phase::Upcoming
    } else if now > config.closes_at {
        Phase::Ended
    } else if status.total_sold == config.total_offered {
        Phase::SoldOut
    } else {
        Phase::Live
    }
}

/// Outcome of admitting one deposit against the remaining supply.
pub struct DepositSplit {
    /// Base asset units the sale keeps.
    pub retained: Uint128,
    /// Sale token units allocated to the participant.
    pub tokens_out: Uint128,
    /// Base asset units handed back (or never pulled).
    pub refund: Uint128,
}

/// Split a deposit into retained and refunded portions. When the full
/// conversion would exceed `remaining`, the allocation is clamped to
/// `remaining` and the retained payment is the floor back-conversion
/// `remaining / rate`; everything above it is refunded. The floor means
/// a final sliver of supply smaller than one payment unit's worth goes
/// out without charge.
pub fn split_deposit(
    amount_in: Uint128,
    rate: Uint128,
    remaining: Uint128,
) -> Result<DepositSplit, ContractError> {
    let tokens_out = amount_in.checked_mul(rate)?;
    if tokens_out <= remaining {
        return Ok(DepositSplit {
            retained: amount_in,
            tokens_out,
            refund: Uint128::zero(),
        });
    }

    let retained = remaining.checked_div(rate)?;
    Ok(DepositSplit {
        retained,
        tokens_out: remaining,
        refund: amount_in - retained,
    })
}
