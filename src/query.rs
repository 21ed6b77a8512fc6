use cosmwasm_std::{Deps, Env, StdResult};

use crate::msg::{
    ConfigResponse, ParticipantResponse, PhaseResponse, SaleParams, StatusResponse,
    TokenMetaResponse, WindowResponse,
};
use crate::state::{phase_at, OWNER, PARTICIPANTS, SALE, STATUS, TOKEN_META};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let owner = OWNER.load(deps.storage)?;
    let sale = SALE.may_load(deps.storage)?.map(|config| SaleParams {
        sale_token: config.sale_token,
        base_token: config.base_token,
        rate: config.rate,
        total_offered: config.total_offered,
        opens_at: config.opens_at,
        closes_at: config.closes_at,
    });
    Ok(ConfigResponse { owner, sale })
}

pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let config = SALE.load(deps.storage)?;
    let status = STATUS.load(deps.storage)?;
    Ok(StatusResponse {
        total_raised: status.total_raised,
        total_sold: status.total_sold,
        participant_count: status.participant_count,
        remaining: config.total_offered - status.total_sold,
    })
}

pub fn query_phase(deps: Deps, env: Env) -> StdResult<PhaseResponse> {
    let config = SALE.load(deps.storage)?;
    let status = STATUS.load(deps.storage)?;
    Ok(PhaseResponse {
        phase: phase_at(env.block.time.seconds(), &config, &status),
    })
}

pub fn query_window(deps: Deps) -> StdResult<WindowResponse> {
    let config = SALE.load(deps.storage)?;
    Ok(WindowResponse {
        opens_at: config.opens_at,
        closes_at: config.closes_at,
    })
}

/// Unknown addresses read back as an all-zero record.
pub fn query_participant(deps: Deps, address: String) -> StdResult<ParticipantResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let record = PARTICIPANTS.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(ParticipantResponse {
        deposited_base: record.deposited_base,
        allocated_sale: record.allocated_sale,
    })
}

pub fn query_token_meta(deps: Deps) -> StdResult<TokenMetaResponse> {
    let meta = TOKEN_META.load(deps.storage)?;
    Ok(TokenMetaResponse {
        name: meta.name,
        symbol: meta.symbol,
        decimals: meta.decimals,
        total_supply: meta.total_supply,
    })
}
