use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};

use crate::contract::NATIVE_DENOM;
use crate::error::ContractError;
use crate::guard;
use crate::msg::InitializeParams;
use crate::state::{SaleConfig, SaleStatus, TokenMeta, OWNER, SALE, STATUS, TOKEN_META};

/// Owner configures the sale. Callable exactly once; before this the
/// contract rejects every participant and withdrawal operation.
pub fn execute_initialize(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: InitializeParams,
) -> Result<Response, ContractError> {
    guard::acquire(deps.storage)?;

    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }
    if SALE.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }
    if params.sale_token.is_empty() {
        return Err(ContractError::InvalidAsset);
    }
    if params.rate.is_zero() {
        return Err(ContractError::InvalidRate);
    }
    if params.total_offered.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let sale_token = deps.api.addr_validate(&params.sale_token)?;
    let base_token = params
        .base_token
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    if params.fund_from_owner {
        let owner_balance: BalanceResponse = deps.querier.query_wasm_smart(
            sale_token.to_string(),
            &Cw20QueryMsg::Balance {
                address: owner.to_string(),
            },
        )?;
        if owner_balance.balance < params.total_offered {
            return Err(ContractError::InsufficientOwnerBalance {
                available: owner_balance.balance.to_string(),
                needed: params.total_offered.to_string(),
            });
        }
        // Pull the whole offering from the owner; requires an allowance
        // on the sale token.
        msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: sale_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: owner.to_string(),
                recipient: env.contract.address.to_string(),
                amount: params.total_offered,
            })?,
            funds: vec![],
        }));
    }

    // Cache display metadata once; accounting never reads it.
    let token_info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(sale_token.to_string(), &Cw20QueryMsg::TokenInfo {})?;
    TOKEN_META.save(
        deps.storage,
        &TokenMeta {
            name: token_info.name,
            symbol: token_info.symbol,
            decimals: token_info.decimals,
            total_supply: token_info.total_supply,
        },
    )?;

    SALE.save(
        deps.storage,
        &SaleConfig {
            sale_token: sale_token.clone(),
            base_token: base_token.clone(),
            rate: params.rate,
            total_offered: params.total_offered,
            opens_at: params.opens_at,
            closes_at: params.closes_at,
        },
    )?;
    STATUS.save(deps.storage, &SaleStatus::default())?;

    let submsgs = guard::release_after(deps.storage, msgs)?;

    Ok(Response::new()
        .add_submessages(submsgs)
        .add_attribute("action", "ico.sale_initialized")
        .add_attribute("owner", owner.to_string())
        .add_attribute("sale_token", sale_token.to_string())
        .add_attribute(
            "base_asset",
            base_token
                .map(|addr| addr.to_string())
                .unwrap_or_else(|| NATIVE_DENOM.to_string()),
        )
        .add_attribute("rate", params.rate.to_string())
        .add_attribute("total_offered", params.total_offered.to_string())
        .add_attribute("opens_at", params.opens_at.to_string())
        .add_attribute("closes_at", params.closes_at.to_string())
        .add_attribute(
            "funding",
            if params.fund_from_owner {
                "owner"
            } else {
                "external"
            },
        ))
}
