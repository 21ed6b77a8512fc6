use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::contract::NATIVE_DENOM;
use crate::error::ContractError;
use crate::guard;
use crate::state::{load_sale, phase_at, Phase, SaleConfig, OWNER, STATUS};

/// Owner sweeps the entire remaining sale token balance after close.
/// Unsold supply, give-away dust and over-funded pool amounts all come
/// back in one transfer.
pub fn execute_withdraw_sale_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    guard::acquire(deps.storage)?;
    let (owner, config) = owner_after_close(deps.as_ref(), &env, &info)?;

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        config.sale_token.to_string(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    if balance.balance.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }

    let msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.sale_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: owner.to_string(),
            amount: balance.balance,
        })?,
        funds: vec![],
    });
    let submsgs = guard::release_after(deps.storage, vec![msg])?;

    Ok(Response::new()
        .add_submessages(submsgs)
        .add_attribute("action", "ico.sale_tokens_withdrawn")
        .add_attribute("recipient", owner.to_string())
        .add_attribute("amount", balance.balance.to_string()))
}

/// Owner withdraws collected native proceeds after close. Only valid
/// for sales configured with the native base asset.
pub fn execute_withdraw_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    guard::acquire(deps.storage)?;
    let (owner, config) = owner_after_close(deps.as_ref(), &env, &info)?;

    if config.base_token.is_some() {
        return Err(ContractError::NotNativeSale);
    }

    let balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), NATIVE_DENOM)?;
    if balance.amount.is_zero() {
        return Err(ContractError::NoNativeCollected);
    }

    let msg = CosmosMsg::Bank(BankMsg::Send {
        to_address: owner.to_string(),
        amount: vec![Coin {
            denom: NATIVE_DENOM.to_string(),
            amount: balance.amount,
        }],
    });
    let submsgs = guard::release_after(deps.storage, vec![msg])?;

    Ok(Response::new()
        .add_submessages(submsgs)
        .add_attribute("action", "ico.native_withdrawn")
        .add_attribute("recipient", owner.to_string())
        .add_attribute("amount", balance.amount.to_string()))
}

/// Owner withdraws collected base tokens after close. Only valid for
/// sales configured with a CW20 base token.
pub fn execute_withdraw_base_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    guard::acquire(deps.storage)?;
    let (owner, config) = owner_after_close(deps.as_ref(), &env, &info)?;

    let base_token = match &config.base_token {
        Some(addr) => addr.clone(),
        None => return Err(ContractError::NotTokenSale),
    };

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        base_token.to_string(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    if balance.balance.is_zero() {
        return Err(ContractError::NoTokensCollected);
    }

    let msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: base_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: owner.to_string(),
            amount: balance.balance,
        })?,
        funds: vec![],
    });
    let submsgs = guard::release_after(deps.storage, vec![msg])?;

    Ok(Response::new()
        .add_submessages(submsgs)
        .add_attribute("action", "ico.base_tokens_withdrawn")
        .add_attribute("recipient", owner.to_string())
        .add_attribute("amount", balance.balance.to_string()))
}

/// Shared gate for the three withdrawal operations: owner only, and
/// only once the window has closed. Selling out early does not unlock
/// withdrawals before `closes_at`.
fn owner_after_close(
    deps: Deps,
    env: &Env,
    info: &MessageInfo,
) -> Result<(Addr, SaleConfig), ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }

    let config = load_sale(deps.storage)?;
    let status = STATUS.load(deps.storage)?;
    if phase_at(env.block.time.seconds(), &config, &status) != Phase::Ended {
        return Err(ContractError::SaleNotEnded {
            closes_at: config.closes_at,
        });
    }

    Ok((owner, config))
}
