use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{deposit, fund, initialize, withdraw};
use crate::guard;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::state::OWNER;

const CONTRACT_NAME: &str = "crates.io:token-ico";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Native staking coin of the Axiome chain.
pub const NATIVE_DENOM: &str = "uaxm";

/// Records the deployer as owner. The sale itself is configured later
/// through `ExecuteMsg::Initialize`.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    OWNER.save(deps.storage, &info.sender)?;
    // Lock starts idle.
    guard::release(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initialize(params) => initialize::execute_initialize(deps, env, info, params),
        ExecuteMsg::Deposit {} => deposit::execute_deposit_native(deps, env, info),
        ExecuteMsg::DepositToken { amount } => {
            deposit::execute_deposit_token(deps, env, info, amount)
        }
        ExecuteMsg::Receive(cw20_msg) => fund::execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::WithdrawSaleTokens {} => {
            withdraw::execute_withdraw_sale_tokens(deps, env, info)
        }
        ExecuteMsg::WithdrawNative {} => withdraw::execute_withdraw_native(deps, env, info),
        ExecuteMsg::WithdrawBaseTokens {} => {
            withdraw::execute_withdraw_base_tokens(deps, env, info)
        }
    }
}

/// Fires after the last transfer of a guarded operation has executed;
/// releases the operation lock. A failed transfer never reaches this
/// point, the whole transaction aborts instead.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        guard::REPLY_RELEASE_GUARD => {
            guard::release(deps.storage)?;
            Ok(Response::new().add_attribute("action", "ico.transfers_completed"))
        }
        id => Err(ContractError::Std(StdError::generic_err(format!(
            "unknown reply id: {id}"
        )))),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query::query_config(deps)?),
        QueryMsg::Status {} => to_json_binary(&query::query_status(deps)?),
        QueryMsg::Phase {} => to_json_binary(&query::query_phase(deps, env)?),
        QueryMsg::Window {} => to_json_binary(&query::query_window(deps)?),
        QueryMsg::Participant { address } => {
            to_json_binary(&query::query_participant(deps, address)?)
        }
        QueryMsg::TokenMeta {} => to_json_binary(&query::query_token_meta(deps)?),
    }
}
