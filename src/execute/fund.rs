use cosmwasm_std::{from_json, DepsMut, Env, MessageInfo, Response};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::load_sale;

/// CW20 receive hook. Tokens sent here with a `Fund` message top up the
/// sale pool. Anyone may fund; only the configured sale token counts.
pub fn execute_receive(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = load_sale(deps.storage)?;

    // The calling contract is the token itself.
    if info.sender != config.sale_token {
        return Err(ContractError::WrongAsset {
            expected: config.sale_token.to_string(),
            got: info.sender.to_string(),
        });
    }

    let funder = deps.api.addr_validate(&cw20_msg.sender)?;

    match from_json(&cw20_msg.msg)? {
        ReceiveMsg::Fund {} => Ok(Response::new()
            .add_attribute("action", "ico.pool_funded")
            .add_attribute("funder", funder.to_string())
            .add_attribute("amount", cw20_msg.amount.to_string())),
    }
}
