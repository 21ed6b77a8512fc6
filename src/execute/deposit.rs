use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, Storage,
    SubMsg, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::contract::NATIVE_DENOM;
use crate::error::ContractError;
use crate::guard;
use crate::state::{load_sale, split_deposit, DepositSplit, SaleConfig, PARTICIPANTS, STATUS};

/// Buy sale tokens with attached native funds. Oversized deposits are
/// clamped to the remaining supply and the surplus is sent back in the
/// same transaction.
pub fn execute_deposit_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    guard::acquire(deps.storage)?;
    let config = load_sale(deps.storage)?;
    check_window(&env, &config)?;

    if info.funds.is_empty() {
        return Err(ContractError::ZeroAmount);
    }
    if info.funds.len() > 1 {
        return Err(ContractError::MultipleDenoms);
    }
    let sent = &info.funds[0];
    if sent.amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if let Some(base) = &config.base_token {
        return Err(ContractError::WrongAsset {
            expected: base.to_string(),
            got: sent.denom.clone(),
        });
    }
    if sent.denom != NATIVE_DENOM {
        return Err(ContractError::WrongAsset {
            expected: NATIVE_DENOM.to_string(),
            got: sent.denom.clone(),
        });
    }

    let split = admit(deps.storage, &info.sender, sent.amount, &config)?;

    let mut msgs: Vec<CosmosMsg> = vec![sale_token_transfer(&config, &info.sender, split.tokens_out)?];
    if !split.refund.is_zero() {
        msgs.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: NATIVE_DENOM.to_string(),
                amount: split.refund,
            }],
        }));
    }
    let submsgs = guard::release_after(deps.storage, msgs)?;

    Ok(deposit_response(submsgs, &info.sender, &split))
}

/// Buy sale tokens with the configured CW20 base token. Only the
/// retained portion of `amount` is pulled from the caller's allowance,
/// so an oversell never needs an explicit refund transfer.
pub fn execute_deposit_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    guard::acquire(deps.storage)?;
    let config = load_sale(deps.storage)?;
    check_window(&env, &config)?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let base_token = match &config.base_token {
        Some(addr) => addr.clone(),
        None => {
            return Err(ContractError::WrongAsset {
                expected: NATIVE_DENOM.to_string(),
                got: "cw20".to_string(),
            })
        }
    };

    // The pull itself would fail on a short balance, but checking first
    // turns that into a typed error instead of a submessage abort.
    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        base_token.to_string(),
        &Cw20QueryMsg::Balance {
            address: info.sender.to_string(),
        },
    )?;
    if balance.balance < amount {
        return Err(ContractError::InsufficientBalance {
            available: balance.balance.to_string(),
            needed: amount.to_string(),
        });
    }

    let split = admit(deps.storage, &info.sender, amount, &config)?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    if !split.retained.is_zero() {
        msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: base_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: env.contract.address.to_string(),
                amount: split.retained,
            })?,
            funds: vec![],
        }));
    }
    msgs.push(sale_token_transfer(&config, &info.sender, split.tokens_out)?);
    let submsgs = guard::release_after(deps.storage, msgs)?;

    Ok(deposit_response(submsgs, &info.sender, &split))
}

/// Shared admission core. Clamps the requested amount against the
/// remaining supply and commits the ledger. All storage writes happen
/// here, before any transfer message leaves the contract.
fn admit(
    storage: &mut dyn Storage,
    sender: &Addr,
    amount_in: Uint128,
    config: &SaleConfig,
) -> Result<DepositSplit, ContractError> {
    let mut status = STATUS.load(storage)?;

    let remaining = config.total_offered - status.total_sold;
    if remaining.is_zero() {
        return Err(ContractError::SoldOut);
    }

    let split = split_deposit(amount_in, config.rate, remaining)?;

    let mut record = PARTICIPANTS.may_load(storage, sender)?.unwrap_or_default();
    // Counted once, when the retained deposit first becomes non-zero.
    if record.deposited_base.is_zero() && !split.retained.is_zero() {
        status.participant_count += 1;
    }
    record.deposited_base += split.retained;
    record.allocated_sale += split.tokens_out;
    PARTICIPANTS.save(storage, sender, &record)?;

    status.total_raised += split.retained;
    status.total_sold += split.tokens_out;
    STATUS.save(storage, &status)?;

    Ok(split)
}

fn check_window(env: &Env, config: &SaleConfig) -> Result<(), ContractError> {
    let now = env.block.time.seconds();
    if now < config.opens_at {
        return Err(ContractError::SaleNotOpen {
            opens_at: config.opens_at,
        });
    }
    if now > config.closes_at {
        return Err(ContractError::SaleClosed {
            closes_at: config.closes_at,
        });
    }
    Ok(())
}

fn sale_token_transfer(
    config: &SaleConfig,
    recipient: &Addr,
    amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.sale_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

fn deposit_response(submsgs: Vec<SubMsg>, participant: &Addr, split: &DepositSplit) -> Response {
    let mut res = Response::new()
        .add_submessages(submsgs)
        .add_attribute("action", "ico.deposit_accepted")
        .add_attribute("participant", participant.to_string())
        .add_attribute("amount_retained", split.retained.to_string())
        .add_attribute("tokens_out", split.tokens_out.to_string());
    if !split.refund.is_zero() {
        res = res.add_attribute("amount_refunded", split.refund.to_string());
    }
    res
}
