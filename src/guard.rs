use cosmwasm_std::{CosmosMsg, StdResult, Storage, SubMsg};
use cw_storage_plus::Item;

use crate::error::ContractError;

/// Reply id carried by the final transfer of a guarded operation so the
/// lock is released once every transfer has executed.
pub const REPLY_RELEASE_GUARD: u64 = 1;

/// Two-state operation lock. Absent or false means idle.
pub const OPERATION_LOCK: Item<bool> = Item::new("operation_lock");

/// Take the lock. Fails when a guarded operation is already in flight,
/// which happens when a transfer callout re-enters the contract.
pub fn acquire(storage: &mut dyn Storage) -> Result<(), ContractError> {
    if OPERATION_LOCK.may_load(storage)?.unwrap_or(false) {
        return Err(ContractError::ReentrantCall);
    }
    OPERATION_LOCK.save(storage, &true)?;
    Ok(())
}

pub fn release(storage: &mut dyn Storage) -> StdResult<()> {
    OPERATION_LOCK.save(storage, &false)
}

/// Turn an operation's outgoing transfers into submessages that keep
/// the lock held until the last one has executed; its reply releases
/// the lock. With nothing to dispatch the lock is released inline. A
/// failed transfer aborts the transaction, which also restores the
/// lock's pre-call state.
pub fn release_after(
    storage: &mut dyn Storage,
    msgs: Vec<CosmosMsg>,
) -> Result<Vec<SubMsg>, ContractError> {
    if msgs.is_empty() {
        release(storage)?;
        return Ok(vec![]);
    }

    let last = msgs.len() - 1;
    Ok(msgs
        .into_iter()
        .enumerate()
        .map(|(i, msg)| {
            if i == last {
                SubMsg::reply_on_success(msg, REPLY_RELEASE_GUARD)
            } else {
                SubMsg::new(msg)
            }
        })
        .collect())
}
