#[cfg(test)]
pub mod helpers {
    use std::collections::HashMap;

    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::{
        coins, from_json, to_json_binary, ContractResult, Env, OwnedDeps, Reply, Response,
        SubMsgResponse, SubMsgResult, SystemError, SystemResult, Timestamp, Uint128, WasmQuery,
    };
    use cw20::{BalanceResponse, Cw20QueryMsg, TokenInfoResponse};

    use crate::contract::{execute, instantiate, query, reply};
    use crate::guard::REPLY_RELEASE_GUARD;
    use crate::msg::*;

    pub const OWNER: &str = "owner";
    pub const SALE_TOKEN: &str = "launch_token";
    pub const BASE_TOKEN: &str = "base_token";
    pub const ALICE: &str = "alice";
    pub const BOB: &str = "bob";
    pub const RANDOM_USER: &str = "random_user";

    pub const OPENS_AT: u64 = 1_000_000;
    pub const CLOSES_AT: u64 = 2_000_000;

    pub fn default_init_params(base_token: Option<&str>) -> InitializeParams {
        InitializeParams {
            sale_token: SALE_TOKEN.to_string(),
            base_token: base_token.map(|s| s.to_string()),
            rate: Uint128::new(2),
            total_offered: Uint128::new(1_000),
            opens_at: OPENS_AT,
            closes_at: CLOSES_AT,
            fund_from_owner: false,
        }
    }

    pub fn setup_contract() -> (OwnedDeps<MockStorage, MockApi, MockQuerier>, Env) {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let info = mock_info(OWNER, &[]);

        let res = instantiate(deps.as_mut(), env.clone(), info, InstantiateMsg {}).unwrap();
        assert_eq!(res.attributes.len(), 2);

        // Serve CW20 TokenInfo from the start; balances empty until a
        // test sets them.
        set_cw20_balances(&mut deps, &[]);

        (deps, env)
    }

    /// Install a CW20 querier answering `Balance` and `TokenInfo` for
    /// the given `(token, account, amount)` triples. Replaces any
    /// previously set balances.
    pub fn set_cw20_balances(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        balances: &[(&str, &str, u128)],
    ) {
        let mut map: HashMap<(String, String), Uint128> = HashMap::new();
        for (token, account, amount) in balances {
            map.insert(
                ((*token).to_string(), (*account).to_string()),
                Uint128::new(*amount),
            );
        }

        deps.querier.update_wasm(move |query| match query {
            WasmQuery::Smart { contract_addr, msg } => match from_json::<Cw20QueryMsg>(msg) {
                Ok(Cw20QueryMsg::Balance { address }) => {
                    let balance = map
                        .get(&(contract_addr.clone(), address))
                        .copied()
                        .unwrap_or_default();
                    SystemResult::Ok(ContractResult::Ok(
                        to_json_binary(&BalanceResponse { balance }).unwrap(),
                    ))
                }
                Ok(Cw20QueryMsg::TokenInfo {}) => SystemResult::Ok(ContractResult::Ok(
                    to_json_binary(&TokenInfoResponse {
                        name: "Launch Token".to_string(),
                        symbol: "LAUNCH".to_string(),
                        decimals: 6,
                        total_supply: Uint128::new(1_000_000_000),
                    })
                    .unwrap(),
                )),
                _ => SystemResult::Err(SystemError::UnsupportedRequest {
                    kind: "cw20 query".to_string(),
                }),
            },
            other => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: format!("{other:?}"),
            }),
        });
    }

    /// Initialize a sale as the owner without pre-funding.
    pub fn init_sale(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        base_token: Option<&str>,
        rate: u128,
        total_offered: u128,
    ) -> Result<Response, crate::error::ContractError> {
        let mut params = default_init_params(base_token);
        params.rate = Uint128::new(rate);
        params.total_offered = Uint128::new(total_offered);

        let info = mock_info(OWNER, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::Initialize(params),
        )
    }

    /// Initialize with full control over sender and parameters. Leaves
    /// the lock held if the call dispatched a pre-funding transfer.
    pub fn initialize_raw(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
        params: InitializeParams,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::Initialize(params),
        )
    }

    /// Native deposit. On success the transfer reply is driven so the
    /// next operation can run.
    pub fn deposit_native(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
        amount: u128,
    ) -> Result<Response, crate::error::ContractError> {
        let res = deposit_native_raw(deps, env, sender, amount)?;
        complete_transfers(deps, env);
        Ok(res)
    }

    /// Native deposit without driving the reply; the lock stays held as
    /// if the transfers were still in flight.
    pub fn deposit_native_raw(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
        amount: u128,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(sender, &coins(amount, "uaxm"));
        execute(deps.as_mut(), env.clone(), info, ExecuteMsg::Deposit {})
    }

    /// Token deposit. On success the transfer reply is driven so the
    /// next operation can run.
    pub fn deposit_token(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
        amount: u128,
    ) -> Result<Response, crate::error::ContractError> {
        let res = deposit_token_raw(deps, env, sender, amount)?;
        complete_transfers(deps, env);
        Ok(res)
    }

    pub fn deposit_token_raw(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
        amount: u128,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::DepositToken {
                amount: Uint128::new(amount),
            },
        )
    }

    /// Fund the sale pool via the CW20 receive hook (simulates a Send
    /// from the sale token contract).
    pub fn fund_pool(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        funder: &str,
        amount: u128,
    ) -> Result<Response, crate::error::ContractError> {
        let cw20_msg = cw20::Cw20ReceiveMsg {
            sender: funder.to_string(),
            amount: Uint128::new(amount),
            msg: to_json_binary(&ReceiveMsg::Fund {}).unwrap(),
        };

        // Info sender is the CW20 token contract
        let info = mock_info(SALE_TOKEN, &[]);
        execute(deps.as_mut(), env.clone(), info, ExecuteMsg::Receive(cw20_msg))
    }

    pub fn withdraw_sale_tokens(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(sender, &[]);
        let res = execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::WithdrawSaleTokens {},
        )?;
        complete_transfers(deps, env);
        Ok(res)
    }

    pub fn withdraw_native(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(sender, &[]);
        let res = execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::WithdrawNative {},
        )?;
        complete_transfers(deps, env);
        Ok(res)
    }

    pub fn withdraw_base_tokens(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(sender, &[]);
        let res = execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::WithdrawBaseTokens {},
        )?;
        complete_transfers(deps, env);
        Ok(res)
    }

    /// Drive the reply the final transfer of a guarded operation fires,
    /// releasing the operation lock.
    pub fn complete_transfers(deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>, env: &Env) {
        let msg = Reply {
            id: REPLY_RELEASE_GUARD,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![],
                data: None,
            }),
        };
        reply(deps.as_mut(), env.clone(), msg).unwrap();
    }

    pub fn query_config(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
    ) -> ConfigResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Config {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_status(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
    ) -> StatusResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Status {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_phase(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
    ) -> PhaseResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Phase {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_window(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
    ) -> WindowResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Window {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_participant(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        address: &str,
    ) -> ParticipantResponse {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::Participant {
                address: address.to_string(),
            },
        )
        .unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_token_meta(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
    ) -> TokenMetaResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::TokenMeta {}).unwrap();
        from_json(&res).unwrap()
    }

    /// Create an env with a specific block time
    pub fn env_at_time(secs: u64) -> Env {
        let mut env = mock_env();
        env.block.time = Timestamp::from_seconds(secs);
        env
    }
}
