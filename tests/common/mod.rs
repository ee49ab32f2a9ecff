//! In-process HTTP fixtures: a mock JSON-RPC node and a mock metadata
//! service, each bound to an ephemeral localhost port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use cinder_sdk::Config;
use serde_json::{json, Value};
use solana_sdk::pubkey::Pubkey;
use tiny_http::{Header, Response, Server};

fn json_header() -> Header {
    "Content-Type: application/json".parse().unwrap()
}

/// Mock Solana node: answers each JSON-RPC method with a canned `result`
/// and records every request it receives. Unknown methods get a JSON-RPC
/// error object, the way a node rejects an unsupported call.
pub struct MockRpc {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockRpc {
    pub fn start(results: HashMap<String, Value>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("bind mock rpc");
        let url = format!("http://{}", server.server_addr());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                request.as_reader().read_to_string(&mut body).ok();
                let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
                log.lock().unwrap().push(payload.clone());

                let method = payload["method"].as_str().unwrap_or_default();
                let reply = match results.get(method) {
                    Some(result) => json!({"jsonrpc": "2.0", "id": 1, "result": result}),
                    None => json!({
                        "jsonrpc": "2.0",
                        "id": 1,
                        "error": {"code": -32601, "message": format!("Method not found: {method}")}
                    }),
                };

                let response =
                    Response::from_string(reply.to_string()).with_header(json_header());
                request.respond(response).ok();
            }
        });

        Self { url, requests }
    }

    /// Every JSON-RPC method received, in arrival order.
    pub fn methods_called(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r["method"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// Full request payloads for one method.
    pub fn requests_for(&self, method: &str) -> Vec<Value> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r["method"].as_str() == Some(method))
            .cloned()
            .collect()
    }
}

/// Mock token-overview service keyed by mint address. Mints without an
/// entry get a 404, which the client must treat as a failed lookup.
pub struct MockMetadata {
    pub url: String,
}

impl MockMetadata {
    pub fn start(overviews: HashMap<String, Value>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("bind mock metadata");
        let url = format!("http://{}", server.server_addr());

        thread::spawn(move || {
            for request in server.incoming_requests() {
                let address = request
                    .url()
                    .split("address=")
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();

                let (status, body) = match overviews.get(&address) {
                    Some(data) => (200, json!({"success": true, "data": data})),
                    None => (404, json!({"success": false})),
                };

                let response = Response::from_string(body.to_string())
                    .with_status_code(status)
                    .with_header(json_header());
                request.respond(response).ok();
            }
        });

        Self { url }
    }
}

/// Config pointing at the mocks, with a short confirmation window so
/// timeout tests stay fast.
pub fn test_config(rpc_url: &str, metadata_url: &str) -> Config {
    let mut config = Config {
        rpc_url: rpc_url.to_string(),
        ..Config::default()
    };
    config.metadata.endpoint = metadata_url.to_string();
    config.metadata.api_key = "test-key".to_string();
    config.confirmation.timeout_secs = 2;
    config.confirmation.poll_interval_ms = 20;
    config
}

/// One `jsonParsed` token account entry as `getTokenAccountsByOwner`
/// returns it.
pub fn token_account_json(owner: &Pubkey, mint: &str, ui_amount: f64, decimals: u8) -> Value {
    let base_units = (ui_amount * 10f64.powi(decimals as i32)).round() as u64;
    json!({
        "pubkey": Pubkey::new_unique().to_string(),
        "account": {
            "lamports": 2_039_280u64,
            "owner": spl_token::id().to_string(),
            "executable": false,
            "rentEpoch": 361u64,
            "space": 165,
            "data": {
                "program": "spl-token",
                "space": 165,
                "parsed": {
                    "type": "account",
                    "info": {
                        "isNative": false,
                        "mint": mint,
                        "owner": owner.to_string(),
                        "state": "initialized",
                        "tokenAmount": {
                            "amount": base_units.to_string(),
                            "decimals": decimals,
                            "uiAmount": ui_amount,
                            "uiAmountString": ui_amount.to_string()
                        }
                    }
                }
            }
        }
    })
}

/// Canned `getLatestBlockhash` result.
pub fn latest_blockhash_json() -> Value {
    json!({
        "context": {"slot": 1},
        "value": {
            "blockhash": "11111111111111111111111111111111",
            "lastValidBlockHeight": 100u64
        }
    })
}

/// Canned `getSignatureStatuses` result at the given confirmation level.
pub fn signature_status_json(confirmation_status: &str) -> Value {
    json!({
        "context": {"slot": 1},
        "value": [{
            "slot": 1,
            "confirmations": 1,
            "err": null,
            "confirmationStatus": confirmation_status,
            "status": {"Ok": null}
        }]
    })
}
