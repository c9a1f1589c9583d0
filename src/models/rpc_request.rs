// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_request.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request envelope sent to the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version, always "2.0".
    pub jsonrpc: String,

    /// Method name.
    pub method: String,

    /// Positional method parameters.
    pub params: Vec<Value>,

    /// Request ID.
    pub id: u64,
}

impl RpcRequest {
    /// Creates a new request envelope for the given method and parameters.
    pub fn new(method: &str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rpc_request_serializes_jsonrpc_two_envelope() {
        let request = RpcRequest::new("getblock", vec![json!("0xabc"), json!(1)]);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["method"], "getblock");
        assert_eq!(body["params"], json!(["0xabc", 1]));
        assert_eq!(body["id"], 1);
    }

    #[test]
    fn rpc_request_with_no_parameters_sends_empty_array() {
        let request = RpcRequest::new("getblockcount", vec![]);
        let body = serde_json::to_string(&request).unwrap();

        assert!(body.contains(r#""params":[]"#));
    }
}
