// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_response.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// JSON-RPC 2.0 response envelope returned by the node.
///
/// Exactly one of `result` and `error` is populated on a well-behaved node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// JSON-RPC version.
    #[serde(default)]
    pub jsonrpc: String,

    /// ID echoed back from the request.
    #[serde(default)]
    pub id: Option<Value>,

    /// Method-specific result payload.
    #[serde(default)]
    pub result: Option<Value>,

    /// Error envelope, populated when the call failed on the node.
    #[serde(default)]
    pub error: Option<RpcResponseError>,
}

/// JSON-RPC error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponseError {
    /// Error code.
    pub code: i64,

    /// Error message.
    pub message: String,

    /// Optional additional error data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl fmt::Display for RpcResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RPC Error {}: {}", self.code, self.message)
    }
}
