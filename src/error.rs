// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for RPC operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to a NEO node.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The HTTP round trip itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered with a status other than 200.
    #[error("non-200 status code returned from NEO node, got: '{0}'")]
    HttpStatus(StatusCode),

    /// The node returned a populated JSON-RPC error envelope.
    #[error("error code: {code}, error message: {message}")]
    Node {
        /// JSON-RPC error code.
        code: i64,
        /// JSON-RPC error message.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No node URIs were supplied for selection.
    #[error("length of node candidates must be greater than 0")]
    NoCandidates,

    /// Every candidate node failed to answer the block-count probe.
    #[error("unable to communicate with any nodes")]
    NoUsableNode,
}

impl RpcError {
    /// Create an invalid response error.
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Result type for RPC operations.
pub type RpcResult<T> = std::result::Result<T, RpcError>;
