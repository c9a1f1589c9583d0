// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! JSON-RPC client for NEO Legacy nodes.
//!
//! This crate builds JSON-RPC 2.0 request bodies, posts them over HTTP and
//! unmarshals typed responses for blockchain queries, wallet operations and
//! address validation. It also provides a naive best-node selection routine
//! that picks the candidate node reporting the highest block count.

mod error;
pub mod models;
mod rpc_client;

pub use error::{RpcError, RpcResult};
pub use rpc_client::{RpcClient, RpcClientBuilder, DEFAULT_HTTP_TIMEOUT};

// Re-export commonly used types
pub use models::{
    RpcBlock, RpcRequest, RpcResponse, RpcResponseError, RpcTransaction, RpcTxOutput,
    RpcValidateAddressResult, RpcWalletBalance,
};
