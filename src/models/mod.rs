// Copyright (C) 2015-2025 The Neo Project.
//
// models/mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Data models for RPC requests and responses.

mod rpc_block;
mod rpc_request;
mod rpc_response;
mod rpc_transaction;
mod rpc_validate_address_result;
mod rpc_wallet_balance;

pub use rpc_block::RpcBlock;
pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponseError};
pub use rpc_transaction::{
    RpcTransaction, RpcTransactionAttribute, RpcTxInput, RpcTxOutput, RpcWitnessScript,
};
pub use rpc_validate_address_result::RpcValidateAddressResult;
pub use rpc_wallet_balance::RpcWalletBalance;
