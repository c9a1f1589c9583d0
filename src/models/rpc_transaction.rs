// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_transaction.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Transaction as reported by `getrawtransaction` with verbose output.
///
/// Legacy nodes describe value flow in the UTXO style, so inputs reference a
/// previous output by transaction hash and index, and outputs carry the asset,
/// amount and destination address. Fees and amounts are decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcTransaction {
    /// Transaction hash.
    pub txid: String,

    /// Transaction size in bytes.
    #[serde(default)]
    pub size: u32,

    /// Transaction type, e.g. "ContractTransaction".
    #[serde(rename = "type", default)]
    pub tx_type: String,

    /// Transaction version.
    #[serde(default)]
    pub version: u32,

    /// Transaction attributes.
    #[serde(default)]
    pub attributes: Vec<RpcTransactionAttribute>,

    /// Inputs spent by this transaction.
    #[serde(default)]
    pub vin: Vec<RpcTxInput>,

    /// Outputs created by this transaction.
    #[serde(default)]
    pub vout: Vec<RpcTxOutput>,

    /// System fee as a decimal string.
    #[serde(default)]
    pub sys_fee: String,

    /// Network fee as a decimal string.
    #[serde(default)]
    pub net_fee: String,

    /// Witness scripts authorizing the transaction.
    #[serde(default)]
    pub scripts: Vec<RpcWitnessScript>,

    /// Hash of the containing block, absent while unconfirmed.
    #[serde(rename = "blockhash", default)]
    pub block_hash: Option<String>,

    /// Number of confirmations, absent while unconfirmed.
    #[serde(default)]
    pub confirmations: Option<u32>,

    /// Timestamp of the containing block, absent while unconfirmed.
    #[serde(rename = "blocktime", default)]
    pub block_time: Option<u64>,
}

/// Reference to a previous transaction output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcTxInput {
    /// Hash of the transaction holding the spent output.
    pub txid: String,

    /// Index of the spent output within that transaction.
    pub vout: u32,
}

/// Transaction output, also the `gettxout` result shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcTxOutput {
    /// Output index within the transaction.
    pub n: u32,

    /// Asset ID transferred by this output.
    pub asset: String,

    /// Amount as a decimal string.
    pub value: String,

    /// Destination address.
    pub address: String,
}

/// Transaction attribute, a usage tag with opaque hex data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcTransactionAttribute {
    /// Attribute usage, e.g. "Script" or "Remark".
    pub usage: String,

    /// Hex-encoded attribute payload.
    #[serde(default)]
    pub data: String,
}

/// Witness script pair attached to blocks and transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcWitnessScript {
    /// Invocation script pushing the signatures.
    pub invocation: String,

    /// Verification script being satisfied.
    pub verification: String,
}
