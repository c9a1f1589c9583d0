// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_block.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::{RpcTransaction, RpcWitnessScript};
use serde::{Deserialize, Serialize};

/// Block as reported by `getblock` with verbose output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcBlock {
    /// Block hash.
    pub hash: String,

    /// Block size in bytes.
    pub size: u32,

    /// Block version.
    pub version: u32,

    /// Hash of the preceding block.
    #[serde(rename = "previousblockhash")]
    pub previous_block_hash: String,

    /// Merkle root over the block's transactions.
    #[serde(rename = "merkleroot")]
    pub merkle_root: String,

    /// Block timestamp in seconds.
    pub time: u64,

    /// Block height.
    pub index: u32,

    /// Consensus nonce, hex encoded.
    #[serde(default)]
    pub nonce: String,

    /// Address of the next consensus node.
    #[serde(rename = "nextconsensus", default)]
    pub next_consensus: String,

    /// Witness script validating the block.
    #[serde(default)]
    pub script: Option<RpcWitnessScript>,

    /// Transactions contained in the block.
    #[serde(default)]
    pub tx: Vec<RpcTransaction>,

    /// Confirmations since this block.
    #[serde(default)]
    pub confirmations: u32,

    /// Hash of the following block, absent at the chain tip.
    #[serde(rename = "nextblockhash", default)]
    pub next_block_hash: Option<String>,
}
