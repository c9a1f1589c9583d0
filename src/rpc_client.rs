// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::{RpcError, RpcResult};
use crate::models::{
    RpcBlock, RpcRequest, RpcResponse, RpcTransaction, RpcTxOutput, RpcValidateAddressResult,
    RpcWalletBalance,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use url::Url;

/// Default timeout applied to every HTTP round trip.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The RPC client used to call NEO Legacy node methods.
///
/// Each operation performs exactly one HTTP round trip: build the positional
/// parameter list, POST the JSON-RPC 2.0 envelope, check the HTTP status and
/// error envelope, deserialize the result.
#[derive(Debug)]
pub struct RpcClient {
    base_address: Url,
    candidates: Vec<Url>,
    http_client: Client,
}

/// Configurable builder for [`RpcClient`].
pub struct RpcClientBuilder {
    url: Url,
    timeout: Duration,
    http_client: Option<Client>,
}

impl RpcClientBuilder {
    /// Creates a builder targeting the given node URL.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: DEFAULT_HTTP_TIMEOUT,
            http_client: None,
        }
    }

    /// Overrides the HTTP timeout. Ignored when a client is injected.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses an existing HTTP client instead of building one.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the RPC client.
    pub fn build(self) -> RpcResult<RpcClient> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder().timeout(self.timeout).build()?,
        };

        Ok(RpcClient {
            base_address: self.url.clone(),
            candidates: vec![self.url],
            http_client,
        })
    }
}

impl RpcClient {
    /// Creates a configurable builder for the RPC client.
    #[must_use]
    pub fn builder(url: Url) -> RpcClientBuilder {
        RpcClientBuilder::new(url)
    }

    /// Creates a new RPC client with a single node URL.
    pub fn new(url: Url) -> RpcResult<Self> {
        RpcClientBuilder::new(url).build()
    }

    /// Creates a new RPC client with an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            base_address: url.clone(),
            candidates: vec![url],
            http_client: client,
        }
    }

    /// Creates a client from several candidate node URLs.
    ///
    /// Every candidate is probed for its block count and the node reporting
    /// the highest chain wins. Errors when the list is empty or no candidate
    /// answers the probe.
    pub async fn from_candidates(candidates: Vec<Url>) -> RpcResult<Self> {
        let first = candidates.first().cloned().ok_or(RpcError::NoCandidates)?;

        let mut client = RpcClientBuilder::new(first).build()?;
        client.candidates = candidates;
        client.select_best_node().await?;

        Ok(client)
    }

    /// The node URL calls are currently routed to.
    #[must_use]
    pub fn node(&self) -> &Url {
        &self.base_address
    }

    /// Re-runs best-node selection over the candidate list.
    ///
    /// A single candidate is used as-is. With two or more, each candidate is
    /// queried for its block count sequentially; candidates that fail the
    /// probe are skipped. The node with the highest count becomes the target,
    /// first winner kept on ties.
    pub async fn select_best_node(&mut self) -> RpcResult<()> {
        if self.candidates.len() == 1 {
            self.base_address = self.candidates[0].clone();
            return Ok(());
        }

        let mut best_node: Option<Url> = None;
        let mut highest_block = 0u32;

        for candidate in &self.candidates {
            let probe = RpcClient::with_client(self.http_client.clone(), candidate.clone());
            let block_count = match probe.get_block_count().await {
                Ok(count) => count,
                Err(err) => {
                    tracing::warn!(node = %candidate, error = %err, "node probe failed");
                    continue;
                }
            };

            if block_count > highest_block {
                highest_block = block_count;
                best_node = Some(candidate.clone());
            }
        }

        match best_node {
            Some(node) => {
                tracing::debug!(node = %node, height = highest_block, "selected best node");
                self.base_address = node;
                Ok(())
            }
            None => Err(RpcError::NoUsableNode),
        }
    }

    /// Checks whether the node's TCP endpoint accepts connections.
    pub async fn ping(&self) -> bool {
        let Some(host) = self.base_address.host_str() else {
            return false;
        };
        let Some(port) = self.base_address.port_or_known_default() else {
            return false;
        };

        TcpStream::connect((host, port)).await.is_ok()
    }

    /// Sends a request envelope and returns the response envelope.
    ///
    /// Fails on transport errors, on a non-200 HTTP status and on a populated
    /// JSON-RPC error envelope.
    pub async fn send_async(&self, request: &RpcRequest) -> RpcResult<RpcResponse> {
        let started = Instant::now();

        let response = self
            .http_client
            .post(self.base_address.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RpcError::HttpStatus(status));
        }

        let content = response.text().await?;
        let envelope: RpcResponse = serde_json::from_str(&content)?;

        tracing::debug!(
            method = %request.method,
            elapsed = ?started.elapsed(),
            "rpc call completed"
        );

        if let Some(error) = &envelope.error {
            return Err(RpcError::Node {
                code: error.code,
                message: error.message.clone(),
            });
        }

        Ok(envelope)
    }

    /// Sends an RPC request and deserializes the result payload.
    pub async fn rpc_send_async<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> RpcResult<T> {
        let request = RpcRequest::new(method, params);
        let response = self.send_async(&request).await?;

        let result = response
            .result
            .ok_or_else(|| RpcError::invalid_response("no result returned"))?;

        Ok(serde_json::from_value(result)?)
    }

    // Blockchain methods

    /// Returns the hash of the tallest block in the chain.
    pub async fn get_best_block_hash(&self) -> RpcResult<String> {
        self.rpc_send_async("getbestblockhash", vec![]).await
    }

    /// Returns the block with the given hash.
    pub async fn get_block_by_hash(&self, hash: &str) -> RpcResult<RpcBlock> {
        self.rpc_send_async("getblock", vec![json!(hash), json!(1)])
            .await
    }

    /// Returns the block at the given height.
    pub async fn get_block_by_index(&self, index: u32) -> RpcResult<RpcBlock> {
        self.rpc_send_async("getblock", vec![json!(index), json!(1)])
            .await
    }

    /// Returns the number of blocks in the chain.
    pub async fn get_block_count(&self) -> RpcResult<u32> {
        self.rpc_send_async("getblockcount", vec![]).await
    }

    /// Returns the hash of the block at the given height.
    pub async fn get_block_hash(&self, index: u32) -> RpcResult<String> {
        self.rpc_send_async("getblockhash", vec![json!(index)])
            .await
    }

    /// Returns the current number of connections for the node.
    pub async fn get_connection_count(&self) -> RpcResult<u32> {
        self.rpc_send_async("getconnectioncount", vec![]).await
    }

    /// Returns the stored value under a contract's storage key, if any.
    ///
    /// The key is hex-encoded before it is sent, the way legacy nodes expect.
    pub async fn get_storage(&self, script_hash: &str, storage_key: &str) -> RpcResult<String> {
        let params = vec![json!(script_hash), json!(hex::encode(storage_key))];
        self.rpc_send_async("getstorage", params).await
    }

    /// Returns the transaction with the given hash.
    pub async fn get_transaction(&self, hash: &str) -> RpcResult<RpcTransaction> {
        self.rpc_send_async("getrawtransaction", vec![json!(hash), json!(1)])
            .await
    }

    /// Returns the output at index `n` of the given transaction.
    pub async fn get_transaction_output(&self, hash: &str, n: u32) -> RpcResult<RpcTxOutput> {
        self.rpc_send_async("gettxout", vec![json!(hash), json!(n)])
            .await
    }

    /// Returns the hashes of all unconfirmed transactions in the node's
    /// memory pool.
    pub async fn get_unconfirmed_transactions(&self) -> RpcResult<Vec<String>> {
        self.rpc_send_async("getrawmempool", vec![]).await
    }

    /// Validates a NEO address.
    pub async fn validate_address(&self, address: &str) -> RpcResult<RpcValidateAddressResult> {
        self.rpc_send_async("validateaddress", vec![json!(address)])
            .await
    }

    /// True only when the node deems the address valid and echoes it back
    /// unchanged.
    pub async fn is_address_valid(&self, address: &str) -> RpcResult<bool> {
        let result = self.validate_address(address).await?;
        Ok(result.confirms(address))
    }

    // Wallet methods, these require a wallet to be open on the node.

    /// Returns the wallet balance for the given asset.
    pub async fn get_balance(&self, asset_id: &str) -> RpcResult<RpcWalletBalance> {
        self.rpc_send_async("getbalance", vec![json!(asset_id)])
            .await
    }

    /// Creates a new address in the node's wallet.
    pub async fn get_new_address(&self) -> RpcResult<String> {
        self.rpc_send_async("getnewaddress", vec![]).await
    }

    /// Transfers an asset from the node's wallet to the given address and
    /// returns the resulting transaction.
    pub async fn send_to_address(
        &self,
        asset_id: &str,
        address: &str,
        amount: &str,
    ) -> RpcResult<RpcTransaction> {
        let params = vec![json!(asset_id), json!(address), json!(amount)];
        self.rpc_send_async("sendtoaddress", params).await
    }
}
