// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_wallet_balance.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Wallet balance for one asset from `getbalance`.
///
/// Requires a wallet to be open on the node. `balance` includes unconfirmed
/// amounts, `confirmed` is the spendable portion. Both are decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcWalletBalance {
    /// Total balance, including unconfirmed amounts.
    #[serde(default)]
    pub balance: String,

    /// Confirmed, spendable balance.
    #[serde(default)]
    pub confirmed: String,
}
