// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_validate_address_result.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Address validation result from `validateaddress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcValidateAddressResult {
    /// The address the node examined. Some nodes omit it for garbage input.
    #[serde(default)]
    pub address: Option<String>,

    /// Whether the address is valid.
    #[serde(rename = "isvalid", default)]
    pub is_valid: bool,
}

impl RpcValidateAddressResult {
    /// True only when the node deems the address valid and echoes back exactly
    /// the address that was queried.
    #[must_use]
    pub fn confirms(&self, requested: &str) -> bool {
        self.is_valid && self.address.as_deref() == Some(requested)
    }
}
