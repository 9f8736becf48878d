//! The deployment configuration, i.e. the constructor parameters of the Zap contract

use std::fs;

use ethers::abi::Address;
use serde::{Deserialize, Serialize};

use crate::errors::ScriptError;

/// The number of token addresses the Zap constructor takes
pub const NUM_TOKENS: usize = 4;

/// The constructor parameters of the Zap contract.
///
/// Loaded from a JSON file supplied on the command line, so that different
/// environments can target different addresses without editing code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// The addresses of the tokens the Zap contract supports.
    ///
    /// The order is significant: it is passed through positionally to the
    /// Zap constructor.
    pub token_addresses: [Address; NUM_TOKENS],
    /// The address of the swap router contract
    pub swap_address: Address,
    /// The address of the liquidity pool contract
    pub lp_address: Address,
}

impl DeploymentConfig {
    /// Read and parse a deployment config from the JSON file at the given path
    pub fn from_file(path: &str) -> Result<Self, ScriptError> {
        let file_contents =
            fs::read_to_string(path).map_err(|e| ScriptError::ConfigParsing(e.to_string()))?;

        serde_json::from_str(&file_contents).map_err(|e| ScriptError::ConfigParsing(e.to_string()))
    }
}
