//! Utilities for the deploy scripts

use std::{fs, path::PathBuf, str::FromStr, sync::Arc};

use ethers::{
    abi::Address,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use json::JsonValue;

use crate::{constants::DEPLOYMENTS_KEY, errors::ScriptError};

/// Sets up the RPC client used to submit deployment transactions,
/// attaching the deployer's wallet to a provider for the given RPC url
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<impl Middleware>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();
    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id),
    ));

    Ok(client)
}

/// Parse the deployments file at the given path into a JSON value
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Read the address recorded under the given contract key in the
/// deployments file, returning `None` if the file or the key is absent
pub fn read_deployed_address(
    file_path: &str,
    contract_key: &str,
) -> Result<Option<Address>, ScriptError> {
    if !PathBuf::from(file_path).exists() {
        return Ok(None);
    }
    let parsed_json = get_json_from_file(file_path)?;

    match parsed_json[DEPLOYMENTS_KEY][contract_key].as_str() {
        Some(addr) => Address::from_str(addr)
            .map(Some)
            .map_err(|e| ScriptError::ReadDeployments(e.to_string())),
        None => Ok(None),
    }
}

/// Read the address recorded under the given contract key, erroring
/// if it has not been deployed yet
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    read_deployed_address(file_path, contract_key)?.ok_or_else(|| {
        ScriptError::ReadDeployments(format!(
            "no `{}` address recorded in {}",
            contract_key, file_path
        ))
    })
}

/// Record the address of a deployed contract in the deployments file,
/// creating the file if it does not yet exist
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use ethers::abi::Address;

    use super::{parse_addr_from_deployments_file, read_deployed_address, write_deployed_address};

    /// Build a unique scratch path for a deployments file
    fn temp_deployments_path(name: &str) -> String {
        let path = env::temp_dir().join(name);
        let _ = fs::remove_file(&path);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_write_then_read_address() {
        let path = temp_deployments_path("zap_scripts_write_then_read.json");
        let address = Address::from_low_u64_be(42);

        write_deployed_address(&path, "zap_contract", address).unwrap();
        let parsed = parse_addr_from_deployments_file(&path, "zap_contract").unwrap();
        assert_eq!(parsed, address);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let path = temp_deployments_path("zap_scripts_missing.json");
        assert!(read_deployed_address(&path, "zap_contract")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let path = temp_deployments_path("zap_scripts_missing_key.json");
        write_deployed_address(&path, "migrations_contract", Address::from_low_u64_be(1)).unwrap();

        assert!(read_deployed_address(&path, "zap_contract")
            .unwrap()
            .is_none());
        assert!(parse_addr_from_deployments_file(&path, "zap_contract").is_err());

        fs::remove_file(&path).unwrap();
    }
}
