//! Implementations of the deploy script commands

use std::sync::Arc;

use ethers::{
    abi::{Address, Contract},
    contract::ContractFactory,
    providers::Middleware,
    types::{Bytes, U256},
    utils::hex::FromHex,
};
use tracing::info;

use crate::{
    cli::DeployArgs,
    config::DeploymentConfig,
    constants::{MIGRATIONS_CONTRACT_KEY, MIGRATION_NUMBER, NUM_DEPLOY_CONFIRMATIONS},
    errors::ScriptError,
    migration::{migration_steps, DeploymentStep},
    solidity::MigrationsContract,
    utils::{parse_addr_from_deployments_file, read_deployed_address, write_deployed_address},
};

/// Run the migration: deploy the Migrations bookkeeping contract, then the
/// Zap contract, recording each deployed address in the deployments file.
///
/// Steps already recorded in the deployments file are skipped, so a re-run
/// with the same config is a no-op beyond updating the bookkeeping contract.
pub async fn deploy(
    args: DeployArgs,
    client: Arc<impl Middleware>,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let config = DeploymentConfig::from_file(&args.config_path)?;

    for step in migration_steps(&config) {
        let key = step.contract.deployments_key();
        if let Some(address) = read_deployed_address(deployments_path, key)? {
            info!(
                "{} contract already deployed at {:#x}, skipping",
                step.contract, address
            );
            continue;
        }

        let address = deploy_contract(&step, client.clone()).await?;
        info!("{} contract deployed at {:#x}", step.contract, address);

        write_deployed_address(deployments_path, key, address)?;
    }

    // Record the completed migration in the bookkeeping contract
    let migrations_address =
        parse_addr_from_deployments_file(deployments_path, MIGRATIONS_CONTRACT_KEY)?;
    let migrations = MigrationsContract::new(migrations_address, client);

    migrations
        .set_completed(U256::from(MIGRATION_NUMBER))
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(())
}

/// Query the number of the last completed migration from the deployed
/// Migrations contract
pub async fn last_completed(
    client: Arc<impl Middleware>,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let migrations_address =
        parse_addr_from_deployments_file(deployments_path, MIGRATIONS_CONTRACT_KEY)?;
    let migrations = MigrationsContract::new(migrations_address, client);

    let completed = migrations
        .last_completed_migration()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    info!("last completed migration: {}", completed);

    Ok(())
}

/// Deploy a single step's contract from its embedded artifact,
/// returning the deployed address
async fn deploy_contract(
    step: &DeploymentStep,
    client: Arc<impl Middleware>,
) -> Result<Address, ScriptError> {
    let (abi_str, bytecode_str) = step.contract.artifact();

    let abi: Contract =
        serde_json::from_str(abi_str).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode =
        Bytes::from_hex(bytecode_str).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let factory = ContractFactory::new(abi, bytecode, client);

    let contract = factory
        .deploy_tokens(step.constructor_args.clone())
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    Ok(contract.address())
}

#[cfg(test)]
mod tests {
    use ethers::{abi::Contract, types::Bytes, utils::hex::FromHex};

    use crate::migration::ContractId;

    /// The embedded artifacts must parse, otherwise every deploy fails
    /// at runtime
    #[test]
    fn test_artifacts_parse() {
        for contract in [ContractId::Migrations, ContractId::Zap] {
            let (abi_str, bytecode_str) = contract.artifact();
            let abi: Contract = serde_json::from_str(abi_str).unwrap();
            let bytecode = Bytes::from_hex(bytecode_str).unwrap();

            assert!(abi.constructor.is_some());
            assert!(!bytecode.is_empty());
        }
    }

    /// The Zap ABI's constructor must take the three arguments the
    /// migration declares for it
    #[test]
    fn test_zap_constructor_arity_matches_abi() {
        let (abi_str, _) = ContractId::Zap.artifact();
        let abi: Contract = serde_json::from_str(abi_str).unwrap();

        let constructor = abi.constructor.unwrap();
        assert_eq!(constructor.inputs.len(), 3);
    }
}
