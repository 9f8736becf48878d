//! Constants used in the deploy scripts

/// The ABI of the Migrations bookkeeping contract
pub const MIGRATIONS_ABI: &str = include_str!("../artifacts/Migrations.abi");

/// The bytecode of the Migrations bookkeeping contract
pub const MIGRATIONS_BYTECODE: &str = include_str!("../artifacts/Migrations.bin");

/// The ABI of the Zap contract
pub const ZAP_ABI: &str = include_str!("../artifacts/Zap.abi");

/// The bytecode of the Zap contract
pub const ZAP_BYTECODE: &str = include_str!("../artifacts/Zap.bin");

/// The number of confirmations to wait for a contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 0;

/// The number of the migration declared by this crate, recorded in the
/// Migrations contract once the migration has run
pub const MIGRATION_NUMBER: u64 = 1;

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The Migrations contract key in the `deployments.json` file
pub const MIGRATIONS_CONTRACT_KEY: &str = "migrations_contract";

/// The Zap contract key in the `deployments.json` file
pub const ZAP_CONTRACT_KEY: &str = "zap_contract";
