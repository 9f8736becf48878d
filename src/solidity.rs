//! Definitions of Solidity functions called after deployment

use ethers::contract::abigen;

abigen!(
    MigrationsContract,
    r#"[
        function owner() external view returns (address)
        function last_completed_migration() external view returns (uint256)
        function setCompleted(uint256 completed) external
    ]"#,
);
