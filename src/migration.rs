//! The ordered deployment steps that make up the Zap migration

use std::fmt::{self, Display};

use ethers::abi::Token;

use crate::{
    config::DeploymentConfig,
    constants::{
        MIGRATIONS_ABI, MIGRATIONS_BYTECODE, MIGRATIONS_CONTRACT_KEY, ZAP_ABI, ZAP_BYTECODE,
        ZAP_CONTRACT_KEY,
    },
};

/// The contracts this crate knows how to deploy
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContractId {
    /// The bookkeeping contract recording which migrations have run
    Migrations,
    /// The Zap application contract
    Zap,
}

impl ContractId {
    /// The key under which this contract's deployed address is recorded
    /// in the deployments file
    pub fn deployments_key(self) -> &'static str {
        match self {
            ContractId::Migrations => MIGRATIONS_CONTRACT_KEY,
            ContractId::Zap => ZAP_CONTRACT_KEY,
        }
    }

    /// The embedded compilation artifact for this contract,
    /// as an (ABI, bytecode) pair
    pub fn artifact(self) -> (&'static str, &'static str) {
        match self {
            ContractId::Migrations => (MIGRATIONS_ABI, MIGRATIONS_BYTECODE),
            ContractId::Zap => (ZAP_ABI, ZAP_BYTECODE),
        }
    }
}

impl Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractId::Migrations => write!(f, "migrations"),
            ContractId::Zap => write!(f, "zap"),
        }
    }
}

/// A single named deployment scheduled against the runner:
/// a contract identifier plus its constructor arguments
#[derive(Clone, Debug, PartialEq)]
pub struct DeploymentStep {
    /// The contract to deploy
    pub contract: ContractId,
    /// The constructor arguments, in positional order
    pub constructor_args: Vec<Token>,
}

/// Build the ordered list of deployment steps for the given config.
///
/// The `Migrations` bookkeeping contract is always scheduled before the
/// `Zap` contract. The output is a pure function of the config, so
/// re-declaring the same migration yields an identical list of steps.
pub fn migration_steps(config: &DeploymentConfig) -> Vec<DeploymentStep> {
    let token_addresses = Token::Array(
        config
            .token_addresses
            .iter()
            .copied()
            .map(Token::Address)
            .collect(),
    );

    vec![
        DeploymentStep {
            contract: ContractId::Migrations,
            constructor_args: vec![],
        },
        DeploymentStep {
            contract: ContractId::Zap,
            constructor_args: vec![
                token_addresses,
                Token::Address(config.swap_address),
                Token::Address(config.lp_address),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use ethers::abi::{Address, Token};

    use crate::config::DeploymentConfig;

    use super::{migration_steps, ContractId};

    /// Build a config with distinguishable addresses
    fn test_config() -> DeploymentConfig {
        DeploymentConfig {
            token_addresses: [
                Address::from_low_u64_be(1),
                Address::from_low_u64_be(2),
                Address::from_low_u64_be(3),
                Address::from_low_u64_be(4),
            ],
            swap_address: Address::from_low_u64_be(5),
            lp_address: Address::from_low_u64_be(6),
        }
    }

    #[test]
    fn test_migrations_scheduled_before_zap() {
        let steps = migration_steps(&test_config());
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].contract, ContractId::Migrations);
        assert_eq!(steps[1].contract, ContractId::Zap);
    }

    #[test]
    fn test_migrations_takes_no_args() {
        let steps = migration_steps(&test_config());
        assert!(steps[0].constructor_args.is_empty());
    }

    #[test]
    fn test_zap_constructor_args() {
        let config = test_config();
        let steps = migration_steps(&config);

        // Exactly 3 arguments: the token list, then the two scalar addresses
        let expected = vec![
            Token::Array(
                config
                    .token_addresses
                    .iter()
                    .copied()
                    .map(Token::Address)
                    .collect(),
            ),
            Token::Address(config.swap_address),
            Token::Address(config.lp_address),
        ];
        assert_eq!(steps[1].constructor_args, expected);
    }

    #[test]
    fn test_token_order_flows_through() {
        let config = test_config();
        let steps = migration_steps(&config);

        let Token::Array(tokens) = &steps[1].constructor_args[0] else {
            panic!("first Zap constructor argument should be the token list");
        };

        let addresses: Vec<Address> = tokens
            .iter()
            .map(|t| t.clone().into_address().unwrap())
            .collect();
        assert_eq!(addresses, config.token_addresses);
    }

    #[test]
    fn test_steps_deterministic() {
        let config = test_config();
        assert_eq!(migration_steps(&config), migration_steps(&config));
    }
}
