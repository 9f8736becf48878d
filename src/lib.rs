//! Scripts for deploying and initializing the Zap contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod migration;
mod solidity;
pub mod utils;
