pub mod compile_root;
pub mod generate_proof;
pub mod verify_proof;

use std::str::FromStr;

use revshare_merkle::{AccountId, AllocationTree};

use crate::error::{CliError, CliResult};

/// Shared proof bundle format between generate-proof and verify-proof.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ProofBundle {
    pub account: AccountId,
    pub allocation: u128,
    pub root: String,
    pub proof: revshare_merkle::Proof,
}

pub(crate) fn parse_account(s: &str) -> CliResult<AccountId> {
    AccountId::from_str(s).map_err(|e| CliError::InvalidHex(e.to_string()))
}

pub(crate) fn parse_root(s: &str) -> CliResult<[u8; 32]> {
    let bytes = hex::decode(s).map_err(|e| CliError::InvalidHex(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| CliError::InvalidHex(format!("expected 32 bytes, got {}", b.len())))
}

/// Read, validate, and commit an allocations CSV.
pub(crate) fn tree_from_csv(path: &std::path::Path) -> CliResult<AllocationTree> {
    let rows = revshare_csvs::read_allocations_csv(path)?;
    let allocations = rows
        .into_iter()
        .map(|row| (row.account, row.allocation))
        .collect();
    Ok(AllocationTree::new(allocations)?)
}
