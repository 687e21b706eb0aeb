use std::fs::File;
use std::path::PathBuf;

use crate::commands::{parse_account, tree_from_csv, ProofBundle};
use crate::error::{CliError, CliResult};

pub fn execute(allocations: PathBuf, account: String, output: Option<PathBuf>) -> CliResult<()> {
    let account = parse_account(&account)?;
    let tree = tree_from_csv(&allocations)?;

    // the CSV validator guarantees each account appears at most once
    let leaf = tree
        .leaves()
        .iter()
        .find(|leaf| leaf.account == account)
        .copied()
        .ok_or_else(|| CliError::AccountNotFound(account.to_string()))?;

    let proof = tree.proof(&leaf.account, leaf.allocation)?;
    let bundle = ProofBundle {
        account: leaf.account,
        allocation: leaf.allocation,
        root: hex::encode(tree.root()),
        proof,
    };

    match output {
        Some(path) => {
            serde_json::to_writer_pretty(File::create(&path)?, &bundle)?;
            println!("Proof bundle written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&bundle)?),
    }
    Ok(())
}
