use std::path::PathBuf;

use revshare_ledger::PERCENTAGE_SCALE;

use crate::commands::tree_from_csv;
use crate::error::CliResult;

pub fn execute(allocations: PathBuf) -> CliResult<()> {
    println!("Compiling allocations: {}", allocations.display());

    let tree = tree_from_csv(&allocations)?;
    let total: u128 = tree.leaves().iter().map(|leaf| leaf.allocation).sum();

    println!("Beneficiaries: {}", tree.leaves().len());
    println!(
        "Committed allocation: {}.{:06}%",
        total / PERCENTAGE_SCALE,
        total % PERCENTAGE_SCALE
    );
    println!("Root: {}", hex::encode(tree.root()));
    Ok(())
}
