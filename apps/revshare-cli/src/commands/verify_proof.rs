use std::fs::File;
use std::path::PathBuf;

use revshare_merkle::AllocationTree;

use crate::commands::{parse_root, ProofBundle};
use crate::error::{CliError, CliResult};

pub fn execute(proof: PathBuf, root: String) -> CliResult<()> {
    let root = parse_root(&root)?;
    let bundle: ProofBundle = serde_json::from_reader(File::open(&proof)?)?;

    if !AllocationTree::verify(&bundle.account, bundle.allocation, &bundle.proof, &root) {
        return Err(CliError::ProofRejected);
    }

    println!(
        "Proof OK: account {} holds allocation {} under root {}",
        bundle.account,
        bundle.allocation,
        hex::encode(root)
    );
    Ok(())
}
