/*!
# CSV Schema Definitions

This module defines the authoritative allocation-list schema. It is the data
contract between whatever finalizes a window's shares and every tool that
re-derives the window's commitment root from the same file.
*/

use revshare_merkle::AccountId;
use serde::{Deserialize, Serialize};

/// Current schema version for the allocations CSV format
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// Expected headers for allocations.csv in exact order
pub const ALLOCATIONS_CSV_HEADERS: &[&str] = &["account", "allocation"];

/// Row structure for allocations.csv
///
/// **File**: `allocations.csv`
/// **Purpose**: One finalized (beneficiary, share) pair per row, in the order
/// the commitment tree is built. Row order is significant: permuting rows
/// produces a different (equally valid) root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationRow {
    /// Beneficiary id, 32 bytes lowercase hex
    pub account: AccountId,

    /// Fixed-point scaled percentage of the window's funds
    /// (100% == 100 × 1_000_000)
    pub allocation: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_allocation_row_csv_round_trip() {
        let row = AllocationRow {
            account: AccountId::from_str(&"ab".repeat(32)).unwrap(),
            allocation: 20_000_000,
        };

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&row).unwrap();
        let csv_data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        let mut rdr = csv::Reader::from_reader(csv_data.as_bytes());
        let deserialized: AllocationRow = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(row, deserialized);
    }

    #[test]
    fn test_allocation_row_headers_match_schema() {
        let row = AllocationRow {
            account: AccountId::new([1u8; 32]),
            allocation: 1,
        };

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&row).unwrap();
        let csv_data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let header_line = csv_data.lines().next().unwrap();

        assert_eq!(header_line, ALLOCATIONS_CSV_HEADERS.join(","));
    }

    #[test]
    fn test_malformed_account_rejected() {
        let csv_data = "account,allocation\nnot-hex,100\n";
        let mut rdr = csv::Reader::from_reader(csv_data.as_bytes());
        let result: Result<AllocationRow, _> = rdr.deserialize().next().unwrap();
        assert!(result.is_err());
    }
}
