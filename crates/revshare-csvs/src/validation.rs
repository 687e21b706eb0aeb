/*!
# CSV Validation & I/O

Reading, writing, and validating allocation-list CSV files. Validation
enforces the properties the ledger depends on: a non-empty list, one row per
beneficiary, and a total share that cannot overdraw a window.
*/

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use csv::{Reader, Writer};
use revshare_ledger::PERCENTAGE_SCALE;

use crate::errors::{CsvError, CsvResult};
use crate::schemas::{AllocationRow, ALLOCATIONS_CSV_HEADERS};

/// Read and validate an allocations CSV file. Row order is preserved; it is
/// part of the commitment.
pub fn read_allocations_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<AllocationRow>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let headers = rdr.headers()?;
    validate_headers(headers.iter(), ALLOCATIONS_CSV_HEADERS)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: AllocationRow = result?;
        rows.push(row);
    }

    validate_allocations(&rows)?;
    Ok(rows)
}

/// Write an allocations CSV (headers come from the row serialization).
pub fn write_allocations_csv<P: AsRef<Path>>(path: P, rows: &[AllocationRow]) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Validate a finalized allocation list:
/// - non-empty (an empty list cannot form a commitment tree)
/// - one row per account (a duplicated account makes proofs ambiguous)
/// - total allocation at most 100% (an over-committed window would pay out
///   more than its funds snapshot)
pub fn validate_allocations(rows: &[AllocationRow]) -> CsvResult<()> {
    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(
            "Allocations CSV file is empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.account) {
            return Err(CsvError::DataInconsistency(format!(
                "Account '{}' appears more than once",
                row.account
            )));
        }
    }

    let mut total: u128 = 0;
    for row in rows {
        total = total.checked_add(row.allocation).ok_or_else(|| {
            CsvError::DataInconsistency("Total allocation overflows".to_string())
        })?;
    }
    if total > 100 * PERCENTAGE_SCALE {
        return Err(CsvError::DataInconsistency(format!(
            "Total allocation {} exceeds 100% ({})",
            total,
            100 * PERCENTAGE_SCALE
        )));
    }

    Ok(())
}

fn validate_headers<'a, I>(actual: I, expected: &[&str]) -> CsvResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    if actual_headers.len() != expected.len() {
        return Err(CsvError::SchemaValidation(format!(
            "allocations.csv: expected {} headers, found {}",
            expected.len(),
            actual_headers.len()
        )));
    }

    for (i, (actual, expected)) in actual_headers.iter().zip(expected.iter()).enumerate() {
        if actual != expected {
            return Err(CsvError::SchemaValidation(format!(
                "allocations.csv: header {} should be '{}', found '{}'",
                i + 1,
                expected,
                actual
            )));
        }
    }

    Ok(())
}
