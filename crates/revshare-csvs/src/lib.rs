/*!
# Revshare CSV Schema Definitions

This crate provides the **authoritative CSV schema** for the allocation lists
delivered to the distribution ledger.

## Purpose

An allocation list is finalized off-band (who gets which share of the next
window) and travels as a CSV file between:

- whatever process computes the shares (producer)
- the `revshare` CLI (`compile-root`, `generate-proof`) (consumer)
- audit tooling re-deriving a window's root from the same file (consumer)

## Schema File

### Allocations CSV (`allocations.csv`)
One row per beneficiary:
- `account`: beneficiary id, 32 bytes hex
- `allocation`: fixed-point scaled percentage (100% == 100 × 1_000_000)

## Versioning

The schema carries a version constant (`1.0`) so consumers can reject files
written against a future revision.
*/

pub mod errors;
pub mod schemas;
pub mod validation;

pub use errors::{CsvError, CsvResult};
pub use schemas::{AllocationRow, ALLOCATIONS_CSV_HEADERS, CURRENT_SCHEMA_VERSION};
pub use validation::{read_allocations_csv, validate_allocations, write_allocations_csv};
