//! CSV export of normalised transaction rows

use crate::errors::AppResult;
use crate::types::NormalizedRow;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Serialise rows to any writer, one CSV record per row
///
/// Column order follows the `NormalizedRow` field order; optional fields
/// (block, timestamps, enrichment) render as empty cells when absent.
pub fn write_rows<W: Write>(writer: W, rows: &[NormalizedRow]) -> AppResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write rows to a CSV file at `path`
pub fn write_rows_to_path<P: AsRef<Path>>(path: P, rows: &[NormalizedRow]) -> AppResult<()> {
    let file = std::fs::File::create(&path)?;
    write_rows(file, rows)?;
    info!("Wrote {} rows to {}", rows.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filter::normalize;
    use crate::types::{RawTransaction, TxEnrichment};
    use serde_json::json;

    fn sample_row() -> NormalizedRow {
        let tx: RawTransaction = serde_json::from_value(json!({
            "safe": "0xSafe",
            "to": "0xDead",
            "value": "1000000000000000000",
            "nonce": 7,
            "blockNumber": 1500,
            "submissionDate": "2023-01-01T10:00:00Z",
            "executionDate": "2023-01-01T12:30:00Z",
            "executor": "0xAaa",
            "operation": 0,
            "safeTxGas": 0,
            "data": null,
            "dataDecoded": {"method": "transfer"},
            "transactionHash": "0xchainhash",
            "safeTxHash": "0xsafehash",
            "isExecuted": true,
            "isSuccessful": true,
            "fee": "21000000000000",
            "confirmations": []
        }))
        .unwrap();
        normalize(&tx).unwrap()
    }

    #[test]
    fn test_write_rows_includes_header_and_values() {
        let mut buffer = Vec::new();
        write_rows(&mut buffer, &[sample_row()]).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("block,nonce,submission,execution,executor,to,value_eth"));

        let record = lines.next().unwrap();
        assert!(record.contains("1500"));
        assert!(record.contains("0xAaa"));
        assert!(record.contains("1.000000000000000000"));
        assert!(record.contains("0xchainhash"));
        assert!(record.contains("transfer"));
    }

    #[test]
    fn test_enriched_row_round_trips_extra_columns() {
        let mut row = sample_row();
        row.apply_enrichment(&TxEnrichment {
            tx_hash: row.tx_hash.clone(),
            gas_price: 1_000_000_000,
            gas_used: 21_000,
            input_data: "0xdeadbeef".to_string(),
        });

        let mut buffer = Vec::new();
        write_rows(&mut buffer, &[row]).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("21000"));
        assert!(output.contains("0xdeadbeef"));
        assert!(output.contains("0.000021000000000000"));
    }

    #[test]
    fn test_write_rows_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        write_rows_to_path(&path, &[sample_row(), sample_row()]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        // Header plus two records
        assert_eq!(contents.lines().count(), 3);
    }
}
