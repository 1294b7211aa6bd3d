//! Console rendering of the assembled Safe report

use crate::analysis::SummaryStats;
use crate::types::SafeReport;

const RULE: &str = "=======================================================";

fn format_pct(pct: Option<f64>) -> String {
    match pct {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => "n/a".to_string(),
    }
}

fn print_latency_block(label: &str, stats: &SummaryStats, indent: &str) {
    println!("{}Min {} ........ {:.0} mins.", indent, label, stats.min);
    println!("{}Max {} ........ {:.0} mins.", indent, label, stats.max);
    println!("{}Mean {} ....... {:.0} mins.", indent, label, stats.mean);
    println!("{}Median {} ..... {:.0} mins.", indent, label, stats.median);
    println!("{}Stdev {} ...... {:.0} mins.", indent, label, stats.stdev);
}

/// Print the full report to stdout
pub fn print_report(report: &SafeReport) {
    println!("{}", RULE);
    println!("Gnosis Safe: {}", report.info.address);
    println!("{}", RULE);

    if report.from_block > 0 {
        println!("\n*NOTE*: Only transactions from block {}\n", report.from_block);
    }

    println!("\n** OVERVIEW **\n");
    println!("Contract Version .............. {}", report.info.version);
    println!("Threshold ..................... {}", report.info.threshold);
    println!("Signers ....................... {}", report.info.owners.len());
    for owner in &report.info.owners {
        println!("\t{}", owner);
    }

    println!("\n** TRANSACTION INFO **\n");
    println!("Num Executed Txs .............. {}", report.executed_tx_count);
    println!("Non-Signer Executions ......... {}", report.non_owner_executions);
    println!("Overall Tx Execution Statistics");
    print_latency_block("Time to Execution", &report.execution_latency, "\t");
    println!("Overall Signing Statistics");
    print_latency_block("Time to Sign", &report.signing_latency, "\t");

    println!("\n** SIGNER INFO **\n");
    for signer in &report.signers {
        println!("\tSigner: {}", signer.address);
        println!(
            "\t\tNum Txs Created ............ {} ({})",
            signer.created,
            format_pct(signer.created_pct)
        );
        println!(
            "\t\tNum Txs Signed ............. {} ({})",
            signer.signed,
            format_pct(signer.signed_pct)
        );
        println!(
            "\t\tNum Txs Executed ........... {} ({})",
            signer.executed,
            format_pct(signer.executed_pct)
        );
        println!(
            "\t\tGas Spent .................. {:.2} ETH",
            signer.gas_spent_eth
        );
        if signer.latency_samples > 0 {
            print_latency_block("Time to Sign", &signer.signing_latency, "\t\t");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(Some(0.5)), "50.0%");
        assert_eq!(format_pct(Some(1.0)), "100.0%");
        assert_eq!(format_pct(None), "n/a");
    }
}
