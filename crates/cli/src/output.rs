use engine::summary::RunSummary;

/// Terminal report for one run. "No new rows" and "processed N rows" are
/// distinct observable outcomes.
pub fn print_summary(summary: &RunSummary) {
    if summary.is_empty() {
        println!("No new rows to process.");
    } else {
        println!(
            "Processed {} rows in {} batches.",
            summary.rows_processed, summary.batches
        );
    }
}
