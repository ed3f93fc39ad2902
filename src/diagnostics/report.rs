// SPDX-License-Identifier: MPL-2.0
//! Plain-text support report built from buffered log records.

use super::events::LogRecord;
use chrono::{DateTime, Utc};

/// Maximum report size in bytes. Older records are dropped to fit.
pub const MAX_REPORT_BYTES: usize = 64 * 1024;

/// Builds a support report from `records`, oldest first.
///
/// The header names the crate version and generation time. When the
/// records do not fit in [`MAX_REPORT_BYTES`], the oldest are omitted.
/// `evicted` counts records the buffer already dropped; both are reported
/// together in the header.
#[must_use]
pub fn support_report(
    records: &[LogRecord],
    evicted: u64,
    generated_at: DateTime<Utc>,
) -> String {
    let lines: Vec<String> = records.iter().map(ToString::to_string).collect();

    // Keep the newest lines that fit.
    let mut budget = MAX_REPORT_BYTES;
    let mut kept = 0;
    for line in lines.iter().rev() {
        let cost = line.len() + 1;
        if cost > budget {
            break;
        }
        budget -= cost;
        kept += 1;
    }
    let omitted = lines.len() - kept;
    let missing = omitted as u64 + evicted;

    let mut report = format!(
        "Scanora {} support report\nGenerated: {}\nRecords: {}",
        env!("CARGO_PKG_VERSION"),
        generated_at.to_rfc3339(),
        kept
    );
    if missing > 0 {
        report.push_str(&format!(" ({missing} older omitted)"));
    }
    report.push('\n');

    for line in &lines[omitted..] {
        report.push('\n');
        report.push_str(line);
    }
    report
}
