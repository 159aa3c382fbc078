//! CSV export of exit feedback.
//!
//! Every field is double-quote wrapped (embedded quotes doubled per RFC 4180)
//! and rows end in CRLF, matching what downstream spreadsheet imports expect.
//! Records are written in the order given, which for the export endpoint is
//! the display order: newest submission first.

use crate::errors::AppError;
use crate::models::feedback::FeedbackRecord;

pub const EXPORT_HEADERS: [&str; 11] = [
    "Employee Name",
    "Position",
    "Department",
    "Employment Length",
    "Exit Date",
    "Reason for Leaving",
    "Other Reason",
    "Sentiment",
    "Feedback",
    "Contact for Details",
    "Submission Date",
];

pub fn to_csv(records: &[FeedbackRecord]) -> Result<String, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADERS)?;

    for record in records {
        let exit_date = record.exit_date.to_string();
        let sentiment = record.sentiment.to_string();
        let submitted_at = record.submitted_at.to_rfc3339();

        writer.write_record([
            record.employee_name.as_str(),
            record.position.as_str(),
            record.department.as_str(),
            record.employment_length.as_str(),
            exit_date.as_str(),
            record.reason.as_str(),
            record.other_reason.as_deref().unwrap_or(""),
            sentiment.as_str(),
            record.feedback.as_str(),
            if record.contact_for_details { "Yes" } else { "No" },
            submitted_at.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV buffer flush failed: {}", e.error())))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(e.into()))
}
