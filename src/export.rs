// 📤 CSV export of fee agreement reports
//
// Any report from `Accountant` (all, paid, unpaid, disputed, invalid bank
// details) can be written out as CSV.

use crate::entities::FeeAgreement;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct AgreementRow<'a> {
    #[serde(rename = "Agreement_ID")]
    agreement_id: &'a str,

    #[serde(rename = "Date_Agreed")]
    date_agreed: String,

    #[serde(rename = "Contributor_ID")]
    contributor_id: &'a str,

    #[serde(rename = "Editor_ID")]
    editor_id: &'a str,

    #[serde(rename = "Issue_ID")]
    issue_id: &'a str,

    #[serde(rename = "Amount")]
    amount: f64,

    #[serde(rename = "Paid")]
    paid: bool,

    #[serde(rename = "Disputed")]
    disputed: bool,
}

impl<'a> From<&'a FeeAgreement> for AgreementRow<'a> {
    fn from(agreement: &'a FeeAgreement) -> Self {
        AgreementRow {
            agreement_id: agreement.id(),
            date_agreed: agreement.date_agreed().format("%Y-%m-%d").to_string(),
            contributor_id: agreement.contributor_id(),
            editor_id: agreement.editor_id(),
            issue_id: agreement.issue_id(),
            amount: agreement.fee_amount(),
            paid: agreement.fee_paid(),
            disputed: agreement.dispute_status(),
        }
    }
}

/// Write agreements as CSV (with header row) to any writer
pub fn write_agreements_csv<W: Write>(writer: W, agreements: &[FeeAgreement]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);

    for agreement in agreements {
        wtr.serialize(AgreementRow::from(agreement))
            .with_context(|| format!("Failed to serialize agreement {}", agreement.id()))?;
    }

    wtr.flush().context("Failed to flush CSV writer")?;
    Ok(agreements.len())
}

pub fn export_agreements_csv(csv_path: &Path, agreements: &[FeeAgreement]) -> Result<usize> {
    let file = std::fs::File::create(csv_path)
        .with_context(|| format!("Failed to create CSV file: {:?}", csv_path))?;
    write_agreements_csv(file, agreements)
}
