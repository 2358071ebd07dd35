// 🧾 Fee Agreement - join record between contributor, editor and issue
//
// The three references are ids, fixed at construction. Only two fields ever
// change: `fee_paid` (false → true, set by the accountant) and
// `dispute_status` (toggled either way by an editor).

use crate::error::{PublishingError, Result};
use crate::registry::Record;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::issue::MagazineIssue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FeeAgreementData")]
pub struct FeeAgreement {
    /// Stable identity (UUID)
    id: String,
    fee_amount: f64,
    date_agreed: NaiveDate,
    contributor_id: String,
    editor_id: String,
    issue_id: String,
    fee_paid: bool,
    dispute_status: bool,
}

/// Wire shape of a `FeeAgreement`, validated on the way in
#[derive(Deserialize)]
struct FeeAgreementData {
    id: String,
    fee_amount: f64,
    date_agreed: NaiveDate,
    contributor_id: String,
    editor_id: String,
    issue_id: String,
    fee_paid: bool,
    dispute_status: bool,
}

impl TryFrom<FeeAgreementData> for FeeAgreement {
    type Error = PublishingError;

    fn try_from(data: FeeAgreementData) -> Result<Self> {
        Ok(FeeAgreement {
            id: data.id,
            fee_amount: validate_fee_amount(data.fee_amount)?,
            date_agreed: data.date_agreed,
            contributor_id: data.contributor_id,
            editor_id: data.editor_id,
            issue_id: data.issue_id,
            fee_paid: data.fee_paid,
            dispute_status: data.dispute_status,
        })
    }
}

fn validate_fee_amount(fee_amount: f64) -> Result<f64> {
    if !fee_amount.is_finite() || fee_amount < 0.0 {
        return Err(PublishingError::InvalidFeeAmount(fee_amount));
    }
    Ok(fee_amount)
}

impl FeeAgreement {
    /// Create an unpaid, undisputed agreement
    ///
    /// Fails on a negative or non-finite amount.
    pub fn new(
        fee_amount: f64,
        date_agreed: NaiveDate,
        contributor_id: &str,
        editor_id: &str,
        issue: &MagazineIssue,
    ) -> Result<Self> {
        Ok(FeeAgreement {
            id: uuid::Uuid::new_v4().to_string(),
            fee_amount: validate_fee_amount(fee_amount)?,
            date_agreed,
            contributor_id: contributor_id.to_string(),
            editor_id: editor_id.to_string(),
            issue_id: issue.id().to_string(),
            fee_paid: false,
            dispute_status: false,
        })
    }

    /// Same as [`FeeAgreement::new`], agreed today (local date)
    pub fn agreed_today(
        fee_amount: f64,
        contributor_id: &str,
        editor_id: &str,
        issue: &MagazineIssue,
    ) -> Result<Self> {
        Self::new(
            fee_amount,
            Local::now().date_naive(),
            contributor_id,
            editor_id,
            issue,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fee_amount(&self) -> f64 {
        self.fee_amount
    }

    pub fn date_agreed(&self) -> NaiveDate {
        self.date_agreed
    }

    pub fn contributor_id(&self) -> &str {
        &self.contributor_id
    }

    pub fn editor_id(&self) -> &str {
        &self.editor_id
    }

    pub fn issue_id(&self) -> &str {
        &self.issue_id
    }

    pub fn fee_paid(&self) -> bool {
        self.fee_paid
    }

    pub fn dispute_status(&self) -> bool {
        self.dispute_status
    }

    pub fn is_for_issue(&self, issue: &MagazineIssue) -> bool {
        self.issue_id == issue.id()
    }

    /// Agreement-side half of the payment rule (bank details are checked on
    /// the contributor)
    pub fn is_payable_for(&self, issue: &MagazineIssue) -> bool {
        self.is_for_issue(issue) && !self.fee_paid && !self.dispute_status
    }

    /// One-way: there is no way back to unpaid
    pub(crate) fn mark_paid(&mut self) {
        self.fee_paid = true;
    }

    pub(crate) fn set_dispute_status(&mut self, dispute_status: bool) {
        self.dispute_status = dispute_status;
    }
}

impl Record for FeeAgreement {
    const KIND: &'static str = "Fee agreement";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for FeeAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FeeAgreement(Amount: {}, Paid: {}, Disputed: {})",
            self.fee_amount, self.fee_paid, self.dispute_status
        )
    }
}
