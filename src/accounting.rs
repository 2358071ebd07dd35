// 💰 Accounting - payment rule and fee agreement reports
//
// An agreement is paid by `process_payments` only when ALL hold:
//   1. it belongs to the given issue (UUID identity, not issue number)
//   2. it is not paid yet
//   3. it is not disputed
//   4. its contributor has non-empty bank details
//
// Payment is one-way and re-running is a no-op for already paid agreements.
// Reports walk contributors in input order, then each contributor's linked
// agreements in link order.

use crate::entities::{Contributor, FeeAgreement, MagazineIssue, Role, User};
use crate::error::Result;
use crate::policy::PaymentPolicy;
use crate::registry::AgreementRegistry;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ============================================================================
// PAYMENT RUN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub agreement_id: String,
    pub contributor_id: String,
    pub contributor_name: String,
    pub amount: f64,
}

/// What a single `process_payments` call paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRun {
    pub issue_id: String,
    pub issue_number: u32,
    pub payments: Vec<Payment>,
}

impl PaymentRun {
    fn for_issue(issue: &MagazineIssue) -> Self {
        PaymentRun {
            issue_id: issue.id().to_string(),
            issue_number: issue.issue_number(),
            payments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn paid_agreement_ids(&self) -> Vec<&str> {
        self.payments.iter().map(|p| p.agreement_id.as_str()).collect()
    }

    pub fn total_paid(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }

    pub fn summary(&self, policy: &PaymentPolicy) -> String {
        format!(
            "Issue {}: paid {} agreement(s), total {}",
            self.issue_number,
            self.payments.len(),
            policy.format_amount(self.total_paid())
        )
    }
}

// ============================================================================
// ACCOUNTANT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accountant {
    pub user: User,
    #[serde(default)]
    policy: PaymentPolicy,
}

impl Accountant {
    pub fn new(user_id: &str, name: &str, password: &str, email: &str) -> Self {
        Accountant {
            user: User::new(user_id, name, password, Role::Accountant, email),
            policy: PaymentPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PaymentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &PaymentPolicy {
        &self.policy
    }

    /// Mark every eligible agreement of `contributors` for `issue` as paid
    ///
    /// All linked agreement ids are resolved before anything is paid, so a
    /// dangling id fails the whole call without side effects.
    pub fn process_payments(
        &self,
        contributors: &[Contributor],
        issue: &MagazineIssue,
        agreements: &AgreementRegistry,
    ) -> Result<PaymentRun> {
        let mut run = PaymentRun::for_issue(issue);

        for contributor in contributors {
            agreements.select(contributor.fee_agreement_ids())?;
        }

        if self.policy.require_published_issue && !issue.is_published() {
            warn!(
                issue = issue.issue_number(),
                "Issue {} is not published, skipping payments", issue.issue_number()
            );
            return Ok(run);
        }

        info!(issue = issue.issue_number(), "Processing payments for contributors...");

        for contributor in contributors {
            if !contributor.has_bank_details() {
                continue;
            }

            for agreement_id in contributor.fee_agreement_ids() {
                let paid = agreements.update(agreement_id, |agreement| {
                    if agreement.is_payable_for(issue) {
                        agreement.mark_paid();
                        Some(agreement.fee_amount())
                    } else {
                        None
                    }
                })?;

                if let Some(amount) = paid {
                    info!(
                        contributor = %contributor.user.user_id(),
                        agreement = %agreement_id,
                        "Paid {} ({})",
                        contributor.user.name,
                        self.policy.format_amount(amount)
                    );
                    run.payments.push(Payment {
                        agreement_id: agreement_id.clone(),
                        contributor_id: contributor.user.user_id().to_string(),
                        contributor_name: contributor.user.name.clone(),
                        amount,
                    });
                }
            }
        }

        info!("{}", run.summary(&self.policy));
        Ok(run)
    }

    fn collect_where<F>(
        &self,
        contributors: &[Contributor],
        agreements: &AgreementRegistry,
        predicate: F,
    ) -> Result<Vec<FeeAgreement>>
    where
        F: Fn(&Contributor, &FeeAgreement) -> bool,
    {
        let mut matching = Vec::new();
        for contributor in contributors {
            for agreement in contributor.retrieve_fee_agreements(agreements)? {
                if predicate(contributor, &agreement) {
                    matching.push(agreement);
                }
            }
        }
        Ok(matching)
    }

    pub fn retrieve_all_fee_agreements(
        &self,
        contributors: &[Contributor],
        agreements: &AgreementRegistry,
    ) -> Result<Vec<FeeAgreement>> {
        self.collect_where(contributors, agreements, |_, _| true)
    }

    pub fn retrieve_unpaid_fee_agreements(
        &self,
        contributors: &[Contributor],
        agreements: &AgreementRegistry,
    ) -> Result<Vec<FeeAgreement>> {
        self.collect_where(contributors, agreements, |_, a| !a.fee_paid())
    }

    pub fn retrieve_paid_fee_agreements(
        &self,
        contributors: &[Contributor],
        agreements: &AgreementRegistry,
    ) -> Result<Vec<FeeAgreement>> {
        self.collect_where(contributors, agreements, |_, a| a.fee_paid())
    }

    pub fn retrieve_disputed_fee_agreements(
        &self,
        contributors: &[Contributor],
        agreements: &AgreementRegistry,
    ) -> Result<Vec<FeeAgreement>> {
        self.collect_where(contributors, agreements, |_, a| a.dispute_status())
    }

    /// Agreements that cannot be paid because their contributor has no bank details
    pub fn retrieve_invalid_bank_details(
        &self,
        contributors: &[Contributor],
        agreements: &AgreementRegistry,
    ) -> Result<Vec<FeeAgreement>> {
        self.collect_where(contributors, agreements, |c, _| !c.has_bank_details())
    }
}

// ============================================================================
// TESTS
// ============================================================================
