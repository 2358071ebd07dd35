// 📋 Commands - deferred accountant operations
//
// A command binds everything it needs when it is built and takes no arguments
// when run. Contributors and issues are bound by id and resolved through their
// registries at execution time, so a command always sees current data.
//
// The invoker runs its queue in insertion order. It stops at the first failing
// command; earlier commands are not rolled back.

use crate::accounting::{Accountant, PaymentRun};
use crate::entities::FeeAgreement;
use crate::error::{PublishingError, Result};
use crate::registry::{AgreementRegistry, ContributorRegistry, IssueRegistry};
use tracing::{debug, info};

pub trait Command {
    fn execute(&mut self) -> Result<()>;

    /// Short label for logs
    fn name(&self) -> &'static str;
}

// ============================================================================
// PROCESS PAYMENTS
// ============================================================================

pub struct ProcessPaymentsCommand {
    accountant: Accountant,
    contributors: ContributorRegistry,
    contributor_ids: Vec<String>,
    issues: IssueRegistry,
    issue_id: String,
    agreements: AgreementRegistry,
    last_run: Option<PaymentRun>,
}

impl ProcessPaymentsCommand {
    pub fn new(
        accountant: Accountant,
        contributors: &ContributorRegistry,
        contributor_ids: Vec<String>,
        issues: &IssueRegistry,
        issue_id: &str,
        agreements: &AgreementRegistry,
    ) -> Self {
        ProcessPaymentsCommand {
            accountant,
            contributors: contributors.clone(),
            contributor_ids,
            issues: issues.clone(),
            issue_id: issue_id.to_string(),
            agreements: agreements.clone(),
            last_run: None,
        }
    }

    /// Result of the most recent execution
    pub fn last_run(&self) -> Option<&PaymentRun> {
        self.last_run.as_ref()
    }
}

impl Command for ProcessPaymentsCommand {
    fn execute(&mut self) -> Result<()> {
        let contributors = self.contributors.select(&self.contributor_ids)?;
        let issue = self.issues.require(&self.issue_id)?;

        let run = self
            .accountant
            .process_payments(&contributors, &issue, &self.agreements)?;
        self.last_run = Some(run);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "process_payments"
    }
}

// ============================================================================
// RETRIEVE FEE AGREEMENTS
// ============================================================================

pub struct RetrieveFeeAgreementsCommand {
    accountant: Accountant,
    contributors: ContributorRegistry,
    contributor_ids: Vec<String>,
    agreements: AgreementRegistry,
    last_report: Option<Vec<FeeAgreement>>,
}

impl RetrieveFeeAgreementsCommand {
    pub fn new(
        accountant: Accountant,
        contributors: &ContributorRegistry,
        contributor_ids: Vec<String>,
        agreements: &AgreementRegistry,
    ) -> Self {
        RetrieveFeeAgreementsCommand {
            accountant,
            contributors: contributors.clone(),
            contributor_ids,
            agreements: agreements.clone(),
            last_report: None,
        }
    }

    pub fn last_report(&self) -> Option<&[FeeAgreement]> {
        self.last_report.as_deref()
    }
}

impl Command for RetrieveFeeAgreementsCommand {
    fn execute(&mut self) -> Result<()> {
        let contributors = self.contributors.select(&self.contributor_ids)?;
        let report = self
            .accountant
            .retrieve_all_fee_agreements(&contributors, &self.agreements)?;

        for agreement in &report {
            info!(agreement = %agreement.id(), "{}", agreement);
        }
        self.last_report = Some(report);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "retrieve_fee_agreements"
    }
}

// ============================================================================
// INVOKER
// ============================================================================

#[derive(Default)]
pub struct CommandInvoker {
    commands: Vec<Box<dyn Command>>,
}

impl CommandInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Run every queued command in order. The queue is kept.
    pub fn execute_commands(&mut self) -> Result<()> {
        for (index, command) in self.commands.iter_mut().enumerate() {
            debug!(index, command = command.name(), "Executing command");
            command
                .execute()
                .map_err(|source| PublishingError::CommandFailed {
                    index,
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
