// ✍️ Contributor - writer who is paid per fee agreement
//
// Holds agreement ids only. The agreements themselves live in an
// `AgreementRegistry`.

use crate::error::Result;
use crate::registry::{AgreementRegistry, Record};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::agreement::FeeAgreement;
use super::user::{Role, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub user: User,

    /// Phone or postal contact, free form
    pub contact_details: String,

    /// Payment destination, free form. Empty means "cannot be paid".
    pub bank_details: String,

    /// Linked agreement ids, in link order
    fee_agreements: Vec<String>,
}

impl Contributor {
    pub fn new(
        user_id: &str,
        name: &str,
        password: &str,
        email: &str,
        contact_details: &str,
        bank_details: &str,
    ) -> Self {
        Contributor {
            user: User::new(user_id, name, password, Role::Contributor, email),
            contact_details: contact_details.to_string(),
            bank_details: bank_details.to_string(),
            fee_agreements: Vec::new(),
        }
    }

    /// Replace whichever fields are given and non-empty
    pub fn update_details(&mut self, contact_details: Option<&str>, bank_details: Option<&str>) {
        if let Some(contact) = contact_details.filter(|c| !c.is_empty()) {
            self.contact_details = contact.to_string();
        }
        if let Some(bank) = bank_details.filter(|b| !b.is_empty()) {
            self.bank_details = bank.to_string();
        }
        info!(user = %self.user.user_id(), "Details updated for {}", self.user.name);
    }

    pub fn has_bank_details(&self) -> bool {
        !self.bank_details.is_empty()
    }

    pub fn view_details(&self) -> String {
        format!(
            "{}\nContact Details: {}, Bank Details: {}",
            self.user.view_details(),
            self.contact_details,
            self.bank_details
        )
    }

    /// Link an agreement created elsewhere (append-only)
    pub fn link_agreement(&mut self, agreement: &FeeAgreement) {
        self.fee_agreements.push(agreement.id().to_string());
    }

    pub fn fee_agreement_ids(&self) -> &[String] {
        &self.fee_agreements
    }

    /// Snapshots of the linked agreements, in link order
    pub fn retrieve_fee_agreements(&self, agreements: &AgreementRegistry) -> Result<Vec<FeeAgreement>> {
        agreements.select(&self.fee_agreements)
    }
}

impl Record for Contributor {
    const KIND: &'static str = "Contributor";

    fn record_id(&self) -> &str {
        self.user.user_id()
    }
}
