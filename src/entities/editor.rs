// 🖊️ Editor - creates issues and arbitrates fee disputes

use crate::error::Result;
use crate::registry::AgreementRegistry;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::agreement::FeeAgreement;
use super::issue::MagazineIssue;
use super::user::{Role, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Editor {
    pub user: User,

    /// Ids of agreements this editor authored, in link order
    fee_agreements: Vec<String>,
}

impl Editor {
    pub fn new(user_id: &str, name: &str, password: &str, email: &str) -> Self {
        Editor {
            user: User::new(user_id, name, password, Role::Editor, email),
            fee_agreements: Vec::new(),
        }
    }

    /// New unpublished issue owned by this editor. The caller keeps track of it.
    pub fn create_issue(&self, issue_number: u32) -> MagazineIssue {
        let issue = MagazineIssue::new(issue_number, self.user.user_id());
        info!(
            editor = %self.user.user_id(),
            "Issue {} created by {}", issue_number, self.user.name
        );
        issue
    }

    /// Sets the flag unconditionally. Authorship is not checked.
    pub fn change_dispute_status(&self, agreement: &mut FeeAgreement, dispute_status: bool) {
        agreement.set_dispute_status(dispute_status);
        info!(
            editor = %self.user.user_id(),
            agreement = %agreement.id(),
            "Dispute status for {} changed to {}", agreement, dispute_status
        );
    }

    /// Registry form of [`Editor::change_dispute_status`]
    pub fn change_dispute_status_by_id(
        &self,
        agreements: &AgreementRegistry,
        agreement_id: &str,
        dispute_status: bool,
    ) -> Result<()> {
        agreements.update(agreement_id, |a| self.change_dispute_status(a, dispute_status))
    }

    pub fn link_agreement(&mut self, agreement: &FeeAgreement) {
        self.fee_agreements.push(agreement.id().to_string());
    }

    pub fn fee_agreement_ids(&self) -> &[String] {
        &self.fee_agreements
    }

    pub fn retrieve_fee_agreements(&self, agreements: &AgreementRegistry) -> Result<Vec<FeeAgreement>> {
        agreements.select(&self.fee_agreements)
    }
}
