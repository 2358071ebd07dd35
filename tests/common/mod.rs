#![allow(dead_code)]

use magazine_fees::{
    Accountant, AgreementRegistry, Contributor, ContributorRegistry, Editor, FeeAgreement,
    IssueRegistry, MagazineIssue,
};

/// A fresh object graph per test:
/// - 1 accountant, 2 editors, 4 contributors
/// - issues #1, #2 (editor 1) and #3, #4 (editor 2); #1 and #3 published
/// - agreements: C001 $200 and C002 $250 on #1, C003 $300 and C004 $350 on #3
pub struct Newsroom {
    pub accountant: Accountant,
    pub editor1: Editor,
    pub editor2: Editor,
    pub contributors: ContributorRegistry,
    pub issues: IssueRegistry,
    pub agreements: AgreementRegistry,
    pub issue_ids: Vec<String>,
    pub agreement_ids: Vec<String>,
}

impl Newsroom {
    pub fn new() -> Self {
        Self::with_empty_bank_details(&[])
    }

    /// Same graph, but the listed contributors are registered without bank details
    pub fn with_empty_bank_details(contributor_ids: &[&str]) -> Self {
        let accountant = Accountant::new("A001", "Accountant Alice", "pass123", "accountant@example.com");
        let mut editor1 = Editor::new("E001", "Editor John", "pass123", "editor.john@example.com");
        let mut editor2 = Editor::new("E002", "Editor Jane", "pass456", "editor.jane@example.com");

        let mut contributors = vec![
            Contributor::new("C001", "Contributor A", "pass123", "contributor.a@example.com", "1234567890", "1111-2222"),
            Contributor::new("C002", "Contributor B", "pass456", "contributor.b@example.com", "9876543210", "3333-4444"),
            Contributor::new("C003", "Contributor C", "pass789", "contributor.c@example.com", "1122334455", "5555-6666"),
            Contributor::new("C004", "Contributor D", "pass000", "contributor.d@example.com", "9988776655", "7777-8888"),
        ];

        for contributor in contributors.iter_mut() {
            if contributor_ids.contains(&contributor.user.user_id()) {
                contributor.bank_details.clear();
            }
        }

        let mut issue1 = editor1.create_issue(1);
        let issue2 = editor1.create_issue(2);
        let mut issue3 = editor2.create_issue(3);
        let issue4 = editor2.create_issue(4);
        issue1.publish();
        issue3.publish();

        let agreements = AgreementRegistry::new();
        let mut agreement_ids = Vec::new();
        let terms: [(usize, f64, &MagazineIssue); 4] = [
            (0, 200.0, &issue1),
            (1, 250.0, &issue1),
            (2, 300.0, &issue3),
            (3, 350.0, &issue3),
        ];
        for (index, amount, issue) in terms {
            let editor = if index < 2 { &mut editor1 } else { &mut editor2 };
            let contributor = &mut contributors[index];
            let agreement = FeeAgreement::agreed_today(
                amount,
                contributor.user.user_id(),
                editor.user.user_id(),
                issue,
            )
            .unwrap();
            contributor.link_agreement(&agreement);
            editor.link_agreement(&agreement);
            agreement_ids.push(agreement.id().to_string());
            agreements.register(agreement).unwrap();
        }

        issue1.add_contribution("C001");
        issue1.add_contribution("C002");
        issue3.add_contribution("C003");
        issue3.add_contribution("C004");

        let registry = ContributorRegistry::new();
        for contributor in contributors {
            registry.register(contributor).unwrap();
        }

        let issues = IssueRegistry::new();
        let mut issue_ids = Vec::new();
        for issue in [issue1, issue2, issue3, issue4] {
            issue_ids.push(issue.id().to_string());
            issues.register(issue).unwrap();
        }

        Newsroom {
            accountant,
            editor1,
            editor2,
            contributors: registry,
            issues,
            agreements,
            issue_ids,
            agreement_ids,
        }
    }

    /// Issue by number (1..=4)
    pub fn issue(&self, number: usize) -> MagazineIssue {
        self.issues.require(&self.issue_ids[number - 1]).unwrap()
    }

    /// Agreement by position (1..=4)
    pub fn agreement(&self, number: usize) -> FeeAgreement {
        self.agreements.require(&self.agreement_ids[number - 1]).unwrap()
    }

    pub fn agreement_id(&self, number: usize) -> &str {
        &self.agreement_ids[number - 1]
    }

    pub fn select_contributors(&self, ids: &[&str]) -> Vec<Contributor> {
        self.contributors.select(ids).unwrap()
    }

    pub fn editor1_contributors(&self) -> Vec<Contributor> {
        self.select_contributors(&["C001", "C002"])
    }

    pub fn all_contributors(&self) -> Vec<Contributor> {
        self.contributors.all().unwrap()
    }
}
