// Magazine Fees - Core Library
// Contributors, editors and accountants working against fee agreements
// and magazine issues.

pub mod error;
pub mod registry;
pub mod entities;
pub mod policy;
pub mod accounting;     // Payment rule + reports
pub mod export;         // CSV reports
pub mod commands;       // Deferred accountant operations

// Re-export commonly used types
pub use error::{PublishingError, Result};
pub use registry::{
    Record, Registry,
    AgreementRegistry, ContributorRegistry, IssueRegistry,
};
pub use entities::{
    Role, User,
    Contributor, Editor,
    MagazineIssue, FeeAgreement,
};
pub use policy::PaymentPolicy;
pub use accounting::{Accountant, Payment, PaymentRun};
pub use export::{write_agreements_csv, export_agreements_csv};
pub use commands::{
    Command, CommandInvoker,
    ProcessPaymentsCommand, RetrieveFeeAgreementsCommand,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
