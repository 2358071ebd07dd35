// Entity Models
//
// Each entity has a stable identity (caller-assigned user id, or a UUID for
// issues and agreements). Cross-entity links are ids, resolved through a
// `Registry`.
//
// The accountant role lives in `accounting`, next to the payment rule.

pub mod user;
pub mod contributor;
pub mod editor;
pub mod issue;
pub mod agreement;

pub use user::{Role, User};
pub use contributor::Contributor;
pub use editor::Editor;
pub use issue::MagazineIssue;
pub use agreement::FeeAgreement;
