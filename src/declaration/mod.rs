//! Joint SAG and customs sworn declaration
//!
//! A single-sitting form: the traveller fills it in, submits, reviews the
//! summary and may download a simulated report. Nothing is persisted.
//!
//! ## Gated fields
//!
//! | checkbox          | dependent fields                 | rule when checked             |
//! |-------------------|----------------------------------|-------------------------------|
//! | `customs_goods`   | `customs_detail`                 | non-blank after trimming      |
//! | `sag_products`    | `sag_detail`                     | non-blank after trimming      |
//! | `includes_minors` | `male_minors`, `female_minors`   | at least one count, `0` counts|
//!
//! The `attestation` checkbox gates submission as a whole.

pub mod export;
pub mod flow;
pub mod form;
pub mod id;
pub mod summary;
pub mod validate;

pub use export::ExportDocument;
pub use flow::{DeclarationSession, FormState};
pub use form::{CounterField, DeclarationForm, DeclarationInput, DetailField, Identity, field};
pub use id::DeclarationId;
pub use summary::DeclarationSummary;
pub use validate::{ValidationReport, validate};
