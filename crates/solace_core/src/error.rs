use miette::Diagnostic;
use thiserror::Error;

/// Errors from the crate's strict parse surfaces.
///
/// The policy and derivation functions themselves are total and never return
/// these; only the `FromStr` boundaries (config values, admin tooling input)
/// do.
#[derive(Error, Diagnostic, Debug)]
pub enum CoreError {
    #[error("Unknown role: '{name}'")]
    #[diagnostic(
        code(solace_core::unknown_role),
        help("Valid roles are: guest, user, therapist, store")
    )]
    UnknownRole { name: String },

    #[error("Unknown therapist status: '{name}'")]
    #[diagnostic(
        code(solace_core::unknown_therapist_status),
        help("Valid statuses are: active, unaffiliated")
    )]
    UnknownTherapistStatus { name: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
