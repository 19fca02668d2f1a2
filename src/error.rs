use core::fmt;

use crate::profile::HashId;

/// Error and state-code taxonomy for [`DrbgEngine`](crate::DrbgEngine)
/// operations.
///
/// `DigestFailed` is the only variant that poisons an instance (transitions
/// it to [`Mode::Error`](crate::Mode)); every other variant is reported back
/// to the caller with the engine's state left exactly as it was.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrbgError {
    /// The underlying digest primitive reported a failure. Sticky: only
    /// [`DrbgEngine::uninstantiate`](crate::DrbgEngine::uninstantiate) is
    /// permitted afterwards.
    DigestFailed(String),
    /// Operation attempted while the engine is `Uninitialised` or `Error`.
    StateInvalid,
    /// `reseed_counter` has exceeded the profile's `reseed_interval`; call
    /// [`DrbgEngine::reseed`](crate::DrbgEngine::reseed) before generating
    /// further output.
    ReseedNeeded,
    /// `generate` was asked for more bytes than
    /// `Profile::max_bytes_per_request` permits.
    RequestTooLarge { requested: usize, max: usize },
    /// An input (`entropy_input`, `nonce`, `personalization`, or
    /// `additional_input`) exceeded its profile maximum.
    InputTooLarge { which: &'static str, len: usize, max: usize },
    /// A known-answer test vector did not reproduce the expected output.
    KatMismatch { hash: HashId, strength: u32 },
    /// A profile named an unsupported security strength.
    BadHashId,
    /// `Hash_df` was asked for more output than `255 * digest_len` bytes.
    OutputTooLarge,
}

impl fmt::Display for DrbgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrbgError::DigestFailed(reason) => {
                write!(f, "digest primitive failed: {reason}")
            }
            DrbgError::StateInvalid => {
                write!(f, "operation invalid in the current engine state")
            }
            DrbgError::ReseedNeeded => {
                write!(f, "reseed interval exhausted, call reseed() before generate()")
            }
            DrbgError::RequestTooLarge { requested, max } => {
                write!(
                    f,
                    "requested {requested} bytes exceeds max_bytes_per_request ({max})"
                )
            }
            DrbgError::InputTooLarge { which, len, max } => {
                write!(f, "{which} length {len} exceeds maximum {max}")
            }
            DrbgError::KatMismatch { hash, strength } => {
                write!(
                    f,
                    "known-answer test failed for {hash:?} at strength {strength}"
                )
            }
            DrbgError::BadHashId => {
                write!(f, "profile names an unsupported security strength")
            }
            DrbgError::OutputTooLarge => {
                write!(f, "Hash_df output length exceeds 255 * digest_len")
            }
        }
    }
}

impl std::error::Error for DrbgError {}
