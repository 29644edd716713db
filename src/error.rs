// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the MAYO signature scheme core.

/// Errors that can occur during MAYO operations.
///
/// Cryptographic rejection of a signature is *not* represented here:
/// per the scheme's contract, `open`/`verify` report that outcome by
/// returning `None`/`false`, not by returning an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A variant name did not match any known parameter set.
    #[error("unknown MAYO variant: {0}")]
    UnknownVariant(String),
    /// A compact or expanded key had the wrong byte length.
    #[error("invalid key format: expected {expected} bytes, got {got}")]
    InvalidKeyFormat {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        got: usize,
    },
    /// A seed passed to [`crate::KeyPair::from_seed`] had the wrong length.
    #[error("invalid seed length: expected {expected} bytes, got {got}")]
    InvalidSeedLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        got: usize,
    },
    /// A signature (or signed message) had the wrong byte length.
    #[error("invalid signature format: expected {expected} bytes, got {got}")]
    InvalidSignatureFormat {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        got: usize,
    },
    /// A byte-level API argument (e.g. `csk_bytes` or `msg`) failed a
    /// length check at the function boundary.
    #[error("invalid message format: expected {expected} bytes, got {got}")]
    InvalidMessageFormat {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        got: usize,
    },
    /// A codec routine ran out of input bytes mid-decode.
    #[error("insufficient bytes to decode: need at least {needed}, have {have}")]
    InsufficientBytes {
        /// Minimum number of bytes required.
        needed: usize,
        /// Number of bytes actually available.
        have: usize,
    },
    /// A matrix/vector operation was given mismatched dimensions.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(&'static str),
    /// Attempted to invert the zero element of GF(16).
    #[error("cannot invert the zero element of GF(16)")]
    FieldInverseOfZero,
    /// The system RNG failed to produce randomness for key generation.
    #[error("secure randomness unavailable for key generation")]
    KeygenRandomnessUnavailable,
    /// The signing retry loop exhausted its bound without a solvable system.
    #[error("signing retries exhausted without a unique solution")]
    SignRetriesExhausted,
}

impl From<Error> for signature::Error {
    fn from(e: Error) -> Self {
        signature::Error::from_source(e.to_string())
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
