// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO post-quantum signature scheme.
//!
//! This crate implements the cryptographic core of MAYO, a
//! post-quantum multivariate "oil and vinegar" signature scheme: GF(16)
//! field and matrix arithmetic, key expansion, and the sign/verify
//! algorithms, built over dense row-major matrices rather than a
//! bitsliced representation.
//!
//! # Supported Parameter Sets
//!
//! - [`Mayo1`] - NIST security level 1
//! - [`Mayo2`] - NIST security level 2
//!
//! # Example
//!
//! ```
//! use mayo_core::{KeyPair, Mayo1};
//! use signature::{Signer, Verifier};
//!
//! let mut rng = rand::rng();
//! let keypair = KeyPair::<Mayo1>::generate(&mut rng).expect("keygen");
//! let msg = b"hello world";
//!
//! let sig = keypair.signing_key().try_sign(msg).expect("sign");
//! keypair.verifying_key().verify(msg, &sig).expect("verify");
//! ```
//!
//! # Byte-level API
//!
//! [`keypair`], [`sign`], and [`open`] dispatch on a case-insensitive
//! variant name (`"MAYO1"` or `"MAYO2"`) for callers that want to work
//! in raw bytes instead of the generic typed API above.
//!
//! ```
//! let (csk, cpk) = mayo_core::keypair("mayo1", &mut rand::rng()).expect("keygen");
//! let msg = b"hello world";
//! let sig = mayo_core::sign(&csk, msg, "mayo1").expect("sign");
//!
//! let mut signed_message = sig.clone();
//! signed_message.extend_from_slice(msg);
//! assert_eq!(mayo_core::open(&cpk, &signed_message, "mayo1"), Some(msg.to_vec()));
//! ```

pub mod error;
pub mod keypair;
pub mod mayo_signature;
pub mod params;
pub mod signing_key;
pub mod verifying_key;

mod codec;
mod gf16;
mod kdf;
mod keygen;
mod matrix;
mod sign;
mod solver;
mod verify;

pub use error::Error;
pub use keypair::KeyPair;
pub use mayo_signature::Signature;
pub use params::{Mayo1, Mayo2, MayoParameter};
pub use signing_key::SigningKey;
pub use verifying_key::VerifyingKey;

use error::Result;
use rand::CryptoRng;

/// Generate a fresh keypair for the named MAYO variant (`"MAYO1"` or
/// `"MAYO2"`, matched case-insensitively), returning `(csk, cpk)` as
/// raw bytes.
pub fn keypair(variant_name: &str, rng: &mut impl CryptoRng) -> Result<(Vec<u8>, Vec<u8>)> {
    match variant_name.to_ascii_uppercase().as_str() {
        "MAYO1" => keygen::compact_keygen::<Mayo1>(rng),
        "MAYO2" => keygen::compact_keygen::<Mayo2>(rng),
        other => Err(Error::UnknownVariant(other.to_string())),
    }
}

/// Sign `msg` under the compact secret key `csk_bytes` for the named
/// variant, returning the raw signature bytes.
pub fn sign(csk_bytes: &[u8], msg: &[u8], variant: &str) -> Result<Vec<u8>> {
    let mut rng = rand::rng();
    match variant.to_ascii_uppercase().as_str() {
        "MAYO1" => sign::sign::<Mayo1>(csk_bytes, msg, &mut rng),
        "MAYO2" => sign::sign::<Mayo2>(csk_bytes, msg, &mut rng),
        other => Err(Error::UnknownVariant(other.to_string())),
    }
}

/// Verify `signed_message` (`signature ∥ original_message`) against the
/// compact public key `cpk_bytes` for the named variant, returning the
/// recovered message on success.
///
/// `signed_message` must be at least `ceil(n/2) + salt_bytes` long.
/// Cryptographic rejection is reported as `None`, not an error.
pub fn open(cpk_bytes: &[u8], signed_message: &[u8], variant: &str) -> Option<Vec<u8>> {
    fn finish<P: MayoParameter>(cpk_bytes: &[u8], signed_message: &[u8]) -> Option<Vec<u8>> {
        if signed_message.len() < P::SIG_BYTES {
            return None;
        }
        let (sig, msg) = signed_message.split_at(P::SIG_BYTES);
        let ok = verify::verify::<P>(cpk_bytes, msg, sig).ok()?;
        ok.then(|| msg.to_vec())
    }

    match variant.to_ascii_uppercase().as_str() {
        "MAYO1" => finish::<Mayo1>(cpk_bytes, signed_message),
        "MAYO2" => finish::<Mayo2>(cpk_bytes, signed_message),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_api_round_trips_mayo1() {
        let mut rng = rand::rng();
        let (csk, cpk) = keypair("mayo1", &mut rng).expect("keygen");
        let msg = b"a terse message";
        let sig = sign(&csk, msg, "MAYO1").expect("sign");
        let mut signed_message = sig;
        signed_message.extend_from_slice(msg);
        assert_eq!(open(&cpk, &signed_message, "mAyO1"), Some(msg.to_vec()));
    }

    #[test]
    fn byte_api_rejects_unknown_variant() {
        let mut rng = rand::rng();
        assert!(matches!(
            keypair("mayo7", &mut rng),
            Err(Error::UnknownVariant(_))
        ));
    }

    #[test]
    fn open_rejects_undersized_signed_message() {
        assert_eq!(open(&[0u8; 4], &[0u8; 4], "mayo1"), None);
    }
}

#[cfg(feature = "serde")]
#[cfg(test)]
mod serde_tests {
    use super::*;
    use signature::Signer;

    fn keypair_serde<P: MayoParameter>() {
        let mut rng = rand::rng();
        let keypair = KeyPair::<P>::generate(&mut rng).expect("keygen");
        let serialized = serde_json::to_string(&keypair).expect("serialize");
        let deserialized: KeyPair<P> = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(keypair, deserialized);

        let serialized = postcard::to_stdvec(&keypair).expect("serialize");
        let deserialized: KeyPair<P> = postcard::from_bytes(&serialized).expect("deserialize");
        assert_eq!(keypair, deserialized);
    }

    fn signing_key_serde<P: MayoParameter>() {
        let mut rng = rand::rng();
        let keypair = KeyPair::<P>::generate(&mut rng).expect("keygen");
        let serialized = serde_json::to_string(keypair.signing_key()).expect("serialize");
        let deserialized: SigningKey<P> = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(keypair.signing_key(), &deserialized);

        let serialized = postcard::to_stdvec(keypair.signing_key()).expect("serialize");
        let deserialized: SigningKey<P> = postcard::from_bytes(&serialized).expect("deserialize");
        assert_eq!(keypair.signing_key(), &deserialized);
    }

    fn verifying_key_serde<P: MayoParameter>() {
        let mut rng = rand::rng();
        let keypair = KeyPair::<P>::generate(&mut rng).expect("keygen");
        let serialized = serde_json::to_string(keypair.verifying_key()).expect("serialize");
        let deserialized: VerifyingKey<P> = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(keypair.verifying_key(), &deserialized);

        let serialized = postcard::to_stdvec(keypair.verifying_key()).expect("serialize");
        let deserialized: VerifyingKey<P> = postcard::from_bytes(&serialized).expect("deserialize");
        assert_eq!(keypair.verifying_key(), &deserialized);
    }

    fn signature_serde<P: MayoParameter>() {
        let mut rng = rand::rng();
        let keypair = KeyPair::<P>::generate(&mut rng).expect("keygen");
        let msg = b"hello world";
        let sig = keypair.signing_key().try_sign(msg).expect("sign");
        let serialized = serde_json::to_string(&sig).expect("serialize");
        let deserialized: Signature<P> = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(sig, deserialized);

        let serialized = postcard::to_stdvec(&sig).expect("serialize");
        let deserialized: Signature<P> = postcard::from_bytes(&serialized).expect("deserialize");
        assert_eq!(sig, deserialized);
    }

    #[test]
    fn keypair_serde_mayo1() {
        keypair_serde::<Mayo1>();
    }
    #[test]
    fn keypair_serde_mayo2() {
        keypair_serde::<Mayo2>();
    }

    #[test]
    fn signing_key_serde_mayo1() {
        signing_key_serde::<Mayo1>();
    }
    #[test]
    fn signing_key_serde_mayo2() {
        signing_key_serde::<Mayo2>();
    }

    #[test]
    fn verifying_key_serde_mayo1() {
        verifying_key_serde::<Mayo1>();
    }
    #[test]
    fn verifying_key_serde_mayo2() {
        verifying_key_serde::<Mayo2>();
    }

    #[test]
    fn signature_serde_mayo1() {
        signature_serde::<Mayo1>();
    }
    #[test]
    fn signature_serde_mayo2() {
        signature_serde::<Mayo2>();
    }
}
