// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO signature verification (Algorithm 9: evaluate `P*(s)`, compare
//! to target).

use subtle::ConstantTimeEq;

use crate::codec::decode_s_vector;
use crate::error::{Error, Result};
use crate::gf16::GfElement;
use crate::kdf::{derive_target_t, digest_message};
use crate::keygen::expand_pk;
use crate::matrix::GfVector;
use crate::params::MayoParameter;

/// Verify `σ` (`signature ∥ msg` split by the caller into `sig` and
/// `msg`) against the compact public key `cpk`.
///
/// Invalid-format inputs fail with [`Error::InvalidSignatureFormat`]
/// before any arithmetic.
pub(crate) fn verify<P: MayoParameter>(cpk: &[u8], msg: &[u8], sig: &[u8]) -> Result<bool> {
    if cpk.len() != P::CPK_BYTES {
        return Err(Error::InvalidKeyFormat {
            expected: P::CPK_BYTES,
            got: cpk.len(),
        });
    }
    if sig.len() != P::SIG_BYTES {
        return Err(Error::InvalidSignatureFormat {
            expected: P::SIG_BYTES,
            got: sig.len(),
        });
    }

    let epk = expand_pk::<P>(cpk)?;

    let (s_bytes, salt) = sig.split_at(P::N.div_ceil(2));
    let s = decode_s_vector(s_bytes, P::N)?;

    let m_digest = digest_message::<P>(msg);
    let t_bytes = derive_target_t(&m_digest, salt, P::M_BYTES);
    let t = crate::codec::decode_gf(&t_bytes, P::M)?;

    let s_v = GfVector::from_elements(s.as_slice()[..P::V].to_vec());
    let s_o = GfVector::from_elements(s.as_slice()[P::V..].to_vec());

    let mut y = vec![GfElement::ZERO; P::M];
    for i in 0..P::M {
        let p1_sv = epk.p1[i].mat_vec(&s_v)?;
        let term1 = s_v.dot(&p1_sv)?;

        let p2_so = epk.p2[i].mat_vec(&s_o)?;
        let term2 = s_v.dot(&p2_so)?;

        let p3_so = epk.p3[i].mat_vec(&s_o)?;
        let term3 = s_o.dot(&p3_so)?;

        y[i] = term1 + term2 + term3;
    }

    let y_bytes: Vec<u8> = y.iter().map(|e| e.value()).collect();
    let t_bytes_unpacked: Vec<u8> = t.iter().map(|e| e.value()).collect();

    Ok(bool::from(y_bytes.ct_eq(&t_bytes_unpacked)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::compact_keygen;
    use crate::params::Mayo1;
    use crate::sign::sign;

    #[test]
    fn sign_then_verify_round_trips() {
        let mut rng = rand::rng();
        let (csk, cpk) = compact_keygen::<Mayo1>(&mut rng).expect("keygen");
        let msg = b"the quick brown fox";
        let sig = sign::<Mayo1>(&csk, msg, &mut rng).expect("sign");
        assert!(verify::<Mayo1>(&cpk, msg, &sig).expect("verify"));
    }

    #[test]
    fn tampered_signature_fails_verification() {
        let mut rng = rand::rng();
        let (csk, cpk) = compact_keygen::<Mayo1>(&mut rng).expect("keygen");
        let msg = b"the quick brown fox";
        let mut sig = sign::<Mayo1>(&csk, msg, &mut rng).expect("sign");
        sig[0] ^= 0x01;
        assert!(!verify::<Mayo1>(&cpk, msg, &sig).expect("verify"));
    }

    #[test]
    fn wrong_length_signature_is_rejected() {
        let mut rng = rand::rng();
        let (_csk, cpk) = compact_keygen::<Mayo1>(&mut rng).expect("keygen");
        let short_sig = vec![0u8; Mayo1::SIG_BYTES - 1];
        assert!(matches!(
            verify::<Mayo1>(&cpk, b"msg", &short_sig),
            Err(Error::InvalidSignatureFormat { .. })
        ));
    }
}
