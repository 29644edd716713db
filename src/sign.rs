// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO signature generation (Algorithm 8: salt + vinegar retry loop).

use rand::CryptoRng;

use crate::codec::encode_s_vector;
use crate::error::{Error, Result};
use crate::gf16::GfElement;
use crate::kdf::{derive_target_t, digest_message, random_bytes};
use crate::keygen::expand_sk;
use crate::matrix::{GfMatrix, GfVector};
use crate::params::MayoParameter;
use crate::solver::{solve, SolveResult};

/// Upper bound on signing retries before giving up.
pub(crate) const MAX_SIGN_RETRIES: u32 = 256;

/// Sample `v` independent uniform GF(16) elements, one nibble per
/// fresh random byte (masked to the low 4 bits).
fn sample_vinegar(rng: &mut impl CryptoRng, v: usize) -> Result<GfVector> {
    let raw = random_bytes(rng, v)?;
    let elements = raw.into_iter().map(GfElement::new).collect();
    Ok(GfVector::from_elements(elements))
}

/// Sign `msg` under the compact secret key `csk`, returning
/// `s_bytes ∥ salt` of length `ceil(n/2) + salt_bytes`.
pub(crate) fn sign<P: MayoParameter>(
    csk: &[u8],
    msg: &[u8],
    rng: &mut impl CryptoRng,
) -> Result<Vec<u8>> {
    if csk.len() != P::SK_SEED_BYTES {
        return Err(Error::InvalidMessageFormat {
            expected: P::SK_SEED_BYTES,
            got: csk.len(),
        });
    }

    let esk = expand_sk::<P>(csk)?;
    let m_digest = digest_message::<P>(msg);

    for _ in 0..MAX_SIGN_RETRIES {
        let salt = random_bytes(rng, P::SALT_BYTES)?;
        let t_bytes = derive_target_t(&m_digest, &salt, P::M_BYTES);
        let t = crate::codec::decode_gf(&t_bytes, P::M)?;

        let s_v = sample_vinegar(rng, P::V)?;

        let mut a = GfMatrix::zero(P::M, P::O);
        let mut y_prime = vec![GfElement::ZERO; P::M];
        for i in 0..P::M {
            let p1_sv = esk.p1[i].mat_vec(&s_v)?;
            y_prime[i] = s_v.dot(&p1_sv)?;
            let row = GfMatrix::vec_mat(&s_v, &esk.l[i])?;
            for c in 0..P::O {
                a.set(i, c, row.get(c));
            }
        }

        let target = GfVector::from_elements(t).sub(&GfVector::from_elements(y_prime))?;

        match solve(&a, &target)? {
            SolveResult::Unique(sol) => {
                let o_x = esk.o.mat_vec(&sol)?;
                let s_v_final = GfVector::from_elements(
                    s_v.as_slice()
                        .iter()
                        .zip(o_x.as_slice())
                        .map(|(&a, &b)| a + b)
                        .collect(),
                );
                let s = s_v_final.concat(&sol);
                let mut signature = encode_s_vector(&s);
                signature.extend_from_slice(&salt);
                return Ok(signature);
            }
            SolveResult::NoSolution | SolveResult::NotUnique => continue,
        }
    }

    Err(Error::SignRetriesExhausted)
}
