// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO key expansion: `CompactKeyGen`, `ExpandSK`, `ExpandPK`.
//!
//! `P¹` is stored on disk as an upper triangle and is needed in two
//! shapes: mirrored-symmetric (for the quadratic forms evaluated during
//! signing/verification) and raw/unmirrored (for computing `L` and
//! `P³`, which depend on `P¹+P¹ᵀ` rather than on `P¹` itself). Both
//! shapes are decoded here and threaded through accordingly.

use rand::CryptoRng;

use crate::codec::{decode_o_matrix, decode_p1_matrices_raw, decode_p3_matrices};
use crate::error::Result;
use crate::kdf::{derive_p1_and_p2, derive_pk_seed_and_o, random_bytes};
use crate::matrix::GfMatrix;
use crate::params::MayoParameter;

/// Expanded secret-key material: the decoded `O` matrix, `P1` in its
/// mirrored-symmetric form, and the derived `L` matrices
/// (`Lᵢ = (P¹ᵢ+P¹ᵢᵀ)·O + P²ᵢ`).
pub(crate) struct ExpandedSecretKey {
    pub(crate) o: GfMatrix,
    pub(crate) p1: Vec<GfMatrix>,
    pub(crate) l: Vec<GfMatrix>,
}

/// Expanded public-key material: decoded `P1` (mirrored-symmetric),
/// `P2`, `P3` matrices.
pub(crate) struct ExpandedPublicKey {
    pub(crate) p1: Vec<GfMatrix>,
    pub(crate) p2: Vec<GfMatrix>,
    pub(crate) p3: Vec<GfMatrix>,
}

/// `P3ᵢ = Upper(Oᵀ·(P¹ᵢ_raw·O + P²ᵢ))`, using the *raw* (unmirrored)
/// upper-triangular `P¹ᵢ`.
///
/// This exact relationship between `P3`, `O`, `P1` and `P2` is what
/// makes the linear system solved during signing consistent with the
/// quadratic map the verifier evaluates over the full `n`-dimensional
/// solution `(v + O·x, x)`.
fn compute_p3<P: MayoParameter>(
    p1_raw: &[GfMatrix],
    p2: &[GfMatrix],
    o: &GfMatrix,
) -> Result<Vec<GfMatrix>> {
    let mut out = Vec::with_capacity(P::M);
    for i in 0..P::M {
        let p1o = p1_raw[i].mul(o)?;
        let inner = p1o.add(&p2[i])?;
        let full = o.transpose().mul(&inner)?;
        out.push(full.symmetrize_upper_fold()?);
    }
    Ok(out)
}

/// `derive_pk_seed_and_o` plus decoding into a dense `O` matrix.
fn decode_seed_and_o<P: MayoParameter>(seed_sk: &[u8]) -> Result<(Vec<u8>, GfMatrix)> {
    let (seed_pk, o_bytes) = derive_pk_seed_and_o::<P>(seed_sk);
    let o = decode_o_matrix(&o_bytes, P::V, P::O)?;
    Ok((seed_pk, o))
}

/// Decode raw (unmirrored) `P1` and dense `P2` from a public-key seed.
fn decode_p1_raw_p2<P: MayoParameter>(seed_pk: &[u8]) -> Result<(Vec<GfMatrix>, Vec<GfMatrix>)> {
    let (p1_bytes, p2_bytes) = derive_p1_and_p2::<P>(seed_pk);
    let p1_raw = decode_p1_matrices_raw(&p1_bytes, P::M, P::V)?;
    let p2 = crate::codec::decode_p2_matrices(&p2_bytes, P::M, P::V, P::O)?;
    Ok((p1_raw, p2))
}

/// Encode a family of `size x size` symmetric matrices as their packed
/// upper triangles, row-major `(r, c >= r)` order.
fn encode_upper_triangular_family(matrices: &[GfMatrix]) -> Vec<u8> {
    let mut elements = Vec::new();
    for mat in matrices {
        let size = mat.rows();
        for r in 0..size {
            for c in r..size {
                elements.push(mat.get(r, c));
            }
        }
    }
    crate::codec::encode_gf(&elements)
}

/// `CompactKeyGen`: sample `seed_sk`, derive `(seed_pk, O)`, compute
/// `P3`, and return `(csk, cpk)`.
pub(crate) fn compact_keygen<P: MayoParameter>(
    rng: &mut impl CryptoRng,
) -> Result<(Vec<u8>, Vec<u8>)> {
    let seed_sk = random_bytes(rng, P::SK_SEED_BYTES)?;
    let cpk = derive_cpk_from_csk::<P>(&seed_sk)?;
    Ok((seed_sk, cpk))
}

/// `ExpandSK`: `csk` (`seed_sk`) → decoded `O`, mirrored `P1`, and
/// derived `L`.
pub(crate) fn expand_sk<P: MayoParameter>(csk: &[u8]) -> Result<ExpandedSecretKey> {
    let (seed_pk, o) = decode_seed_and_o::<P>(csk)?;
    let (p1_raw, p2) = decode_p1_raw_p2::<P>(&seed_pk)?;

    let mut l = Vec::with_capacity(P::M);
    let mut p1_mirrored = Vec::with_capacity(P::M);
    for i in 0..P::M {
        let p1z = p1_raw[i].symmetrize()?; // P1_i + P1_i^t, diagonal cancels
        let lhs = p1z.mul(&o)?;
        l.push(lhs.add(&p2[i])?);
        p1_mirrored.push(p1_raw[i].mirror_upper()?);
    }

    Ok(ExpandedSecretKey {
        o,
        p1: p1_mirrored,
        l,
    })
}

/// `ExpandPK`: `cpk` (`seed_pk ∥ p3_bytes`) → decoded `P1` (mirrored),
/// `P2`, `P3`.
pub(crate) fn expand_pk<P: MayoParameter>(cpk: &[u8]) -> Result<ExpandedPublicKey> {
    let (seed_pk, p3_bytes) = cpk.split_at(P::PK_SEED_BYTES);
    let (p1_raw, p2) = decode_p1_raw_p2::<P>(seed_pk)?;
    let p3 = decode_p3_matrices(p3_bytes, P::M, P::O)?;
    let p1 = p1_raw
        .iter()
        .map(GfMatrix::mirror_upper)
        .collect::<Result<Vec<_>>>()?;
    Ok(ExpandedPublicKey { p1, p2, p3 })
}

/// Re-derive the compact public key from a compact secret key,
/// deterministically (no fresh randomness consumed).
pub(crate) fn derive_cpk_from_csk<P: MayoParameter>(csk: &[u8]) -> Result<Vec<u8>> {
    let (seed_pk, o) = decode_seed_and_o::<P>(csk)?;
    let (p1_raw, p2) = decode_p1_raw_p2::<P>(&seed_pk)?;
    let p3 = compute_p3::<P>(&p1_raw, &p2, &o)?;
    let p3_bytes = encode_upper_triangular_family(&p3);

    let mut cpk = Vec::with_capacity(P::CPK_BYTES);
    cpk.extend_from_slice(&seed_pk);
    cpk.extend_from_slice(&p3_bytes);
    Ok(cpk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Mayo1;

    #[test]
    fn compact_keygen_produces_expected_sizes() {
        let mut rng = rand::rng();
        let (csk, cpk) = compact_keygen::<Mayo1>(&mut rng).expect("keygen");
        assert_eq!(csk.len(), Mayo1::SK_SEED_BYTES);
        assert_eq!(cpk.len(), Mayo1::CPK_BYTES);
    }

    #[test]
    fn expand_sk_and_expand_pk_agree_on_p1() {
        let mut rng = rand::rng();
        let (csk, cpk) = compact_keygen::<Mayo1>(&mut rng).expect("keygen");
        let sk = expand_sk::<Mayo1>(&csk).expect("expand sk");
        let pk = expand_pk::<Mayo1>(&cpk).expect("expand pk");
        assert_eq!(sk.p1.len(), pk.p1.len());
        for (a, b) in sk.p1.iter().zip(pk.p1.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn derive_cpk_from_csk_is_deterministic() {
        let mut rng = rand::rng();
        let (csk, cpk) = compact_keygen::<Mayo1>(&mut rng).expect("keygen");
        let rederived = derive_cpk_from_csk::<Mayo1>(&csk).expect("rederive");
        assert_eq!(cpk, rederived);
    }
}
