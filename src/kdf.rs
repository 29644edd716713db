// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SHAKE256/AES-128-CTR byte oracles and the derived key-schedule
//! consumers built on top of them.

use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

use crate::error::Result;
use crate::params::MayoParameter;

/// AES-128 in counter mode with a 32-bit big-endian counter in the
/// last 4 bytes of an all-zero 16-byte initial block.
type Aes128Ctr32 = ctr::Ctr32BE<Aes128>;

/// SHAKE256 extensible-output function: a pure function of `(input, outlen)`.
pub(crate) fn shake256(input: &[u8], outlen: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(input);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; outlen];
    reader.read(&mut out);
    out
}

/// AES-128-CTR keystream of length `outlen`, counter starting at 0
/// with a zero 12-byte prefix.
pub(crate) fn aes128_ctr_keystream(key16: &[u8], outlen: usize) -> Vec<u8> {
    let mut out = vec![0u8; outlen];
    let iv = [0u8; 16];
    let mut cipher = Aes128Ctr32::new(key16.into(), &iv.into());
    cipher.apply_keystream(&mut out);
    out
}

/// `derive_pk_seed_and_o`: split a single SHAKE256 stream on `seed_sk`
/// into `(seed_pk, O_bytes)`.
pub(crate) fn derive_pk_seed_and_o<P: MayoParameter>(seed_sk: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let stream = shake256(seed_sk, P::PK_SEED_BYTES + P::O_BYTES);
    let (seed_pk, o_bytes) = stream.split_at(P::PK_SEED_BYTES);
    (seed_pk.to_vec(), o_bytes.to_vec())
}

/// `derive_p1_and_p2`: AES-128-CTR keystream on `seed_pk`, split into
/// `(P1_all, P2_all)` at the P1/P2 boundary.
pub(crate) fn derive_p1_and_p2<P: MayoParameter>(seed_pk: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let total = P::P1_BYTES + P::P2_BYTES;
    let stream = aes128_ctr_keystream(seed_pk, total);
    let (p1, p2) = stream.split_at(P::P1_BYTES);
    (p1.to_vec(), p2.to_vec())
}

/// `derive_target_t`: `SHAKE256(m_digest || salt, len)`.
pub(crate) fn derive_target_t(m_digest: &[u8], salt: &[u8], len: usize) -> Vec<u8> {
    let mut input = Vec::with_capacity(m_digest.len() + salt.len());
    input.extend_from_slice(m_digest);
    input.extend_from_slice(salt);
    shake256(&input, len)
}

/// `digest_message`: `SHAKE256(msg, digest_bytes)`.
pub(crate) fn digest_message<P: MayoParameter>(msg: &[u8]) -> Vec<u8> {
    shake256(msg, P::DIGEST_BYTES)
}

/// Sample `len` cryptographically secure random bytes.
pub(crate) fn random_bytes(rng: &mut impl rand::CryptoRng, len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    Ok(out)
}
