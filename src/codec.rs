// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nibble packing/unpacking and the matrix-family byte layouts of the
//! compact/expanded key material.
//!
//! Convention: element `2k` occupies the low nibble of byte `k`;
//! element `2k+1` occupies the high nibble. A trailing odd element
//! fills a byte's low nibble, and its high nibble MUST be (and is
//! always produced as) zero.

use crate::error::{Error, Result};
use crate::gf16::GfElement;
use crate::matrix::{GfMatrix, GfVector};

/// Number of packed bytes needed for `count` GF(16) elements.
pub(crate) const fn packed_len(count: usize) -> usize {
    count.div_ceil(2)
}

/// Encode a vector of GF(16) elements into nibble-packed bytes.
pub(crate) fn encode_gf(v: &[GfElement]) -> Vec<u8> {
    let mut out = vec![0u8; packed_len(v.len())];
    for (i, chunk) in v.chunks(2).enumerate() {
        let low = chunk[0].value();
        let high = chunk.get(1).map_or(0, |e| e.value());
        out[i] = low | (high << 4);
    }
    out
}

/// Decode `count` GF(16) elements from nibble-packed bytes.
///
/// Fails with [`Error::InsufficientBytes`] if `bytes` is shorter than
/// `packed_len(count)`. The high nibble of a final odd byte is masked
/// to zero regardless of its encoded value.
pub(crate) fn decode_gf(bytes: &[u8], count: usize) -> Result<Vec<GfElement>> {
    let needed = packed_len(count);
    if bytes.len() < needed {
        return Err(Error::InsufficientBytes {
            needed,
            have: bytes.len(),
        });
    }
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let byte = bytes[i / 2];
        let nibble = if i % 2 == 0 { byte & 0x0f } else { byte >> 4 };
        out.push(GfElement::new(nibble));
    }
    Ok(out)
}

/// Decode a `size x size` symmetric matrix from its upper-triangular
/// nibble encoding: for `r in 0..size`, `c in r..size`, one element is
/// consumed and stored at `[r, c]`, mirrored to `[c, r]` when `r != c`.
pub(crate) fn decode_upper_triangular(elements: &[GfElement], size: usize) -> Result<GfMatrix> {
    let expected = size * (size + 1) / 2;
    if elements.len() != expected {
        return Err(Error::DimensionMismatch(
            "decode_upper_triangular: wrong element count for triangle size",
        ));
    }
    let mut m = GfMatrix::zero(size, size);
    let mut idx = 0;
    for r in 0..size {
        for c in r..size {
            let e = elements[idx];
            m.set(r, c, e);
            if r != c {
                m.set(c, r, e);
            }
            idx += 1;
        }
    }
    Ok(m)
}

/// Decode a `size x size` matrix from its upper-triangular nibble
/// encoding WITHOUT mirroring: strictly-lower entries are left zero.
///
/// Used where the original upper-triangular view (as opposed to the
/// symmetric view `decode_upper_triangular` produces) is required, e.g.
/// to form `(P¹+P¹ᵀ)` from the raw storage rather than from a matrix
/// that already doubles (and cancels) the diagonal.
pub(crate) fn decode_upper_triangular_raw(elements: &[GfElement], size: usize) -> Result<GfMatrix> {
    let expected = size * (size + 1) / 2;
    if elements.len() != expected {
        return Err(Error::DimensionMismatch(
            "decode_upper_triangular_raw: wrong element count for triangle size",
        ));
    }
    let mut m = GfMatrix::zero(size, size);
    let mut idx = 0;
    for r in 0..size {
        for c in r..size {
            m.set(r, c, elements[idx]);
            idx += 1;
        }
    }
    Ok(m)
}

/// Decode a `rows x cols` dense matrix, row-major.
pub(crate) fn decode_dense(elements: &[GfElement], rows: usize, cols: usize) -> Result<GfMatrix> {
    GfMatrix::from_row_major(rows, cols, elements.to_vec())
}

/// Split a packed byte buffer into `m` equal chunks of `chunk_bytes`
/// bytes each, failing if the buffer is short.
fn split_chunks(bytes: &[u8], m: usize, chunk_bytes: usize) -> Result<Vec<&[u8]>> {
    let needed = m * chunk_bytes;
    if bytes.len() < needed {
        return Err(Error::InsufficientBytes {
            needed,
            have: bytes.len(),
        });
    }
    Ok((0..m)
        .map(|i| &bytes[i * chunk_bytes..(i + 1) * chunk_bytes])
        .collect())
}

/// Decode the `m` symmetric P1 matrices (each `v x v`) from `P1_all`.
pub(crate) fn decode_p1_matrices(bytes: &[u8], m: usize, v: usize) -> Result<Vec<GfMatrix>> {
    let count = v * (v + 1) / 2;
    let chunk_bytes = packed_len(count);
    split_chunks(bytes, m, chunk_bytes)?
        .into_iter()
        .map(|chunk| decode_upper_triangular(&decode_gf(chunk, count)?, v))
        .collect()
}

/// Decode the `m` symmetric P3 matrices (each `o x o`) from `P3_all`.
pub(crate) fn decode_p3_matrices(bytes: &[u8], m: usize, o: usize) -> Result<Vec<GfMatrix>> {
    decode_p1_matrices(bytes, m, o)
}

/// Decode the `m` raw (unmirrored) upper-triangular P1 matrices (each
/// `v x v`) from `P1_all`. See [`decode_upper_triangular_raw`].
pub(crate) fn decode_p1_matrices_raw(bytes: &[u8], m: usize, v: usize) -> Result<Vec<GfMatrix>> {
    let count = v * (v + 1) / 2;
    let chunk_bytes = packed_len(count);
    split_chunks(bytes, m, chunk_bytes)?
        .into_iter()
        .map(|chunk| decode_upper_triangular_raw(&decode_gf(chunk, count)?, v))
        .collect()
}

/// Decode the `m` dense `v x o` P2 matrices from `P2_all`.
pub(crate) fn decode_p2_matrices(bytes: &[u8], m: usize, v: usize, o: usize) -> Result<Vec<GfMatrix>> {
    let count = v * o;
    let chunk_bytes = packed_len(count);
    split_chunks(bytes, m, chunk_bytes)?
        .into_iter()
        .map(|chunk| decode_dense(&decode_gf(chunk, count)?, v, o))
        .collect()
}

/// Decode the dense `v x o` O matrix.
pub(crate) fn decode_o_matrix(bytes: &[u8], v: usize, o: usize) -> Result<GfMatrix> {
    decode_dense(&decode_gf(bytes, v * o)?, v, o)
}

/// Encode a length-`n` `s` vector to nibble-packed bytes.
pub(crate) fn encode_s_vector(s: &GfVector) -> Vec<u8> {
    encode_gf(s.as_slice())
}

/// Decode a length-`n` `s` vector; fails if the byte length differs
/// from `packed_len(n)` exactly (not just "at least").
pub(crate) fn decode_s_vector(bytes: &[u8], n: usize) -> Result<GfVector> {
    let expected = packed_len(n);
    if bytes.len() != expected {
        return Err(Error::InsufficientBytes {
            needed: expected,
            have: bytes.len(),
        });
    }
    Ok(GfVector::from_elements(decode_gf(bytes, n)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf(values: &[u8]) -> Vec<GfElement> {
        values.iter().map(|&v| GfElement::new(v)).collect()
    }

    #[test]
    fn roundtrip_even_length() {
        let v = gf(&[1, 2, 3, 4, 5, 6]);
        let bytes = encode_gf(&v);
        assert_eq!(decode_gf(&bytes, v.len()).expect("decode"), v);
    }

    #[test]
    fn roundtrip_odd_length_zero_pads_high_nibble() {
        let v = gf(&[1, 2, 3]);
        let bytes = encode_gf(&v);
        assert_eq!(bytes.len(), 2);
        assert_eq!(bytes[1] & 0xf0, 0);
        assert_eq!(decode_gf(&bytes, v.len()).expect("decode"), v);
    }

    #[test]
    fn insufficient_bytes_is_reported() {
        assert!(matches!(
            decode_gf(&[0x12], 3),
            Err(Error::InsufficientBytes { .. })
        ));
    }

    #[test]
    fn upper_triangular_decode_is_symmetric() {
        let elements = gf(&[1, 2, 3, 4, 5, 6]); // size 3 triangle
        let m = decode_upper_triangular(&elements, 3).expect("valid triangle");
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(m.get(r, c), m.get(c, r));
            }
        }
        assert_eq!(m.get(0, 0).value(), 1);
        assert_eq!(m.get(0, 1).value(), 2);
        assert_eq!(m.get(1, 1).value(), 4);
    }

    #[test]
    fn upper_triangular_raw_decode_leaves_lower_zero() {
        let elements = gf(&[1, 2, 3, 4, 5, 6]); // size 3 triangle
        let m = decode_upper_triangular_raw(&elements, 3).expect("valid triangle");
        assert_eq!(m.get(1, 0).value(), 0);
        assert_eq!(m.get(2, 0).value(), 0);
        assert_eq!(m.get(2, 1).value(), 0);
        assert_eq!(m.get(0, 1).value(), 2);
    }

    #[test]
    fn s_vector_rejects_wrong_length() {
        assert!(decode_s_vector(&[0x12, 0x34], 3).is_err());
    }
}
