// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO parameter sets.
//!
//! Defines the [`MayoParameter`] trait and the two concrete parameter
//! sets [`Mayo1`] and [`Mayo2`]. Tagged zero-sized types resolve the
//! generic dispatch at compile time; the byte-level public API maps a
//! case-insensitive variant name onto one of them at the edge.

/// Trait defining all constants for a MAYO parameter set.
pub trait MayoParameter: Clone + Copy + Send + Sync + 'static {
    /// Human-readable, case-insensitively matched name of this parameter set.
    const NAME: &'static str;
    /// Total number of variables (n).
    const N: usize;
    /// Number of quadratic equations (m).
    const M: usize;
    /// Oil dimension (o).
    const O: usize;
    /// Vinegar dimension (v = n - o).
    const V: usize;
    /// Solution-multiplicity parameter (k). Reserved: no operation in
    /// this core consumes it; see `SPEC_FULL.md` open questions.
    const K: usize;
    /// Byte length of the secret-key seed.
    const SK_SEED_BYTES: usize;
    /// Byte length of the public-key seed (must be 16, the AES-128 key length).
    const PK_SEED_BYTES: usize;
    /// Byte length of the per-signature salt.
    const SALT_BYTES: usize;
    /// Byte length of the message digest.
    const DIGEST_BYTES: usize;
    /// Byte length of the packed `O` matrix (`ceil(V*O/2)`).
    const O_BYTES: usize;
    /// Byte length of one packed P1 matrix family (`M * ceil(V*(V+1)/4)`).
    const P1_BYTES: usize;
    /// Byte length of one packed P2 matrix family (`M * ceil(V*O/2)`).
    const P2_BYTES: usize;
    /// Byte length of one packed P3 matrix family (`M * ceil(O*(O+1)/4)`).
    const P3_BYTES: usize;
    /// Byte length of the packed target vector `t` (`ceil(M/2)`).
    const M_BYTES: usize;
    /// Byte length of the compact secret key.
    const CSK_BYTES: usize;
    /// Byte length of the compact public key.
    const CPK_BYTES: usize;
    /// Byte length of a signature.
    const SIG_BYTES: usize;
}

macro_rules! define_mayo_parameter {
    (
        $name:ident, $display:expr,
        n = $n:expr, m = $m:expr, o = $o:expr, k = $k:expr,
        sk_seed_bytes = $sksb:expr, pk_seed_bytes = $pksb:expr,
        salt_bytes = $saltb:expr, digest_bytes = $db:expr
    ) => {
        #[doc = concat!("MAYO parameter set ", $display, ".")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl MayoParameter for $name {
            const NAME: &'static str = $display;
            const N: usize = $n;
            const M: usize = $m;
            const O: usize = $o;
            const V: usize = $n - $o;
            const K: usize = $k;
            const SK_SEED_BYTES: usize = $sksb;
            const PK_SEED_BYTES: usize = $pksb;
            const SALT_BYTES: usize = $saltb;
            const DIGEST_BYTES: usize = $db;
            const O_BYTES: usize = (($n - $o) * $o).div_ceil(2);
            const P1_BYTES: usize = $m * (($n - $o) * ($n - $o + 1)).div_ceil(4);
            const P2_BYTES: usize = $m * (($n - $o) * $o).div_ceil(2);
            const P3_BYTES: usize = $m * ($o * ($o + 1)).div_ceil(4);
            const M_BYTES: usize = $m.div_ceil(2);
            const CSK_BYTES: usize = $sksb;
            const CPK_BYTES: usize = $pksb + Self::P3_BYTES;
            const SIG_BYTES: usize = $n.div_ceil(2) + $saltb;
        }
    };
}

define_mayo_parameter!(
    Mayo1, "MAYO1",
    n = 66, m = 64, o = 8, k = 9,
    sk_seed_bytes = 24, pk_seed_bytes = 16,
    salt_bytes = 24, digest_bytes = 32
);

define_mayo_parameter!(
    Mayo2, "MAYO2",
    n = 78, m = 64, o = 18, k = 4,
    sk_seed_bytes = 24, pk_seed_bytes = 16,
    salt_bytes = 24, digest_bytes = 32
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mayo1_signature_length_matches_scenario() {
        // §8 scenario 1: ceil(66/2) + 24 = 57.
        assert_eq!(Mayo1::SIG_BYTES, 57);
    }

    #[test]
    fn mayo2_signature_length_matches_scenario() {
        // §8 scenario 2: ceil(78/2) + 24 = 63.
        assert_eq!(Mayo2::SIG_BYTES, 63);
    }

    #[test]
    fn byte_sizes_are_internally_consistent() {
        assert_eq!(Mayo1::V, 58);
        assert_eq!(Mayo1::O_BYTES, 232);
        assert_eq!(Mayo1::P1_BYTES, 64 * 856);
        assert_eq!(Mayo1::P2_BYTES, 64 * 232);
        assert_eq!(Mayo1::P3_BYTES, 64 * 18);
        assert_eq!(Mayo2::V, 60);
        assert_eq!(Mayo2::O_BYTES, 540);
    }
}
