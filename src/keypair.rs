// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MAYO keypair generation.

use crate::error::{Error, Result};
use crate::keygen::{compact_keygen, derive_cpk_from_csk};
use crate::params::MayoParameter;
use crate::signing_key::SigningKey;
use crate::verifying_key::VerifyingKey;
use rand::CryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A MAYO keypair containing both signing and verifying keys.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct KeyPair<P: MayoParameter> {
    signing_key: SigningKey<P>,
    verifying_key: VerifyingKey<P>,
}

impl<P: MayoParameter> AsRef<VerifyingKey<P>> for KeyPair<P> {
    fn as_ref(&self) -> &VerifyingKey<P> {
        &self.verifying_key
    }
}

impl<P: MayoParameter> signature::KeypairRef for KeyPair<P> {
    type VerifyingKey = VerifyingKey<P>;
}

impl<P: MayoParameter> core::fmt::Debug for KeyPair<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("variant", &P::NAME)
            .field("signing_key", &self.signing_key)
            .field("verifying_key", &self.verifying_key)
            .finish()
    }
}

impl<P: MayoParameter> PartialEq for KeyPair<P> {
    fn eq(&self, other: &Self) -> bool {
        self.signing_key == other.signing_key && self.verifying_key == other.verifying_key
    }
}

impl<P: MayoParameter> Eq for KeyPair<P> {}

impl<P: MayoParameter> Zeroize for KeyPair<P> {
    fn zeroize(&mut self) {
        self.signing_key.zeroize();
    }
}

impl<P: MayoParameter> ZeroizeOnDrop for KeyPair<P> {}

impl<P: MayoParameter> KeyPair<P> {
    /// Generate a new random keypair.
    pub fn generate(rng: &mut impl CryptoRng) -> Result<Self> {
        let (csk, cpk) = compact_keygen::<P>(rng)?;
        Ok(Self {
            signing_key: SigningKey::try_from(csk)?,
            verifying_key: VerifyingKey::try_from(cpk)?,
        })
    }

    /// Generate a keypair from a specific seed.
    ///
    /// The seed must be exactly `SK_SEED_BYTES` long.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        if seed.len() != P::SK_SEED_BYTES {
            return Err(Error::InvalidSeedLength {
                expected: P::SK_SEED_BYTES,
                got: seed.len(),
            });
        }

        let csk = seed.to_vec();
        let cpk = derive_cpk_from_csk::<P>(&csk)?;

        Ok(Self {
            signing_key: SigningKey::try_from(csk)?,
            verifying_key: VerifyingKey::try_from(cpk)?,
        })
    }

    /// Construct a keypair from a [`SigningKey`], deriving the corresponding [`VerifyingKey`].
    pub fn from_signing_key(signing_key: SigningKey<P>) -> Result<Self> {
        let cpk = derive_cpk_from_csk::<P>(signing_key.as_ref())?;
        Ok(Self {
            signing_key,
            verifying_key: VerifyingKey::try_from(cpk)?,
        })
    }

    /// Get a reference to the signing key.
    pub fn signing_key(&self) -> &SigningKey<P> {
        &self.signing_key
    }

    /// Get a reference to the verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey<P> {
        &self.verifying_key
    }
}
