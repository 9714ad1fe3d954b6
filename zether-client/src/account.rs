//! Account keypairs.

use ark_std::Zero;
use rand::{CryptoRng, RngCore};

use zether_primitives::{mul_generator, random_scalar, Point, ProtocolParams, Scalar};

use crate::ClientError;

/// A confidential-token account: `pk = sk * G`, enforced by construction.
/// The secret key never leaves the holder's process; nothing in this crate
/// serializes it.
#[derive(Debug, Clone)]
pub struct Account {
    sk: Scalar,
    pk: Point,
}

impl Account {
    /// Generate a fresh account from a cryptographically secure RNG.
    pub fn generate<R: RngCore + CryptoRng>(params: &ProtocolParams, rng: &mut R) -> Self {
        let sk = random_scalar(params, rng, true);
        let pk = mul_generator(params, &sk);
        Self { sk, pk }
    }

    /// Rebuild an account from a stored secret key.
    pub fn from_secret(params: &ProtocolParams, sk: Scalar) -> Result<Self, ClientError> {
        if sk.is_zero() {
            return Err(ClientError::Malformed("secret key must be nonzero"));
        }
        let pk = mul_generator(params, &sk);
        Ok(Self { sk, pk })
    }

    pub fn public_key(&self) -> &Point {
        &self.pk
    }

    /// Witness-only; callers must never place this in a public field.
    pub fn secret_key(&self) -> &Scalar {
        &self.sk
    }
}
