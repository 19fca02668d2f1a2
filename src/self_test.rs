use core::sync::atomic::{AtomicU32, Ordering};

use digest::Digest;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::engine::DrbgEngine;
use crate::error::DrbgError;
use crate::profile::{HashId, Profile};

/// Runs every populated known-answer vector in `profile`'s table through
/// `instantiate`/`reseed`/`generate` and compares the output to the
/// recorded expected bytes with a constant-time comparison.
///
/// Slots with `generate_additional_input: None` follow the "generate
/// twice, discard the first block" convention the source vectors use when
/// no additional input distinguishes the two calls; slots with an
/// additional input compare directly against a single `generate` call.
pub fn run_kat<D: Digest + Clone>(profile: &'static Profile) -> Result<(), DrbgError> {
    for &strength in profile.supported_strengths.iter() {
        if strength == 0 {
            continue;
        }
        let (kat, _slot) = profile
            .kat_for_strength(strength)
            .ok_or(DrbgError::BadHashId)?;
        let expected = match kat.expected {
            Some(expected) => expected,
            None => continue,
        };

        let mut engine = DrbgEngine::<D>::instantiate(
            profile,
            kat.entropy_input.unwrap_or(&[]),
            kat.nonce.unwrap_or(&[]),
            kat.personalization.unwrap_or(&[]),
        )?;
        if let Some(reseed_entropy_input) = kat.reseed_entropy_input {
            engine.reseed(reseed_entropy_input, &[])?;
        }

        let mut produced = vec![0u8; expected.len()];
        match kat.generate_additional_input {
            Some(additional_input) => {
                engine.generate(&mut produced, additional_input)?;
            }
            None => {
                let mut discard = vec![0u8; expected.len()];
                engine.generate(&mut discard, &[])?;
                engine.generate(&mut produced, &[])?;
                discard.zeroize();
            }
        }

        let matches: bool = produced.as_slice().ct_eq(expected).into();
        produced.zeroize();
        if !matches {
            return Err(DrbgError::KatMismatch { hash: profile.hash_id, strength });
        }
    }
    Ok(())
}

fn profile_index(hash_id: HashId) -> usize {
    match hash_id {
        HashId::Sha1 => 0,
        HashId::Sha224 => 1,
        HashId::Sha256 => 2,
        HashId::Sha384 => 3,
        HashId::Sha512 => 4,
    }
}

static HEALTH_COUNTERS: [AtomicU32; 5] = [
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
];

/// Number of `instantiate_with_self_test` calls recorded so far for the
/// given hash's profile. Exposed for tests and operational observability;
/// the counter itself is `'static` and shared, so it is an atomic rather
/// than a field on any single `DrbgEngine`.
pub fn health_check_count(hash_id: HashId) -> u32 {
    HEALTH_COUNTERS[profile_index(hash_id)].load(Ordering::SeqCst)
}

/// Like [`DrbgEngine::instantiate`], but every `profile.health_check_interval`-th
/// call first re-runs the full known-answer test suite for `profile`,
/// surfacing [`DrbgError::KatMismatch`] instead of returning a
/// (potentially compromised) engine.
pub fn instantiate_with_self_test<D: Digest + Clone>(
    profile: &'static Profile,
    entropy_input: &[u8],
    nonce: &[u8],
    personalization: &[u8],
) -> Result<DrbgEngine<D>, DrbgError> {
    let counter = &HEALTH_COUNTERS[profile_index(profile.hash_id)];
    let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
    if profile.health_check_interval != 0 && count % profile.health_check_interval == 0 {
        run_kat::<D>(profile)?;
    }
    DrbgEngine::instantiate(profile, entropy_input, nonce, personalization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha1::Sha1;
    use sha2::{Sha224, Sha256, Sha384, Sha512};

    #[test]
    fn sha1_profile_kat_passes() {
        run_kat::<Sha1>(&crate::profile::SHA1_PROFILE).expect("sha1 kat");
    }

    #[test]
    fn sha224_profile_kat_passes() {
        run_kat::<Sha224>(&crate::profile::SHA224_PROFILE).expect("sha224 kat");
    }

    #[test]
    fn sha256_profile_kat_passes() {
        run_kat::<Sha256>(&crate::profile::SHA256_PROFILE).expect("sha256 kat");
    }

    #[test]
    fn sha384_profile_kat_passes() {
        run_kat::<Sha384>(&crate::profile::SHA384_PROFILE).expect("sha384 kat");
    }

    #[test]
    fn sha512_profile_kat_passes() {
        run_kat::<Sha512>(&crate::profile::SHA512_PROFILE).expect("sha512 kat");
    }

    #[test]
    fn instantiate_with_self_test_increments_health_counter() {
        let before = health_check_count(HashId::Sha256);
        instantiate_with_self_test::<Sha256>(&crate::profile::SHA256_PROFILE, &[0xaa; 24], &[0xbb; 12], &[])
            .expect("instantiate");
        assert_eq!(health_check_count(HashId::Sha256), before + 1);
    }
}
