use core::marker::PhantomData;

use digest::Digest;
use zeroize::Zeroize;

use crate::arith::add_seedlen;
use crate::byte_stack::ByteStack;
use crate::error::DrbgError;
use crate::hash_df::hash_df;
use crate::profile::Profile;
use crate::state::{DrbgState, Mode};

const DOMAIN_ADDITIONAL_INPUT: u8 = 0x02;
const DOMAIN_GENERATE_TAIL: u8 = 0x03;
const DOMAIN_RESEED: u8 = 0x01;
const DOMAIN_C_DERIVE: u8 = 0x00;

/// A Hash_DRBG instance, generic over the underlying hash primitive.
///
/// `D` is monomorphized per concrete hash (`Sha256`, `Sha512`, ...); there
/// is exactly one `DrbgEngine<D>` type per hash in use, so no dynamic
/// dispatch is needed to reach the digest. An instance owns its
/// [`DrbgState`] (`V`, `C`, `reseed_counter`, `mode`) and a reference to
/// the static [`Profile`] it was instantiated against.
pub struct DrbgEngine<D: Digest + Clone> {
    profile: &'static Profile,
    state: DrbgState,
    _digest: PhantomData<D>,
}

fn check_len(which: &'static str, len: usize, max: usize) -> Result<(), DrbgError> {
    if len > max {
        Err(DrbgError::InputTooLarge { which, len, max })
    } else {
        Ok(())
    }
}

impl<D: Digest + Clone> DrbgEngine<D> {
    /// `Instantiate`: derives `V` and `C` from `entropy_input || nonce ||
    /// personalization_string` via `Hash_df`, and sets `reseed_counter = 1`.
    pub fn instantiate(
        profile: &'static Profile,
        entropy_input: &[u8],
        nonce: &[u8],
        personalization: &[u8],
    ) -> Result<Self, DrbgError> {
        check_len("entropy_input", entropy_input.len(), profile.max_entropy_len)?;
        check_len("nonce", nonce.len(), profile.max_nonce_len)?;
        check_len(
            "personalization",
            personalization.len(),
            profile.max_personalization_len,
        )?;

        let mut state = DrbgState::new(profile.seedlen);

        let mut seed_material = ByteStack::new();
        seed_material.append(entropy_input);
        seed_material.append(nonce);
        seed_material.append(personalization);
        hash_df::<D>(&mut seed_material, &mut state.v)?;

        let prefix = [DOMAIN_C_DERIVE];
        let mut c_material = ByteStack::new();
        c_material.append(&prefix);
        c_material.append(&state.v);
        hash_df::<D>(&mut c_material, &mut state.c)?;

        state.reseed_counter = 1;
        state.mode = Mode::Ready;

        Ok(DrbgEngine { profile, state, _digest: PhantomData })
    }

    /// `Reseed`: derives a fresh `V`/`C` from `0x01 || V || entropy_input ||
    /// additional_input`, resetting `reseed_counter` to 1. Valid from
    /// `Ready` or `ReseedRequired`.
    pub fn reseed(&mut self, entropy_input: &[u8], additional_input: &[u8]) -> Result<(), DrbgError> {
        match &self.state.mode {
            Mode::Uninitialised | Mode::Error(_) => return Err(DrbgError::StateInvalid),
            Mode::Ready | Mode::ReseedRequired => {}
        }
        check_len("entropy_input", entropy_input.len(), self.profile.max_entropy_len)?;
        check_len(
            "additional_input",
            additional_input.len(),
            self.profile.max_additional_input_len,
        )?;

        let prefix = [DOMAIN_RESEED];
        let mut seed_material = ByteStack::new();
        seed_material.append(&prefix);
        seed_material.append(&self.state.v);
        seed_material.append(entropy_input);
        seed_material.append(additional_input);
        let mut new_v = vec![0u8; self.profile.seedlen];
        hash_df::<D>(&mut seed_material, &mut new_v)?;
        self.state.v = new_v;

        let prefix = [DOMAIN_C_DERIVE];
        let mut c_material = ByteStack::new();
        c_material.append(&prefix);
        c_material.append(&self.state.v);
        hash_df::<D>(&mut c_material, &mut self.state.c)?;

        self.state.reseed_counter = 1;
        self.state.mode = Mode::Ready;
        Ok(())
    }

    /// `Generate`: produces `out.len()` pseudorandom bytes via `Hashgen`,
    /// mixes in `additional_input` beforehand if non-empty, then updates
    /// `V` with the generate-tail hash, `C`, and `reseed_counter`.
    ///
    /// Returns [`DrbgError::ReseedNeeded`] (and transitions to
    /// `Mode::ReseedRequired`) once `reseed_counter` exceeds the profile's
    /// `reseed_interval`, without consuming any output.
    pub fn generate(&mut self, out: &mut [u8], additional_input: &[u8]) -> Result<(), DrbgError> {
        match &self.state.mode {
            Mode::Uninitialised | Mode::Error(_) => return Err(DrbgError::StateInvalid),
            Mode::ReseedRequired => return Err(DrbgError::ReseedNeeded),
            Mode::Ready => {}
        }
        if out.len() > self.profile.max_bytes_per_request {
            return Err(DrbgError::RequestTooLarge {
                requested: out.len(),
                max: self.profile.max_bytes_per_request,
            });
        }
        check_len(
            "additional_input",
            additional_input.len(),
            self.profile.max_additional_input_len,
        )?;

        if self.state.reseed_counter > self.profile.reseed_interval {
            self.state.mode = Mode::ReseedRequired;
            return Err(DrbgError::ReseedNeeded);
        }

        if !additional_input.is_empty() {
            let prefix = [DOMAIN_ADDITIONAL_INPUT];
            let mut w_material = ByteStack::new();
            w_material.append(&prefix);
            w_material.append(&self.state.v);
            w_material.append(additional_input);
            let mut hasher = D::new();
            w_material.reset();
            while let Some(fragment) = w_material.extract() {
                hasher.update(fragment);
            }
            let w = hasher.finalize();
            add_seedlen(&mut self.state.v, &w);
        }

        self.hashgen(out);

        let mut tail_hasher = D::new();
        tail_hasher.update([DOMAIN_GENERATE_TAIL]);
        tail_hasher.update(&self.state.v);
        let h = tail_hasher.finalize();

        add_seedlen(&mut self.state.v, &h);
        let c_snapshot = self.state.c.clone();
        add_seedlen(&mut self.state.v, &c_snapshot);
        let counter_be = self.state.reseed_counter.to_be_bytes();
        add_seedlen(&mut self.state.v, &counter_be);

        self.state.reseed_counter = self.state.reseed_counter.wrapping_add(1);
        Ok(())
    }

    /// Consumes the engine. `Drop` on the underlying `DrbgState` zeroizes
    /// `V` and `C` regardless of whether this is called explicitly.
    pub fn uninstantiate(self) {}

    /// The engine's current life-cycle mode.
    pub fn mode(&self) -> Mode {
        self.state.mode.clone()
    }

    /// `Hashgen(requested_no_of_bits, V)`: repeatedly hashes a running
    /// seedlen-wide counter seeded from `V`, concatenating digests and
    /// truncating to `out.len()` bytes. Does not mutate `self.state.v`;
    /// the caller (`generate`) folds the post-loop `V` update in
    /// separately.
    fn hashgen(&mut self, out: &mut [u8]) {
        let digest_len = <D as Digest>::output_size();
        let mut data = self.state.v.clone();
        let mut block = vec![0u8; digest_len];
        let mut produced = 0usize;
        while produced < out.len() {
            let mut hasher = D::new();
            hasher.update(&data);
            let digest = hasher.finalize();
            block.copy_from_slice(&digest);

            let take = core::cmp::min(out.len() - produced, digest_len);
            out[produced..produced + take].copy_from_slice(&block[..take]);
            produced += take;

            add_seedlen(&mut data, &[1u8]);
        }
        block.zeroize();
        data.zeroize();
    }
}
