use digest::Digest;
use zeroize::Zeroize;

use crate::byte_stack::ByteStack;
use crate::error::DrbgError;

/// The SP 800-90A hash derivation function, `Hash_df(seed, outl)`.
///
/// Produces exactly `out.len()` bytes by repeatedly hashing
/// `counter || no_of_bits || seed`, incrementing the single-octet `counter`
/// each round, and truncating the final round's digest. `counter` is a
/// single octet, so the caller must not request more than
/// `255 * digest_len` bytes; violating that precondition returns
/// [`DrbgError::OutputTooLarge`] rather than silently wrapping the counter.
pub fn hash_df<D: Digest>(seed: &mut ByteStack, out: &mut [u8]) -> Result<(), DrbgError> {
    let digest_len = <D as Digest>::output_size();
    let outl = out.len();
    if outl > 255usize.saturating_mul(digest_len) {
        return Err(DrbgError::OutputTooLarge);
    }

    let no_of_bits = ((outl as u64) * 8) as u32;
    let no_of_bits = no_of_bits.to_be_bytes();

    let mut scratch = vec![0u8; digest_len];
    let mut counter: u8 = 1;
    let mut produced = 0usize;
    while produced < outl {
        let counter_byte = [counter];

        // S' = counter || no_of_bits || S, built fresh each round since
        // only the counter octet changes.
        let mut round = ByteStack::new();
        round.insert(&no_of_bits);
        round.insert(&counter_byte);
        seed.reset();
        while let Some(fragment) = seed.extract() {
            round.append(fragment);
        }

        let mut hasher = D::new();
        round.reset();
        while let Some(fragment) = round.extract() {
            hasher.update(fragment);
        }
        let digest = hasher.finalize();
        scratch.copy_from_slice(&digest);

        let take = core::cmp::min(outl - produced, digest_len);
        out[produced..produced + take].copy_from_slice(&scratch[..take]);
        produced += take;
        counter = counter.wrapping_add(1);
    }
    scratch.zeroize();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Sha256;

    #[test]
    fn matches_single_round_concatenation() {
        let input = b"known answer seed material";
        let mut seed = ByteStack::new();
        seed.append(input);

        let mut out = [0u8; 32];
        hash_df::<Sha256>(&mut seed, &mut out).expect("outl within bound");

        let no_of_bits = ((32u32) * 8).to_be_bytes();
        let mut hasher = Sha256::new();
        hasher.update([1u8]);
        hasher.update(no_of_bits);
        hasher.update(input);
        let expected = hasher.finalize();

        assert_eq!(&out[..], &expected[..]);
    }

    #[test]
    fn truncates_multi_round_output() {
        let mut seed = ByteStack::new();
        seed.append(b"more than one block of output needed here");

        let mut out = [0u8; 40];
        hash_df::<Sha256>(&mut seed, &mut out).expect("outl within bound");

        let no_of_bits = ((40u32) * 8).to_be_bytes();
        let mut first = Sha256::new();
        first.update([1u8]);
        first.update(no_of_bits);
        first.update(b"more than one block of output needed here");
        let d1 = first.finalize();

        let mut second = Sha256::new();
        second.update([2u8]);
        second.update(no_of_bits);
        second.update(b"more than one block of output needed here");
        let d2 = second.finalize();

        let mut expected = Vec::new();
        expected.extend_from_slice(&d1);
        expected.extend_from_slice(&d2);
        expected.truncate(40);

        assert_eq!(&out[..], &expected[..]);
    }

    #[test]
    fn rejects_output_longer_than_255_blocks() {
        let mut seed = ByteStack::new();
        let mut out = vec![0u8; 255 * 32 + 1];
        assert_eq!(hash_df::<Sha256>(&mut seed, &mut out), Err(DrbgError::OutputTooLarge));
    }
}
