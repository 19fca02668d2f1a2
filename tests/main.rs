use hash_drbg::profile::{HashId, Profile, SHA1_PROFILE, SHA256_PROFILE, SHA512_PROFILE};
use hash_drbg::self_test::run_kat;
use hash_drbg::{DrbgEngine, DrbgError, Mode};
use hex_literal::hex;
use sha1::Sha1;
use sha2::Sha256;
use sha2::Sha512;

/// Scenario: SHA-256 at strength 112, a single `generate` call with
/// additional input, compared directly against the known-answer vector.
#[test]
fn sha256_strength_112_end_to_end() {
    let mut drbg = DrbgEngine::<Sha256>::instantiate(
        &SHA256_PROFILE,
        &hex!("d956caa24039e76f58616e0969afa2d7b7087401ee2d8777"),
        &hex!("32a2ef15983e3c1f66e6032a"),
        &[],
    )
    .expect("instantiate");

    let mut out = [0u8; 32];
    drbg.generate(&mut out, &hex!("7ba5a522580b41e1a4f540f9fe3daaf95df772740a199651"))
        .expect("generate");

    assert_eq!(
        out,
        hex!("8772e9ef034ca519e923798014 08b1b8d222ea9f27871c9d 9897c0e355df9200")
    );
    assert_eq!(drbg.mode(), Mode::Ready);
}

/// Scenario: SHA-512 at strength 256, instantiated with a personalization
/// string and no additional input; two back-to-back `generate` calls, the
/// first discarded, the second compared against the vector.
#[test]
fn sha512_strength_256_with_personalization_discards_first_block() {
    let mut drbg = DrbgEngine::<Sha512>::instantiate(
        &SHA512_PROFILE,
        &hex!("ee41942a7ffffec73cf65a2fadb572ad88b8178d2e9bbbe36a7f4f9967bb59bd"),
        &hex!("93d0caac1f57e79f3a95b3d089e28d84"),
        &hex!("461a6307a195715a45890a449152ca8a29888e887f819fcc9e081ef0385db0b6"),
    )
    .expect("instantiate");

    let mut discard = [0u8; 64];
    drbg.generate(&mut discard, &[]).expect("first generate");

    let mut out = [0u8; 64];
    drbg.generate(&mut out, &[]).expect("second generate");

    assert_eq!(
        out,
        hex!(
            "E7FFC20B3384EEBD83BA0390E83862F77BCCB455A678AD9CA27CD3EBE5752789
             0315AA2F4A1C52D5EBFB7FE2634EDCE3FCD733D288E476045B9AC84B6415F08D"
        )
    );
}

/// Scenario: SHA-1 at strength 112 supplies a personalization string and no
/// generate-time additional input. Slot fields are independent of each
/// other, so a profile may populate one without the other.
#[test]
fn sha1_strength_112_uses_personalization_with_no_additional_input() {
    let mut drbg = DrbgEngine::<Sha1>::instantiate(
        &SHA1_PROFILE,
        &hex!("dc106ace9ff57c68131ea2ee75c6585a"),
        &hex!("6a360c6f7bd4601e"),
        &hex!("6bd15891569525 24ba1f9b140659baf2"),
    )
    .expect("instantiate");

    let mut discard = [0u8; 64];
    drbg.generate(&mut discard, &[]).expect("first generate");

    let mut out = [0u8; 64];
    drbg.generate(&mut out, &[]).expect("second generate");

    assert_eq!(
        out,
        hex!(
            "3654D194A757D6293CCD301439A2F63E81CBBB031F6B4870FF0C41CF12AF63F
             1C8E4D25F44B909F276DD092373A20DB2AD6680652CE9A87BA6E56EAB201CBEC"
        )
    );
}

/// A `reseed` call from `Ready` re-derives `V`/`C` and resets
/// `reseed_counter`; subsequent `generate` calls succeed normally.
#[test]
fn reseed_round_trip_keeps_the_engine_usable() {
    let mut drbg = DrbgEngine::<Sha256>::instantiate(
        &SHA256_PROFILE,
        &[0x01; 24],
        &[0x02; 12],
        b"reseed round trip",
    )
    .expect("instantiate");

    let mut before = [0u8; 32];
    drbg.generate(&mut before, &[]).expect("generate before reseed");

    drbg.reseed(&[0x03; 24], b"additional").expect("reseed");
    assert_eq!(drbg.mode(), Mode::Ready);

    let mut after = [0u8; 32];
    drbg.generate(&mut after, &[]).expect("generate after reseed");
    assert_ne!(before, after);
}

/// `generate` rejects a request larger than `max_bytes_per_request` and
/// leaves the engine in `Ready`, untouched.
#[test]
fn oversize_generate_request_is_rejected() {
    let mut drbg =
        DrbgEngine::<Sha256>::instantiate(&SHA256_PROFILE, &[0x09; 24], &[0x0a; 12], &[])
            .expect("instantiate");

    let mut out = vec![0u8; SHA256_PROFILE.max_bytes_per_request + 1];
    let err = drbg.generate(&mut out, &[]).unwrap_err();
    assert_eq!(
        err,
        DrbgError::RequestTooLarge {
            requested: out.len(),
            max: SHA256_PROFILE.max_bytes_per_request,
        }
    );
    assert_eq!(drbg.mode(), Mode::Ready);
}

/// The self-test suite passes on the unmodified profile tables.
#[test]
fn self_test_passes_on_every_shipped_profile() {
    run_kat::<Sha1>(&SHA1_PROFILE).expect("sha1 kat");
    run_kat::<Sha256>(&SHA256_PROFILE).expect("sha256 kat");
    run_kat::<Sha512>(&SHA512_PROFILE).expect("sha512 kat");
}

/// A corrupted known-answer vector is detected, not silently accepted: a
/// self-test run against a tampered profile reports `KatMismatch` rather
/// than `Ok`.
#[test]
fn corrupted_known_answer_vector_is_detected() {
    let mut corrupted = SHA256_PROFILE.kat_vectors;
    let mut bad_expected = corrupted[0].expected.unwrap().to_vec();
    bad_expected[0] ^= 0xff;
    let bad_expected: &'static [u8] = Box::leak(bad_expected.into_boxed_slice());
    corrupted[0].expected = Some(bad_expected);

    let poisoned = Profile {
        hash_id: SHA256_PROFILE.hash_id,
        seedlen: SHA256_PROFILE.seedlen,
        block_len: SHA256_PROFILE.block_len,
        output_block_len: SHA256_PROFILE.output_block_len,
        max_bytes_per_request: SHA256_PROFILE.max_bytes_per_request,
        reseed_interval: SHA256_PROFILE.reseed_interval,
        max_entropy_len: SHA256_PROFILE.max_entropy_len,
        max_nonce_len: SHA256_PROFILE.max_nonce_len,
        max_personalization_len: SHA256_PROFILE.max_personalization_len,
        max_additional_input_len: SHA256_PROFILE.max_additional_input_len,
        supported_strengths: SHA256_PROFILE.supported_strengths,
        is_fips: SHA256_PROFILE.is_fips,
        health_check_interval: SHA256_PROFILE.health_check_interval,
        kat_vectors: corrupted,
    };
    let poisoned: &'static Profile = Box::leak(Box::new(poisoned));

    let err = run_kat::<Sha256>(poisoned).unwrap_err();
    assert_eq!(err, DrbgError::KatMismatch { hash: HashId::Sha256, strength: 112 });
}

/// Same entropy/nonce/personalization reproduces the same output
/// (determinism); changing the nonce changes it (sensitivity).
#[test]
fn output_is_deterministic_and_nonce_sensitive() {
    let mut a = DrbgEngine::<Sha256>::instantiate(&SHA256_PROFILE, &[0x42; 24], &[0x01; 12], &[])
        .expect("instantiate a");
    let mut b = DrbgEngine::<Sha256>::instantiate(&SHA256_PROFILE, &[0x42; 24], &[0x01; 12], &[])
        .expect("instantiate b");
    let mut c = DrbgEngine::<Sha256>::instantiate(&SHA256_PROFILE, &[0x42; 24], &[0x02; 12], &[])
        .expect("instantiate c");

    let mut out_a = [0u8; 32];
    let mut out_b = [0u8; 32];
    let mut out_c = [0u8; 32];
    a.generate(&mut out_a, &[]).expect("generate a");
    b.generate(&mut out_b, &[]).expect("generate b");
    c.generate(&mut out_c, &[]).expect("generate c");

    assert_eq!(out_a, out_b);
    assert_ne!(out_a, out_c);
}
