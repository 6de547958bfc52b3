use testresult::TestResult;
use varsig::{
    presets, EcDsa, EcDsaCurve, EdDsa, EdDsaCurve, Error, ErrorKind, HashAlgorithm, Options,
    PayloadEncoding, Rsa, SignatureAlgorithm, Unexpected, Varsig, Version,
};

fn round_trip(value: Varsig) -> TestResult {
    let bytes = value.encode();
    let decoded = varsig::decode(&bytes)?;
    assert_eq!(decoded, value, "{}", hex::encode(&bytes));
    assert_eq!(decoded.encode(), bytes);
    Ok(())
}

#[test_log::test]
fn preset_vectors() -> TestResult {
    let pe = PayloadEncoding::DagCbor;
    let cases: Vec<(Varsig, &str)> = vec![
        (presets::ed25519(pe, Options::default())?.into(), "3401ed01ed011371"),
        (presets::ed448(pe, Options::default())?.into(), "3401ed0183241971"),
        (presets::rs256(0x100, pe, Options::default())?.into(), "3401852412800271"),
        (presets::rs384(0x100, pe, Options::default())?.into(), "3401852420800271"),
        (presets::rs512(0x100, pe, Options::default())?.into(), "3401852413800271"),
        (presets::es256(pe, Options::default())?.into(), "3401ec0180241271"),
        (presets::es256k(pe, Options::default())?.into(), "3401ec01e7011271"),
        (presets::es384(pe, Options::default())?.into(), "3401ec0181242071"),
        (presets::es512(pe, Options::default())?.into(), "3401ec0182241371"),
    ];

    for (value, expected) in cases {
        assert_eq!(hex::encode(value.encode()), expected);
        round_trip(value)?;
    }
    Ok(())
}

#[test_log::test]
fn verbatim_byte_vectors() -> TestResult {
    let pe = PayloadEncoding::Verbatim;
    let cases: [(Varsig, &[u8]); 6] = [
        (
            presets::rs256(256, pe, Options::default())?.into(),
            &[52, 1, 133, 36, 18, 128, 2, 95],
        ),
        (
            presets::es256(pe, Options::default())?.into(),
            &[52, 1, 236, 1, 128, 36, 18, 95],
        ),
        (
            presets::es512(pe, Options::default())?.into(),
            &[52, 1, 236, 1, 130, 36, 19, 95],
        ),
        (
            presets::es256k(pe, Options::default())?.into(),
            &[52, 1, 236, 1, 231, 1, 18, 95],
        ),
        (
            presets::eip191(pe, Options::default())?.into(),
            &[52, 1, 236, 1, 231, 1, 27, 145, 195, 3, 95],
        ),
        (
            presets::eip191(PayloadEncoding::DagCbor, Options::default())?.into(),
            &[52, 1, 236, 1, 231, 1, 27, 145, 195, 3, 113],
        ),
    ];

    for (value, expected) in cases {
        assert_eq!(value.encode(), expected);
        round_trip(value)?;
    }
    Ok(())
}

#[test_log::test]
fn legacy_ed25519_with_signature() -> TestResult {
    let signature = [0x5a; 64];
    let mut bytes = hex::decode("34ed011371")?;
    bytes.extend_from_slice(&signature);

    let decoded = varsig::decode(&bytes)?;
    assert_eq!(decoded.version(), Version::V0);
    assert_eq!(decoded.signature(), signature);

    let eddsa = decoded.as_eddsa().expect("expected EdDSA");
    assert_eq!(eddsa.curve(), EdDsaCurve::Ed25519);
    assert_eq!(eddsa.hash(), HashAlgorithm::Sha2_512);
    assert_eq!(decoded.encode(), bytes);
    Ok(())
}

#[test_log::test]
fn legacy_rsa_descriptor_without_signature() -> TestResult {
    let bytes = [0x34, 0x85, 0x24, 0x12, 0x80, 0x02, 0x71];
    let err = varsig::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingSignature);

    let descriptor = err.descriptor().expect("descriptor");
    assert_eq!(descriptor.version(), Version::V0);
    assert_eq!(descriptor.hash(), Some(HashAlgorithm::Sha2_256));
    assert_eq!(descriptor.as_rsa().map(Rsa::key_length), Some(256));
    assert_eq!(descriptor.encode(), bytes);
    Ok(())
}

#[test_log::test]
fn legacy_curve_descriptors_without_signature() -> TestResult {
    let bytes = hex::decode("34ed011371")?;
    let err = varsig::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingSignature);
    let descriptor = err.into_descriptor()?;
    assert_eq!(
        descriptor.as_eddsa().map(EdDsa::curve),
        Some(EdDsaCurve::Ed25519)
    );
    assert_eq!(descriptor.expected_signature_len(), Some(64));
    assert_eq!(descriptor.encode(), bytes);

    let bytes = hex::decode("34e7011271")?;
    let err = varsig::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingSignature);
    let descriptor = err.into_descriptor()?;
    assert_eq!(descriptor.version(), Version::V0);
    assert_eq!(
        descriptor.as_ecdsa().map(EcDsa::curve),
        Some(EcDsaCurve::Secp256k1)
    );
    assert_eq!(descriptor.hash(), Some(HashAlgorithm::Sha2_256));
    assert_eq!(descriptor.encode(), bytes);
    Ok(())
}

#[test_log::test]
fn every_edwards_combination_round_trips() -> TestResult {
    for curve in EdDsaCurve::ALL {
        for hash in HashAlgorithm::ALL {
            for pe in PayloadEncoding::ALL {
                round_trip(EdDsa::new(curve, hash, pe, Options::default())?.into())?;

                let signature = vec![0xee; usize::try_from(curve.signature_len())?];
                round_trip(EdDsa::new(curve, hash, pe, Options::legacy(signature))?.into())?;
            }
        }
    }
    Ok(())
}

#[test_log::test]
fn every_ecdsa_combination_round_trips() -> TestResult {
    for curve in EcDsaCurve::ALL {
        for hash in HashAlgorithm::ALL {
            for pe in PayloadEncoding::ALL {
                round_trip(EcDsa::new(curve, hash, pe, Options::default())?.into())?;

                let signature = vec![0xec; usize::try_from(curve.signature_len())?];
                round_trip(EcDsa::new(curve, hash, pe, Options::legacy(signature))?.into())?;
            }
        }
    }
    Ok(())
}

#[test_log::test]
fn every_rsa_combination_round_trips() -> TestResult {
    for key_length in [128u64, 256, 384, 512] {
        for hash in HashAlgorithm::ALL {
            for pe in PayloadEncoding::ALL {
                round_trip(Rsa::new(hash, key_length, pe, Options::default())?.into())?;

                let signature = vec![0x12; usize::try_from(key_length)?];
                round_trip(Rsa::new(hash, key_length, pe, Options::legacy(signature))?.into())?;
            }
        }
    }
    Ok(())
}

#[test_log::test]
fn explicit_version_zero_decodes_and_reencodes_without_it() -> TestResult {
    let mut bytes = vec![0x34, 0x00, 0xed, 0x01, 0x13, 0x71];
    bytes.extend_from_slice(&[0x01; 64]);

    let decoded = varsig::decode(&bytes)?;
    assert_eq!(decoded.version(), Version::V0);

    let mut canonical = vec![0x34, 0xed, 0x01, 0x13, 0x71];
    canonical.extend_from_slice(&[0x01; 64]);
    assert_eq!(decoded.encode(), canonical);
    Ok(())
}

#[test_log::test]
fn reserved_version_is_rejected() {
    let err = varsig::decode(&[0x34, 0x02]).unwrap_err();
    assert!(matches!(err, Error::UnsupportedVersion(Unexpected::Value(2))));

    let err = varsig::decode(&[0x34, 0x3f, 0xed, 0x01]).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedVersion(Unexpected::Value(63))
    ));
}

#[test_log::test]
fn unknown_legacy_discriminator() {
    let err = varsig::decode(&[0x34, 0x64]).unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownDiscriminator(Unexpected::Value(0x64))
    ));
}

#[test_log::test]
fn v1_trailing_byte_is_a_signature() -> TestResult {
    let err = varsig::decode(&hex::decode("3401ed01ed01137100")?).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedSignaturePresent);
    Ok(())
}

#[test_log::test]
fn v0_wrong_length_is_rejected() {
    let mut bytes = vec![0x34, 0xe7, 0x01, 0x12, 0x71];
    bytes.extend_from_slice(&[0x01; 65]);

    let err = varsig::decode(&bytes).unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedSignatureSize {
            expected: 64,
            actual: 65
        }
    ));
}

#[test_log::test]
fn unknown_field_values_are_rejected() {
    let cases: [(&[u8], ErrorKind); 4] = [
        (&[0x34, 0x01, 0xed, 0x01, 0xed, 0x01, 0x99, 0x01, 0x71], ErrorKind::UnknownHash),
        (&[0x34, 0x01, 0xed, 0x01, 0xe7, 0x01, 0x13, 0x71], ErrorKind::UnknownEdDsaCurve),
        (&[0x34, 0x01, 0xec, 0x01, 0xed, 0x01, 0x12, 0x71], ErrorKind::UnknownEcDsaCurve),
        (
            &[0x34, 0x01, 0xed, 0x01, 0xed, 0x01, 0x13, 0x72],
            ErrorKind::UnsupportedPayloadEncoding,
        ),
    ];

    for (bytes, kind) in cases {
        let err = varsig::decode(bytes).unwrap_err();
        assert_eq!(err.kind(), kind, "{}", hex::encode(bytes));
        assert!(!err.is_eof());
    }
}

#[test_log::test]
fn every_truncation_of_a_v1_varsig_is_eof() -> TestResult {
    let full = presets::eip191(PayloadEncoding::DagCbor, Options::default())?.encode();

    for len in 0..full.len() {
        let err = varsig::decode(&full[..len]).unwrap_err();
        assert!(err.is_eof(), "truncated at {len}: {err}");
    }
    Ok(())
}

#[test_log::test]
fn decode_stream_accepts_any_reader() -> TestResult {
    let bytes = hex::decode("3401ec0180241271")?;
    let decoded = varsig::decode_stream(std::io::Cursor::new(bytes))?;
    assert_eq!(
        decoded.as_ecdsa().map(EcDsa::curve),
        Some(EcDsaCurve::P256)
    );
    Ok(())
}
