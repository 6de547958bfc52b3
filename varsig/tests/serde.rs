#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};
use testresult::TestResult;
use varsig::{presets, Options, PayloadEncoding, Varsig};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct SigPayload {
    #[serde(rename = "h")]
    header: Varsig,

    #[serde(rename = "ucan/dlg@1.0.0-rc.1")]
    payload: String,
}

#[test_log::test]
fn varsig_is_a_cbor_byte_string() -> TestResult {
    let varsig: Varsig = presets::ed25519(PayloadEncoding::DagCbor, Options::default())?.into();
    let cbor = serde_ipld_dagcbor::to_vec(&varsig)?;

    // major type 2, length 8
    assert_eq!(cbor[0], 0x48);
    assert_eq!(cbor[1..], varsig.encode());

    let decoded: Varsig = serde_ipld_dagcbor::from_slice(&cbor)?;
    assert_eq!(decoded, varsig);
    Ok(())
}

#[test_log::test]
fn embedded_header_round_trips() -> TestResult {
    let original = SigPayload {
        header: presets::eip191(PayloadEncoding::DagCbor, Options::default())?.into(),
        payload: "delegation".to_string(),
    };

    let cbor = serde_ipld_dagcbor::to_vec(&original)?;
    let decoded: SigPayload = serde_ipld_dagcbor::from_slice(&cbor)?;
    assert_eq!(decoded, original);
    Ok(())
}

#[test_log::test]
fn legacy_header_without_signature_is_a_serde_error() {
    let cbor = [0x47, 0x34, 0x85, 0x24, 0x12, 0x80, 0x02, 0x71];
    let result = serde_ipld_dagcbor::from_slice::<Varsig>(&cbor);

    let err = result.unwrap_err().to_string();
    assert!(err.contains("missing signature"), "{err}");
}

#[test_log::test]
fn malformed_bytes_are_a_serde_error() {
    let cbor = [0x42, 0x34, 0x02];
    assert!(serde_ipld_dagcbor::from_slice::<Varsig>(&cbor).is_err());
}
