//! Decoding of generated artifacts.
//!
//! The service embeds the generated file in its JSON response as standard
//! alphabet, padded base64. Decoding is all-or-nothing: malformed input yields
//! [`GreypotError::Decoding`] and never a partial byte sequence.

use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::{GenerateResponse, GreypotError};

/// Standard alphabet with strict padding. Non-zero trailing bits in the last
/// symbol are accepted.
const ARTIFACT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Raw bytes of a generated artifact, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedArtifact(Vec<u8>);

impl DecodedArtifact {
    /// Returns the artifact bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the artifact, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of bytes in the artifact.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the artifact holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for DecodedArtifact {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Decodes the base64 `data` field of `response`.
///
/// # Errors
///
/// Returns [`GreypotError::Decoding`] if the text contains characters outside
/// the standard alphabet or has invalid padding or length.
pub fn decode(response: &GenerateResponse) -> Result<DecodedArtifact, GreypotError> {
    let bytes = ARTIFACT_ENGINE
        .decode(response.encoded_data())
        .map_err(|source| GreypotError::Decoding {
            report_id: response.report_id().to_owned(),
            source,
        })?;
    tracing::trace!(report_id = response.report_id(), bytes = bytes.len(), "Decoded artifact");
    Ok(DecodedArtifact(bytes))
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use proptest::prelude::*;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn decodes_standard_base64() {
        let response = GenerateResponse::new("R1", "pdf", "SGVsbG8=");
        let artifact = decode(&response).unwrap();
        assert_eq!(artifact.as_bytes(), b"Hello");
        assert_eq!(artifact.len(), 5);
    }

    #[test]
    fn empty_data_decodes_to_empty_artifact() {
        let artifact = GenerateResponse::new("R", "pdf", "").decode().unwrap();
        assert!(artifact.is_empty());
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"reportId":"x","type":"pdf","data":"not-base64!"}"#).unwrap();

        let err = response.decode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn rejects_missing_padding_and_truncation() {
        for data in ["SGVsbG8", "SGVsbG8==", "SGVsb"] {
            let err = GenerateResponse::new("R", "pdf", data).decode().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Decoding, "{data:?} should not decode");
        }
    }

    #[test]
    fn accepts_non_zero_trailing_bits() {
        // "9" leaves bits set past the final byte; canonical form is "SGVsbG8=".
        let artifact = GenerateResponse::new("R", "pdf", "SGVsbG9=").decode().unwrap();
        assert_eq!(artifact.as_bytes(), b"Hello");
    }

    #[test]
    fn rejects_url_safe_alphabet() {
        // 0xfb 0xff encodes to "+/8=" in the standard alphabet and "-_8=" in the URL-safe one.
        assert_eq!(GenerateResponse::new("R", "pdf", "+/8=").decode().unwrap().as_bytes(), [0xfb, 0xff]);
        assert!(GenerateResponse::new("R", "pdf", "-_8=").decode().is_err());
    }

    proptest! {
        #[test]
        fn encoded_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let response = GenerateResponse::new("R", "pdf", STANDARD.encode(&bytes));
            prop_assert_eq!(decode(&response).unwrap().into_bytes(), bytes);
        }
    }
}
