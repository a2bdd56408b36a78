//! ERC-8021 transaction attribution.
//!
//! Schema 0 suffix layout, read from the end of the call data backwards:
//!
//! ```text
//! codes (ascii, comma separated) | codes length (1 byte) | schema id 0x00 | 16-byte marker
//! ```

use std::sync::LazyLock;

use alloy_primitives::{hex, Bytes};
use thiserror::Error;

/// Trailing marker that identifies an ERC-8021 suffix.
pub const ERC_8021_MARKER: [u8; 16] = hex!("80218021802180218021802180218021");

/// Builder codes attached to every attributed submission.
pub const ATTRIBUTION_CODES: &[&str] = &["8021-guestbook"];

const SCHEMA_CANONICAL_REGISTRY: u8 = 0;

static DATA_SUFFIX: LazyLock<Bytes> = LazyLock::new(|| {
    Attribution::new(ATTRIBUTION_CODES.iter().copied())
        .to_data_suffix()
        .expect("static attribution codes fit in one length byte")
});

/// The process-wide suffix derived from [`ATTRIBUTION_CODES`].
pub fn data_suffix() -> &'static Bytes {
    &DATA_SUFFIX
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributionError {
    #[error("attribution codes are {len} bytes, at most 255 fit")]
    CodesTooLong { len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    codes: Vec<String>,
}

impl Attribution {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn to_data_suffix(&self) -> Result<Bytes, AttributionError> {
        let joined = self.codes.join(",");
        let len = u8::try_from(joined.len())
            .map_err(|_| AttributionError::CodesTooLong { len: joined.len() })?;

        let mut out = Vec::with_capacity(joined.len() + 2 + ERC_8021_MARKER.len());
        out.extend_from_slice(joined.as_bytes());
        out.push(len);
        out.push(SCHEMA_CANONICAL_REGISTRY);
        out.extend_from_slice(&ERC_8021_MARKER);
        Ok(out.into())
    }

    /// Reads the schema 0 attribution at the end of `data`, if there is one.
    pub fn from_data(data: &[u8]) -> Option<Self> {
        let body = data.strip_suffix(ERC_8021_MARKER.as_slice())?;
        let (&schema, body) = body.split_last()?;
        if schema != SCHEMA_CANONICAL_REGISTRY {
            return None;
        }
        let (&len, body) = body.split_last()?;
        let start = body.len().checked_sub(usize::from(len))?;
        let joined = std::str::from_utf8(&body[start..]).ok()?;
        Some(Self::new(joined.split(',')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guestbook_suffix_layout() {
        let suffix = data_suffix();
        let code = b"8021-guestbook";
        assert_eq!(suffix.len(), code.len() + 2 + 16);
        assert_eq!(&suffix[..code.len()], code);
        assert_eq!(suffix[code.len()], code.len() as u8);
        assert_eq!(suffix[code.len() + 1], 0);
        assert_eq!(&suffix[code.len() + 2..], ERC_8021_MARKER.as_slice());
    }

    #[test]
    fn guestbook_suffix_hex() {
        assert_eq!(
            hex::encode(data_suffix()),
            "383032312d6775657374626f6f6b0e0080218021802180218021802180218021"
        );
    }

    #[test]
    fn multiple_codes_are_comma_joined() {
        let suffix = Attribution::new(["a", "bc"]).to_data_suffix().unwrap();
        assert_eq!(&suffix[..4], b"a,bc");
        assert_eq!(suffix[4], 4);
    }

    #[test]
    fn oversized_codes_are_rejected() {
        let long = "x".repeat(256);
        assert_eq!(
            Attribution::new([long]).to_data_suffix(),
            Err(AttributionError::CodesTooLong { len: 256 })
        );
    }

    #[test]
    fn codes_read_back_from_trailing_call_data() {
        let mut data = vec![0xde, 0xad, 0xbe, 0xef];
        data.extend_from_slice(data_suffix());
        let parsed = Attribution::from_data(&data).unwrap();
        assert_eq!(parsed.codes(), ["8021-guestbook".to_string()]);
    }

    #[test]
    fn plain_call_data_has_no_attribution() {
        assert_eq!(Attribution::from_data(&[0u8; 36]), None);
        assert_eq!(Attribution::from_data(&ERC_8021_MARKER), None);
    }
}
