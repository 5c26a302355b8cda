use crate::domain::model::NormalizedUrl;
use crate::utils::error::{QrError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Validates raw user input and turns it into a [`NormalizedUrl`].
///
/// Input is trimmed first. When the trimmed string does not already start
/// with `http://` or `https://` (case-sensitive prefix match), `http://` is
/// prepended before the well-formedness check. The prepend is a plain string
/// operation on purpose: already-malformed input like `htp://x` becomes
/// `http://htp://x` and fails the syntax check, which is the accepted
/// behavior rather than something to infer around.
///
/// On success the (possibly prefixed) string is returned unchanged; no
/// host lowercasing, trailing-slash or percent-encoding normalization is
/// applied to it.
pub fn validate_url(raw: &str) -> Result<NormalizedUrl> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QrError::EmptyInput);
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let parsed = Url::parse(&candidate).map_err(|e| QrError::MalformedUrl {
        reason: e.to_string(),
    })?;

    let host = parsed.host_str().ok_or_else(|| QrError::MalformedUrl {
        reason: "URL has no host".to_string(),
    })?;
    let authority = match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    Ok(NormalizedUrl::new(candidate, authority))
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(QrError::InvalidOption {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(matches!(validate_url(""), Err(QrError::EmptyInput)));
        assert!(matches!(validate_url("   "), Err(QrError::EmptyInput)));
        assert!(matches!(validate_url("\t\n"), Err(QrError::EmptyInput)));
    }

    #[test]
    fn test_scheme_is_prepended() {
        let url = validate_url("example.com").unwrap();
        assert_eq!(url.as_str(), "http://example.com");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        let url = validate_url("https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com");
        let url = validate_url("http://example.com/path?q=1").unwrap();
        assert_eq!(url.as_str(), "http://example.com/path?q=1");
    }

    #[test]
    fn test_prefixing_is_equivalent_to_explicit_scheme() {
        for input in ["example.com", "example.com:8080/path", "sub.example.com"] {
            let bare = validate_url(input).unwrap();
            let explicit = validate_url(&format!("http://{}", input)).unwrap();
            assert_eq!(bare, explicit);
        }
    }

    #[test]
    fn test_input_is_trimmed_before_prefixing() {
        let url = validate_url("  example.com  ").unwrap();
        assert_eq!(url.as_str(), "http://example.com");
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(matches!(
            validate_url("not a url"),
            Err(QrError::MalformedUrl { .. })
        ));
        // The naive prefix turns this into http://htp://x, which fails the
        // syntax check instead of being silently repaired.
        assert!(matches!(
            validate_url("htp://x"),
            Err(QrError::MalformedUrl { .. })
        ));
    }

    #[test]
    fn test_authority_includes_port() {
        let url = validate_url("example.com:8080/path").unwrap();
        assert_eq!(url.authority(), "example.com:8080");
        let url = validate_url("https://example.com/path").unwrap();
        assert_eq!(url.authority(), "example.com");
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("box-size", 10u32, 5, 20).is_ok());
        assert!(validate_range("box-size", 5u32, 5, 20).is_ok());
        assert!(validate_range("box-size", 4u32, 5, 20).is_err());
        assert!(validate_range("box-size", 21u32, 5, 20).is_err());
    }
}
