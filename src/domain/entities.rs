//! Domain entities. Pure request-scoped values for the summarization core.
//!
//! No HTTP/UI types here — adapters map into these. Nothing outlives a
//! single request.

use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use url::Url;

/// A validated summarization request. Built only by [`validate`];
/// the credential and target are immutable for the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub credential: String,
    pub target: Url,
}

/// Which retrieval strategy applies to a target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Video,
    Document,
}

/// One retrieved unit of text plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub title: Option<String>,
    /// Where the text came from (original URL or a derived identifier).
    pub source: String,
}

impl Fragment {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            source: source.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Ordered sequence of retrieved fragments. The pipeline only proceeds to
/// summarization when at least one fragment carries non-blank text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentBundle {
    pub fragments: Vec<Fragment>,
}

impl ContentBundle {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    pub fn single(fragment: Fragment) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }

    /// True when no fragment contains any non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.fragments.iter().all(|f| f.text.trim().is_empty())
    }

    /// Full text sent to the model: all fragments joined in order.
    pub fn concatenated(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Title of the first fragment that has one, if any.
    pub fn title(&self) -> Option<&str> {
        self.fragments.iter().find_map(|f| f.title.as_deref())
    }
}

/// The model's output text, surfaced to the caller unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
}

/// Validate caller inputs before any network call is attempted.
///
/// The credential must be non-blank and the target must be an absolute
/// http(s) URL with a host. No default scheme is assumed.
pub fn validate(credential: &str, target: &str) -> Result<ValidatedRequest, ValidationError> {
    if credential.trim().is_empty() {
        return Err(ValidationError::MissingCredential);
    }
    if target.trim().is_empty() {
        return Err(ValidationError::MissingUrl);
    }
    let parsed = Url::parse(target.trim()).map_err(|_| ValidationError::MalformedUrl)?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ValidationError::MalformedUrl);
    }
    Ok(ValidatedRequest {
        credential: credential.trim().to_string(),
        target: parsed,
    })
}

/// Classify a target URL as video or generic document.
///
/// Uses a host-component check rather than a raw substring match, so a URL
/// that merely mentions youtube.com in a query parameter stays a Document.
pub fn classify(target: &Url) -> SourceKind {
    match target.host_str() {
        Some(host) if is_youtube_host(host) => SourceKind::Video,
        _ => SourceKind::Document,
    }
}

/// Known video-hosting hosts: youtube.com, any of its subdomains, youtu.be.
pub fn is_youtube_host(host: &str) -> bool {
    let h = host.to_ascii_lowercase();
    h == "youtube.com" || h.ends_with(".youtube.com") || h == "youtu.be"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_credential_first() {
        // Credential check wins even when the URL is valid.
        let err = validate("   ", "https://example.com").unwrap_err();
        assert!(matches!(err, ValidationError::MissingCredential));
        let err = validate("", "not a url").unwrap_err();
        assert!(matches!(err, ValidationError::MissingCredential));
    }

    #[test]
    fn validate_rejects_blank_url() {
        let err = validate("sk-valid", "").unwrap_err();
        assert!(matches!(err, ValidationError::MissingUrl));
        let err = validate("sk-valid", "  \t ").unwrap_err();
        assert!(matches!(err, ValidationError::MissingUrl));
    }

    #[test]
    fn validate_rejects_malformed_urls() {
        for bad in ["not a url", "ftp:/broken", "example.com", "http://"] {
            let err = validate("sk-valid", bad).unwrap_err();
            assert!(matches!(err, ValidationError::MalformedUrl), "input: {bad}");
        }
    }

    #[test]
    fn validate_accepts_http_and_https() {
        let req = validate("sk-valid", "https://example.com/article").unwrap();
        assert_eq!(req.target.as_str(), "https://example.com/article");
        assert!(validate("sk-valid", "http://example.com").is_ok());
    }

    #[test]
    fn validate_trims_inputs() {
        let req = validate(" sk-valid ", " https://example.com ").unwrap();
        assert_eq!(req.credential, "sk-valid");
    }

    #[test]
    fn classify_youtube_hosts_as_video() {
        for u in [
            "https://youtube.com/watch?v=abc",
            "https://www.youtube.com/watch?v=abc",
            "https://m.youtube.com/watch?v=abc",
            "https://youtu.be/abc",
        ] {
            assert_eq!(classify(&Url::parse(u).unwrap()), SourceKind::Video);
        }
    }

    #[test]
    fn classify_other_hosts_as_document() {
        for u in [
            "https://example.com/article",
            "https://notyoutube.com/watch?v=abc",
            // Marker only in a query parameter: host check keeps this a Document.
            "https://example.com/share?link=youtube.com",
        ] {
            assert_eq!(classify(&Url::parse(u).unwrap()), SourceKind::Document);
        }
    }

    #[test]
    fn bundle_blankness_and_concatenation() {
        let blank = ContentBundle::single(Fragment::new("   \n", "x"));
        assert!(blank.is_blank());

        let bundle = ContentBundle::new(vec![
            Fragment::new("part one", "a").with_title("Title"),
            Fragment::new("part two", "b"),
        ]);
        assert!(!bundle.is_blank());
        assert_eq!(bundle.concatenated(), "part one\n\npart two");
        assert_eq!(bundle.title(), Some("Title"));
    }
}
