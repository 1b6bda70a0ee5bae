//! URL fragment state: `digest=<algorithm>:<expected>&content=<text>`.
//!
//! The fragment is a transport for the three inputs, never a source of truth.
//! Encoding is application/x-www-form-urlencoded, so a space becomes `+` and
//! the algorithm/digest separator becomes `%3A`.

use crate::verify::VerifierInputs;
use url::form_urlencoded;
use url::Url;

const DIGEST_KEY: &str = "digest";
const CONTENT_KEY: &str = "content";

/// Serialize inputs into a fragment (without the leading `#`).
///
/// `digest` is omitted when the expected digest is empty and `content` when
/// the content is empty.
pub fn to_fragment(inputs: &VerifierInputs) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    if !inputs.expected.is_empty() {
        ser.append_pair(
            DIGEST_KEY,
            &format!("{}:{}", inputs.algorithm, inputs.expected),
        );
    }
    if !inputs.content.is_empty() {
        ser.append_pair(CONTENT_KEY, &inputs.content);
    }
    ser.finish()
}

/// Parse a fragment (with or without the leading `#`).
///
/// Returns `None` unless both `digest` and `content` are present and
/// non-empty. `digest` is split on its first colon; without a colon the whole
/// value is taken as the algorithm and the expected digest is empty.
pub fn parse_fragment(fragment: &str) -> Option<VerifierInputs> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    if fragment.is_empty() {
        return None;
    }

    let mut digest = None;
    let mut content = None;
    for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            DIGEST_KEY if digest.is_none() => digest = Some(value.into_owned()),
            CONTENT_KEY if content.is_none() => content = Some(value.into_owned()),
            _ => {}
        }
    }

    let digest = digest.filter(|d| !d.is_empty())?;
    let content = content.filter(|c| !c.is_empty())?;
    let (algorithm, expected) = match digest.split_once(':') {
        Some((algo, hash)) => (algo.to_string(), hash.to_string()),
        None => (digest, String::new()),
    };
    Some(VerifierInputs {
        algorithm,
        expected,
        content,
    })
}

/// Extract the fragment from a full URL, or accept a bare `#fragment` /
/// `digest=...` string as is.
pub fn fragment_of(url_or_fragment: &str) -> String {
    let s = url_or_fragment.trim();
    if let Some(bare) = s.strip_prefix('#') {
        return bare.to_string();
    }
    match Url::parse(s) {
        Ok(url) => url.fragment().unwrap_or_default().to_string(),
        Err(_) => s.to_string(),
    }
}

/// Build a share link: `base` with its fragment replaced by the inputs.
pub fn share_url(base: &str, inputs: &VerifierInputs) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    let fragment = to_fragment(inputs);
    if fragment.is_empty() {
        url.set_fragment(None);
    } else {
        url.set_fragment(Some(&fragment));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::evaluate;

    const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    #[test]
    fn serializes_documented_format() {
        let inputs = VerifierInputs::new("SHA-256", HELLO_SHA256, "hello world");
        assert_eq!(
            to_fragment(&inputs),
            format!("digest=SHA-256%3A{}&content=hello+world", HELLO_SHA256)
        );
    }

    #[test]
    fn omits_empty_fields() {
        assert_eq!(
            to_fragment(&VerifierInputs::new("SHA-1", "", "abc")),
            "content=abc"
        );
        assert_eq!(
            to_fragment(&VerifierInputs::new("SHA-1", "abc", "")),
            "digest=SHA-1%3Aabc"
        );
        assert_eq!(to_fragment(&VerifierInputs::new("SHA-1", "", "")), "");
    }

    #[test]
    fn roundtrip_preserves_inputs_and_outcome() {
        let inputs = VerifierInputs::new(
            "SHA-512",
            "DEADbeef",
            "line one\nline two & more = 100% #tag: ok",
        );
        let parsed = parse_fragment(&to_fragment(&inputs)).unwrap();
        assert_eq!(parsed, inputs);
        assert_eq!(evaluate(&parsed), evaluate(&inputs));
    }

    #[test]
    fn parse_accepts_leading_hash() {
        let parsed = parse_fragment("#digest=SHA-256%3Aabc&content=x").unwrap();
        assert_eq!(parsed, VerifierInputs::new("SHA-256", "abc", "x"));
    }

    #[test]
    fn parse_splits_on_first_colon_only() {
        let parsed = parse_fragment("digest=SHA-256%3Aab%3Acd&content=x").unwrap();
        assert_eq!(parsed.algorithm, "SHA-256");
        assert_eq!(parsed.expected, "ab:cd");
    }

    #[test]
    fn parse_digest_without_colon() {
        let parsed = parse_fragment("digest=SHA-256&content=x").unwrap();
        assert_eq!(parsed.algorithm, "SHA-256");
        assert_eq!(parsed.expected, "");
    }

    #[test]
    fn parse_requires_both_keys() {
        assert!(parse_fragment("").is_none());
        assert!(parse_fragment("#").is_none());
        assert!(parse_fragment("content=hello").is_none());
        assert!(parse_fragment("digest=SHA-256%3Aabc").is_none());
        assert!(parse_fragment("digest=&content=hello").is_none());
        assert!(parse_fragment("digest=SHA-1%3Aabc&content=").is_none());
    }

    #[test]
    fn parse_first_occurrence_wins() {
        let parsed = parse_fragment("digest=SHA-1%3Aaa&digest=SHA-256%3Abb&content=x").unwrap();
        assert_eq!(parsed.algorithm, "SHA-1");
        assert_eq!(parsed.expected, "aa");
    }

    #[test]
    fn fragment_of_url_or_bare() {
        assert_eq!(
            fragment_of("https://example.com/verify.html#digest=SHA-1%3Aab&content=x"),
            "digest=SHA-1%3Aab&content=x"
        );
        assert_eq!(fragment_of("#content=x"), "content=x");
        assert_eq!(fragment_of("digest=SHA-1%3Aab&content=x"), "digest=SHA-1%3Aab&content=x");
        assert_eq!(fragment_of("https://example.com/"), "");
    }

    #[test]
    fn share_url_sets_fragment() {
        let inputs = VerifierInputs::new("SHA-256", "abc", "hi there");
        let url = share_url("https://example.com/verify.html#old", &inputs).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/verify.html#digest=SHA-256%3Aabc&content=hi+there"
        );
        let back = parse_fragment(url.fragment().unwrap()).unwrap();
        assert_eq!(back, inputs);
    }

    #[test]
    fn share_url_rejects_bad_base() {
        assert!(share_url("not a url", &VerifierInputs::default()).is_err());
    }
}
