//! Allow-list of property names and deny-list of values.

use regex::Regex;
use std::sync::LazyLock;

use crate::map::SafeStyleMap;
use crate::parser::StyleParser;

/// Property name prefixes that only affect layout and typography.
const ALLOWED_PROPERTIES: &str = concat!(
    r"^(?:-moz-)?(?:background|border|box|clear|color|cursor|display|float|font|line|",
    r"margin|padding|text|transition|outline|white-space|word|writing|",
    r"(?:min-|max-)?width|(?:min-|max-)?height)"
);

/// Values that can make the engine fetch something.
const FORBIDDEN_VALUES: [&str; 2] = [
    // url(), element(), -moz-element()
    r#"(?i)\b(?:url|(?:-moz-)?element)[\s('"]+"#,
    // scheme-qualified URLs, optionally behind quotes or a paren
    r#"(?i)['"(]*(?:chrome|resource|about|app|data|https?|ftp|file):+/*"#,
];

static STANDARD: LazyLock<StylePolicy> = LazyLock::new(|| StylePolicy {
    allowed_properties: Regex::new(ALLOWED_PROPERTIES)
        .expect("style policy: static regex pattern must compile"),
    forbidden_values: FORBIDDEN_VALUES
        .iter()
        .map(|p| Regex::new(p).expect("style policy: static regex pattern must compile"))
        .collect(),
});

/// Why a declaration was dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("property '{0}' is not allowed")]
    Property(String),

    #[error("value of '{name}' contains forbidden token '{token}'")]
    Value { name: String, token: String },
}

/// Compiled allow/deny tables.
#[derive(Debug)]
pub struct StylePolicy {
    allowed_properties: Regex,
    forbidden_values: Vec<Regex>,
}

impl StylePolicy {
    /// The process-wide policy, compiled on first use.
    pub fn standard() -> &'static StylePolicy {
        &STANDARD
    }

    pub fn allows_property(&self, name: &str) -> bool {
        self.allowed_properties.is_match(name)
    }

    /// First forbidden token found in `value`, if any.
    pub fn forbidden_token<'v>(&self, value: &'v str) -> Option<&'v str> {
        self.forbidden_values
            .iter()
            .find_map(|re| re.find(value))
            .map(|m| m.as_str())
    }

    /// Check a single declaration against both tables.
    pub fn check(&self, name: &str, value: &str) -> Result<(), Rejection> {
        if !self.allows_property(name) {
            return Err(Rejection::Property(name.to_string()));
        }
        if let Some(token) = self.forbidden_token(value) {
            return Err(Rejection::Value {
                name: name.to_string(),
                token: token.to_string(),
            });
        }
        Ok(())
    }

    /// Parse `raw` with `parser` and keep the declarations that pass [`check`](Self::check).
    ///
    /// Later declarations of the same property replace earlier ones.
    pub fn sanitize<P: StyleParser + ?Sized>(&self, raw: &str, parser: &P) -> SafeStyleMap {
        let mut map = SafeStyleMap::new();
        if raw.trim().is_empty() {
            return map;
        }

        for (name, value) in parser.parse(raw) {
            match self.check(&name, &value) {
                Ok(()) => map.insert(name, value),
                Err(rejection) => tracing::debug!("dropped style declaration: {rejection}"),
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> &'static StylePolicy {
        StylePolicy::standard()
    }

    // --- Property names ---

    #[test]
    fn allows_cosmetic_families() {
        for name in [
            "background",
            "background-color",
            "border-top-left-radius",
            "box-shadow",
            "clear",
            "color",
            "cursor",
            "display",
            "float",
            "font-size",
            "font-weight",
            "line-height",
            "margin-left",
            "padding",
            "text-decoration",
            "transition-duration",
            "outline",
            "white-space",
            "word-break",
            "writing-mode",
            "width",
            "min-width",
            "max-height",
        ] {
            assert!(policy().allows_property(name), "{name} should be allowed");
        }
    }

    #[test]
    fn allows_moz_prefixed() {
        assert!(policy().allows_property("-moz-box-sizing"));
        assert!(policy().allows_property("-moz-border-radius"));
    }

    #[test]
    fn rejects_layout_escapes() {
        for name in [
            "position",
            "top",
            "left",
            "z-index",
            "transform",
            "content",
            "filter",
            "mask",
            "list-style-image",
            "-moz-binding",
            "-webkit-box-shadow",
            "--custom",
            "unknown-prop",
            "",
        ] {
            assert!(!policy().allows_property(name), "{name} should be rejected");
        }
    }

    #[test]
    fn property_match_is_prefix_and_case_sensitive() {
        assert!(policy().allows_property("colorful"));
        assert!(!policy().allows_property("Color"));
        assert!(!policy().allows_property("x-color"));
    }

    // --- Values ---

    #[test]
    fn forbids_url_and_element() {
        assert!(policy().forbidden_token("url(foo.png)").is_some());
        assert!(policy().forbidden_token("URL( 'foo.png')").is_some());
        assert!(policy().forbidden_token("url \"x\"").is_some());
        assert!(policy().forbidden_token("element(#id)").is_some());
        assert!(policy().forbidden_token("-moz-element(#id)").is_some());
        assert!(policy().forbidden_token("red url(x) no-repeat").is_some());
    }

    #[test]
    fn forbids_schemes() {
        for value in [
            "http://evil.example/x.png",
            "https://evil.example",
            "HTTPS://EVIL.EXAMPLE",
            "ftp://host/file",
            "file:///etc/passwd",
            "data:image/png;base64,AAAA",
            "chrome://browser/skin/x.png",
            "resource://gre/x",
            "about:blank",
            "app://x",
            "'data:x'",
            "(\"http://x",
        ] {
            assert!(
                policy().forbidden_token(value).is_some(),
                "{value} should be forbidden"
            );
        }
    }

    #[test]
    fn allows_plain_values() {
        for value in [
            "red",
            "#ff0000",
            "rgb(255, 0, 0)",
            "12px",
            "bold",
            "1px solid blue",
            "\"Courier New\", monospace",
            "linear-gradient(red, blue)",
        ] {
            assert!(
                policy().forbidden_token(value).is_none(),
                "{value} should pass"
            );
        }
    }

    #[test]
    fn curl_is_not_url() {
        assert!(policy().forbidden_token("curl(x)").is_none());
    }

    #[test]
    fn check_reports_reason() {
        assert_eq!(
            policy().check("position", "absolute"),
            Err(Rejection::Property("position".into()))
        );
        let err = policy().check("background", "url(x)").unwrap_err();
        assert!(matches!(err, Rejection::Value { ref name, .. } if name == "background"));
        assert!(err.to_string().contains("url("));
        assert_eq!(policy().check("color", "red"), Ok(()));
    }

    #[test]
    fn standard_policy_is_shared() {
        assert!(std::ptr::eq(StylePolicy::standard(), StylePolicy::standard()));
    }
}
