//! Self-link construction for view models.

use url::Url;

/// Per-request base for building absolute resource URLs.
///
/// Built from the scheme and host of the current request and handed to every
/// `into_dto` call that emits links.
#[derive(Debug, Clone)]
pub struct LinkContext {
    base: Url,
}

impl LinkContext {
    /// Returns `None` unless `base` is an absolute URL that can carry a path.
    pub fn parse(base: &str) -> Option<Self> {
        let base = Url::parse(base).ok()?;
        if base.cannot_be_a_base() {
            return None;
        }
        Some(Self { base })
    }

    pub fn camp(&self, moniker: &str) -> String {
        self.build(&["api", "camps", moniker])
    }

    pub fn speaker(&self, moniker: &str, speaker_id: i32) -> String {
        self.build(&["api", "camps", moniker, "speakers", &speaker_id.to_string()])
    }

    pub fn talk(&self, moniker: &str, speaker_id: i32, talk_id: i32) -> String {
        self.build(&[
            "api",
            "camps",
            moniker,
            "speakers",
            &speaker_id.to_string(),
            "talks",
            &talk_id.to_string(),
        ])
    }

    fn build(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_resource_urls() {
        let links = LinkContext::parse("http://localhost:8080").unwrap();

        assert_eq!(links.camp("atl2026"), "http://localhost:8080/api/camps/atl2026");
        assert_eq!(
            links.talk("atl2026", 4, 12),
            "http://localhost:8080/api/camps/atl2026/speakers/4/talks/12"
        );
    }

    #[test]
    fn percent_encodes_monikers() {
        let links = LinkContext::parse("https://camps.example.com/").unwrap();

        assert_eq!(
            links.speaker("a b/c", 1),
            "https://camps.example.com/api/camps/a%20b%2Fc/speakers/1"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let links = LinkContext::parse("https://example.com/conference/").unwrap();

        assert_eq!(links.camp("x"), "https://example.com/conference/api/camps/x");
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(LinkContext::parse("mailto:someone@example.com").is_none());
        assert!(LinkContext::parse("not a url").is_none());
    }
}
