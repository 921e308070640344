//! URL canonicalization: every accepted link shape maps to one identity.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

const WATCH_PREFIX: &str = "https://www.youtube.com/watch?v=";

fn video_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap())
}

/// A video link in the single normalized form
/// `https://www.youtube.com/watch?v=<11-char-id>`.
/// Two canonical URLs are equal iff their video ids are equal.
/// Only `normalize` constructs these; the inner string is never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn video_id(&self) -> &str {
        &self.0[WATCH_PREFIX.len()..]
    }
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize one raw link to its canonical form, or `None` if it is not a
/// valid video link. Accepted shapes: `youtu.be/<id>`, `…youtube.com/watch?v=<id>`
/// and `…youtube.com/shorts/<id>`. Extraneous query parameters (share
/// tokens etc.) are discarded. Pure; no side effects.
pub fn normalize(raw: &str) -> Option<CanonicalUrl> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let path = parsed.path().trim_start_matches('/');

    let id: String = if host == "youtu.be" {
        path.split('?').next().unwrap_or("").to_string()
    } else if host.contains("youtube.com") {
        if path.starts_with("watch") {
            parsed
                .query_pairs()
                .find_map(|(k, v)| (k == "v").then(|| v.into_owned()))
                .unwrap_or_default()
        } else if let Some(rest) = path.strip_prefix("shorts/") {
            rest.split('/').next().unwrap_or("").to_string()
        } else {
            return None;
        }
    } else {
        return None;
    };

    if !video_id_re().is_match(&id) {
        return None;
    }
    Some(CanonicalUrl(format!("{WATCH_PREFIX}{id}")))
}
