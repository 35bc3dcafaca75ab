//! Source video identification.
//!
//! Sessions remember which video they were marked on. Users paste whatever
//! YouTube link they have, so the id is pulled out of the common URL shapes.
//! Anything unrecognised yields `None`; a bad link is never an error.

use percent_encoding::percent_decode_str;

/// Length of a YouTube video id.
const VIDEO_ID_LEN: usize = 11;

/// Extract a YouTube video id from a URL.
///
/// Recognised shapes:
/// - `https://youtu.be/<id>`
/// - any URL with a `v` query parameter (`/watch?v=<id>`)
/// - `/embed/<id>` paths
pub fn extract_video_id(url: &str) -> Option<String> {
    let parts = UrlParts::parse(url.trim())?;

    if parts.host == "youtu.be" {
        return non_empty(parts.path.trim_start_matches('/'));
    }

    if let Some(value) = parts.query_param("v") {
        return non_empty(&value);
    }

    let (_, after) = parts.path.split_once("/embed/")?;
    non_empty(after.split('/').next().unwrap_or_default())
}

/// Accept either a URL or an id typed directly.
pub fn resolve_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    extract_video_id(input).or_else(|| looks_like_video_id(input).then(|| input.to_string()))
}

/// Eleven characters from the URL-safe base64 alphabet.
pub fn looks_like_video_id(input: &str) -> bool {
    input.len() == VIDEO_ID_LEN
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// The pieces of an absolute URL needed for id extraction.
struct UrlParts<'a> {
    host: String,
    path: &'a str,
    query: &'a str,
}

impl<'a> UrlParts<'a> {
    fn parse(url: &'a str) -> Option<Self> {
        let (scheme, rest) = url.split_once("://")?;
        let valid_scheme = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c));
        if !valid_scheme {
            return None;
        }

        let rest = rest.split('#').next().unwrap_or_default();
        let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
        let (authority, tail) = rest.split_at(authority_end);

        let host_port = authority.rsplit('@').next().unwrap_or_default();
        let host = host_port.split(':').next().unwrap_or_default();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return None;
        }

        let (path, query) = tail.split_once('?').unwrap_or((tail, ""));

        Some(Self {
            host: host.to_ascii_lowercase(),
            path,
            query,
        })
    }

    /// First value of a query parameter, form-decoded (`+` is a space,
    /// `%XX` escapes are resolved).
    fn query_param(&self, name: &str) -> Option<String> {
        self.query
            .split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| form_decode(key) == name)
            .map(|(_, value)| form_decode(value))
    }
}

fn form_decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
