//! URL to [`Source`] resolution
//!
//! Recognizes the URL shapes YouTube hands out for sharing and embedding:
//!
//! - `https://youtu.be/<video>?t=<seconds>`
//! - `https://www.youtube.com/watch?v=<video>&list=<playlist>&t=<seconds>`
//! - `https://www.youtube.com/embed/<video>?t=<seconds>`
//! - `https://www.youtube.com/channel/<channel>`
//!
//! Rules are applied in that order and the first match wins. Anything else,
//! including strings that are not absolute URLs, resolves to `None`.

use crate::{
    types::Source,
    utils::{percent_decode, query_item},
};
use url::Url;

/// Host suffix of the short-link domain
const SHORT_LINK_HOST_SUFFIX: &str = "youtu.be";

/// Resolve a URL string into a [`Source`]
///
/// # Examples
///
/// ```rust
/// use yt_player_bridge::{Source, resolver::resolve};
///
/// assert_eq!(
///     resolve("https://youtu.be/dQw4w9WgXcQ?t=42"),
///     Some(Source::video_at("dQw4w9WgXcQ", 42))
/// );
/// assert_eq!(
///     resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL1"),
///     Some(Source::playlist("PL1"))
/// );
/// assert_eq!(resolve("https://www.youtube.com/feed/trending"), None);
/// ```
pub fn resolve(input: &str) -> Option<Source> {
    let url = Url::parse(input).ok()?;
    let start_time = query_item(&url, "t").and_then(|t| t.parse::<u64>().ok());
    let mut segments = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .map(|segment| percent_decode(segment).into_owned());

    if url
        .host_str()
        .is_some_and(|host| host.ends_with(SHORT_LINK_HOST_SUFFIX))
    {
        return segments.next().map(|id| Source::Video { id, start_time });
    }

    match segments.next()?.as_str() {
        "watch" => {
            if let Some(list) = query_item(&url, "list") {
                return Some(Source::Playlist { id: list });
            }
            query_item(&url, "v").map(|id| Source::Video { id, start_time })
        }
        "embed" => segments.next().map(|id| Source::Video { id, start_time }),
        "channel" => segments.next().map(|id| Source::Channel { id }),
        _ => None,
    }
}
