//! Last.fm endpoint construction
//!
//! Last.fm uses a single root URL and selects the API call through the
//! `method` query parameter. Query values are encoded by hand with
//! `urlencoding` so the resulting URL is exactly what gets logged and sent.

use reqwest::Url;

/// Default Last.fm API root
pub const DEFAULT_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Last.fm API calls used by this crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastFmEndpoint {
    /// `artist.gettopalbums` for an artist MBID, bounded to `limit` results
    TopAlbums { artist_id: String, limit: u32 },
}

impl LastFmEndpoint {
    pub fn top_albums(artist_id: impl Into<String>, limit: u32) -> Self {
        Self::TopAlbums {
            artist_id: artist_id.into(),
            limit,
        }
    }

    /// Build the request URL.
    ///
    /// Returns `None` if `base_url` is not an absolute http(s) URL, or if it
    /// carries a fragment (the query would land inside it).
    pub fn url(&self, base_url: &str, api_key: &str) -> Option<Url> {
        let base = Url::parse(base_url).ok()?;
        if base.cannot_be_a_base()
            || base.fragment().is_some()
            || !matches!(base.scheme(), "http" | "https")
        {
            return None;
        }

        let query = match self {
            Self::TopAlbums { artist_id, limit } => format!(
                "method=artist.gettopalbums&mbid={}&api_key={}&format=json&limit={}",
                urlencoding::encode(artist_id),
                urlencoding::encode(api_key),
                limit
            ),
        };

        let separator = if base.query().is_some() { '&' } else { '?' };
        Url::parse(&format!("{}{}{}", base, separator, query)).ok()
    }

    /// Last.fm method name, for logging
    pub fn method(&self) -> &'static str {
        match self {
            Self::TopAlbums { .. } => "artist.gettopalbums",
        }
    }
}
