//! Entity lookups against the `/ws/2` web service.
//!
//! A lookup validates the MBID and includes, sends one rate-limited request
//! and streams the response body straight into the parser.

use std::io::BufReader;
use std::path::Path;
use std::sync::LazyLock;

use mbxml::xml::{self, DEFAULT_CHUNK_SIZE};
use mbxml::{Kind, Value};
use regex::Regex;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http::HttpClient;

/// MBID pattern: a hyphenated UUID, case-insensitive.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MBID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("valid regex")
});

/// Validate MBID format.
///
/// # Examples
/// ```
/// use mbxml_client::lookup::validate_mbid;
///
/// assert!(validate_mbid("89ad4ac3-39f7-470e-963a-56509c546377").is_ok());
/// assert!(validate_mbid("blah").is_err());
/// ```
pub fn validate_mbid(mbid: &str) -> Result<()> {
    if MBID_PATTERN.is_match(mbid) {
        Ok(())
    } else {
        Err(ClientError::InvalidMbid(mbid.to_string()))
    }
}

/// Validate the includes of a lookup.
///
/// `user-*` includes need an access token. Artist lookups additionally accept
/// `various-artists` together with `releases`.
pub fn validate_includes(kind: Kind, includes: &[&str], logged_in: bool) -> Result<()> {
    if !kind.is_entity() {
        return Err(ClientError::UnknownEntity(kind.to_string()));
    }
    let has_releases = includes.contains(&"releases");

    for &include in includes {
        if include.starts_with("user-") && !logged_in {
            return Err(ClientError::LoginRequired(include.to_string()));
        }
        if kind.supports_include(include) {
            continue;
        }
        if kind == Kind::Artist && include == "various-artists" && has_releases {
            continue;
        }
        return Err(ClientError::InvalidInclude {
            entity: kind,
            include: include.to_string(),
        });
    }
    Ok(())
}

/// Build the lookup URL, e.g. `https://musicbrainz.org:443/ws/2/artist/<mbid>?inc=aliases+tags`.
pub fn lookup_url(config: &ClientConfig, kind: Kind, mbid: &str, includes: &[&str]) -> String {
    let mut url = format!("{}/ws/2/{}/{}", config.base_url(), kind.as_str(), mbid);
    if !includes.is_empty() {
        url.push_str("?inc=");
        url.push_str(&includes.join("+"));
    }
    url
}

/// Take the `kind` record out of a `metadata` value.
fn take_entity(metadata: Value, kind: Kind) -> Result<Value> {
    let entity = match metadata {
        Value::Struct(mut fields) => fields.shift_remove(kind.as_str()),
        _ => None,
    };
    entity.ok_or(ClientError::MissingEntity(kind))
}

/// Parse a local XML file in fixed-size chunks.
pub fn load_file(path: impl AsRef<Path>) -> Result<Value> {
    Ok(xml::from_path(path, DEFAULT_CHUNK_SIZE)?)
}

/// MusicBrainz web service client.
#[derive(Debug)]
pub struct MusicBrainzClient {
    http: HttpClient,
}

impl MusicBrainzClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client from `MBXML_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Look up an entity and return the whole `metadata` record.
    ///
    /// # Errors
    /// Validation errors before any request is sent, then HTTP and parse
    /// errors.
    pub fn lookup_metadata(&self, kind: Kind, mbid: &str, includes: &[&str]) -> Result<Value> {
        validate_mbid(mbid)?;
        validate_includes(kind, includes, self.config().is_logged_in())?;

        let url = lookup_url(self.config(), kind, mbid, includes);
        let response = self.http.get(&url)?;
        let metadata = xml::from_reader(BufReader::with_capacity(DEFAULT_CHUNK_SIZE, response))?;
        tracing::debug!(entity = %kind, mbid, "Lookup complete");
        Ok(metadata)
    }

    /// Look up an entity and return its record.
    pub fn lookup(&self, kind: Kind, mbid: &str, includes: &[&str]) -> Result<Value> {
        let metadata = self.lookup_metadata(kind, mbid, includes)?;
        take_entity(metadata, kind)
    }

    pub fn lookup_area(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Area, mbid, includes)
    }

    /// Look up an artist. `various-artists` is accepted together with `releases`.
    pub fn lookup_artist(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Artist, mbid, includes)
    }

    pub fn lookup_collection(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Collection, mbid, includes)
    }

    pub fn lookup_event(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Event, mbid, includes)
    }

    pub fn lookup_instrument(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Instrument, mbid, includes)
    }

    pub fn lookup_label(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Label, mbid, includes)
    }

    pub fn lookup_place(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Place, mbid, includes)
    }

    pub fn lookup_recording(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Recording, mbid, includes)
    }

    pub fn lookup_release(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Release, mbid, includes)
    }

    pub fn lookup_release_group(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::ReleaseGroup, mbid, includes)
    }

    pub fn lookup_series(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Series, mbid, includes)
    }

    pub fn lookup_url(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Url, mbid, includes)
    }

    pub fn lookup_work(&self, mbid: &str, includes: &[&str]) -> Result<Value> {
        self.lookup(Kind::Work, mbid, includes)
    }
}
