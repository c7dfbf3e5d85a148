//! Artist types

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use verse_transfer::{DecoderRegistry, Envelope, EnvelopeReader, EnvelopeWriter};

use crate::error::Result;
use crate::traits::{Groupable, LibraryModel};

/// Wire tag for artists produced by the device-local library scanner.
pub const LOCAL_ARTIST_TAG: &str = "verse.models.artist.local";

/// Sentinel meaning an artist has no local database id yet.
pub const UNKNOWN_LOCAL_ID: i64 = -1;

/// An artist in the media library.
#[derive(Debug, Serialize, Deserialize)]
pub struct Artist {
    name: String,
    local_id: i64,
    musicbrainz_id: Option<String>,
    artwork_fetching: AtomicBool,
}

impl Artist {
    /// Create an artist not yet backed by a local database row.
    pub fn new(name: Option<String>) -> Self {
        Self::with_local_id(name, UNKNOWN_LOCAL_ID)
    }

    /// Create an artist backed by a local database row.
    pub fn with_local_id(name: Option<String>, local_id: i64) -> Self {
        Self {
            name: name.unwrap_or_default(),
            local_id,
            musicbrainz_id: None,
            artwork_fetching: AtomicBool::new(false),
        }
    }

    /// Artist name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local database row id, or [`UNKNOWN_LOCAL_ID`].
    pub fn local_id(&self) -> i64 {
        self.local_id
    }

    /// External catalog identifier, once a resolver has attached one.
    pub fn musicbrainz_id(&self) -> Option<&str> {
        self.musicbrainz_id.as_deref()
    }

    /// Attach (or clear) the external catalog identifier.
    pub fn set_musicbrainz_id(&mut self, mbid: Option<String>) {
        self.musicbrainz_id = mbid;
    }

    /// Whether an artwork fetch is currently pending for this artist.
    pub fn fetching(&self) -> bool {
        self.artwork_fetching.load(Ordering::SeqCst)
    }

    /// Mark or clear a pending artwork fetch.
    pub fn set_fetching(&self, fetching: bool) {
        self.artwork_fetching.store(fetching, Ordering::SeqCst);
    }

    /// Key under which the artwork cache stores this artist's image.
    pub fn artwork_cache_key(&self) -> &str {
        &self.name
    }

    /// Decode whichever registered artist variant the buffer holds.
    pub fn from_envelope(bytes: &[u8]) -> Result<Option<Self>> {
        Ok(Self::default_registry().decode_bytes(bytes)?)
    }

    /// Registry holding the stock artist variants.
    pub fn default_registry() -> DecoderRegistry<Self> {
        let mut registry = DecoderRegistry::new();
        registry.register(LOCAL_ARTIST_TAG, Self::decode_local);
        registry
    }

    /// Decoder for [`LOCAL_ARTIST_TAG`].
    pub fn decode_local(reader: &mut EnvelopeReader<'_>) -> verse_transfer::Result<Self> {
        reader.get_str()?; // tag, already matched by the registry
        let name = reader.get_str()?;
        let local_id = reader.get_i64()?;
        let musicbrainz_id = reader.get_opt_str()?;
        let fetching = reader.get_bool()?;
        Ok(Self {
            name,
            local_id,
            musicbrainz_id,
            artwork_fetching: AtomicBool::new(fetching),
        })
    }
}

impl Clone for Artist {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            local_id: self.local_id,
            musicbrainz_id: self.musicbrainz_id.clone(),
            artwork_fetching: AtomicBool::new(self.fetching()),
        }
    }
}

/// Artists are identified by name alone.
impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Artist {}

impl Hash for Artist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Artist: {}", self.name)
    }
}

impl Groupable for Artist {
    fn section_title(&self) -> &str {
        &self.name
    }
}

impl LibraryModel for Artist {}

impl Envelope for Artist {
    fn type_tag(&self) -> &'static str {
        LOCAL_ARTIST_TAG
    }

    fn write_envelope(&self, writer: &mut EnvelopeWriter) {
        writer.put_str(self.type_tag());
        writer.put_str(&self.name);
        writer.put_i64(self.local_id);
        writer.put_opt_str(self.musicbrainz_id.as_deref());
        writer.put_bool(self.fetching());
    }
}
