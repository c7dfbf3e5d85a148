//! Album types

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use verse_transfer::{DecoderRegistry, Envelope, EnvelopeReader, EnvelopeWriter};

use crate::error::Result;
use crate::traits::{Groupable, LibraryModel};

/// Wire tag for albums produced by the device-local library scanner.
pub const LOCAL_ALBUM_TAG: &str = "verse.models.album.local";

/// Sentinel meaning the date an album was added is unknown.
pub const UNKNOWN_DATE_ADDED: i32 = -1;

/// An album in the media library.
///
/// The identifying fields (name, artwork URL, artist, date added) are fixed
/// at construction. The MusicBrainz id is attached later, once an external
/// resolver finds one, and the fetch flag is claimed by the artwork
/// scheduler while a cover download is pending.
#[derive(Debug, Serialize, Deserialize)]
pub struct Album {
    name: String,
    artwork_url: String,
    artist_name: String,
    date_added: i32,
    musicbrainz_id: Option<String>,
    artwork_fetching: AtomicBool,
}

impl Album {
    /// Create an album whose date added is unknown.
    ///
    /// Missing text inputs normalize to the empty string; construction
    /// never fails.
    pub fn new(
        name: Option<String>,
        artwork_url: Option<String>,
        artist_name: Option<String>,
    ) -> Self {
        Self::with_date_added(name, artwork_url, artist_name, UNKNOWN_DATE_ADDED)
    }

    /// Create an album with the platform ordinal of when it entered the
    /// library.
    pub fn with_date_added(
        name: Option<String>,
        artwork_url: Option<String>,
        artist_name: Option<String>,
        date_added: i32,
    ) -> Self {
        Self {
            name: name.unwrap_or_default(),
            artwork_url: artwork_url.unwrap_or_default(),
            artist_name: artist_name.unwrap_or_default(),
            date_added,
            musicbrainz_id: None,
            artwork_fetching: AtomicBool::new(false),
        }
    }

    /// Album title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locator for the album's cover art.
    pub fn artwork_url(&self) -> &str {
        &self.artwork_url
    }

    /// Name of the album's primary artist.
    pub fn artist_name(&self) -> &str {
        &self.artist_name
    }

    /// Platform ordinal of when the album entered the library, or
    /// [`UNKNOWN_DATE_ADDED`].
    pub fn date_added(&self) -> i32 {
        self.date_added
    }

    /// External catalog identifier, once a resolver has attached one.
    pub fn musicbrainz_id(&self) -> Option<&str> {
        self.musicbrainz_id.as_deref()
    }

    /// Attach (or clear) the external catalog identifier.
    pub fn set_musicbrainz_id(&mut self, mbid: Option<String>) {
        self.musicbrainz_id = mbid;
    }

    /// Whether an artwork fetch is currently pending for this album.
    pub fn fetching(&self) -> bool {
        self.artwork_fetching.load(Ordering::SeqCst)
    }

    /// Mark or clear a pending artwork fetch.
    ///
    /// Safe to race from the fetch scheduler and a UI refresh.
    pub fn set_fetching(&self, fetching: bool) {
        self.artwork_fetching.store(fetching, Ordering::SeqCst);
    }

    /// Key under which the artwork cache stores this album's cover.
    pub fn artwork_cache_key(&self) -> &str {
        &self.name
    }

    /// Decode whichever registered album variant the buffer holds.
    ///
    /// Returns `Ok(None)` when the tag is missing, empty, or not a known
    /// album kind.
    pub fn from_envelope(bytes: &[u8]) -> Result<Option<Self>> {
        Ok(Self::default_registry().decode_bytes(bytes)?)
    }

    /// Registry holding the stock album variants: currently just the
    /// local-library record.
    pub fn default_registry() -> DecoderRegistry<Self> {
        let mut registry = DecoderRegistry::new();
        registry.register(LOCAL_ALBUM_TAG, Self::decode_local);
        registry
    }

    /// Decoder for [`LOCAL_ALBUM_TAG`].
    ///
    /// Public so callers composing their own registries can include the
    /// stock variant next to their own.
    pub fn decode_local(reader: &mut EnvelopeReader<'_>) -> verse_transfer::Result<Self> {
        reader.get_str()?; // tag, already matched by the registry
        let name = reader.get_str()?;
        let artwork_url = reader.get_str()?;
        let artist_name = reader.get_str()?;
        let date_added = reader.get_i32()?;
        let musicbrainz_id = reader.get_opt_str()?;
        let fetching = reader.get_bool()?;
        Ok(Self {
            name,
            artwork_url,
            artist_name,
            date_added,
            musicbrainz_id,
            artwork_fetching: AtomicBool::new(fetching),
        })
    }
}

impl Clone for Album {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            artwork_url: self.artwork_url.clone(),
            artist_name: self.artist_name.clone(),
            date_added: self.date_added,
            musicbrainz_id: self.musicbrainz_id.clone(),
            artwork_fetching: AtomicBool::new(self.fetching()),
        }
    }
}

/// Albums are identified by name and artist alone; artwork, date added, and
/// catalog ids do not participate.
impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.artist_name == other.artist_name
    }
}

impl Eq for Album {}

impl Hash for Album {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.artist_name.hash(state);
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Album: {} from: {}", self.name, self.artist_name)
    }
}

impl Groupable for Album {
    fn section_title(&self) -> &str {
        &self.name
    }
}

impl LibraryModel for Album {}

impl Envelope for Album {
    fn type_tag(&self) -> &'static str {
        LOCAL_ALBUM_TAG
    }

    fn write_envelope(&self, writer: &mut EnvelopeWriter) {
        writer.put_str(self.type_tag());
        writer.put_str(&self.name);
        writer.put_str(&self.artwork_url);
        writer.put_str(&self.artist_name);
        writer.put_i32(self.date_added);
        writer.put_opt_str(self.musicbrainz_id.as_deref());
        writer.put_bool(self.fetching());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn abbey_road() -> Album {
        Album::with_date_added(
            Some("Abbey Road".to_string()),
            Some("http://x/art.jpg".to_string()),
            Some("The Beatles".to_string()),
            100,
        )
    }

    #[test]
    fn missing_text_inputs_normalize_to_empty() {
        let album = Album::new(None, None, None);
        assert_eq!(album.name(), "");
        assert_eq!(album.artwork_url(), "");
        assert_eq!(album.artist_name(), "");
        assert_eq!(album.date_added(), UNKNOWN_DATE_ADDED);
    }

    #[test]
    fn getters_return_constructed_values() {
        let album = abbey_road();
        assert_eq!(album.name(), "Abbey Road");
        assert_eq!(album.artwork_url(), "http://x/art.jpg");
        assert_eq!(album.artist_name(), "The Beatles");
        assert_eq!(album.date_added(), 100);
        assert_eq!(album.musicbrainz_id(), None);
        assert!(!album.fetching());
    }

    #[test]
    fn equality_ignores_everything_but_name_and_artist() {
        let a = abbey_road();
        let mut b = Album::new(
            Some("Abbey Road".to_string()),
            Some("http://elsewhere/other.png".to_string()),
            Some("The Beatles".to_string()),
        );
        b.set_musicbrainz_id(Some("b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d".to_string()));
        b.set_fetching(true);
        assert_eq!(a, b);

        let c = Album::new(
            Some("Abbey Road".to_string()),
            None,
            Some("Another Band".to_string()),
        );
        assert_ne!(a, c);

        let d = Album::new(
            Some("Let It Be".to_string()),
            None,
            Some("The Beatles".to_string()),
        );
        assert_ne!(a, d);
    }

    #[test]
    fn display_matches_the_diagnostic_format() {
        assert_eq!(
            abbey_road().to_string(),
            "Album: Abbey Road from: The Beatles"
        );
    }

    #[test]
    fn section_title_and_artwork_key_are_the_name() {
        let album = abbey_road();
        assert_eq!(album.section_title(), "Abbey Road");
        assert_eq!(album.artwork_cache_key(), "Abbey Road");
    }

    #[test]
    fn envelope_round_trip_preserves_every_field() {
        let mut album = abbey_road();
        album.set_musicbrainz_id(Some("b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d".to_string()));
        album.set_fetching(true);

        let decoded = Album::from_envelope(&album.to_envelope())
            .unwrap()
            .expect("local tag is registered");
        assert_eq!(decoded, album);
        assert_eq!(decoded.artwork_url(), "http://x/art.jpg");
        assert_eq!(decoded.date_added(), 100);
        assert_eq!(
            decoded.musicbrainz_id(),
            Some("b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d")
        );
        assert!(decoded.fetching());
    }

    #[test]
    fn round_trip_without_musicbrainz_id() {
        let album = Album::new(None, None, None);
        let decoded = Album::from_envelope(&album.to_envelope())
            .unwrap()
            .expect("local tag is registered");
        assert_eq!(decoded.musicbrainz_id(), None);
        assert!(!decoded.fetching());
    }

    #[test]
    fn unknown_tag_decodes_to_none() {
        let mut writer = EnvelopeWriter::new();
        writer.put_str("verse.models.album.cloud");
        writer.put_str("Abbey Road");
        assert_eq!(Album::from_envelope(&writer.into_bytes()).unwrap(), None);
    }

    #[test]
    fn empty_tag_decodes_to_none() {
        let mut writer = EnvelopeWriter::new();
        writer.put_str("");
        assert_eq!(Album::from_envelope(&writer.into_bytes()).unwrap(), None);
    }

    #[test]
    fn racing_fetch_claims_never_tear() {
        let album = Arc::new(abbey_road());
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let album = Arc::clone(&album);
                thread::spawn(move || album.set_fetching(true))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(album.fetching());
    }

    #[test]
    fn musicbrainz_id_is_attachable_and_clearable() {
        let mut album = abbey_road();
        album.set_musicbrainz_id(Some("d6010be3".to_string()));
        assert_eq!(album.musicbrainz_id(), Some("d6010be3"));
        album.set_musicbrainz_id(None);
        assert_eq!(album.musicbrainz_id(), None);
    }

    #[test]
    fn clone_carries_the_fetch_flag_value() {
        let album = abbey_road();
        album.set_fetching(true);
        assert!(album.clone().fetching());
    }

    #[test]
    fn serde_json_round_trip() {
        let mut album = abbey_road();
        album.set_musicbrainz_id(Some("d6010be3".to_string()));
        let json = serde_json::to_string(&album).unwrap();
        let back: Album = serde_json::from_str(&json).unwrap();
        assert_eq!(back, album);
        assert_eq!(back.artwork_url(), album.artwork_url());
        assert_eq!(back.musicbrainz_id(), album.musicbrainz_id());
    }
}
