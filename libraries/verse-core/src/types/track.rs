//! Track types

use std::time::Duration;

use serde::{Deserialize, Serialize};
use verse_transfer::{DecoderRegistry, Envelope, EnvelopeReader, EnvelopeWriter};

use crate::error::Result;
use crate::traits::{Groupable, LibraryModel};

/// Wire tag for tracks produced by the device-local library scanner.
pub const LOCAL_TRACK_TAG: &str = "verse.models.track.local";

/// Sentinel for an unknown track number.
pub const UNKNOWN_TRACK_NUMBER: i32 = -1;

/// A playable track in the media library.
///
/// Unlike albums and artists, a track is a plain value record: nothing on
/// it mutates after construction, so equality covers every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    title: String,
    album_name: String,
    artist_name: String,
    duration_ms: i64,
    track_number: i32,
    url: String,
}

impl Track {
    /// Create a track without playback details.
    ///
    /// Missing text inputs normalize to the empty string.
    pub fn new(
        title: Option<String>,
        album_name: Option<String>,
        artist_name: Option<String>,
        url: Option<String>,
    ) -> Self {
        Self::with_playback_details(title, album_name, artist_name, url, 0, UNKNOWN_TRACK_NUMBER)
    }

    /// Create a track with duration and position known.
    pub fn with_playback_details(
        title: Option<String>,
        album_name: Option<String>,
        artist_name: Option<String>,
        url: Option<String>,
        duration_ms: i64,
        track_number: i32,
    ) -> Self {
        Self {
            title: title.unwrap_or_default(),
            album_name: album_name.unwrap_or_default(),
            artist_name: artist_name.unwrap_or_default(),
            duration_ms,
            track_number,
            url: url.unwrap_or_default(),
        }
    }

    /// Track title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Name of the album the track belongs to.
    pub fn album_name(&self) -> &str {
        &self.album_name
    }

    /// Name of the performing artist.
    pub fn artist_name(&self) -> &str {
        &self.artist_name
    }

    /// Raw duration in milliseconds, 0 if unknown.
    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    /// Track duration, when known.
    pub fn duration(&self) -> Option<Duration> {
        (self.duration_ms > 0).then(|| Duration::from_millis(self.duration_ms as u64))
    }

    /// Position on the album, or [`UNKNOWN_TRACK_NUMBER`].
    pub fn track_number(&self) -> i32 {
        self.track_number
    }

    /// Locator of the playable media.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Decode whichever registered track variant the buffer holds.
    pub fn from_envelope(bytes: &[u8]) -> Result<Option<Self>> {
        Ok(Self::default_registry().decode_bytes(bytes)?)
    }

    /// Registry holding the stock track variants.
    pub fn default_registry() -> DecoderRegistry<Self> {
        let mut registry = DecoderRegistry::new();
        registry.register(LOCAL_TRACK_TAG, Self::decode_local);
        registry
    }

    /// Decoder for [`LOCAL_TRACK_TAG`].
    pub fn decode_local(reader: &mut EnvelopeReader<'_>) -> verse_transfer::Result<Self> {
        reader.get_str()?; // tag, already matched by the registry
        Ok(Self {
            title: reader.get_str()?,
            album_name: reader.get_str()?,
            artist_name: reader.get_str()?,
            duration_ms: reader.get_i64()?,
            track_number: reader.get_i32()?,
            url: reader.get_str()?,
        })
    }
}

impl Groupable for Track {
    fn section_title(&self) -> &str {
        &self.title
    }
}

impl LibraryModel for Track {}

impl Envelope for Track {
    fn type_tag(&self) -> &'static str {
        LOCAL_TRACK_TAG
    }

    fn write_envelope(&self, writer: &mut EnvelopeWriter) {
        writer.put_str(self.type_tag());
        writer.put_str(&self.title);
        writer.put_str(&self.album_name);
        writer.put_str(&self.artist_name);
        writer.put_i64(self.duration_ms);
        writer.put_i32(self.track_number);
        writer.put_str(&self.url);
    }
}
