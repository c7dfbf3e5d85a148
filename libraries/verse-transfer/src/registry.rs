//! Tag-keyed dispatch for envelope decoding.

use std::collections::HashMap;

use tracing::warn;

use crate::envelope::EnvelopeReader;
use crate::error::Result;

/// Decoder for one concrete record kind.
///
/// The reader is positioned at the start of the envelope, so the decoder
/// consumes the type tag itself before the record fields.
pub type DecodeFn<T> = fn(&mut EnvelopeReader<'_>) -> Result<T>;

/// Maps envelope type tags to the decoder for that record kind.
///
/// Dispatch is over a closed set of registered tags, but registration is
/// open: a new record kind adds its own `(tag, decoder)` pair without
/// touching existing ones. A tag nobody registered decodes to an absent
/// result rather than an error.
#[derive(Debug)]
pub struct DecoderRegistry<T> {
    decoders: HashMap<&'static str, DecodeFn<T>>,
}

impl<T> Default for DecoderRegistry<T> {
    fn default() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }
}

impl<T> DecoderRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoder for `tag`. A later registration for the same tag
    /// replaces the earlier one.
    pub fn register(&mut self, tag: &'static str, decode: DecodeFn<T>) {
        self.decoders.insert(tag, decode);
    }

    /// Decode the record at the reader's current position.
    ///
    /// The type tag is read once to pick a decoder, then the reader is
    /// rewound so the dispatched decoder consumes the tag again as its
    /// first field. A missing, null, empty, or unregistered tag yields
    /// `Ok(None)`; structurally invalid bytes are an error.
    pub fn decode(&self, reader: &mut EnvelopeReader<'_>) -> Result<Option<T>> {
        if reader.remaining() == 0 {
            return Ok(None);
        }
        let start = reader.position();
        let tag = reader.get_opt_str()?;
        reader.seek(start);

        let Some(tag) = tag else {
            return Ok(None);
        };
        if tag.is_empty() {
            return Ok(None);
        }

        match self.decoders.get(tag.as_str()) {
            Some(decode) => decode(reader).map(Some),
            None => {
                warn!(%tag, "no decoder registered for envelope tag");
                Ok(None)
            }
        }
    }

    /// Convenience over [`decode`](Self::decode) for a raw byte buffer.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Option<T>> {
        self.decode(&mut EnvelopeReader::new(bytes))
    }
}
