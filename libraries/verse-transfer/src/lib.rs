//! Verse Transfer - Flattened record envelopes
//!
//! Model records cross process boundaries as a flat, length-prefixed binary
//! envelope: a type tag followed by the record's fields in a fixed order.
//! Decoding runs through a [`DecoderRegistry`], which peeks the tag, rewinds,
//! and dispatches to the decoder registered for that record kind. A tag
//! nobody registered comes back as an absent result instead of an error, so
//! callers can treat "no known variant" as a normal outcome.
//!
//! # Example
//!
//! ```
//! use verse_transfer::{DecoderRegistry, Envelope, EnvelopeReader, EnvelopeWriter};
//!
//! struct Marker {
//!     label: String,
//! }
//!
//! impl Envelope for Marker {
//!     fn type_tag(&self) -> &'static str {
//!         "verse.example.marker"
//!     }
//!
//!     fn write_envelope(&self, writer: &mut EnvelopeWriter) {
//!         writer.put_str(self.type_tag());
//!         writer.put_str(&self.label);
//!     }
//! }
//!
//! fn decode_marker(reader: &mut EnvelopeReader<'_>) -> verse_transfer::Result<Marker> {
//!     reader.get_str()?; // tag, already matched by the registry
//!     Ok(Marker {
//!         label: reader.get_str()?,
//!     })
//! }
//!
//! let mut registry = DecoderRegistry::new();
//! registry.register("verse.example.marker", decode_marker);
//!
//! let bytes = Marker { label: "favorites".into() }.to_envelope();
//! let decoded = registry.decode_bytes(&bytes)?.expect("tag is registered");
//! assert_eq!(decoded.label, "favorites");
//! # Ok::<(), verse_transfer::EnvelopeError>(())
//! ```

mod envelope;
mod error;
mod registry;

// Re-export public API
pub use envelope::{Envelope, EnvelopeReader, EnvelopeWriter};
pub use error::{EnvelopeError, Result};
pub use registry::{DecodeFn, DecoderRegistry};
