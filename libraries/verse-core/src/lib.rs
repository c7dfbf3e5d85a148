//! Verse Player Core
//!
//! Model types and shared capabilities for the Verse Player media library.
//!
//! This crate holds the passive records the rest of the application passes
//! around — albums, artists, and tracks — together with the grouping
//! capability list views rely on and the envelope decoding used when
//! records cross a process boundary. All asynchronous work (artwork
//! fetching, MusicBrainz resolution) lives in collaborators that only read
//! and write fields of these records.
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::Album;
//! use verse_core::Groupable;
//! use verse_transfer::Envelope;
//!
//! let album = Album::new(
//!     Some("Abbey Road".to_string()),
//!     Some("http://x/art.jpg".to_string()),
//!     Some("The Beatles".to_string()),
//! );
//! assert_eq!(album.section_title(), "Abbey Road");
//!
//! // Flatten for transfer, then resolve the concrete variant back out.
//! let decoded = Album::from_envelope(&album.to_envelope()).unwrap().unwrap();
//! assert_eq!(decoded, album);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::{Groupable, LibraryModel};
pub use types::{Album, Artist, Track};
