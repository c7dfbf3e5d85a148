//! Model types held by library collections and list views.

mod album;
mod artist;
mod track;

pub use album::{Album, LOCAL_ALBUM_TAG, UNKNOWN_DATE_ADDED};
pub use artist::{Artist, LOCAL_ARTIST_TAG, UNKNOWN_LOCAL_ID};
pub use track::{Track, LOCAL_TRACK_TAG, UNKNOWN_TRACK_NUMBER};
