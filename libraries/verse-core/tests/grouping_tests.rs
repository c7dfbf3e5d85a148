//! Integration tests for list grouping across model kinds
//!
//! List views hold a mix of record kinds and only care that each one can
//! name its section; these tests drive that capability through the marker
//! trait the way a list adapter would.

use verse_core::types::{Album, Artist, Track};
use verse_core::{Groupable, LibraryModel};

fn first_letter(model: &dyn LibraryModel) -> Option<char> {
    model.section_title().chars().next()
}

#[test]
fn mixed_model_kinds_group_under_their_section_titles() {
    let album = Album::new(
        Some("Abbey Road".to_string()),
        None,
        Some("The Beatles".to_string()),
    );
    let artist = Artist::new(Some("Aphex Twin".to_string()));
    let track = Track::new(Some("Alameda".to_string()), None, None, None);

    let models: Vec<&dyn LibraryModel> = vec![&album, &artist, &track];
    assert!(models.iter().all(|m| first_letter(*m) == Some('A')));
}

#[test]
fn albums_sort_alphabetically_by_section_title() {
    let mut albums = vec![
        Album::new(Some("Revolver".to_string()), None, None),
        Album::new(Some("Abbey Road".to_string()), None, None),
        Album::new(Some("Help!".to_string()), None, None),
    ];
    albums.sort_by(|a, b| a.section_title().cmp(b.section_title()));

    let titles: Vec<_> = albums.iter().map(|a| a.section_title()).collect();
    assert_eq!(titles, ["Abbey Road", "Help!", "Revolver"]);
}
