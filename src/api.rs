//! # Public API
//!
//! Entry points for decoding iReal payloads.
//!
//! - [`parse()`] - any payload: URL or bare text, one song or a playlist
//! - [`parse_song()`] - one already-decoded song payload
//! - [`parse_playlist()`] - several songs separated by `====`
//!
//! All of them succeed on any input. Problems found in the chord charts come
//! back as warnings next to the decoded value.
//!
//! ## Typical Usage
//!
//! ```rust
//! use ireal::{parse, Config, Document};
//!
//! let url = "irealb://Blue%20Bossa=Dorham%20Kenny==Bossa%20Nova=C-=C-7|F-7|=140=";
//! let decoded = parse(url, &Config::default());
//!
//! match decoded.value {
//!     Document::Song(song) => {
//!         assert_eq!(song.title, "Blue Bossa");
//!         assert_eq!(song.tempo, 140);
//!         assert_eq!(song.bars().count(), 2);
//!     }
//!     Document::Playlist(_) => unreachable!(),
//! }
//! ```

use crate::ast::{Decoded, Document, Playlist, Song};
use crate::config::Config;
use crate::header::{clean_text, split_header};
use crate::progression::decode_progression;
use crate::symbol::canonicalize;
use crate::transport::{is_playlist, percent_decode, split_playlist, strip_scheme};

/// Decode a payload of any shape.
///
/// # Pipeline
/// 1. Percent-decode the input
/// 2. Strip an `irealb://` / `irealbook://` scheme if present
/// 3. Split into songs when a URL holds a playlist
/// 4. Decode each song
///
/// Bare text is always one song. Its header can carry `====` on its own
/// (empty composer, unused field and style), so only a URL is checked for
/// the playlist separator.
pub fn parse(input: &str, config: &Config) -> Decoded<Document> {
    let decoded = percent_decode(input);

    match strip_scheme(&decoded) {
        Some(content) if is_playlist(content) => {
            parse_playlist(content, config).map(Document::Playlist)
        }
        Some(content) => parse_song(content, config).map(Document::Song),
        None => parse_song(&decoded, config).map(Document::Song),
    }
}

/// Decode one song payload (`title=composer==style=key=progression...`).
///
/// The style picks the time signature through `config`; the key goes through
/// the same shorthand expansion as chord symbols.
///
/// # Example
/// ```rust
/// use ireal::{parse_song, Config};
///
/// let song = parse_song("Waltzing=Me==Jazz Waltz=Bb^=Bb^7|Eh7 A7|", &Config::default()).value;
///
/// assert_eq!(song.key, "Bbmaj7");
/// assert_eq!(song.time_signature.to_string(), "3/4");
/// assert_eq!(song.sections[0].bars[1].chords[0].chord, "Em7b5");
/// ```
pub fn parse_song(payload: &str, config: &Config) -> Decoded<Song> {
    let header = split_header(payload);
    let style = clean_text(header.style);
    let time_signature = config.time_signature_for(&style);

    let title = clean_text(header.title);
    tracing::debug!(%title, %style, %time_signature, "decoding song");

    decode_progression(&header.progression, &time_signature).map(|sections| Song {
        title,
        composer: clean_text(header.composer),
        style,
        key: canonicalize(&clean_text(header.key)),
        time_signature,
        tempo: header.tempo,
        repeats: header.repeats,
        sections,
    })
}

/// Decode every song of a playlist, in order.
///
/// Songs are independent: a broken chart in one never affects the others.
pub fn parse_playlist(content: &str, config: &Config) -> Decoded<Playlist> {
    let mut warnings = Vec::new();
    let mut songs = Vec::new();

    for (index, payload) in split_playlist(content).into_iter().enumerate() {
        let _span = tracing::debug_span!("song", index).entered();
        let decoded = parse_song(payload, config);
        warnings.extend(decoded.warnings);
        songs.push(decoded.value);
    }

    Decoded::new(Playlist { songs }, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TimeSignature;

    #[test]
    fn test_parse_url_song() {
        let decoded = parse(
            "irealb://Solar=Davis%20Miles==Medium%20Swing=C-=C-^7|G-7 C7|=160=2",
            &Config::default(),
        );
        let song = match decoded.value {
            Document::Song(song) => song,
            other => panic!("Expected song, got {:?}", other),
        };

        assert_eq!(song.title, "Solar");
        assert_eq!(song.composer, "Davis Miles");
        assert_eq!(song.style, "Medium Swing");
        assert_eq!(song.key, "C-");
        assert_eq!(song.time_signature, TimeSignature::new(4, 4));
        assert_eq!(song.tempo, 160);
        assert_eq!(song.repeats, 2);
        assert_eq!(song.sections.len(), 1);
        assert_eq!(song.sections[0].bars[0].chords[0].chord, "C-maj7");
    }

    #[test]
    fn test_parse_bare_text() {
        let decoded = parse("Tune=Someone==Waltz=F=F|C7|", &Config::default());
        match decoded.value {
            Document::Song(song) => {
                assert_eq!(song.time_signature, TimeSignature::new(3, 4));
                assert_eq!(song.bars().count(), 2);
            }
            other => panic!("Expected song, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_text_with_empty_fields_is_one_song() {
        let decoded = parse("Tune====C=C|F|", &Config::default());
        match decoded.value {
            Document::Song(song) => {
                assert_eq!(song.title, "Tune");
                assert_eq!(song.composer, "");
                assert_eq!(song.style, "");
                assert_eq!(song.key, "C");
                assert_eq!(song.bars().count(), 2);
            }
            other => panic!("Expected song, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_playlist() {
        let url = "irealb://One=A==Swing=C=C|====Two=B==Choro=G=G|D7|====";
        let decoded = parse(url, &Config::default());
        let playlist = match decoded.value {
            Document::Playlist(playlist) => playlist,
            other => panic!("Expected playlist, got {:?}", other),
        };

        assert_eq!(playlist.songs.len(), 2);
        assert_eq!(playlist.songs[0].title, "One");
        assert_eq!(playlist.songs[1].title, "Two");
        assert_eq!(playlist.songs[1].time_signature, TimeSignature::new(2, 4));
        assert_eq!(playlist.songs[1].bars().count(), 2);
    }

    #[test]
    fn test_playlist_collects_warnings() {
        let decoded = parse_playlist("A=x==Swing=C={oops C|====B=y==Swing=C=C|,|", &Config::default());
        assert_eq!(decoded.value.songs.len(), 2);
        assert_eq!(decoded.warnings.len(), 2);
    }

    #[test]
    fn test_custom_style() {
        let config = Config::default().with_style("Afro", TimeSignature::new(6, 8));
        let song = parse_song("T=C==Afro=D-=D-7 A7|", &config).value;
        let durations: Vec<String> = song.sections[0].bars[0]
            .chords
            .iter()
            .map(|slot| slot.duration.to_string())
            .collect();
        assert_eq!(durations, vec!["3", "3"]);
    }

    #[test]
    fn test_empty_payload() {
        let decoded = parse("", &Config::default());
        match decoded.value {
            Document::Song(song) => {
                assert_eq!(song.title, "");
                assert!(song.sections.is_empty());
            }
            other => panic!("Expected song, got {:?}", other),
        }
        assert!(decoded.warnings.is_empty());
    }
}
