//! Reshapes decoded Spotify responses into the flat records that are printed
//! and charted.
//!
//! Every function is pure and builds its records and the chart [`Series`] in a
//! single pass. List normalizers return `None` for an empty input so callers
//! have to decide explicitly what an empty answer means.

use crate::types::{
    Album, AlbumArtist, AlbumRecord, Artist, ArtistRecord, GenreSongRecord, Series, SongRecord, Track,
    TrackWithFeatures,
};

/// Multiplier turning popularity (0-100) into the displayed "streams" figure.
pub const STREAMS_PER_POPULARITY: u64 = 10_000;

/// Label used when an item credits no artist.
pub const UNKNOWN_ARTIST: &str = "Unknown artist";

/// Display-only stream estimate for a popularity score.
pub fn derived_streams(popularity: u32) -> u64 {
    u64::from(popularity) * STREAMS_PER_POPULARITY
}

/// Top tracks of an artist: one record per track and a name/popularity series.
///
/// The output always has exactly as many records and series entries as the
/// input has tracks.
pub fn songs(tracks: Vec<TrackWithFeatures>) -> (Vec<SongRecord>, Series) {
    let mut series = Series::new();
    let records: Vec<SongRecord> = tracks
        .into_iter()
        .map(|TrackWithFeatures { track, features }| {
            series.push(track.name.clone(), f64::from(track.popularity));
            SongRecord {
                streams: derived_streams(track.popularity),
                name: track.name,
                popularity: track.popularity,
                duration_ms: track.duration_ms,
                bpm: features.tempo,
            }
        })
        .collect();
    (records, series)
}

/// Albums of an artist with a name/track-count series.
pub fn artist_albums(albums: Vec<Album>) -> Option<(Vec<AlbumRecord>, Series)> {
    if albums.is_empty() {
        return None;
    }

    let mut series = Series::new();
    let records: Vec<AlbumRecord> = albums
        .into_iter()
        .map(|album| {
            series.push(album.name.clone(), f64::from(album.total_tracks));
            AlbumRecord::Discography {
                name: album.name,
                total_tracks: album.total_tracks,
            }
        })
        .collect();
    Some((records, series))
}

/// Albums found by a genre search, credited to their first artist.
pub fn genre_albums(albums: Vec<Album>) -> Option<Vec<AlbumRecord>> {
    if albums.is_empty() {
        return None;
    }

    Some(
        albums
            .into_iter()
            .map(|album| AlbumRecord::GenreMatch {
                artist: first_artist(&album.artists),
                name: album.name,
            })
            .collect(),
    )
}

/// Related artists or genre artists with a name/follower-count series.
pub fn artists(artists: Vec<Artist>) -> Option<(Vec<ArtistRecord>, Series)> {
    if artists.is_empty() {
        return None;
    }

    let mut series = Series::new();
    let records: Vec<ArtistRecord> = artists
        .into_iter()
        .map(|artist| {
            // follower counts stay well inside f64's exact integer range
            series.push(artist.name.clone(), artist.followers.total as f64);
            ArtistRecord {
                name: artist.name,
                followers: artist.followers.total,
            }
        })
        .collect();
    Some((records, series))
}

/// Tracks found by a genre search with a name/popularity series.
pub fn genre_songs(tracks: Vec<Track>) -> Option<(Vec<GenreSongRecord>, Series)> {
    if tracks.is_empty() {
        return None;
    }

    let mut series = Series::new();
    let records: Vec<GenreSongRecord> = tracks
        .into_iter()
        .map(|track| {
            series.push(track.name.clone(), f64::from(track.popularity));
            GenreSongRecord {
                artist: first_artist(&track.artists),
                name: track.name,
                popularity: track.popularity,
                preview_url: track.preview_url,
            }
        })
        .collect();
    Some((records, series))
}

fn first_artist(artists: &[AlbumArtist]) -> String {
    artists
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string())
}
