use std::str::FromStr;

use super::prompt::{Field, Prompt};
use crate::{
    chart::BarChart,
    config::{Credentials, Endpoints},
    error::{DatifyError, Result},
    normalize,
    spotify::Catalog,
    types::{AlbumRecord, Artist},
};

pub const MODE_PROMPT: &str =
    "Welcome to Datify\nAre you going to search by artist or genre? (A/G): ";
pub const QUERY_PROMPT: &str = "Enter the name you are searching for: ";
pub const ARTIST_VIEW_PROMPT: &str = "Do you want to search for songs, albums, related artists? \nEnter 'songs', 'albums', 'related': ";
pub const GENRE_VIEW_PROMPT: &str =
    "Do you want to search for top songs by genre? \nEnter 'songs' 'albums' 'artists': ";

pub const INVALID_MODE: &str = "Invalid search type. Please enter 'A' or 'G'.";
pub const INVALID_ARTIST_VIEW: &str =
    "Invalid search type. Please enter 'songs', 'albums', 'related'.";
pub const INVALID_GENRE_VIEW: &str =
    "Invalid search type. Please enter 'songs', 'albums', 'artists'.";
pub const EMPTY_QUERY: &str = "Please enter a name to search for.";

pub const NO_ARTIST: &str = "No artists with this name exists...";
pub const NO_GENRE_SONGS: &str = "No songs found for this genre.";
pub const NO_GENRE_ALBUMS: &str = "There are no albums for this genre";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Artist,
    Genre,
}

impl FromStr for Mode {
    type Err = DatifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "A" | "a" => Ok(Mode::Artist),
            "G" | "g" => Ok(Mode::Genre),
            _ => Err(DatifyError::InvalidInput(INVALID_MODE.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistView {
    Songs,
    Albums,
    Related,
}

impl FromStr for ArtistView {
    type Err = DatifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "songs" => Ok(ArtistView::Songs),
            "albums" => Ok(ArtistView::Albums),
            "related" => Ok(ArtistView::Related),
            _ => Err(DatifyError::InvalidInput(INVALID_ARTIST_VIEW.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreView {
    Songs,
    Albums,
    Artists,
}

impl FromStr for GenreView {
    type Err = DatifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "songs" => Ok(GenreView::Songs),
            "albums" => Ok(GenreView::Albums),
            "artists" => Ok(GenreView::Artists),
            _ => Err(DatifyError::InvalidInput(INVALID_GENRE_VIEW.to_string())),
        }
    }
}

/// A numbered listing and the chart that goes with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub heading: String,
    pub lines: Vec<String>,
    pub chart: Option<BarChart>,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Results were found
    Report(Report),
    /// The search matched nothing; carries the message for the user
    NotFound(String),
}

/// Runs one session: mode, query, token, search, result type, fetch.
///
/// The mode letter is validated before anything is sent over the network.
/// In artist mode the query is resolved to one artist first and the session
/// stops with [`Outcome::NotFound`] if there is none; the result type is only
/// asked afterwards. In genre mode the result type is asked before the token
/// is requested.
///
/// # Errors
///
/// - `DatifyError::InvalidInput` - unknown mode letter, unknown result type or empty query
/// - `DatifyError::Auth` - the token exchange failed
/// - `DatifyError::EmptyResult` - top tracks, albums, related or genre artists came back empty
/// - any request or decoding error of the query client
pub async fn run<P: Prompt>(
    prompt: &mut P,
    endpoints: Endpoints,
    credentials: &Credentials,
) -> Result<Outcome> {
    let mode: Mode = prompt.ask(Field::Mode, MODE_PROMPT)?.parse()?;

    let query = prompt.ask(Field::Query, QUERY_PROMPT)?.trim().to_string();
    if query.is_empty() {
        return Err(DatifyError::InvalidInput(EMPTY_QUERY.to_string()));
    }

    match mode {
        Mode::Artist => {
            let catalog = Catalog::connect(endpoints, credentials).await?;
            let Some(artist) = catalog.search_for_artist(&query).await? else {
                return Ok(Outcome::NotFound(NO_ARTIST.to_string()));
            };

            let view: ArtistView = prompt.ask(Field::View, ARTIST_VIEW_PROMPT)?.parse()?;
            artist_report(&catalog, &artist, view).await
        }
        Mode::Genre => {
            let view: GenreView = prompt.ask(Field::View, GENRE_VIEW_PROMPT)?.parse()?;
            let catalog = Catalog::connect(endpoints, credentials).await?;
            genre_report(&catalog, &query, view).await
        }
    }
}

/// Fetches and reshapes one of the artist views.
pub async fn artist_report(catalog: &Catalog, artist: &Artist, view: ArtistView) -> Result<Outcome> {
    let report = match view {
        ArtistView::Songs => {
            let tracks = catalog.get_songs_by_artist(&artist.id).await?;
            let (songs, series) = normalize::songs(tracks);
            if songs.is_empty() {
                return Err(DatifyError::EmptyResult(format!("top tracks for {}", artist.name)));
            }

            Report {
                heading: format!("Here are the top songs by {}:", artist.name),
                lines: numbered(songs.iter().map(|s| {
                    format!("{} (BPM: {}, Streams: {})", s.name, s.bpm, s.streams)
                })),
                chart: Some(
                    BarChart::new(format!("Popularity of the top songs by {}", artist.name), series)
                        .axes("Song Name", "Popularity"),
                ),
            }
        }
        ArtistView::Albums => {
            let albums = catalog.get_albums_by_artist(&artist.id).await?;
            let (albums, series) = normalize::artist_albums(albums)
                .ok_or_else(|| DatifyError::EmptyResult(format!("albums for {}", artist.name)))?;

            Report {
                heading: format!("Here are the top albums by {}:", artist.name),
                lines: numbered(albums.iter().map(|a| a.name().to_string())),
                chart: Some(
                    BarChart::new(format!("Albums and track counts by {}", artist.name), series)
                        .axes("Album Name", "Number of Tracks"),
                ),
            }
        }
        ArtistView::Related => {
            let related = catalog.get_related_artists(&artist.id).await?;
            let (related, series) = normalize::artists(related).ok_or_else(|| {
                DatifyError::EmptyResult(format!("related artists for {}", artist.name))
            })?;

            Report {
                heading: format!("Here are some related artists to {}:", artist.name),
                lines: numbered(related.iter().map(|a| a.name.clone())),
                chart: Some(
                    BarChart::new(
                        format!("Number of followers for related artists of {}", artist.name),
                        series,
                    )
                    .axes("Artist Name", "Number of Followers"),
                ),
            }
        }
    };

    Ok(Outcome::Report(report))
}

/// Fetches and reshapes one of the genre views.
pub async fn genre_report(catalog: &Catalog, genre: &str, view: GenreView) -> Result<Outcome> {
    let report = match view {
        GenreView::Songs => {
            let tracks = catalog.search_top_songs_by_genre(genre).await?;
            let Some((songs, series)) = normalize::genre_songs(tracks) else {
                return Ok(Outcome::NotFound(NO_GENRE_SONGS.to_string()));
            };

            Report {
                heading: format!("Here are the top 10 songs in the genre\n'{genre}':"),
                lines: numbered(songs.iter().map(|s| format!("{} by {}", s.name, s.artist))),
                chart: Some(
                    BarChart::new(format!("Top songs in the genre '{genre}'"), series)
                        .axes("Song Name", "Popularity"),
                ),
            }
        }
        GenreView::Albums => {
            let albums = catalog.search_top_albums_by_genre(genre).await?;
            let Some(albums) = normalize::genre_albums(albums) else {
                return Ok(Outcome::NotFound(NO_GENRE_ALBUMS.to_string()));
            };

            Report {
                heading: format!("Here are the top 10 albums in the genre\n'{genre}':"),
                lines: numbered(albums.iter().map(|album| match album {
                    AlbumRecord::GenreMatch { name, artist } => format!("{name} by {artist}"),
                    AlbumRecord::Discography { name, .. } => name.clone(),
                })),
                chart: None,
            }
        }
        GenreView::Artists => {
            let artists = catalog.search_top_artists_by_genre(genre).await?;
            let (artists, series) = normalize::artists(artists)
                .ok_or_else(|| DatifyError::EmptyResult(format!("artists in the genre '{genre}'")))?;

            Report {
                heading: format!("Here are the top 10 artists in the genre\n'{genre}':"),
                lines: numbered(artists.iter().map(|a| a.name.clone())),
                chart: Some(
                    BarChart::new(format!("Top artists in the genre '{genre}'"), series)
                        .axes("Artist Name", "Number of followers"),
                ),
            }
        }
    };

    Ok(Outcome::Report(report))
}

fn numbered(items: impl Iterator<Item = String>) -> Vec<String> {
    items
        .enumerate()
        .map(|(idx, item)| format!("{}. {}", idx + 1, item))
        .collect()
}
