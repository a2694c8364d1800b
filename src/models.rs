use serde::Deserialize;

/// Canonical fields for a new record, always sourced from a provider detail
/// lookup rather than user input.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub poster_url: String,
}

#[derive(Debug, Deserialize)]
pub struct AddMovieForm {
    pub movie: String,
}

#[derive(Debug, Deserialize)]
pub struct RatingForm {
    pub rating: String,
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct AddPageQuery {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FindQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordQuery {
    pub id: i32,
}

/// One search hit from the metadata provider, not yet persisted.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieCandidate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Full provider detail for one movie, the source of record fields.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetail {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}
