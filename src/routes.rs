use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tracing::debug;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{AddMovieForm, AddPageQuery, FindQuery, NewMovie, RatingForm, RecordQuery},
    ranking, templates, tmdb,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(add_search))
        .route("/find", get(find))
        .route("/edit", get(edit_form).post(edit_submit))
        .route("/delete", get(delete).post(delete))
        .with_state(state)
}

/// Ranked list view. Rankings are re-derived on every request, not only when
/// data changed.
async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = ranking::recompute(&state.store).await?;
    Ok(Html(templates::index_page(&movies)))
}

async fn add_form(Query(q): Query<AddPageQuery>) -> Html<String> {
    Html(templates::add_page(q.error.as_deref()))
}

async fn add_search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddMovieForm>,
) -> AppResult<Html<String>> {
    let query = form.movie.trim();
    if query.is_empty() {
        return Ok(Html(templates::add_page(Some("Please fill this field"))));
    }

    let candidates = state.tmdb.search(query).await?;
    Ok(Html(templates::select_page(query, &candidates)))
}

/// Persists the selected candidate from its provider detail, then hands off
/// to the rating step.
async fn find(State(state): State<Arc<AppState>>, Query(q): Query<FindQuery>) -> AppResult<Response> {
    let provider_id = q
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("missing id query parameter".to_string()))?;

    let detail = state.tmdb.movie_detail(provider_id.trim()).await?;

    let year = tmdb::release_year(detail.release_date.as_deref()).ok_or_else(|| {
        AppError::UpstreamUnavailable(format!(
            "provider returned no usable release date for {provider_id}"
        ))
    })?;

    let new = NewMovie {
        title: detail.title,
        year,
        description: detail.overview.unwrap_or_default(),
        poster_url: state.tmdb.poster_url(detail.poster_path.as_deref()),
    };

    match state.store.create(new).await {
        Ok(created) => {
            debug!(id = created.id, title = %created.title, "created movie record");
            Ok(Redirect::to(&format!("/edit?id={}", created.id)).into_response())
        }
        Err(AppError::DuplicateTitle(title)) => {
            let message = format!("\"{title}\" is already in your collection");
            Ok(Redirect::to(&format!("/add?error={}", urlencoding::encode(&message)))
                .into_response())
        }
        Err(err) => Err(err),
    }
}

async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RecordQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.id).await?;
    Ok(Html(templates::edit_page(&movie, None)))
}

async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RecordQuery>,
    Form(form): Form<RatingForm>,
) -> AppResult<Response> {
    let movie = state.store.get(q.id).await?;

    // "nan" and "inf" parse as f64 but are not usable ratings.
    let rating = form.rating.trim().parse::<f64>().ok().filter(|r| r.is_finite());
    let Some(rating) = rating else {
        return Ok(Html(templates::edit_page(&movie, Some("Rating must be a number")))
            .into_response());
    };

    state.store.set_review(movie.id, rating, form.review).await?;
    Ok(Redirect::to("/").into_response())
}

async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RecordQuery>,
) -> AppResult<Redirect> {
    state.store.delete(q.id).await?;
    debug!(id = q.id, "deleted movie record");
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{
        AppState,
        store::{MovieStore, tests::sample},
        tmdb::TmdbClient,
    };

    async fn test_server() -> (TestServer, MovieStore) {
        let db = crate::db::connect_and_migrate("sqlite::memory:").await.unwrap();
        let store = MovieStore::new(db);

        // Port 1 is never listening, so any provider call surfaces as an
        // upstream failure.
        let tmdb = TmdbClient::new(
            reqwest::Client::new(),
            "test-key".to_string(),
            "http://127.0.0.1:1".to_string(),
            "https://img.example.test/t/p/w1280".to_string(),
        );

        let state = Arc::new(AppState { store: store.clone(), tmdb: Arc::new(tmdb) });

        (TestServer::new(super::router(state)).unwrap(), store)
    }

    #[tokio::test]
    async fn index_renders_empty_collection() {
        let (server, _store) = test_server().await;

        let response = server.get("/").await;
        response.assert_status_ok();
        assert!(response.text().contains("Nothing here yet"));
    }

    #[tokio::test]
    async fn index_lists_movies_best_first_with_rankings() {
        let (server, store) = test_server().await;
        let low = store.create(sample("Low")).await.unwrap();
        let high = store.create(sample("High")).await.unwrap();
        store.set_review(low.id, 3.0, String::new()).await.unwrap();
        store.set_review(high.id, 9.0, String::new()).await.unwrap();

        let response = server.get("/").await;
        response.assert_status_ok();

        let body = response.text();
        let high_pos = body.find("High").unwrap();
        let low_pos = body.find("Low").unwrap();
        assert!(high_pos < low_pos);

        assert_eq!(store.get(high.id).await.unwrap().ranking, Some(1));
        assert_eq!(store.get(low.id).await.unwrap().ranking, Some(2));
    }

    #[tokio::test]
    async fn add_with_blank_title_rerenders_with_message() {
        let (server, _store) = test_server().await;

        let response = server.post("/add").form(&[("movie", "   ")]).await;
        response.assert_status_ok();
        assert!(response.text().contains("Please fill this field"));
    }

    #[tokio::test]
    async fn find_without_id_is_bad_request() {
        let (server, _store) = test_server().await;

        let response = server.get("/find").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn find_with_unreachable_provider_is_bad_gateway() {
        let (server, _store) = test_server().await;

        let response = server.get("/find").add_query_param("id", "27205").await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        assert!(!response.text().contains("127.0.0.1"));
    }

    #[tokio::test]
    async fn edit_unknown_id_is_not_found() {
        let (server, _store) = test_server().await;

        let response = server.get("/edit").add_query_param("id", "42").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn edit_form_is_prepopulated() {
        let (server, store) = test_server().await;
        let movie = store.create(sample("Heat")).await.unwrap();
        store.set_review(movie.id, 8.5, "Tense.".to_string()).await.unwrap();

        let response = server.get("/edit").add_query_param("id", movie.id.to_string()).await;
        response.assert_status_ok();

        let body = response.text();
        assert!(body.contains("8.5"));
        assert!(body.contains("Tense."));
    }

    #[tokio::test]
    async fn edit_submit_writes_rating_and_redirects_home() {
        let (server, store) = test_server().await;
        let movie = store.create(sample("Heat")).await.unwrap();

        let response = server
            .post(&format!("/edit?id={}", movie.id))
            .form(&[("rating", "8.5"), ("review", "Tense.")])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/");

        let updated = store.get(movie.id).await.unwrap();
        assert_eq!(updated.rating, Some(8.5));
        assert_eq!(updated.review.as_deref(), Some("Tense."));
    }

    #[tokio::test]
    async fn edit_submit_rejects_non_numeric_rating() {
        let (server, store) = test_server().await;
        let movie = store.create(sample("Heat")).await.unwrap();

        let response = server
            .post(&format!("/edit?id={}", movie.id))
            .form(&[("rating", "great"), ("review", "")])
            .await;
        response.assert_status_ok();
        assert!(response.text().contains("Rating must be a number"));

        assert_eq!(store.get(movie.id).await.unwrap().rating, None);
    }

    #[tokio::test]
    async fn edit_submit_rejects_non_finite_rating() {
        let (server, store) = test_server().await;
        let movie = store.create(sample("Heat")).await.unwrap();

        for bad in ["nan", "inf", "-inf"] {
            let response = server
                .post(&format!("/edit?id={}", movie.id))
                .form(&[("rating", bad), ("review", "")])
                .await;
            response.assert_status_ok();
            assert!(response.text().contains("Rating must be a number"));
        }

        assert_eq!(store.get(movie.id).await.unwrap().rating, None);
    }

    #[tokio::test]
    async fn delete_removes_record_and_redirects_home() {
        let (server, store) = test_server().await;
        let movie = store.create(sample("Heat")).await.unwrap();

        let response = server.get("/delete").add_query_param("id", movie.id.to_string()).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/");

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let (server, _store) = test_server().await;

        let response = server.get("/delete").add_query_param("id", "42").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
