use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, models::MovieCandidate, tmdb};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Movie Collection",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Movie Collection" }
                            p class="mt-2 text-gray-600" { "Ranked by your ratings, best first." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add your first movie to start the list." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for m in movies {
                                (movie_card(m))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn movie_card(m: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start gap-6" {
                @if !m.poster_url.is_empty() {
                    img class="w-24 rounded-md shadow" src=(m.poster_url) alt=(m.title);
                }
                div class="flex-1" {
                    div class="flex items-start justify-between gap-4" {
                        h2 class="text-xl font-semibold text-gray-900" {
                            @if let Some(ranking) = m.ranking {
                                span class="mr-2 text-gray-400" { "#" (ranking) }
                            }
                            (m.title)
                            span class="ml-2 font-normal text-gray-500" { "(" (m.year) ")" }
                        }
                        @match m.rating {
                            Some(rating) => {
                                span class="shrink-0 rounded-full bg-amber-100 px-3 py-1 text-sm font-semibold text-amber-800" { (rating) " / 10" }
                            }
                            None => {
                                span class="shrink-0 rounded-full bg-gray-100 px-3 py-1 text-sm text-gray-500" { "Unrated" }
                            }
                        }
                    }
                    p class="mt-2 text-sm text-gray-600" { (m.description) }
                    @if let Some(review) = &m.review {
                        @if !review.is_empty() {
                            p class="mt-2 text-sm italic text-gray-700" { "“" (review) "”" }
                        }
                    }
                    div class="mt-4 flex gap-4 text-sm" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?id={}", m.id)) { "Edit rating" }
                        a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", m.id)) { "Delete" }
                    }
                }
            }
        }
    }
}

pub fn add_page(error: Option<&str>) -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add Movie" }
                        p class="mt-2 text-gray-600" { "Search by title, then pick the right match." }

                        @if let Some(message) = error {
                            p class="mt-4 rounded-md bg-red-50 px-4 py-3 text-sm text-red-700" { (message) }
                        }

                        form class="mt-8 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="movie" { "Movie title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="movie" id="movie" required;
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to collection" }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, candidates: &[MovieCandidate]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Select Movie" }
                        p class="mt-2 text-gray-600" { "Results for “" (query) "”" }

                        @if candidates.is_empty() {
                            p class="mt-8 text-gray-600" { "No matches found. Try a different title." }
                        } @else {
                            ul class="mt-8 divide-y divide-gray-200" {
                                @for c in candidates {
                                    li class="py-4" {
                                        a class="block hover:bg-gray-50 rounded-md px-2 py-1" href=(format!("/find?id={}", c.id)) {
                                            span class="font-semibold text-gray-900" { (c.title) }
                                            @if let Some(year) = tmdb::release_year(c.release_date.as_deref()) {
                                                span class="ml-2 text-gray-500" { "(" (year) ")" }
                                            }
                                            @if let Some(overview) = &c.overview {
                                                p class="mt-1 text-sm text-gray-600 line-clamp-2" { (overview) }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                    }
                }
            }
        },
    )
}

pub fn edit_page(m: &movie::Model, error: Option<&str>) -> String {
    let rating_value = m.rating.map(|r| r.to_string()).unwrap_or_default();
    let review_value = m.review.clone().unwrap_or_default();

    page(
        "Rate Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (m.title) " (" (m.year) ")" }
                        p class="mt-2 text-gray-600" { "Your rating out of 10, and an optional review." }

                        @if let Some(message) = error {
                            p class="mt-4 rounded-md bg-red-50 px-4 py-3 text-sm text-red-700" { (message) }
                        }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit?id={}", m.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Rating" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" value=(rating_value);
                            }
                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review" value=(review_value);
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to collection" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: &str) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}
