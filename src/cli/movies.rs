use tabled::Table;

use crate::{
    app::App,
    cli::{build_app, spinner},
    config::Mode,
    error,
    error::ApiError,
    info, success,
    types::{FilterSpec, MovieDraft, MoviePatch, MovieTableRow, SUGGESTED_GENRES, WatchStatus},
    warning,
};

/// Builds the controller and, in remote mode, restores the session. Exits
/// with guidance when no valid session exists.
async fn ready_app() -> App {
    let mut app = build_app();
    if app.mode() == Mode::Remote {
        let pb = spinner("Verifying session...");
        let result = app.restore_session().await;
        pb.finish_and_clear();

        if let Err(e) = result {
            error!("Cannot restore session. Err: {}", e);
        }
        if !app.ready() {
            error!("Not logged in. Run cinelog login <username>.");
        }
    }
    app
}

pub async fn list(status: Option<WatchStatus>, genre: Option<String>, search: Option<String>) {
    let mut app = ready_app().await;
    app.set_filter_hint(FilterSpec {
        status,
        genre,
        search: search.unwrap_or_default(),
    });

    let pb = spinner("Loading movies...");
    let result = app.load_movies().await;
    pb.finish_and_clear();

    if let Err(e) = result {
        error!("Cannot load movies. Err: {}", e);
    }

    if app.movies().is_empty() {
        info!("Your collection is empty. Run cinelog add to record a movie.");
        return;
    }

    let visible = app.visible_movies();
    if visible.is_empty() {
        info!("No movies match the current filter.");
        return;
    }

    let rows: Vec<MovieTableRow> = visible.iter().map(MovieTableRow::from).collect();
    println!("{}", Table::new(rows));

    info!("{} of {} movies", visible.len(), app.movies().len());
    let genres = app.genre_options();
    if !genres.is_empty() {
        info!("Genres in your collection: {}", genres.join(", "));
    }
}

pub async fn show(id: i64) {
    let mut app = ready_app().await;

    let pb = spinner("Loading movie...");
    let result = app.movie(id).await;
    pb.finish_and_clear();

    let movie = match result {
        Ok(movie) => movie,
        Err(ApiError::NotFound) => error!("No movie with id {}.", id),
        Err(e) => error!("Cannot load movie. Err: {}", e),
    };

    let fav = if movie.is_favorite { " ★" } else { "" };
    info!("{} ({}){}", movie.title, movie.year, fav);
    info!("Director: {}", movie.director);
    info!("Genre:    {}", movie.genre);
    info!("Status:   {}", movie.status);
    match movie.rating {
        Some(rating) => info!("Rating:   {:.1}", rating),
        None => info!("Rating:   -"),
    }
    if let Some(review) = &movie.review {
        if !review.is_empty() {
            info!("Review:   {}", review);
        }
    }
    if let Some(added) = movie.date_added {
        info!("Added:    {}", added.format("%Y-%m-%d"));
    }
}

pub async fn add(draft: MovieDraft) {
    let mut app = ready_app().await;

    let pb = spinner("Saving movie...");
    let result = app.add_movie(draft).await;
    pb.finish_and_clear();

    match result {
        Ok(movie) => {
            success!(
                "Added \"{}\" ({}) with id {}",
                movie.title,
                movie.year,
                movie.id
            );
        }
        Err(ApiError::Validation(issues)) => {
            for issue in &issues.0 {
                warning!("{}: {}", issue.field, issue.message);
            }
            if issues.has("genre") {
                info!("Suggested genres: {}", SUGGESTED_GENRES.join(", "));
            }
            error!("Movie not saved.");
        }
        Err(e) => error!("Cannot add movie. Err: {}", e),
    }
}

pub async fn update(id: i64, patch: MoviePatch) {
    if patch.is_empty() {
        warning!("Nothing to update, no fields given.");
        return;
    }

    let mut app = ready_app().await;

    let pb = spinner("Updating movie...");
    let result = app.update_movie(id, patch).await;
    pb.finish_and_clear();

    match result {
        Ok(movie) => success!("Updated \"{}\" (id {})", movie.title, movie.id),
        Err(ApiError::Validation(issues)) => {
            for issue in &issues.0 {
                warning!("{}: {}", issue.field, issue.message);
            }
            error!("Movie not updated.");
        }
        Err(ApiError::NotFound) => error!("No movie with id {}.", id),
        Err(e) => error!("Cannot update movie. Err: {}", e),
    }
}

pub async fn remove(id: i64) {
    let mut app = ready_app().await;

    let pb = spinner("Removing movie...");
    let result = app.delete_movie(id).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => success!("Removed movie {}.", id),
        Err(ApiError::NotFound) => error!("No movie with id {}.", id),
        Err(e) => error!("Cannot remove movie. Err: {}", e),
    }
}

pub async fn favorite(id: i64) {
    let mut app = ready_app().await;

    let pb = spinner("Toggling favorite...");
    let result = app.toggle_favorite(id).await;
    pb.finish_and_clear();

    match result {
        Ok(true) => success!("Marked movie {} as favorite.", id),
        Ok(false) => success!("Removed favorite mark from movie {}.", id),
        Err(ApiError::NotFound) => error!("No movie with id {}.", id),
        Err(e) => error!("Cannot toggle favorite. Err: {}", e),
    }
}

pub async fn stats() {
    let mut app = ready_app().await;

    let pb = spinner("Computing stats...");
    let result = app.stats().await;
    pb.finish_and_clear();

    match result {
        Ok(summary) => {
            if let Some(user) = &summary.user_info {
                info!("Signed in as {} ({})", user.username, user.role);
            }
            info!("Total movies:  {}", summary.total);
            info!("Watched:       {}", summary.watched);
            info!("Watching:      {}", summary.watching);
            info!("Want to watch: {}", summary.want_to_watch);
            info!("Favorites:     {}", summary.favorites);
        }
        Err(e) => error!("Cannot compute stats. Err: {}", e),
    }
}
