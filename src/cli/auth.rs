use crate::{
    api::RemoteApi,
    cli::{build_app, spinner},
    config::{self, Mode},
    error, info, success,
    types::Role,
    warning,
};

pub async fn login(username: String, role: Role) {
    let mut app = build_app();
    if app.mode() == Mode::Local {
        warning!("Running in local mode, no login required.");
        return;
    }

    let pb = spinner("Logging in...");
    let result = app.login(&username, role).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            // login only returns Ok with a verified identity in place
            if let Some(user) = app.session.user() {
                success!("Logged in as {} ({})", user.username, user.role);
            }
            info!("{} movies in your collection", app.movies().len());
        }
        Err(e) => error!("Login failed: {}", e),
    }
}

pub async fn logout() {
    let mut app = build_app();
    if app.mode() == Mode::Local {
        warning!("Running in local mode, no session to clear.");
        return;
    }

    app.logout().await;
    success!("Logged out.");
}

pub async fn whoami() {
    let mut app = build_app();
    if app.mode() == Mode::Local {
        info!("Running in local mode, no authentication.");
        return;
    }

    let pb = spinner("Verifying session...");
    let result = app.restore_session().await;
    pb.finish_and_clear();

    if let Err(e) = result {
        error!("Cannot restore session. Err: {}", e);
    }

    match app.session.user() {
        Some(user) => success!("Logged in as {} ({})", user.username, user.role),
        None => info!("Not logged in. Run cinelog login <username>."),
    }
}

pub async fn roles() {
    if config::mode() == Mode::Local {
        info!("Running in local mode, no roles apply.");
        return;
    }

    let api = RemoteApi::new(config::api_url());
    let pb = spinner("Fetching roles...");
    let result = api.roles().await;
    pb.finish_and_clear();

    match result {
        Ok(roles) => {
            info!("Roles accepted by the API:");
            for role in roles {
                println!("  {}", role);
            }
        }
        Err(e) => error!("Cannot fetch roles. Err: {}", e),
    }
}
