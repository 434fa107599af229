//! Demo server exercising the kraken-client library.
//!
//! Mounts the OAuth redirect and callback handlers plus a /user route
//! that fetches the authenticated user's profile.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect};
use axum::routing::get;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use kraken_client::Access;
use kraken_client::api::Client;

const DEMO_SCOPES: &[&str] = &[
    "openid",
    kraken_client::SCOPE_USER_READ,
    kraken_client::SCOPE_USER_SUBSCRIPTIONS,
    kraken_client::SCOPE_USER_FOLLOWS_EDIT,
    kraken_client::SCOPE_USER_BLOCKS_EDIT,
];

struct AppState {
    client: Client,
    access: RwLock<Option<Access>>,
}

type SharedState = Arc<AppState>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client_id = std::env::var("TWITCH_CLIENT").context("TWITCH_CLIENT not set")?;
    let secret = std::env::var("TWITCH_SECRET").context("TWITCH_SECRET not set")?;
    let client = Client::new(client_id, secret, "http://localhost:8080/authorized");

    let state = Arc::new(AppState {
        client,
        access: RwLock::new(None),
    });

    let app = Router::new()
        .route("/", get(auth_redirect))
        .route("/authorized", get(authorized))
        .route("/user", get(current_user))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!(addr = %listener.local_addr()?, "demo server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn err_json(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

/// GET / – redirect the user to the provider's authorize page.
async fn auth_redirect(State(state): State<SharedState>) -> impl IntoResponse {
    match state.client.authorize_url(DEMO_SCOPES) {
        Ok(url) => Redirect::temporary(url.as_str()).into_response(),
        Err(e) => err_json(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()).into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    code: Option<String>,
}

/// GET /authorized – exchange the OAuth code and keep the access token.
async fn authorized(
    State(state): State<SharedState>,
    Query(q): Query<CallbackQuery>,
) -> impl IntoResponse {
    let Some(code) = q.code.filter(|c| !c.is_empty()) else {
        return err_json(StatusCode::BAD_REQUEST, "authorization code missing").into_response();
    };

    match state.client.exchange_code(&code).await {
        Ok(access) => {
            tracing::info!(scope = ?access.scope, "obtained access token");
            *state.access.write().await = Some(access);
            Json(json!({ "authenticated": true })).into_response()
        }
        Err(e) => {
            tracing::error!("code exchange failed: {e}");
            err_json(StatusCode::BAD_GATEWAY, &e.to_string()).into_response()
        }
    }
}

/// GET /user – fetch the authenticated user's profile.
async fn current_user(State(state): State<SharedState>) -> impl IntoResponse {
    let access = state.access.read().await.clone();
    let Some(access) = access else {
        return err_json(StatusCode::UNAUTHORIZED, "not authenticated").into_response();
    };

    match state.client.with_access(access).get_user().await {
        Ok(user) => Json(user).into_response(),
        Err(e) => {
            tracing::error!("failed to fetch user: {e}");
            err_json(StatusCode::BAD_GATEWAY, &e.to_string()).into_response()
        }
    }
}
