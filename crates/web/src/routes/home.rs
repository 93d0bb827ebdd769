//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use recipe_roulette_core::constants::{APP_DESCRIPTION, APP_NAME, CUISINE_TYPES};

use crate::filters;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Application display name.
    pub app_name: &'static str,
    /// One-sentence description for page metadata.
    pub app_description: &'static str,
    /// Canonical URL for the page.
    pub canonical_url: String,
    /// Cuisine names for the teaser list.
    pub cuisines: &'static [&'static str],
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let base = state.config().base_url.trim_end_matches('/');

    HomeTemplate {
        app_name: APP_NAME,
        app_description: APP_DESCRIPTION,
        canonical_url: format!("{base}/"),
        cuisines: &CUISINE_TYPES,
    }
}
