//! HTTP server for the admin pages and the JSON API

mod error;

pub use error::AppError;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::net::SocketAddr;
use std::sync::Arc;
use tera::Context;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{MarkdownRenderer, Post, PostStore};
use crate::form::{EditFormController, PostDraft, SubmitOutcome};
use crate::notify::ToastQueue;
use crate::templates::{self, FieldView, SiteData, TemplateRenderer, ADMIN_CSS};
use crate::Postdesk;

/// Shared server state
pub struct AppState {
    config: SiteConfig,
    site: SiteData,
    store: Arc<dyn PostStore>,
    toasts: ToastQueue,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl AppState {
    pub fn new(config: SiteConfig, store: Arc<dyn PostStore>) -> Result<Self> {
        Ok(Self {
            site: SiteData::from(&config),
            toasts: ToastQueue::new(config.toast_capacity),
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::new(),
            config,
            store,
        })
    }

    pub fn store(&self) -> &dyn PostStore {
        self.store.as_ref()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    fn controller(&self) -> EditFormController<'_, dyn PostStore> {
        EditFormController::new(self.store.as_ref()).with_write_back(self.config.write_back)
    }

    /// Page context with pending toasts drained into it
    fn page_context(&self) -> Context {
        templates::page_context(&self.site, &self.toasts.drain())
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/posts", get(list_posts))
        .route("/posts/:id", get(show_post))
        .route("/posts/edit/:id", get(edit_form).post(submit_edit))
        .route("/api/posts", get(api_list_posts))
        .route("/api/posts/:id", get(api_get_post))
        .route("/static/admin.css", get(stylesheet))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(app: &Postdesk, ip: &str, port: u16) -> Result<()> {
    let store = app.load_store()?;
    let state = Arc::new(AppState::new(app.config.clone(), Arc::new(store))?);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    if app.config.write_back {
        println!("Write-back enabled: accepted edits update the in-memory posts.");
    }
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

async fn index() -> Redirect {
    Redirect::to("/posts")
}

async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut context = state.page_context();
    context.insert("posts", &state.store.list());
    context.insert("excerpt_length", &state.config.excerpt_length);
    Ok(Html(state.renderer.render("posts.html", &context)?))
}

async fn show_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(post) = state.store.get(&id) else {
        return not_found(&state, &format!("No post with id \"{}\".", id));
    };

    let mut context = state.page_context();
    context.insert("body_html", &state.markdown.render(&post.body));
    context.insert("post", &post);
    Ok(Html(state.renderer.render("post.html", &context)?).into_response())
}

async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let controller = state.controller();
    let lookup = controller.load(&id);
    let draft = controller.initialize_draft(&lookup);

    let status = if lookup.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    let html = render_edit(&state, &id, lookup.is_found(), &FieldView::for_draft(&draft, None))?;
    Ok((status, Html(html)).into_response())
}

async fn submit_edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(draft): Form<PostDraft>,
) -> Result<Response, AppError> {
    let controller = state.controller();

    match controller.submit(&id, draft.clone(), &state.toasts)? {
        SubmitOutcome::Accepted(_) => Ok(Redirect::to(&edit_path(&id)).into_response()),
        SubmitOutcome::Rejected(errors) => {
            let found = controller.load(&id).is_found();
            let fields = FieldView::for_draft(&draft, Some(&errors));
            let html = render_edit(&state, &id, found, &fields)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}

async fn api_list_posts(State(state): State<Arc<AppState>>) -> Json<Vec<Post>> {
    Json(state.store.list())
}

async fn api_get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Post>, (StatusCode, Json<serde_json::Value>)> {
    state.store.get(&id).map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("Post not found: {}", id) })),
        )
    })
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], ADMIN_CSS)
}

fn render_edit(
    state: &AppState,
    id: &str,
    found: bool,
    fields: &[FieldView],
) -> Result<String, AppError> {
    let mut context = state.page_context();
    context.insert("post_id", id);
    context.insert("found", &found);
    context.insert("fields", fields);
    Ok(state.renderer.render("edit.html", &context)?)
}

fn not_found(state: &AppState, message: &str) -> Result<Response, AppError> {
    let mut context = state.page_context();
    context.insert("message", message);
    let html = state.renderer.render("not_found.html", &context)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

/// URL of the edit page for a post id
pub fn edit_path(id: &str) -> String {
    format!("/posts/edit/{}", utf8_percent_encode(id, NON_ALPHANUMERIC))
}
