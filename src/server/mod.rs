//! HTTP server with per-visitor sessions and live reload
//!
//! Pages are rendered on every request from the current files. Open, back
//! and contact submissions are form posts that update the visitor's session
//! and redirect back to the page (post/redirect/get).

use anyhow::Result;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        Form, Path, State, WebSocketUpgrade,
    },
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::contact::{ContactForm, Notice};
use crate::helpers::url_for;
use crate::render::{Output, Page, RenderContext, Renderer};
use crate::session::{Category, Session, SessionStore};
use crate::templates::STYLESHEET;
use crate::Folio;

/// Name of the cookie carrying the session id
const SESSION_COOKIE: &str = "folio_session";

/// Server state
pub struct AppState {
    folio: Folio,
    renderer: Renderer,
    sessions: SessionStore,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

impl AppState {
    /// Build the shared state for a site
    pub fn new(folio: &Folio, live_reload: bool) -> Result<Arc<Self>> {
        let (reload_tx, _) = broadcast::channel::<()>(16);
        Ok(Arc::new(Self {
            folio: folio.clone(),
            renderer: Renderer::new(folio)?,
            sessions: SessionStore::new(Duration::from_secs(
                folio.config.server.session_ttl_secs,
            )),
            reload_tx,
            live_reload,
        }))
    }

    fn output(&self) -> Output {
        Output::Interactive {
            live_reload: self.live_reload,
        }
    }

    fn url(&self, path: &str) -> String {
        url_for(&self.folio.config, path)
    }
}

/// Routes of the site, mounted under `config.root`.
///
/// Pages answer both `/blog` and `/blog/`; rendered links use the latter.
pub fn router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.folio.assets_dir);
    let root = state.folio.config.root.trim_end_matches('/').to_string();
    let at = |path: &str| format!("{}{}", root, path);

    let mut app = Router::new()
        .route(&at("/"), get(index_handler))
        .route(&at("/style.css"), get(stylesheet_handler))
        .route(&at("/__livereload"), get(livereload_handler))
        .route(&at("/contact"), post(contact_handler))
        .route(&at("/:page"), get(page_handler))
        .route(&at("/:page/"), get(page_handler))
        .route(&at("/:page/open"), post(open_handler))
        .route(&at("/:page/back"), post(back_handler))
        .nest_service(&at("/assets"), assets);

    if !root.is_empty() {
        app = app.route(&root, get(index_handler));
    }

    app.fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(folio: &Folio, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let state = AppState::new(folio, watch)?;
    let app = router(state.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Portfolio running at {}", url);
    if watch {
        println!("Live reload enabled. Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let folio = folio.clone();
        let reload_tx = state.reload_tx.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(&folio, reload_tx) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch content, assets and config, and tell browsers to reload.
/// Nothing is regenerated: every request renders from disk.
fn watch_and_reload(folio: &Folio, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to coalesce editor save bursts
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&folio.content_dir, &folio.papers_dir, &folio.assets_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = folio.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed: Vec<&PathBuf> = events
                    .iter()
                    .map(|e| &e.path)
                    .filter(|path| {
                        let path_str = path.to_string_lossy();
                        !path_str.contains(".git")
                            && !path_str.contains(".DS_Store")
                            && !path_str.ends_with('~')
                    })
                    .collect();

                if changed.is_empty() {
                    continue;
                }

                for path in &changed {
                    tracing::info!("File changed: {}", path.display());
                }
                if path_is_config(&changed, &config_path) {
                    tracing::warn!("_config.yml changed; restart the server to apply it");
                }

                // No receivers just means no open browser tabs
                let _ = reload_tx.send(());
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

fn path_is_config(changed: &[&PathBuf], config_path: &std::path::Path) -> bool {
    changed.iter().any(|path| path.as_path() == config_path)
}

/// Session id from the request's cookie header
fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
}

/// A visitor's resolved session id
struct Visitor {
    id: String,
    created: bool,
}

impl Visitor {
    fn resolve(state: &AppState, headers: &HeaderMap) -> Result<Self, Response> {
        match state.sessions.resolve(session_cookie(headers)) {
            Ok((id, created)) => Ok(Self { id, created }),
            Err(e) => {
                tracing::error!("Failed to create session: {}", e);
                Err(internal_error())
            }
        }
    }

    /// Attach the session cookie when the session was just created
    fn finish(&self, state: &AppState, mut response: Response) -> Response {
        if self.created {
            let cookie = format!(
                "{}={}; Path={}; HttpOnly; SameSite=Lax",
                SESSION_COOKIE, self.id, state.folio.config.root
            );
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().insert(SET_COOKIE, value);
                }
                Err(e) => tracing::warn!("Invalid session cookie: {}", e),
            }
        }
        response
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
}

async fn index_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    render_page(state, Page::Identity, &headers).await
}

async fn page_handler(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
    headers: HeaderMap,
) -> Response {
    match page.parse::<Page>() {
        Ok(page) => render_page(state, page, &headers).await,
        Err(_) => not_found(state, format!("/{}", page)).await,
    }
}

/// Render a page with the visitor's selection, consuming any pending notice
async fn render_page(state: Arc<AppState>, page: Page, headers: &HeaderMap) -> Response {
    let visitor = match Visitor::resolve(&state, headers) {
        Ok(visitor) => visitor,
        Err(response) => return response,
    };

    let session = state.sessions.with(&visitor.id, |s| Session {
        selection: s.selection.clone(),
        notice: s.notice.take(),
        draft: s.draft.take(),
    });

    let render_state = state.clone();
    let result = tokio::task::spawn_blocking(move || {
        let Session {
            selection,
            notice,
            draft,
        } = session;
        let rendered = {
            let mut ctx = RenderContext::new(page, &selection, render_state.output());
            ctx.notice = notice;
            ctx.draft = draft;
            render_state.renderer.render(&ctx)
        };
        rendered.map(|rendered| (rendered, selection))
    })
    .await;

    let rendered = match result {
        Ok(Ok((rendered, selection))) => {
            if let Some(category) = rendered.stale {
                clear_stale(&state, &visitor.id, category, selection.get(category));
            }
            rendered
        }
        Ok(Err(e)) => {
            tracing::error!("Failed to render {}: {:#}", page.slug(), e);
            return visitor.finish(&state, internal_error());
        }
        Err(e) => {
            tracing::error!("Render task failed: {}", e);
            return visitor.finish(&state, internal_error());
        }
    };

    visitor.finish(&state, Html(rendered.html).into_response())
}

/// Drop a selection that matched nothing, unless it was replaced meanwhile
fn clear_stale(state: &AppState, id: &str, category: Category, stale_id: Option<&str>) {
    state.sessions.with(id, |s| {
        if s.selection.get(category) == stale_id {
            s.selection.clear(category);
        }
    });
}

#[derive(Debug, Deserialize)]
struct OpenForm {
    id: String,
}

async fn open_handler(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
    headers: HeaderMap,
    Form(form): Form<OpenForm>,
) -> Response {
    update_selection(state, &page, &headers, |session, category| {
        session.selection.open(category, form.id)
    })
    .await
}

async fn back_handler(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
    headers: HeaderMap,
) -> Response {
    update_selection(state, &page, &headers, |session, category| {
        session.selection.back(category)
    })
    .await
}

/// Apply an open/back transition and redirect to the page
async fn update_selection(
    state: Arc<AppState>,
    page: &str,
    headers: &HeaderMap,
    transition: impl FnOnce(&mut Session, Category),
) -> Response {
    let Some((page, category)) = page
        .parse::<Page>()
        .ok()
        .and_then(|p| p.category().map(|c| (p, c)))
    else {
        return not_found(state, format!("/{}", page)).await;
    };

    let visitor = match Visitor::resolve(&state, headers) {
        Ok(visitor) => visitor,
        Err(response) => return response,
    };

    state
        .sessions
        .with(&visitor.id, |session| transition(session, category));

    let target = state.url(&format!("{}/", page.slug()));
    visitor.finish(&state, Redirect::to(&target).into_response())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContactSubmission {
    name: String,
    email: String,
    message: String,
    /// Page the form was submitted from
    page: String,
}

async fn contact_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(submission): Form<ContactSubmission>,
) -> Response {
    let visitor = match Visitor::resolve(&state, &headers) {
        Ok(visitor) => visitor,
        Err(response) => return response,
    };

    let page = submission.page.parse::<Page>().unwrap_or(Page::Identity);
    let form = ContactForm {
        name: submission.name,
        email: submission.email,
        message: submission.message,
    };
    let notice = form.submit();

    state.sessions.with(&visitor.id, |session| {
        session.draft = match notice {
            Notice::Warning(_) => Some(form),
            Notice::Success(_) => None,
        };
        session.notice = Some(notice);
    });

    let target = state.url(&format!("{}/", page.slug()));
    visitor.finish(&state, Redirect::to(&target).into_response())
}

async fn stylesheet_handler() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

async fn fallback_handler(
    State(state): State<Arc<AppState>>,
    uri: axum::http::Uri,
) -> Response {
    not_found(state, uri.path().to_string()).await
}

async fn not_found(state: Arc<AppState>, path: String) -> Response {
    tracing::debug!("Not found: {}", path);
    let output = state.output();
    match state.renderer.render_not_found(&path, output) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render 404 page: {:#}", e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

/// Handle WebSocket connection for live reload
async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::LOCATION;
    use axum::http::Request;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn setup() -> (TempDir, Arc<AppState>) {
        setup_with_config("")
    }

    fn setup_with_config(config: &str) -> (TempDir, Arc<AppState>) {
        let tmp = TempDir::new().unwrap();
        if !config.is_empty() {
            fs::write(tmp.path().join("_config.yml"), config).unwrap();
        }
        let folio = Folio::new(tmp.path()).unwrap();
        fs::create_dir_all(&folio.content_dir).unwrap();
        fs::write(
            folio.content_dir.join("2024-06-01-hello.md"),
            "# Hello\n\nFirst words.",
        )
        .unwrap();
        let state = AppState::new(&folio, false).unwrap();
        (tmp, state)
    }

    fn cookie_headers(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}={}", SESSION_COOKIE, id)).unwrap(),
        );
        headers
    }

    fn new_session(state: &AppState) -> (String, HeaderMap) {
        let (id, _) = state.sessions.resolve(None).unwrap();
        let headers = cookie_headers(&id);
        (id, headers)
    }

    async fn body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn form_request(uri: &str, cookie: &str, form: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(COOKIE, cookie)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    /// Values of every `attr="..."` in the page
    fn attr_values(html: &str, attr: &str) -> Vec<String> {
        let marker = format!(r#"{}=""#, attr);
        html.split(marker.as_str())
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(String::from)
            .collect()
    }

    fn cookie_pair(response: &Response) -> String {
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        cookie.split(';').next().unwrap().to_string()
    }

    #[test]
    fn test_session_cookie_parsing() {
        let headers = cookie_headers("abc123");
        assert_eq!(session_cookie(&headers), Some("abc123"));
        assert_eq!(session_cookie(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn test_first_visit_sets_cookie() {
        let (_tmp, state) = setup();
        let response = index_handler(State(state.clone()), HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("folio_session="));
        assert!(cookie.contains("HttpOnly"));
        assert_eq!(state.sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_open_then_back() {
        let (_tmp, state) = setup();
        let (id, headers) = new_session(&state);

        let response = open_handler(
            State(state.clone()),
            Path("blog".to_string()),
            headers.clone(),
            Form(OpenForm {
                id: "2024-06-01-hello".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/blog/");
        assert!(response.headers().get(SET_COOKIE).is_none());

        let page = page_handler(State(state.clone()), Path("blog".to_string()), headers.clone()).await;
        assert!(body(page).await.contains("Back to all articles"));

        back_handler(State(state.clone()), Path("blog".to_string()), headers.clone()).await;
        let selected = state
            .sessions
            .with(&id, |s| s.selection.get(Category::Post).map(str::to_string));
        assert_eq!(selected, None);
    }

    #[tokio::test]
    async fn test_stale_selection_is_cleared() {
        let (_tmp, state) = setup();
        let (id, headers) = new_session(&state);
        state
            .sessions
            .with(&id, |s| s.selection.open(Category::Post, "gone"));

        let page = page_handler(State(state.clone()), Path("blog".to_string()), headers).await;
        assert_eq!(page.status(), StatusCode::OK);
        assert!(body(page).await.contains("no longer available"));
        let selected = state
            .sessions
            .with(&id, |s| s.selection.get(Category::Post).map(str::to_string));
        assert_eq!(selected, None);
    }

    #[tokio::test]
    async fn test_contact_warning_shown_once() {
        let (_tmp, state) = setup();
        let (_id, headers) = new_session(&state);

        let response = contact_handler(
            State(state.clone()),
            headers.clone(),
            Form(ContactSubmission {
                name: "Ada".to_string(),
                page: "experience".to_string(),
                ..Default::default()
            }),
        )
        .await;
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/experience/");

        let first = body(
            page_handler(
                State(state.clone()),
                Path("experience".to_string()),
                headers.clone(),
            )
            .await,
        )
        .await;
        assert!(first.contains("Please fill out all fields."));
        assert!(first.contains(r#"value="Ada""#));

        let second = body(
            page_handler(State(state.clone()), Path("experience".to_string()), headers).await,
        )
        .await;
        assert!(!second.contains("Please fill out all fields."));
    }

    #[tokio::test]
    async fn test_contact_success() {
        let (_tmp, state) = setup();
        let (_id, headers) = new_session(&state);

        contact_handler(
            State(state.clone()),
            headers.clone(),
            Form(ContactSubmission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
                page: String::new(),
            }),
        )
        .await;

        let html = body(index_handler(State(state.clone()), headers).await).await;
        assert!(html.contains("Message sent."));
        assert!(html.contains("notice-success"));
    }

    #[tokio::test]
    async fn test_unknown_page_is_404() {
        let (_tmp, state) = setup();
        let response =
            page_handler(State(state.clone()), Path("nope".to_string()), HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = back_handler(
            State(state.clone()),
            Path("identity".to_string()),
            HeaderMap::new(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_page_routes_with_and_without_slash() {
        let (_tmp, state) = setup();
        let app = router(state);

        for uri in ["/", "/blog", "/blog/", "/projects/", "/experience/", "/insights/"] {
            let response = send(&app, get_request(uri, None)).await;
            assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        }
        for uri in ["/nope", "/nope/", "/blog/extra/path"] {
            let response = send(&app, get_request(uri, None)).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {}", uri);
        }
    }

    #[tokio::test]
    async fn test_menu_open_and_back_flow() {
        let (_tmp, state) = setup();
        let app = router(state);

        let home = send(&app, get_request("/", None)).await;
        assert_eq!(home.status(), StatusCode::OK);
        let cookie = cookie_pair(&home);
        let html = body(home).await;

        let blog = attr_values(&html, "href")
            .into_iter()
            .find(|href| href.ends_with("blog/"))
            .unwrap();
        let list = send(&app, get_request(&blog, Some(&cookie))).await;
        assert_eq!(list.status(), StatusCode::OK);
        let html = body(list).await;

        let open = attr_values(&html, "action")
            .into_iter()
            .find(|action| action.ends_with("/open"))
            .unwrap();
        let response = send(&app, form_request(&open, &cookie, "id=2024-06-01-hello")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[LOCATION].to_str().unwrap().to_string();

        let detail = send(&app, get_request(&location, Some(&cookie))).await;
        assert_eq!(detail.status(), StatusCode::OK);
        let html = body(detail).await;
        assert!(html.contains("Back to all articles"));

        let back = attr_values(&html, "action")
            .into_iter()
            .find(|action| action.ends_with("/back"))
            .unwrap();
        let response = send(&app, form_request(&back, &cookie, "")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[LOCATION].to_str().unwrap().to_string();

        let list = send(&app, get_request(&location, Some(&cookie))).await;
        assert_eq!(list.status(), StatusCode::OK);
        assert!(!body(list).await.contains("Back to all articles"));
    }

    #[tokio::test]
    async fn test_contact_form_through_router() {
        let (_tmp, state) = setup();
        let app = router(state);

        let home = send(&app, get_request("/experience/", None)).await;
        let cookie = cookie_pair(&home);
        let html = body(home).await;
        let contact = attr_values(&html, "action")
            .into_iter()
            .find(|action| action.ends_with("contact"))
            .unwrap();

        let response = send(
            &app,
            form_request(&contact, &cookie, "name=Ada&email=&message=Hi&page=experience"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/experience/");

        let page = send(&app, get_request("/experience/", Some(&cookie))).await;
        assert!(body(page).await.contains("Please fill out all fields."));
    }

    #[tokio::test]
    async fn test_routes_mounted_under_root() {
        let (_tmp, state) = setup_with_config("root: /portfolio/\n");
        let app = router(state);

        for uri in [
            "/portfolio",
            "/portfolio/",
            "/portfolio/blog/",
            "/portfolio/style.css",
        ] {
            let response = send(&app, get_request(uri, None)).await;
            assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        }
        let response = send(&app, get_request("/blog/", None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let home = send(&app, get_request("/portfolio/", None)).await;
        let cookie = cookie_pair(&home);
        assert!(home.headers()[SET_COOKIE]
            .to_str()
            .unwrap()
            .contains("Path=/portfolio/"));
        let html = body(home).await;
        assert!(html.contains(r#"href="/portfolio/blog/""#));

        let response = send(
            &app,
            form_request("/portfolio/blog/open", &cookie, "id=2024-06-01-hello"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/portfolio/blog/");

        let detail = send(&app, get_request("/portfolio/blog/", Some(&cookie))).await;
        assert!(body(detail).await.contains("Back to all articles"));
    }
}
