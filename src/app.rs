use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use log::{debug, error, info};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::error::Result;
use crate::loader;
use crate::navigation::NavigationIndex;
use crate::quiz::Sheet;
use crate::render::Renderer;

/// Everything a request needs; built before the server binds and never mutated.
pub struct AppState {
    pub index: NavigationIndex,
    pub renderer: Renderer,
}

/// The `sheet` and `index` query parameters. Repeated keys keep their first value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct QuizQuery {
    pub sheet: Option<String>,
    pub index: Option<String>,
}

impl QuizQuery {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = QuizQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "sheet" => &mut query.sheet,
                "index" => &mut query.index,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

impl AppState {
    pub fn new(sheets: Vec<Sheet>) -> Result<Self> {
        Ok(AppState {
            index: NavigationIndex::build(sheets)?,
            renderer: Renderer::new()?,
        })
    }

    /// Load a workbook and build the quiz from every sheet in it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw_sheets = loader::load_workbook(path)?;
        info!("Loaded {} sheet(s) from {}", raw_sheets.len(), path.display());

        let sheets = raw_sheets
            .into_iter()
            .map(|raw| {
                let dimension = raw.dimension.clone().unwrap_or_else(|| "-".to_string());
                let sheet = Sheet::from_raw(raw);
                info!(
                    "Sheet `{}` ({}): {} question(s)",
                    sheet.name(),
                    dimension,
                    sheet.questions().len()
                );
                sheet
            })
            .collect();

        Self::new(sheets)
    }

    /// Produce the page for one request. User errors become an error page.
    pub fn render_page(&self, sheet: Option<&str>, index: Option<&str>) -> Result<String> {
        let Some(sheet) = sheet.filter(|name| !name.is_empty()) else {
            return self.renderer.render_sheets(self.index.sheets());
        };

        match self.index.locate(sheet, index) {
            Ok(located) => self.renderer.render_state(&located),
            Err(e) => {
                debug!("Request for sheet {:?} index {:?} failed: {}", sheet, index, e);
                self.renderer.render_error(&e.to_string())
            }
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_quiz))
        .with_state(state)
}

pub async fn run(state: AppState, addr: &str) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let app = router(Arc::new(state));

    // Start server
    let listener = TcpListener::bind(addr).await?;
    info!("Quizzing on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

#[axum::debug_handler]
async fn serve_quiz(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = QuizQuery::from_pairs(pairs);
    match state.render_page(params.sheet.as_deref(), params.index.as_deref()) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Internal error</h1>".to_string()),
            )
                .into_response()
        }
    }
}
