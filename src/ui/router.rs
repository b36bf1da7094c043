use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;

use super::components::{render_page, Bookmarker, Component};

/// One navigation entry: a path, a route name and the component it renders.
#[derive(Clone)]
pub struct RouteEntry {
    pub path: String,
    pub name: String,
    pub component: Arc<dyn Component>,
}

impl RouteEntry {
    pub fn new(path: &str, name: &str, component: Arc<dyn Component>) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            component,
        }
    }
}

/// Static navigation table, fixed at startup.
///
/// Paths match exactly; there are no parameters, wildcards, redirects or
/// guards. A path nobody registered is left to the server's default 404.
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// First entry registered for `path`.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }
}

/// The table this application ships with: `/` renders `Bookmarker`.
pub fn bookmarker_routes() -> RouteTable {
    RouteTable::new(vec![RouteEntry::new("/", "Bookmarker", Arc::new(Bookmarker))])
}

/// Registers every entry of `table` as a GET route rendering its component.
pub fn configure(cfg: &mut web::ServiceConfig, table: web::Data<RouteTable>) {
    for entry in table.entries() {
        cfg.route(&entry.path, web::get().to(render_route));
    }
    cfg.app_data(table);
}

async fn render_route(req: HttpRequest, table: web::Data<RouteTable>) -> HttpResponse {
    match table.resolve(req.path()) {
        Some(entry) => {
            log::debug!("🧭 {} -> {}", entry.path, entry.name);
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(render_page(&entry.name, entry.component.as_ref()))
        }
        None => HttpResponse::NotFound().finish(),
    }
}
