use std::io;
use std::sync::Arc;

use ntex::http::StatusCode;
use ntex::web;
use ntex_files::NamedFile;
use spdlog::{error, info};

use crate::config::Config;
use crate::page::{Page, PageState, SiteRenderer};
use crate::source::PostSource;

struct AppState {
    source: PostSource,
    site: SiteRenderer,
    config: Config,
}

fn html_response(page: io::Result<Page>) -> web::HttpResponse {
    match page {
        Ok(page) => {
            let status = StatusCode::from_u16(page.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            web::HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(page.body)
        }
        Err(e) => {
            error!("Error rendering page: {}", e);
            web::HttpResponse::InternalServerError()
                .body(format!("Error rendering page: {}", e))
        }
    }
}

fn is_public_file_name(file_name: &str) -> bool {
    !file_name.is_empty() && !file_name.contains("..")
}

async fn render_list(state: &AppState) -> web::HttpResponse {
    let posts = state.source.list_posts().await;
    if let Err(ref e) = posts {
        error!("Error fetching blogs: {}", e);
    }
    html_response(state.site.list_page(PageState::from(posts)))
}

// Begin: Redirect region --------
#[web::get("/blogs/{slug}/")]
async fn view_with_slash(path: web::types::Path<String>) -> web::HttpResponse {
    web::HttpResponse::TemporaryRedirect()
        .header("Location", format!("/blogs/{}", path.into_inner()))
        .content_type("text/html; charset=utf-8")
        .finish()
}
// End: Redirect region --------

#[web::get("/")]
async fn index(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    render_list(&state).await
}

#[web::get("/blogs")]
async fn list(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    render_list(&state).await
}

#[web::get("/blogs/{slug}")]
async fn view(slug: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let slug = slug.into_inner();
    let post = state.source.get_post(&slug).await;
    if let Err(ref e) = post {
        error!("Error loading post {}: {}", slug, e);
    }
    html_response(state.site.post_page(PageState::from(post)))
}

#[web::get("/public/{file_name}")]
async fn public_files(path: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> Result<NamedFile, web::Error> {
    if !is_public_file_name(&path) {
        return Err(web::error::ErrorUnauthorized("Access forbidden").into());
    }

    let file_path = state.config.paths.public_dir.join(path.into_inner());
    Ok(NamedFile::open(file_path)?)
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let source = PostSource::from_config(&config)?;
    let site = SiteRenderer::from_config(&config)?;
    info!("Serving posts from {}", source.describe());

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    info!("Listening on {}:{}", bind_addr, bind_port);

    let app_state = Arc::new(AppState {
        source,
        site,
        config,
    });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(index)
            .service(list)
            .service(view)
            .service(view_with_slash)
            .service(public_files)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
