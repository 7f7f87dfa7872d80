// src/system/server.rs

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::core::{resolver, templates};
use crate::models::Config;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("No se pudo crear el runtime del servidor: {0}")]
    Runtime(std::io::Error),
    #[error("No se pudo escuchar en '{addr}': {source}")]
    Listen {
        addr: String,
        source: std::io::Error,
    },
    #[error("El servidor terminó con un error: {0}")]
    Serve(std::io::Error),
}

/// Arranca el servidor HTTP y atiende peticiones hasta que el proceso muera.
///
/// La instantánea de configuración se comparte en solo lectura entre todas
/// las peticiones concurrentes; nadie la muta después del arranque.
pub fn serve(listen: &str, configs: Vec<Config>) -> Result<(), ServerError> {
    let runtime = tokio::runtime::Runtime::new().map_err(ServerError::Runtime)?;

    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(listen)
            .await
            .map_err(|source| ServerError::Listen {
                addr: listen.to_string(),
                source,
            })?;

        log::info!("Sirviendo en {}", listen);

        let app = Router::new()
            .fallback(handle_request)
            .with_state(Arc::new(configs));

        axum::serve(listener, app).await.map_err(ServerError::Serve)
    })
}

/// Atiende una petición: la ruta de importación pedida es `host + path`.
/// Ambos errores del resolvedor se traducen en un 404 para esa única ruta;
/// el resto de rutas no se ven afectadas.
async fn handle_request(
    State(configs): State<Arc<Vec<Config>>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let path = request_path(host, uri.path());
    log::debug!("Petición para '{}'", path);

    match resolver::resolve(&path, &configs) {
        Ok(params) => Html(templates::render_page(&params)).into_response(),
        Err(err) => {
            log::debug!("Sin resolución para '{}': {}", path, err);
            (StatusCode::NOT_FOUND, "404 page not found").into_response()
        }
    }
}

/// Une el host y la ruta de la petición en la ruta de importación pedida,
/// sin duplicar separadores ni dejar uno colgando.
fn request_path(host: &str, path: &str) -> String {
    let host = host.trim_end_matches('/');
    let path = path.trim_matches('/');

    if path.is_empty() {
        host.to_string()
    } else {
        format!("{host}/{path}")
    }
}
