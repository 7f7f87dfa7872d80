// src/system/site.rs

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::PAGE_FILENAME;
use crate::core::{resolver, templates};
use crate::models::Config;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("No se pudo crear el directorio {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("No se pudo escribir {path:?}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Genera el sitio estático: una página de redirección por módulo declarado.
///
/// Cada nombre de módulo se resuelve como si fuera una petición entrante.
/// Los módulos sin resolución se omiten con un aviso (equivalen al 404 del
/// servidor); los errores de E/S abortan la generación entera.
pub fn generate(output: &Path, configs: &[Config]) -> Result<(), SiteError> {
    for config in configs {
        for module in &config.modules {
            let params = match resolver::resolve(&module.name, configs) {
                Ok(params) => params,
                Err(err) => {
                    log::warn!("Se omite el módulo '{}': {}", module.name, err);
                    continue;
                }
            };

            let page = templates::render_page(&params);
            let full = page_path(output, &module.name);

            log::info!("Escribiendo módulo '{}' en {:?}", module.name, full);

            if let Some(dir) = full.parent() {
                fs::create_dir_all(dir).map_err(|source| SiteError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }

            fs::write(&full, page).map_err(|source| SiteError::WriteFile {
                path: full.clone(),
                source,
            })?;
        }
    }

    Ok(())
}

/// Ruta del archivo generado para un módulo. El dominio (hasta la primera
/// `/`) se recorta, porque el sitio ya se sirve bajo ese dominio.
fn page_path(output: &Path, module_name: &str) -> PathBuf {
    let relative = match module_name.split_once('/') {
        Some((_domain, rest)) => rest,
        None => module_name,
    };

    let mut path = output.to_path_buf();
    path.extend(relative.split('/').filter(|part| !part.is_empty()));
    path.push(PAGE_FILENAME);
    path
}
