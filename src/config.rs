// src/config.rs

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::decoder::{self, DecodeError};
use crate::models::Config;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No se pudo leer el archivo de configuración: {0}")]
    Io(#[from] std::io::Error),
    #[error("La configuración está mal formada: {0}")]
    Decode(#[from] DecodeError),
}

/// Carga y decodifica el archivo de configuración de módulos.
///
/// Cualquier error de decodificación es fatal: no hay modo de éxito parcial,
/// el que llama debe abortar el arranque.
pub fn load_config(path: &Path) -> Result<Vec<Config>, ConfigError> {
    log::info!("Cargando configuración desde: {:?}", path);

    let data = fs::read(path)?;
    let configs = decoder::decode(&data)?;

    log::debug!(
        "Configuración cargada: {} bloque(s), {} módulo(s) en total.",
        configs.len(),
        configs.iter().map(|c| c.modules.len()).sum::<usize>()
    );

    Ok(configs)
}
