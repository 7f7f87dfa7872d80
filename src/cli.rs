// src/cli.rs

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants::{DEFAULT_CONFIG_FILENAME, DEFAULT_LISTEN_ADDR, DEFAULT_OUTPUT_DIR};

#[derive(Parser, Debug)]
#[command(author, version, about = "Vanity: nombres de módulo personalizados que redirigen al repositorio real.", long_about = None)]
pub struct Cli {
    /// Ruta al archivo de configuración de módulos.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Atiende las páginas de redirección por HTTP.
    Serve {
        /// Dirección en la que escuchar.
        #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR)]
        listen: String,
    },
    /// Genera el sitio estático, con una página por módulo declarado.
    #[command(alias = "gen")]
    Static {
        /// Directorio de salida.
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },
}
