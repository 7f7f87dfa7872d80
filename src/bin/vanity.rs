// src/bin/vanity.rs

use anyhow::{Context, Result};
use clap::Parser;

use vanity::cli::{Cli, Commands};
use vanity::config;
use vanity::system::{server, site};

/// El punto de entrada principal de la aplicación.
fn main() {
    // Inicializar el logger. Para ver los logs, ejecuta con `RUST_LOG=debug vanity ...`
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run_cli(cli) {
        // `eprintln` escribe en stderr; `{:?}` con `anyhow` incluye la cadena de contexto.
        eprintln!("\nError: {:?}", e);
        std::process::exit(1);
    }
}

/// El despachador principal de la aplicación.
fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    // La instantánea se carga una sola vez, antes de atender nada, y no se
    // vuelve a mutar. Cualquier error de decodificación aborta el arranque.
    let configs = config::load_config(&cli.config)
        .with_context(|| format!("No se pudo cargar la configuración desde {:?}", cli.config))?;

    match cli.command {
        Commands::Serve { listen } => {
            server::serve(&listen, configs).context("El servidor HTTP falló")
        }
        Commands::Static { output } => {
            site::generate(&output, &configs).context("No se pudo generar el sitio estático")
        }
    }
}
