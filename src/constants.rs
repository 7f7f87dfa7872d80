// src/constants.rs

/// El nombre por defecto del archivo de configuración de módulos.
pub const DEFAULT_CONFIG_FILENAME: &str = "vanity.yaml";

/// La dirección de escucha por defecto del servidor HTTP.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:80";

/// El directorio de salida por defecto del sitio estático.
pub const DEFAULT_OUTPUT_DIR: &str = "static";

/// El sistema de control de versiones usado cuando la configuración no indica uno.
pub const DEFAULT_VCS: &str = "git";

/// La base de la URL de documentación a la que redirige cada página generada.
pub const GODOC_BASE_URL: &str = "https://pkg.go.dev";

/// El nombre del archivo generado para cada módulo del sitio estático.
pub const PAGE_FILENAME: &str = "index.html";
