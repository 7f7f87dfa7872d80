// src/models.rs

use serde::Serialize;

// --- MODELOS NORMALIZADOS (Lo que produce el decodificador) ---

/// Un módulo completamente especificado, después de resolver todas las
/// formas abreviadas del archivo de configuración.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Module {
    /// Prefijo de la ruta de importación (clave `module` en el YAML).
    pub name: String,
    /// Raíz del repositorio. Si falta o está vacía, se usa `name`.
    pub root: Option<String>,
    /// URL explícita del repositorio. Si está presente, `replace` no se consulta.
    pub url: Option<String>,
    /// Sistema de control de versiones. El valor por defecto ("git") lo
    /// aplica el resolvedor, no el decodificador.
    pub vcs: Option<String>,
}

/// Una regla que reescribe el prefijo de la raíz de un módulo en una URL
/// concreta de repositorio, cuando el módulo no trae URL explícita.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub prefix: String,
    pub url: String,
    pub vcs: Option<String>,
}

/// Un bloque de configuración: módulos declarados más sus reglas de reemplazo.
/// Un archivo puede contener uno o varios de estos bloques.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub modules: Vec<Module>,
    pub replace: Vec<Replacement>,
}

// --- PARÁMETROS DE PÁGINA (Derivados por petición) ---

/// La vista final que consumen la plantilla, el servidor y el generador
/// estático. No necesita `Serialize` porque NUNCA se escribe directamente;
/// se calcula por petición y se descarta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    /// La ruta de importación pedida, tal cual llegó.
    pub package: String,
    /// La raíz efectiva del módulo seleccionado.
    pub root: String,
    pub vcs: String,
    pub url: String,
}
