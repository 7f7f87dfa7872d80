// src/core/decoder.rs

use serde_yaml::Value;
use thiserror::Error;

use crate::models::{Config, Module, Replacement};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("YAML mal formado: {0}")]
    Syntax(#[from] serde_yaml::Error),
    #[error("en {context}: se esperaba {expected}, se encontró {found}")]
    ShapeMismatch {
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("más de un prefijo de módulo en la misma entrada: '{first}' y '{second}'")]
    AmbiguousPrefix { first: String, second: String },
    #[error("campo desconocido '{field}' en {context}")]
    UnknownField { field: String, context: &'static str },
    #[error("falta el campo obligatorio '{field}' en {context}")]
    MissingField {
        field: &'static str,
        context: &'static str,
    },
}

type DecodeResult<T> = Result<T, DecodeError>;

/// Decodifica los bytes crudos de configuración en una secuencia de `Config`
/// normalizados, resolviendo todas las formas abreviadas de declarar módulos.
///
/// El esquema es estricto en todos los niveles: una clave que el esquema no
/// conoce es un error, para cazar erratas cuanto antes.
pub fn decode(data: &[u8]) -> DecodeResult<Vec<Config>> {
    let value: Value = serde_yaml::from_slice(data)?;

    // Formas del nivel superior, probadas en orden: una secuencia de bloques
    // de configuración, o un único bloque (envuelto en una secuencia de uno).
    match &value {
        Value::Sequence(items) => items.iter().map(decode_config).collect(),
        Value::Mapping(_) => Ok(vec![decode_config(&value)?]),
        other => Err(shape_mismatch(
            "el nivel superior",
            "un mapeo o una secuencia",
            other,
        )),
    }
}

/// Decodifica un único bloque de configuración.
fn decode_config(value: &Value) -> DecodeResult<Config> {
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        other => return Err(shape_mismatch("la configuración", "un mapeo", other)),
    };

    let mut config = Config::default();

    for (key, val) in mapping {
        let key = get_string(key, "la clave de configuración")?;

        match key.as_str() {
            "modules" => {
                let entries = match val {
                    Value::Sequence(entries) => entries,
                    other => return Err(shape_mismatch("'modules'", "una secuencia", other)),
                };

                // Cada entrada puede aportar uno o varios módulos; el orden
                // relativo de declaración se conserva al aplanar.
                for entry in entries {
                    config.modules.extend(decode_module_entry(entry)?);
                }
            }
            "replace" => {
                let entries = match val {
                    Value::Sequence(entries) => entries,
                    other => return Err(shape_mismatch("'replace'", "una secuencia", other)),
                };

                for entry in entries {
                    config.replace.push(decode_replacement(entry)?);
                }
            }
            other => {
                return Err(DecodeError::UnknownField {
                    field: other.to_string(),
                    context: "la configuración",
                });
            }
        }
    }

    Ok(config)
}

/// Resuelve una entrada de declaración de módulo. Las formas se prueban en
/// orden fijo y gana la primera que decodifica por completo; si todas fallan,
/// se comunica el error del último intento.
fn decode_module_entry(value: &Value) -> DecodeResult<Vec<Module>> {
    // Forma a: una cadena sola, abreviatura de un módulo con todo por defecto.
    if let Value::String(name) = value {
        if name.is_empty() {
            return Err(DecodeError::MissingField {
                field: "module",
                context: "la entrada de módulo",
            });
        }

        return Ok(vec![Module {
            name: name.clone(),
            ..Module::default()
        }]);
    }

    // Forma b: un objeto de módulo completo.
    if let Ok(module) = decode_full_module(value) {
        return Ok(vec![module]);
    }

    // Forma c: la abreviatura de expansión por prefijo.
    decode_prefix_group(value)
}

/// Decodifica un objeto de módulo completo: `module` (obligatorio y no
/// vacío), `root`, `url` y `vcs`.
fn decode_full_module(value: &Value) -> DecodeResult<Module> {
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        other => return Err(shape_mismatch("el módulo", "un mapeo", other)),
    };

    let mut module = Module::default();

    for (key, val) in mapping {
        let key = get_string(key, "la clave de módulo")?;

        match key.as_str() {
            "module" => module.name = get_string(val, "'module'")?,
            "root" => module.root = Some(get_string(val, "'root'")?),
            "url" => module.url = Some(get_string(val, "'url'")?),
            "vcs" => module.vcs = Some(get_string(val, "'vcs'")?),
            other => {
                return Err(DecodeError::UnknownField {
                    field: other.to_string(),
                    context: "el módulo",
                });
            }
        }
    }

    if module.name.is_empty() {
        return Err(DecodeError::MissingField {
            field: "module",
            context: "el módulo",
        });
    }

    Ok(module)
}

/// Decodifica la abreviatura de expansión por prefijo: un mapeo cuyas claves
/// reservadas (`root`, `url`, `vcs`) aportan atributos comunes y cuya única
/// clave libre es el prefijo, con la lista de sufijos como valor. Una segunda
/// clave libre hace la entrada ambigua y es un error.
fn decode_prefix_group(value: &Value) -> DecodeResult<Vec<Module>> {
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        other => return Err(shape_mismatch("la expansión por prefijo", "un mapeo", other)),
    };

    let mut expansion: Option<(String, Vec<String>)> = None;
    let mut common = Module::default();

    for (key, val) in mapping {
        let key = get_string(key, "la clave de expansión")?;

        match key.as_str() {
            "root" => common.root = Some(get_string(val, "'root'")?),
            "url" => common.url = Some(get_string(val, "'url'")?),
            "vcs" => common.vcs = Some(get_string(val, "'vcs'")?),
            other => {
                if let Some((first, _)) = expansion.take() {
                    return Err(DecodeError::AmbiguousPrefix {
                        first,
                        second: other.to_string(),
                    });
                }

                expansion = Some((other.to_string(), decode_suffixes(val)?));
            }
        }
    }

    // Un mapeo sin clave libre no declara ningún módulo.
    let Some((prefix, suffixes)) = expansion else {
        return Ok(Vec::new());
    };

    let modules = suffixes
        .iter()
        .map(|suffix| Module {
            name: join_path(&prefix, suffix),
            // La raíz común, o el propio prefijo si no se dio una.
            root: Some(common.root.clone().unwrap_or_else(|| prefix.clone())),
            url: common.url.clone(),
            vcs: common.vcs.clone(),
        })
        .collect();

    Ok(modules)
}

/// La lista de sufijos de una expansión: una secuencia de cadenas.
fn decode_suffixes(value: &Value) -> DecodeResult<Vec<String>> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(|item| get_string(item, "el sufijo"))
            .collect(),
        other => Err(shape_mismatch(
            "los sufijos",
            "una secuencia de cadenas",
            other,
        )),
    }
}

/// Decodifica una regla de reemplazo: `prefix` y `url` obligatorios,
/// `vcs` opcional.
fn decode_replacement(value: &Value) -> DecodeResult<Replacement> {
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        other => return Err(shape_mismatch("el reemplazo", "un mapeo", other)),
    };

    let mut prefix: Option<String> = None;
    let mut url: Option<String> = None;
    let mut vcs: Option<String> = None;

    for (key, val) in mapping {
        let key = get_string(key, "la clave de reemplazo")?;

        match key.as_str() {
            "prefix" => prefix = Some(get_string(val, "'prefix'")?),
            "url" => url = Some(get_string(val, "'url'")?),
            "vcs" => vcs = Some(get_string(val, "'vcs'")?),
            other => {
                return Err(DecodeError::UnknownField {
                    field: other.to_string(),
                    context: "el reemplazo",
                });
            }
        }
    }

    Ok(Replacement {
        prefix: prefix.ok_or(DecodeError::MissingField {
            field: "prefix",
            context: "el reemplazo",
        })?,
        url: url.ok_or(DecodeError::MissingField {
            field: "url",
            context: "el reemplazo",
        })?,
        vcs,
    })
}

/// Une prefijo y sufijo insertando exactamente un separador `/`.
fn join_path(prefix: &str, suffix: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let suffix = suffix.trim_start_matches('/');

    if suffix.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}/{suffix}")
    }
}

fn get_string(value: &Value, context: &'static str) -> DecodeResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(shape_mismatch(context, "una cadena", other)),
    }
}

fn shape_mismatch(context: &'static str, expected: &'static str, value: &Value) -> DecodeError {
    DecodeError::ShapeMismatch {
        context,
        expected,
        found: kind(value),
    }
}

/// Nombre legible del tipo de un nodo YAML, para los mensajes de error.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "un booleano",
        Value::Number(_) => "un número",
        Value::String(_) => "una cadena",
        Value::Sequence(_) => "una secuencia",
        Value::Mapping(_) => "un mapeo",
        Value::Tagged(_) => "un nodo etiquetado",
    }
}
