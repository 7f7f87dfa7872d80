// src/core/resolver.rs

use thiserror::Error;

use crate::constants::DEFAULT_VCS;
use crate::models::{Config, Module, PageParams};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("ningún módulo configurado coincide con la ruta '{0}'")]
    NotFound(String),
    #[error("el módulo '{0}' no tiene URL explícita ni reemplazo aplicable")]
    ReplacementNotFound(String),
}

/// Selecciona el módulo que mejor coincide con la ruta pedida y calcula la
/// URL del repositorio y el VCS resueltos.
///
/// Función pura sobre la instantánea de configuración: no toca disco ni red,
/// y puede llamarse desde cualquier número de peticiones concurrentes.
pub fn resolve(path: &str, configs: &[Config]) -> Result<PageParams, ResolveError> {
    let (config, module) =
        select_module(path, configs).ok_or_else(|| ResolveError::NotFound(path.to_string()))?;

    let root = effective_root(module);

    // Una URL explícita en el módulo tiene prioridad absoluta: `replace`
    // no se consulta aunque algún prefijo coincidiera.
    if let Some(url) = &module.url {
        return Ok(PageParams {
            package: path.to_string(),
            root: root.to_string(),
            vcs: vcs_or_default(module.vcs.as_deref(), None),
            url: url.clone(),
        });
    }

    // Los reemplazos del bloque dueño del módulo, en orden de declaración:
    // gana el primero cuyo prefijo encabece la raíz efectiva.
    for replacement in &config.replace {
        if !root.starts_with(&replacement.prefix) {
            continue;
        }

        // Solo se reescribe la aparición inicial del prefijo.
        let url = root.replacen(&replacement.prefix, &replacement.url, 1);

        return Ok(PageParams {
            package: path.to_string(),
            root: root.to_string(),
            vcs: vcs_or_default(module.vcs.as_deref(), replacement.vcs.as_deref()),
            url,
        });
    }

    Err(ResolveError::ReplacementNotFound(module.name.clone()))
}

/// Búsqueda del prefijo más largo entre todos los módulos de todos los
/// bloques. La comparación es un prefijo de cadena plano, no por segmentos:
/// "a.com/b" coincide con la ruta pedida "a.com/bar". Comportamiento
/// heredado y conservado a propósito.
fn select_module<'a>(path: &str, configs: &'a [Config]) -> Option<(&'a Config, &'a Module)> {
    let mut best: Option<(&Config, &Module)> = None;

    for config in configs {
        for module in &config.modules {
            if !path.starts_with(&module.name) {
                continue;
            }

            // El `>` estricto conserva el primer candidato en caso de empate.
            let is_better = best.is_none_or(|(_, b)| module.name.len() > b.name.len());
            if is_better {
                best = Some((config, module));
            }
        }
    }

    best
}

/// La raíz efectiva de un módulo: `root` si está presente y no vacía,
/// `name` en otro caso.
fn effective_root(module: &Module) -> &str {
    match module.root.as_deref() {
        Some(root) if !root.is_empty() => root,
        _ => &module.name,
    }
}

/// El único punto donde se aplica el VCS por defecto: primero el del módulo,
/// luego el del reemplazo, y "git" como última opción.
fn vcs_or_default(module_vcs: Option<&str>, replacement_vcs: Option<&str>) -> String {
    module_vcs
        .or(replacement_vcs)
        .unwrap_or(DEFAULT_VCS)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Replacement;

    fn module(name: &str) -> Module {
        Module {
            name: name.to_string(),
            ..Module::default()
        }
    }

    fn replacement(prefix: &str, url: &str) -> Replacement {
        Replacement {
            prefix: prefix.to_string(),
            url: url.to_string(),
            vcs: None,
        }
    }

    #[test]
    fn longest_prefix_wins() {
        let configs = vec![Config {
            modules: vec![
                Module {
                    url: Some("https://host/a".to_string()),
                    ..module("a.com")
                },
                Module {
                    url: Some("https://host/b".to_string()),
                    ..module("a.com/b")
                },
            ],
            replace: vec![],
        }];

        let params = resolve("a.com/b/c", &configs).unwrap();
        assert_eq!(params.root, "a.com/b");
        assert_eq!(params.url, "https://host/b");
    }

    #[test]
    fn equal_length_keeps_the_first_declared() {
        let configs = vec![Config {
            modules: vec![
                Module {
                    url: Some("https://host/first".to_string()),
                    ..module("a.com/x")
                },
                Module {
                    url: Some("https://host/second".to_string()),
                    ..module("a.com/x")
                },
            ],
            replace: vec![],
        }];

        let params = resolve("a.com/x/sub", &configs).unwrap();
        assert_eq!(params.url, "https://host/first");
    }

    #[test]
    fn explicit_url_skips_replacements() {
        let configs = vec![Config {
            modules: vec![Module {
                url: Some("https://github.com/org/bar".to_string()),
                ..module("a.com/bar")
            }],
            // Este prefijo coincidiría, pero no debe consultarse.
            replace: vec![replacement("a.com/", "https://otro/")],
        }];

        let params = resolve("a.com/bar", &configs).unwrap();
        assert_eq!(params.url, "https://github.com/org/bar");
        assert_eq!(params.vcs, "git");
    }

    #[test]
    fn first_matching_replacement_applies() {
        let configs = vec![Config {
            modules: vec![module("a.com/x")],
            replace: vec![
                replacement("b.com/", "https://no/"),
                replacement("a.com/", "https://github.com/org/"),
                replacement("a.com/x", "https://tarde/"),
            ],
        }];

        let params = resolve("a.com/x", &configs).unwrap();
        assert_eq!(params.url, "https://github.com/org/x");
    }

    #[test]
    fn round_trip_scenario() {
        let configs = vec![Config {
            modules: vec![module("a.com/x")],
            replace: vec![replacement("a.com/", "https://github.com/org/")],
        }];

        let params = resolve("a.com/x/sub", &configs).unwrap();
        assert_eq!(
            params,
            PageParams {
                package: "a.com/x/sub".to_string(),
                root: "a.com/x".to_string(),
                vcs: "git".to_string(),
                url: "https://github.com/org/x".to_string(),
            }
        );
    }

    #[test]
    fn unknown_path_is_not_found() {
        let configs = vec![Config {
            modules: vec![module("a.com/x")],
            replace: vec![],
        }];

        let err = resolve("otro.com/y", &configs).unwrap_err();
        assert_eq!(err, ResolveError::NotFound("otro.com/y".to_string()));
    }

    #[test]
    fn module_without_url_nor_replacement_fails() {
        let configs = vec![Config {
            modules: vec![module("a.com/y")],
            replace: vec![replacement("b.com/", "https://no/")],
        }];

        let err = resolve("a.com/y", &configs).unwrap_err();
        assert_eq!(err, ResolveError::ReplacementNotFound("a.com/y".to_string()));
    }

    #[test]
    fn replacement_rewrites_the_root_not_the_request() {
        let configs = vec![Config {
            modules: vec![Module {
                root: Some("a.com/real".to_string()),
                ..module("a.com/alias")
            }],
            replace: vec![replacement("a.com/", "https://github.com/org/")],
        }];

        let params = resolve("a.com/alias/sub", &configs).unwrap();
        assert_eq!(params.root, "a.com/real");
        assert_eq!(params.url, "https://github.com/org/real");
    }

    #[test]
    fn vcs_falls_back_from_module_to_replacement_to_git() {
        let base = Config {
            modules: vec![module("a.com/x")],
            replace: vec![Replacement {
                prefix: "a.com/".to_string(),
                url: "https://host/".to_string(),
                vcs: Some("hg".to_string()),
            }],
        };

        // El VCS del reemplazo se usa cuando el módulo no trae uno.
        let params = resolve("a.com/x", &[base.clone()]).unwrap();
        assert_eq!(params.vcs, "hg");

        // El VCS del módulo manda sobre el del reemplazo.
        let mut with_module_vcs = base.clone();
        with_module_vcs.modules[0].vcs = Some("svn".to_string());
        let params = resolve("a.com/x", &[with_module_vcs]).unwrap();
        assert_eq!(params.vcs, "svn");

        // Sin ninguno de los dos, "git".
        let mut without_any = base;
        without_any.replace[0].vcs = None;
        let params = resolve("a.com/x", &[without_any]).unwrap();
        assert_eq!(params.vcs, "git");
    }

    #[test]
    fn prefix_match_is_not_segment_aware() {
        // Rareza heredada: "a.com/b" coincide con "a.com/bar".
        let configs = vec![Config {
            modules: vec![Module {
                url: Some("https://host/b".to_string()),
                ..module("a.com/b")
            }],
            replace: vec![],
        }];

        let params = resolve("a.com/bar", &configs).unwrap();
        assert_eq!(params.root, "a.com/b");
    }

    #[test]
    fn modules_match_across_config_blocks() {
        let configs = vec![
            Config {
                modules: vec![module("a.com/x")],
                replace: vec![replacement("a.com/", "https://primero/")],
            },
            Config {
                modules: vec![module("a.com/x/deep")],
                replace: vec![replacement("a.com/", "https://segundo/")],
            },
        ];

        // Gana el módulo más largo aunque viva en otro bloque, y se usan
        // los reemplazos de SU bloque.
        let params = resolve("a.com/x/deep/pkg", &configs).unwrap();
        assert_eq!(params.root, "a.com/x/deep");
        assert_eq!(params.url, "https://segundo/x/deep");
    }
}
