// src/core/templates.rs

use crate::constants::GODOC_BASE_URL;
use crate::models::PageParams;

/// La plantilla embebida de la página de redirección de un módulo.
static PAGE_TEMPLATE: &str = include_str!("../../templates/redirect.html");

/// Rellena la plantilla de la página para un módulo ya resuelto.
///
/// La etiqueta `go-import` lleva la raíz del módulo (el prefijo declarado),
/// mientras que la redirección visible apunta a la documentación del paquete
/// concreto que se pidió.
pub fn render_page(params: &PageParams) -> String {
    let godoc_url = format!("{}/{}", GODOC_BASE_URL, params.package);

    PAGE_TEMPLATE
        .replace("{{root}}", &params.root)
        .replace("{{vcs}}", &params.vcs)
        .replace("{{url}}", &params.url)
        .replace("{{godoc}}", &godoc_url)
}
