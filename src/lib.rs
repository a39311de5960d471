// ============================================================================
// VAULT ADMIN - Dashboard de administración (Yew)
// ============================================================================
// - Components / Views: componentes de función de Yew
// - Hooks: estado compartido (búsqueda / filtros, usuario actual)
// - Stores: reducers puros, testeables sin navegador
// - Services: datos mock y consultas sobre ellos
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod views;

use crate::components::App;
use crate::config::CONFIG;

/// Punto de entrada del binario WASM
pub fn run() {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} starting ({})", CONFIG.app_title, CONFIG.environment);
    log::debug!("🔗 Backend (proxy): {}", CONFIG.backend_url);

    yew::Renderer::<App>::new().render();
}
