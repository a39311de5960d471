use yew::prelude::*;
use crate::components::MetricCard;
use crate::hooks::use_search_filter;
use crate::services::load_vault_metrics;

#[function_component(DataVaultView)]
pub fn data_vault_view() -> Html {
    let filter = use_search_filter();

    let metrics = use_memo((), |_| {
        load_vault_metrics().unwrap_or_else(|e| {
            log::error!("❌ Error cargando métricas: {}", e);
            Vec::new()
        })
    });

    // Esta vista no tiene controles de filtro
    {
        let set_config = filter.set_config.clone();
        use_effect_with((), move |_| {
            set_config.emit(None);
            || ()
        });
    }

    html! {
        <section class="page data-vault-page">
            <div class="page-header">
                <h2>{"Data Vault"}</h2>
            </div>
            <div class="metrics-grid">
                { for metrics.iter().map(|metric| html! {
                    <MetricCard key={metric.label.clone()} metric={metric.clone()} />
                }) }
            </div>
        </section>
    }
}
