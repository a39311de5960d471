use yew::prelude::*;
use crate::components::{ContactsTable, FilterBar};
use crate::hooks::use_search_filter;
use crate::models::filter::{FilterConfig, SortOption};
use crate::services::{apply_filters, load_contacts};

/// Controles que la vista de contactos quiere en la barra de filtros
pub fn contacts_filter_config() -> FilterConfig {
    FilterConfig {
        country_code: true,
        date_range: true,
        email: true,
        company_name: true,
        status: true,
        organization_type: false,
        account_type: true,
        billing_type: true,
        sort_options: vec![
            SortOption::new("created_at", "Created"),
            SortOption::new("name", "Name"),
            SortOption::new("email", "Email"),
            SortOption::new("company_name", "Company"),
            SortOption::new("country_code", "Country"),
            SortOption::new("status", "Status"),
        ],
    }
}

#[function_component(ContactsView)]
pub fn contacts_view() -> Html {
    let filter = use_search_filter();

    let contacts = use_memo((), |_| match load_contacts() {
        Ok(contacts) => contacts,
        Err(e) => {
            log::error!("❌ Error cargando contactos: {}", e);
            Vec::new()
        }
    });

    // Registrar la config al montar y retirarla al desmontar
    {
        let set_config = filter.set_config.clone();
        use_effect_with((), move |_| {
            set_config.emit(Some(contacts_filter_config()));
            move || set_config.emit(None)
        });
    }

    let visible = apply_filters(&contacts, filter.filter_state());

    html! {
        <section class="page contacts-page">
            <div class="page-header">
                <h2>{"Contacts"}</h2>
                <span class="result-count">{format!("{} of {}", visible.len(), contacts.len())}</span>
            </div>
            <FilterBar />
            <ContactsTable contacts={visible} />
        </section>
    }
}
