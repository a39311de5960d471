use yew::prelude::*;
use crate::components::{Header, Sidebar};
use crate::config::CONFIG;
use crate::context::SearchFilterProvider;
use crate::hooks::use_current_user;
use crate::views::{ContactsView, DataVaultView, Page, PlaceholderView, SignedOutView};

#[function_component(App)]
pub fn app() -> Html {
    let user = use_current_user();
    let page = use_state(Page::default);

    if *user.signed_out {
        return html! { <SignedOutView /> };
    }

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            log::debug!("🧭 Navegando a {}", next.title());
            page.set(next);
        })
    };

    let content = match *page {
        Page::Contacts => html! { <ContactsView /> },
        Page::DataVault => html! { <DataVaultView /> },
        other => html! { <PlaceholderView title={other.title()} /> },
    };

    html! {
        <SearchFilterProvider>
            <div class="app-layout">
                <Header
                    title={CONFIG.app_title.clone()}
                    email={(*user.email).clone()}
                    initials={user.initials()}
                    avatar_url={CONFIG.avatar_url.clone().map(AttrValue::from)}
                    on_logout={user.logout.clone()}
                />
                <div class="app-body">
                    <Sidebar current={*page} on_navigate={on_navigate} />
                    <main class="app-content">{ content }</main>
                </div>
            </div>
        </SearchFilterProvider>
    }
}
