use yew::prelude::*;
use crate::views::Page;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="sidebar">
            <ul>
                { for Page::ALL.iter().map(|page| {
                    let page = *page;
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
                    };
                    let class = if page == props.current { "nav-item active" } else { "nav-item" };
                    html! {
                        <li class={class} key={page.title()} onclick={onclick}>{page.title()}</li>
                    }
                }) }
            </ul>
        </nav>
    }
}
