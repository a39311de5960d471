use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlaceholderViewProps {
    pub title: AttrValue,
}

#[function_component(PlaceholderView)]
pub fn placeholder_view(props: &PlaceholderViewProps) -> Html {
    html! {
        <section class="page placeholder-page">
            <div class="page-header">
                <h2>{props.title.clone()}</h2>
            </div>
            <p class="coming-soon">{"This section is coming soon."}</p>
        </section>
    }
}
