use yew::prelude::*;
use crate::components::Avatar;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub email: Option<String>,
    pub initials: AttrValue,
    #[prop_or_default]
    pub avatar_url: Option<AttrValue>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let onclick = {
        let callback = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <header class="app-header">
            <h1>{props.title.clone()}</h1>
            <div class="header-actions">
                if let Some(email) = &props.email {
                    <span class="header-email">{email.clone()}</span>
                }
                <Avatar initials={props.initials.clone()} image_url={props.avatar_url.clone()} />
                <button class="btn-logout" onclick={onclick}>{"Logout"}</button>
            </div>
        </header>
    }
}
