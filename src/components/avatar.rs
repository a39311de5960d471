use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub initials: AttrValue,
    #[prop_or_default]
    pub image_url: Option<AttrValue>,
}

/// Imagen de usuario; si no hay URL o la carga falla se muestran las iniciales
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let image_failed = use_state(|| false);

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| {
            log::warn!("⚠️ No se pudo cargar el avatar, usando iniciales");
            image_failed.set(true);
        })
    };

    match &props.image_url {
        Some(url) if !*image_failed => html! {
            <img class="avatar" src={url.clone()} alt={props.initials.clone()} onerror={onerror} />
        },
        _ => html! {
            <span class="avatar avatar-initials">{props.initials.clone()}</span>
        },
    }
}
