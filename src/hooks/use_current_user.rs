use yew::prelude::*;
use crate::utils::{clear_user_email, initials_from_email, load_user_email};

#[derive(Clone, PartialEq)]
pub struct UseCurrentUserHandle {
    /// Email guardado por el login; puede faltar
    pub email: UseStateHandle<Option<String>>,
    pub signed_out: UseStateHandle<bool>,
    pub logout: Callback<()>,
}

impl UseCurrentUserHandle {
    pub fn initials(&self) -> String {
        initials_from_email(self.email.as_deref().unwrap_or_default())
    }
}

#[hook]
pub fn use_current_user() -> UseCurrentUserHandle {
    let email = use_state(load_user_email);
    let signed_out = use_state(|| false);

    let logout = {
        let email = email.clone();
        let signed_out = signed_out.clone();
        Callback::from(move |_| {
            log::info!("🚪 Logout");
            if let Err(e) = clear_user_email() {
                log::error!("❌ Error limpiando email de localStorage: {}", e);
            }
            email.set(None);
            signed_out.set(true);
        })
    };

    UseCurrentUserHandle {
        email,
        signed_out,
        logout,
    }
}
