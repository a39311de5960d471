use yew::prelude::*;

#[function_component(SignedOutView)]
pub fn signed_out_view() -> Html {
    html! {
        <div class="signed-out">
            <h2>{"You are signed out"}</h2>
            <p>{"Sign in again to access the dashboard."}</p>
        </div>
    }
}
