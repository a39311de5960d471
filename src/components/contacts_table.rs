use yew::prelude::*;
use crate::models::Contact;

#[derive(Properties, PartialEq)]
pub struct ContactsTableProps {
    pub contacts: Vec<Contact>,
}

#[function_component(ContactsTable)]
pub fn contacts_table(props: &ContactsTableProps) -> Html {
    if props.contacts.is_empty() {
        return html! {
            <div class="empty-state">{"No contacts match the current filters"}</div>
        };
    }

    html! {
        <table class="contacts-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Email"}</th>
                    <th>{"Company"}</th>
                    <th>{"Country"}</th>
                    <th>{"Status"}</th>
                    <th>{"Account"}</th>
                    <th>{"Created"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.contacts.iter().map(|c| html! {
                    <tr key={c.id.to_string()}>
                        <td>{c.name.clone()}</td>
                        <td>{c.email.clone()}</td>
                        <td>{c.company_name.clone()}</td>
                        <td>{c.country_code.clone()}</td>
                        <td><span class={classes!("status-badge", c.status.clone())}>{c.status.clone()}</span></td>
                        <td>{format!("{} / {}", c.account_type, c.billing_type)}</td>
                        <td>{c.created_at.format("%Y-%m-%d").to_string()}</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
