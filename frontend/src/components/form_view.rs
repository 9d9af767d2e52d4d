use shared::constants::welcome_message;
use shared::validation::{LoginForm, PlayerProfile};
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::hooks::use_form_state;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct FormViewProps {
    pub on_login: Callback<PlayerProfile>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(FormView)]
pub fn form_view(props: &FormViewProps) -> Html {
    let form_state = use_form_state();
    let name_ref = use_node_ref();
    let surname_ref = use_node_ref();
    let email_ref = use_node_ref();

    let handle_submit = {
        let form_state = form_state.clone();
        let on_login = props.on_login.clone();
        let name_ref = name_ref.clone();
        let surname_ref = surname_ref.clone();
        let email_ref = email_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = LoginForm::new(
                input_value(&name_ref),
                input_value(&surname_ref),
                input_value(&email_ref),
            );

            match form.validate() {
                Ok(profile) => {
                    form_state.handle_success.emit(welcome_message(profile.name()));
                    on_login.emit(profile);
                }
                Err(err) => {
                    log::debug!("login form rejected: {}", err.code());
                    form_state.handle_error.emit(err.user_message().to_string());
                }
            }
        })
    };

    html! {
        <div class={styles::FORM_CARD}>
            <div class={styles::HEADER}>
                <h2 class={styles::TEXT_H2}>{"Spin the Wheel"}</h2>
                <p class={styles::TEXT_SMALL}>{"Enter your details to get two spins"}</p>
            </div>

            <form class={styles::FORM} onsubmit={handle_submit}>
                <div>
                    <label for="name" class={styles::TEXT_LABEL}>{"Name"}</label>
                    <input id="name" type="text" ref={name_ref} class={styles::INPUT} />
                </div>
                <div>
                    <label for="surname" class={styles::TEXT_LABEL}>{"Surname"}</label>
                    <input id="surname" type="text" ref={surname_ref} class={styles::INPUT} />
                </div>
                <div>
                    <label for="email" class={styles::TEXT_LABEL}>{"Email"}</label>
                    <input id="email" type="text" ref={email_ref} class={styles::INPUT} />
                </div>

                if let Some(message) = form_state.message() {
                    <p class={styles::message_class(message.kind)}>{message.text}</p>
                }

                <button type="submit" class={styles::SUBMIT_BUTTON}>{"Start"}</button>
            </form>
        </div>
    }
}
