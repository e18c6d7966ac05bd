//! Login / register modal.
//!
//! Registration chains straight into login with the same credentials, so a
//! successful sign-up leaves the user authenticated.

use dioxus::prelude::*;

use crate::ui::presentation::services::use_services;
use crate::ui::presentation::state::{use_game_state, use_ui_state};

#[component]
pub fn AuthModal() -> Element {
    let services = use_services();
    let game_state = use_game_state();
    let mut ui_state = use_ui_state();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut register_mode = use_signal(|| false);

    let busy = *ui_state.auth_busy.read();
    let error = ui_state.auth_error.read().clone();
    let is_register = *register_mode.read();

    let submit = move |_| {
        let user = username.read().trim().to_string();
        let pass = password.read().clone();
        if user.is_empty() || pass.is_empty() {
            ui_state
                .auth_error
                .set(Some("Preencha usuário e senha".to_string()));
            return;
        }

        let api = services.api.clone();
        let mut session = game_state.session;
        let mut ui_state = ui_state;
        let register = *register_mode.read();

        spawn(async move {
            ui_state.auth_busy.set(true);
            ui_state.auth_error.set(None);

            let result = if register {
                match api.register(&user, &pass).await {
                    Ok(()) => api.login(&user, &pass).await,
                    Err(e) => Err(e),
                }
            } else {
                api.login(&user, &pass).await
            };

            let outcome = session
                .write()
                .apply_login(result.map_err(|e| e.to_string()));
            match outcome {
                None => ui_state.close_auth(),
                Some(message) => {
                    ui_state.auth_error.set(Some(message));
                    ui_state.auth_busy.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "overlay",
            onclick: move |_| ui_state.close_auth(),

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",

                    h2 {
                        class: "modal-title",
                        if is_register { "Criar conta" } else { "Entrar" }
                    }

                    button {
                        class: "modal-close",
                        onclick: move |_| ui_state.close_auth(),
                        "×"
                    }
                }

                div {
                    class: "modal-body",

                    if let Some(error) = error {
                        div { class: "banner banner-error", "{error}" }
                    }

                    label { class: "field-label", "Usuário" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        value: "{username}",
                        oninput: move |e| username.set(e.value()),
                    }

                    label { class: "field-label", "Senha" }
                    input {
                        class: "field-input",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }

                    button {
                        class: "primary-button",
                        disabled: busy,
                        onclick: submit,
                        if busy {
                            "Aguarde..."
                        } else if is_register {
                            "Registrar"
                        } else {
                            "Entrar"
                        }
                    }

                    button {
                        class: "link-button",
                        onclick: move |_| {
                            let flip = !*register_mode.read();
                            register_mode.set(flip);
                            ui_state.auth_error.set(None);
                        },
                        if is_register {
                            "Já tem conta? Entrar"
                        } else {
                            "Não tem conta? Registre-se"
                        }
                    }
                }
            }
        }
    }
}
