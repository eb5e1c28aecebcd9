use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::components::icons::*;
use crate::models::{AuthResponse, LoginCredentials, RegisterCredentials};
use crate::services::auth;

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub on_authenticated: Callback<AuthResponse>,
}

#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let is_login = use_state(|| true);
    let show_password = use_state(|| false);
    let name = use_state(|| "".to_string());
    let username = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let is_login = is_login.clone();
        let name = name.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_val = name.trim().to_string();
            let username_val = username.trim().to_string();
            let password_val = (*password).clone();

            if username_val.is_empty() || password_val.is_empty() {
                error.set(Some(
                    "Por favor, preencha todos os campos obrigatórios".to_string(),
                ));
                return;
            }
            if !*is_login && name_val.is_empty() {
                error.set(Some("Por favor, preencha seu nome".to_string()));
                return;
            }
            if username_val.len() < 3 {
                error.set(Some(
                    "O usuário deve ter pelo menos 3 caracteres".to_string(),
                ));
                return;
            }
            if password_val.len() < 6 {
                error.set(Some("A senha deve ter pelo menos 6 caracteres".to_string()));
                return;
            }

            error.set(None);
            loading.set(true);

            let is_login_val = *is_login;
            let error = error.clone();
            let loading = loading.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                let result = if is_login_val {
                    auth::login(&LoginCredentials {
                        username: username_val,
                        password: password_val,
                    })
                    .await
                } else {
                    auth::register(&RegisterCredentials {
                        name: name_val,
                        username: username_val,
                        password: password_val,
                    })
                    .await
                };

                match result {
                    Ok(auth_response) => on_authenticated.emit(auth_response),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    let toggle_mode = {
        let is_login = is_login.clone();
        let name = name.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |_| {
            is_login.set(!*is_login);
            name.set("".to_string());
            username.set("".to_string());
            password.set("".to_string());
            error.set(None);
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center p-4">
            <div class="bg-white rounded-2xl shadow-xl max-w-md w-full p-8">
                <div class="text-center mb-8">
                    <div class="p-3 bg-blue-600 rounded-full w-16 h-16 mx-auto mb-4 flex items-center justify-center text-white">
                        { if *is_login { icon_log_in() } else { icon_user_plus() } }
                    </div>
                    <h1 class="text-2xl font-bold text-gray-900 mb-2">
                        { if *is_login { "Entrar" } else { "Criar Conta" } }
                    </h1>
                    <p class="text-gray-600">
                        { if *is_login { "Acesse seu controle financeiro" } else { "Comece a organizar suas finanças" } }
                    </p>
                </div>

                {
                    if let Some(msg) = &*error {
                        html! {
                            <div class="mb-6 p-4 bg-red-50 border border-red-200 rounded-lg">
                                <p class="text-sm text-red-600">{ msg.clone() }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <form class="space-y-6" onsubmit={on_submit}>
                    if !*is_login {
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">{"Nome completo *"}</label>
                            <div class="relative">
                                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">{ icon_user() }</span>
                                <input
                                    type="text"
                                    placeholder="Seu nome completo"
                                    class="w-full pl-10 pr-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                    value={(*name).clone()}
                                    disabled={*loading}
                                    oninput={{
                                        let name = name.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            name.set(input.value());
                                        })
                                    }}
                                />
                            </div>
                        </div>
                    }

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Usuário *"}</label>
                        <div class="relative">
                            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">{ icon_tag() }</span>
                            <input
                                type="text"
                                placeholder="usuario123"
                                class="w-full pl-10 pr-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                value={(*username).clone()}
                                disabled={*loading}
                                oninput={{
                                    let username = username.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        username.set(input.value());
                                    })
                                }}
                            />
                        </div>
                        if !*is_login {
                            <p class="text-xs text-gray-500 mt-1">{"Mínimo de 3 caracteres"}</p>
                        }
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Senha *"}</label>
                        <div class="relative">
                            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">{ icon_lock() }</span>
                            <input
                                type={if *show_password { "text" } else { "password" }}
                                placeholder="Sua senha"
                                class="w-full pl-10 pr-12 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                value={(*password).clone()}
                                disabled={*loading}
                                oninput={{
                                    let password = password.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        password.set(input.value());
                                    })
                                }}
                            />
                            <button
                                type="button"
                                onclick={toggle_password}
                                class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600"
                                disabled={*loading}
                            >
                                { if *show_password { icon_eye_off() } else { icon_eye() } }
                            </button>
                        </div>
                        if !*is_login {
                            <p class="text-xs text-gray-500 mt-1">{"Mínimo de 6 caracteres"}</p>
                        }
                    </div>

                    <button
                        type="submit"
                        disabled={*loading}
                        class="w-full bg-blue-600 text-white py-3 px-4 rounded-lg hover:bg-blue-700 transition-all duration-200 flex items-center justify-center gap-2 disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {
                            if *loading {
                                html! { { if *is_login { "Entrando..." } else { "Criando conta..." } } }
                            } else {
                                html! {
                                    <>
                                        { if *is_login { icon_log_in() } else { icon_user_plus() } }
                                        { if *is_login { "Entrar" } else { "Criar Conta" } }
                                    </>
                                }
                            }
                        }
                    </button>
                </form>

                <div class="mt-8 text-center">
                    <p class="text-sm text-gray-600">
                        { if *is_login { "Não tem uma conta?" } else { "Já tem uma conta?" } }
                    </p>
                    <button
                        onclick={toggle_mode}
                        disabled={*loading}
                        class="mt-2 text-blue-600 hover:text-blue-700 font-medium disabled:opacity-50"
                    >
                        { if *is_login { "Criar nova conta" } else { "Fazer login" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
