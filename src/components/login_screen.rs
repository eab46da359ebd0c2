use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_mounted;
use crate::services::ApiClient;
use crate::state::session::Route;
use crate::utils::constants::PHONE_LEN;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub navigate: Callback<Route>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let phone = use_state(String::new);
    let loading = use_state(|| false);
    let mounted = use_mounted();

    let oninput = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // sólo dígitos, hasta 10
            let digits: String = input
                .value()
                .chars()
                .filter(char::is_ascii_digit)
                .take(PHONE_LEN)
                .collect();
            phone.set(digits);
        })
    };

    let on_clear = {
        let phone = phone.clone();
        Callback::from(move |_: MouseEvent| phone.set(String::new()))
    };

    let on_submit = {
        let phone = phone.clone();
        let loading = loading.clone();
        let navigate = props.navigate.clone();
        let mounted = mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // validación antes de cualquier request
            if phone.len() != PHONE_LEN {
                if let Some(win) = window() {
                    let _ = win
                        .alert_with_message("Please enter a valid 10-digit mobile number.");
                }
                return;
            }
            if *loading {
                return;
            }

            let phone_value = (*phone).clone();
            let loading = loading.clone();
            let navigate = navigate.clone();
            let mounted = mounted.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = api.send_otp(&phone_value).await;

                if !*mounted.borrow() {
                    return;
                }
                loading.set(false);

                match result {
                    Ok(response) if response.success => {
                        navigate.emit(Route::Otp { phone: phone_value });
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Failed to send OTP.".to_string());
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&message);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error enviando OTP: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    let can_submit = phone.len() == PHONE_LEN && !*loading;

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="app-logo">
                        <span class="logo-main">{"DIRECT"}</span>
                        <span class="logo-accent">{"X"}</span>
                    </div>
                    <h1>{"Welcome Back!"}</h1>
                    <p>{"Log in with your registered mobile number"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="phone">{"Mobile Number"}</label>
                        <div class="phone-input-row">
                            <span class="phone-prefix">{"+91"}</span>
                            <input
                                type="tel"
                                id="phone"
                                placeholder="10-digit number"
                                value={(*phone).clone()}
                                oninput={oninput}
                            />
                            if !phone.is_empty() {
                                <button type="button" class="input-clear" onclick={on_clear}>
                                    {"✕"}
                                </button>
                            }
                        </div>
                    </div>

                    <button type="submit" class="btn-primary" disabled={!can_submit}>
                        if *loading {
                            {"Sending..."}
                        } else {
                            {"Send OTP"}
                        }
                    </button>
                </form>

                <p class="login-footer">
                    {"By continuing, you agree to our Terms of Services & Privacy Policy"}
                </p>
            </div>
        </div>
    }
}
