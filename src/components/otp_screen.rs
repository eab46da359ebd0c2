use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::{use_mounted, use_session};
use crate::models::AuthData;
use crate::services::ApiClient;
use crate::state::session::Route;
use crate::utils::constants::{OTP_LEN, OTP_RESEND_SECONDS};

#[derive(Properties, PartialEq)]
pub struct OtpScreenProps {
    pub phone: String,
    pub navigate: Callback<Route>,
}

#[function_component(OtpScreen)]
pub fn otp_screen(props: &OtpScreenProps) -> Html {
    let session = use_session();
    let otp = use_state(String::new);
    let loading = use_state(|| false);
    let resend_timer = use_state(|| OTP_RESEND_SECONDS);
    let mounted = use_mounted();

    // Cuenta regresiva para reenviar; el Timeout se cancela al
    // desmontar o reiniciar (drop)
    {
        let resend_timer = resend_timer.clone();
        use_effect_with(*resend_timer, move |seconds| {
            let timeout = if *seconds > 0 {
                let resend_timer = resend_timer.clone();
                let seconds = *seconds;
                Some(Timeout::new(1_000, move || {
                    resend_timer.set(seconds - 1);
                }))
            } else {
                None
            };
            move || drop(timeout)
        });
    }

    let oninput = {
        let otp = otp.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let digits: String = input
                .value()
                .chars()
                .filter(char::is_ascii_digit)
                .take(OTP_LEN)
                .collect();
            otp.set(digits);
        })
    };

    let on_verify = {
        let otp = otp.clone();
        let loading = loading.clone();
        let phone = props.phone.clone();
        let login = session.login.clone();
        let mounted = mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if otp.len() != OTP_LEN {
                if let Some(win) = window() {
                    let _ = win.alert_with_message("Please enter a valid 6-digit OTP.");
                }
                return;
            }
            if *loading {
                return;
            }

            let otp_value = (*otp).clone();
            let phone = phone.clone();
            let loading = loading.clone();
            let login = login.clone();
            let mounted = mounted.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = api.verify_otp(&phone, &otp_value).await;

                if !*mounted.borrow() {
                    return;
                }
                loading.set(false);

                match result {
                    Ok(response) if response.success => {
                        match AuthData::from_verify(&response) {
                            Some(auth) => {
                                // el gate redirige solo al cambiar la fase
                                login.emit(auth);
                            }
                            None => {
                                log::error!("❌ verify-otp sin token/promotor en la respuesta");
                                if let Some(win) = window() {
                                    let _ = win.alert_with_message(
                                        "Failed to verify OTP. Please try again.",
                                    );
                                }
                            }
                        }
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Failed to verify OTP. Please try again.".to_string());
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&message);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error verificando OTP: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    let on_resend = {
        let resend_timer = resend_timer.clone();
        let phone = props.phone.clone();
        let mounted = mounted.clone();
        Callback::from(move |_: MouseEvent| {
            if *resend_timer > 0 {
                return;
            }

            let phone = phone.clone();
            let resend_timer = resend_timer.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = api.send_otp(&phone).await;

                if !*mounted.borrow() {
                    return;
                }

                match result {
                    Ok(response) if response.success => {
                        resend_timer.set(OTP_RESEND_SECONDS);
                        if let Some(win) = window() {
                            let _ = win
                                .alert_with_message("A new OTP has been sent to your number.");
                        }
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
                        log::error!("❌ Error reenviando OTP: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    let back_to_login = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Login))
    };

    let can_submit = otp.len() == OTP_LEN && !*loading;

    html! {
        <div class="otp-screen">
            <div class="login-container">
                <h1>{"Enter OTP"}</h1>
                <p>
                    {"We've sent a 6-digit OTP to "}
                    <strong>{format!("+91 {}", props.phone)}</strong>
                </p>

                <form class="otp-form" onsubmit={on_verify}>
                    <div class="form-group">
                        <label for="otp">{"OTP Code"}</label>
                        <input
                            type="tel"
                            id="otp"
                            placeholder="Enter OTP"
                            value={(*otp).clone()}
                            oninput={oninput}
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled={!can_submit}>
                        if *loading {
                            {"Verifying..."}
                        } else {
                            {"Verify OTP"}
                        }
                    </button>
                </form>

                <div class="resend-row">
                    if *resend_timer == 0 {
                        <button type="button" class="btn-link" onclick={on_resend}>
                            {"Resend OTP"}
                        </button>
                    } else {
                        <span>{format!("Resend OTP in {}s", *resend_timer)}</span>
                    }
                </div>

                <button type="button" class="btn-link" onclick={back_to_login}>
                    {"Change mobile number"}
                </button>
            </div>
        </div>
    }
}
