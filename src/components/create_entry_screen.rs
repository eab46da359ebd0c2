// ============================================================================
// CREATE ENTRY - Alta de pedido con evidencia fotográfica
// ============================================================================

use web_sys::{window, File, HtmlInputElement};
use yew::prelude::*;

use crate::components::AppHeader;
use crate::hooks::{use_mounted, use_session};
use crate::services::{ApiClient, OrderEntryFields};
use crate::state::session::Route;
use crate::utils::constants::PHONE_LEN;

#[derive(Properties, PartialEq)]
pub struct CreateEntryScreenProps {
    pub navigate: Callback<Route>,
}

fn file_from_input(e: &Event) -> Option<File> {
    let input: HtmlInputElement = e.target_dyn_into()?;
    input.files()?.get(0)
}

#[function_component(CreateEntryScreen)]
pub fn create_entry_screen(props: &CreateEntryScreenProps) -> Html {
    let session = use_session();
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let order_image = use_state(|| None::<File>);
    let profile_image = use_state(|| None::<File>);
    let loading = use_state(|| false);
    let mounted = use_mounted();

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let digits: String = input
                .value()
                .chars()
                .filter(char::is_ascii_digit)
                .take(PHONE_LEN)
                .collect();
            phone.set(digits);
        })
    };

    let on_order_image = {
        let order_image = order_image.clone();
        Callback::from(move |e: Event| order_image.set(file_from_input(&e)))
    };

    let on_profile_image = {
        let profile_image = profile_image.clone();
        Callback::from(move |e: Event| profile_image.set(file_from_input(&e)))
    };

    let on_clear_order = {
        let order_image = order_image.clone();
        Callback::from(move |_: MouseEvent| order_image.set(None))
    };

    let on_clear_profile = {
        let profile_image = profile_image.clone();
        Callback::from(move |_: MouseEvent| profile_image.set(None))
    };

    let on_cancel = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Dashboard))
    };

    let on_submit = {
        let name = name.clone();
        let phone = phone.clone();
        let order_image = order_image.clone();
        let profile_image = profile_image.clone();
        let loading = loading.clone();
        let session = session.clone();
        let navigate = props.navigate.clone();
        let mounted = mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // la imagen del pedido es obligatoria; nada sale a la red sin ella
            let Some(order_file) = (*order_image).clone() else {
                if let Some(win) = window() {
                    let _ = win.alert_with_message("Please upload order image.");
                }
                return;
            };
            if *loading {
                return;
            }

            let (Some(auth), Some(location)) = (session.auth.clone(), session.location.clone())
            else {
                log::warn!("⏳ Sin documentos de sesión, alta ignorada");
                return;
            };

            let fields = OrderEntryFields {
                promoter_id: auth.promoter_id,
                project_id: auth.project_id,
                activity_loc_id: location.activity_loc_id,
                vendor_id: auth.vendor_id,
                activity_id: location.activity_id,
                name: (*name).clone(),
                phone: (*phone).clone(),
            };
            let profile_file = (*profile_image).clone();
            let loading = loading.clone();
            let navigate = navigate.clone();
            let mounted = mounted.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = api
                    .create_order_entry(&fields, &order_file, profile_file.as_ref())
                    .await;

                if !*mounted.borrow() {
                    return;
                }
                loading.set(false);

                match result {
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Failed to create entry.".to_string());
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&message);
                        }
                        if response.success {
                            navigate.emit(Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error creando entrada: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="create-screen">
            <AppHeader navigate={props.navigate.clone()} show_home={true} />

            <form class="create-card" onsubmit={on_submit}>
                <h1>{"Create New Entry"}</h1>

                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Enter name"
                        value={(*name).clone()}
                        oninput={on_name}
                    />
                </div>

                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input
                        type="tel"
                        id="phone"
                        placeholder="Enter phone number"
                        value={(*phone).clone()}
                        oninput={on_phone}
                    />
                </div>

                <div class="form-group">
                    <label for="order-image">{"Order Image *"}</label>
                    <input
                        type="file"
                        id="order-image"
                        accept="image/*"
                        onchange={on_order_image}
                    />
                    if let Some(file) = (*order_image).clone() {
                        <div class="file-chip">
                            <span>{ file.name() }</span>
                            <button type="button" onclick={on_clear_order}>{"✕"}</button>
                        </div>
                    }
                </div>

                <div class="form-group">
                    <label for="profile-image">{"Profile Image"}</label>
                    <input
                        type="file"
                        id="profile-image"
                        accept="image/*"
                        onchange={on_profile_image}
                    />
                    if let Some(file) = (*profile_image).clone() {
                        <div class="file-chip">
                            <span>{ file.name() }</span>
                            <button type="button" onclick={on_clear_profile}>{"✕"}</button>
                        </div>
                    }
                </div>

                <button
                    type="submit"
                    class="btn-primary"
                    disabled={order_image.is_none() || *loading}
                >
                    if *loading {
                        {"Submitting..."}
                    } else {
                        {"Submit"}
                    }
                </button>
                <button type="button" class="btn-secondary" onclick={on_cancel}>
                    {"Cancel"}
                </button>
            </form>
        </div>
    }
}
