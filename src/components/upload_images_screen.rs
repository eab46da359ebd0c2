// ============================================================================
// UPLOAD IMAGES - Fotos de la sociedad (una o más)
// ============================================================================

use web_sys::{window, File, HtmlInputElement};
use yew::prelude::*;

use crate::components::AppHeader;
use crate::hooks::use_mounted;
use crate::services::ApiClient;
use crate::state::session::Route;
use crate::utils::storage;

#[derive(Properties, PartialEq)]
pub struct UploadImagesScreenProps {
    pub navigate: Callback<Route>,
}

#[function_component(UploadImagesScreen)]
pub fn upload_images_screen(props: &UploadImagesScreenProps) -> Html {
    let images = use_state(Vec::<File>::new);
    let loading = use_state(|| false);
    let mounted = use_mounted();

    // el input permite selección múltiple; cada selección se acumula
    let on_pick = {
        let images = images.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(list) = input.files() else {
                return;
            };

            let mut next = (*images).clone();
            for i in 0..list.length() {
                if let Some(file) = list.get(i) {
                    next.push(file);
                }
            }
            images.set(next);
            // permite volver a elegir el mismo archivo
            input.set_value("");
        })
    };

    let remove_at = {
        let images = images.clone();
        Callback::from(move |index: usize| {
            let mut next = (*images).clone();
            if index < next.len() {
                next.remove(index);
            }
            images.set(next);
        })
    };

    let on_submit = {
        let images = images.clone();
        let loading = loading.clone();
        let navigate = props.navigate.clone();
        let mounted = mounted.clone();
        Callback::from(move |_: MouseEvent| {
            if images.is_empty() {
                if let Some(win) = window() {
                    let _ = win.alert_with_message("Please upload at least one image.");
                }
                return;
            }
            if *loading {
                return;
            }

            let files = (*images).clone();
            let loading = loading.clone();
            let navigate = navigate.clone();
            let mounted = mounted.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                // el documento de ubicación es el dueño del id de sociedad
                let Some(activity_loc_id) = storage::get_loc_field("activityLocId").await else {
                    loading.set(false);
                    log::warn!("⏳ Sin locData, subida ignorada");
                    return;
                };

                let api = ApiClient::new();
                let result = api.upload_images(&files, &activity_loc_id).await;

                if !*mounted.borrow() {
                    return;
                }
                loading.set(false);

                match result {
                    Ok(response) if response.success => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Images uploaded successfully!");
                        }
                        navigate.emit(Route::Dashboard);
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Failed to upload Images.".to_string());
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&message);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error subiendo imágenes: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="upload-screen">
            <AppHeader navigate={props.navigate.clone()} show_home={true} />

            <div class="upload-card">
                <h1>{"Society Images Upload"}</h1>

                <div class="form-group">
                    <label for="society-images">{"Images"}</label>
                    <input
                        type="file"
                        id="society-images"
                        accept="image/*"
                        multiple=true
                        onchange={on_pick}
                    />
                </div>

                <div class="upload-list">
                    {
                        images.iter().enumerate().map(|(index, file)| {
                            let remove_at = remove_at.clone();
                            let onclick = Callback::from(move |_: MouseEvent| remove_at.emit(index));
                            html! {
                                <div class="file-chip" key={format!("{}-{}", index, file.name())}>
                                    <span>{ file.name() }</span>
                                    <button type="button" onclick={onclick}>{"✕"}</button>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <button
                    type="button"
                    class="btn-primary"
                    disabled={images.is_empty() || *loading}
                    onclick={on_submit}
                >
                    if *loading {
                        {"Uploading..."}
                    } else {
                        {"Upload"}
                    }
                </button>
            </div>
        </div>
    }
}
