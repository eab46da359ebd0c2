// ============================================================================
// LOCATION SCREEN - Selección única de sociedad
// ============================================================================
// Typeahead sobre getAllActivityLocations. Confirmar persiste locData;
// el gate lleva al dashboard. La selección no se cambia después.
// ============================================================================

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use crate::components::search_dropdown::{SearchDropdown, SearchFetcher};
use crate::components::AppHeader;
use crate::hooks::use_session;
use crate::models::{ActivityLocation, LocationData};
use crate::services::{ApiClient, ApiError, SocietyQuery};
use crate::state::search::SearchItem;
use crate::state::session::Route;
use crate::utils::constants::SEARCH_PAGE_LIMIT;

#[function_component(LocationScreen)]
pub fn location_screen() -> Html {
    let session = use_session();
    let selected = use_state(|| None::<ActivityLocation>);
    // sociedades vistas en el dropdown, indexadas por nombre normalizado
    let known_societies = use_mut_ref(HashMap::<String, ActivityLocation>::new);

    let project_id = session
        .auth
        .as_ref()
        .map(|a| a.project_id.clone())
        .unwrap_or_default();
    let city_id = session
        .auth
        .as_ref()
        .map(|a| a.city_id.clone())
        .unwrap_or_default();
    let city_name = session
        .auth
        .as_ref()
        .map(|a| a.city_name.clone())
        .unwrap_or_default();

    // Colaborador de fetch del typeahead: pagina el endpoint y "tee-a"
    // las filas completas para resolver la selección por nombre
    let fetch: SearchFetcher = {
        let known_societies = known_societies.clone();
        let project_id = project_id.clone();
        let city_id = city_id.clone();
        Rc::new(move |query: String, page: u32| {
            let known_societies = known_societies.clone();
            let project_id = project_id.clone();
            let city_id = city_id.clone();
            let future = async move {
                let api = ApiClient::new();
                let response = api
                    .get_activity_locations(&SocietyQuery {
                        limit: SEARCH_PAGE_LIMIT,
                        page,
                        search: query,
                        project_id,
                        city_id,
                    })
                    .await?;

                let mut rows = Vec::with_capacity(response.data.len());
                for society in response.data {
                    known_societies
                        .borrow_mut()
                        .insert(society.name.to_lowercase(), society.clone());
                    rows.push(SearchItem {
                        id: Some(society.id.clone()),
                        name: society.name,
                    });
                }
                Ok(rows)
            };
            Box::pin(future) as Pin<Box<dyn Future<Output = Result<Vec<SearchItem>, ApiError>>>>
        })
    };

    // El dropdown sube texto crudo y nombres elegidos por igual; una
    // sociedad queda seleccionada cuando el texto coincide por nombre
    let on_value_change = {
        let selected = selected.clone();
        let known_societies = known_societies.clone();
        Callback::from(move |value: String| {
            let found = known_societies
                .borrow()
                .get(&value.to_lowercase())
                .cloned();
            if let Some(society) = found {
                log::info!("🏢 Sociedad candidata: {}", society.name);
                selected.set(Some(society));
            }
        })
    };

    let on_confirm = {
        let selected = selected.clone();
        let set_location = session.set_location.clone();
        let city_id = city_id.clone();
        let city_name = city_name.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(society) = (*selected).clone() else {
                if let Some(win) = window() {
                    let _ = win
                        .alert_with_message("Please select your society before continuing.");
                }
                return;
            };

            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message(&format!(
                        "You've selected {}. This cannot be changed later.",
                        society.name
                    ))
                    .ok()
                })
                .unwrap_or(false);

            if confirmed {
                set_location.emit(LocationData::from_selection(&society, &city_id, &city_name));
            }
        })
    };

    // en esta pantalla el header sólo ofrece logout
    let navigate_noop = Callback::from(|_: Route| {});

    html! {
        <div class="location-screen">
            <AppHeader navigate={navigate_noop} location_screen={true} />

            <div class="location-body">
                <h1>{"Select Your Location"}</h1>
                <p>{"Please select your society below"}</p>
                <p class="location-note">{"Note: Selection cannot be changed later"}</p>

                <div class="location-card">
                    <h2>{"Society"}</h2>
                    <SearchDropdown
                        placeholder="Search for your society..."
                        fetch={fetch}
                        on_value_change={on_value_change}
                    />
                </div>

                if let Some(society) = (*selected).clone() {
                    <div class="location-summary">
                        <p>{"Your Selection:"}</p>
                        <p class="location-summary-name">{ society.name }</p>
                        if !city_name.is_empty() {
                            <p class="location-summary-city">{ city_name.clone() }</p>
                        }
                    </div>
                }
            </div>

            <div class="location-footer">
                <button
                    type="button"
                    class="btn-primary"
                    disabled={selected.is_none()}
                    onclick={on_confirm}
                >
                    {"Confirm Selection"}
                </button>
            </div>
        </div>
    }
}
