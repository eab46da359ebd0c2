// ============================================================================
// USE ENTRIES - Controlador de los feeds paginados del dashboard
// ============================================================================
// La máquina de estados vive en state/entries.rs; acá sólo va el fetch y
// el cableado con Yew. Un solo request trae ambos scopes; cada operación
// aplica únicamente el recorte del scope que la pidió.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_mounted::use_mounted;
use crate::models::DashboardData;
use crate::services::{ApiClient, DashboardQuery};
use crate::state::entries::{DashboardState, EntryScope, PageResult};
use crate::utils::constants::DASHBOARD_PAGE_LIMIT;

/// Claves de sesión que habilitan el fetch. Hasta que no estén resueltas
/// (gate mediante), toda carga es un no-op que se reintenta al resolverse.
#[derive(Clone, PartialEq, Debug)]
pub struct DashboardKeys {
    pub activity_loc_id: String,
    pub promoter_id: String,
}

pub struct UseEntriesHandle {
    pub state: UseStateHandle<DashboardState>,
    pub refresh: Callback<()>,
    pub load_more: Callback<EntryScope>,
}

fn scope_slice(data: &DashboardData, scope: EntryScope) -> PageResult {
    match scope {
        EntryScope::Today => PageResult {
            items: data.todays_entries.clone(),
            total_count: data.todays_pagination.total_count,
        },
        EntryScope::All => PageResult {
            items: data.total_entries.clone(),
            total_count: data.total_pagination.total_count,
        },
    }
}

#[hook]
pub fn use_entries(keys: Option<DashboardKeys>) -> UseEntriesHandle {
    let state = use_state(|| DashboardState::new(DASHBOARD_PAGE_LIMIT));
    let mounted = use_mounted();

    // Carga inicial: página 1 de ambos scopes, reemplazando lo previo
    let refresh = {
        let state = state.clone();
        let keys = keys.clone();
        let mounted = mounted.clone();
        Callback::from(move |_: ()| {
            let Some(keys) = keys.clone() else {
                log::warn!("⏳ Dashboard sin claves de sesión, carga pospuesta");
                return;
            };

            let mut next = (*state).clone();
            if !next.today.begin_refresh() || !next.all.begin_refresh() {
                return;
            }
            next.initialized = true;
            state.set(next);

            let state = state.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = api
                    .get_dashboard_data(&DashboardQuery {
                        activity_loc_id: keys.activity_loc_id,
                        promoter_id: keys.promoter_id,
                        todays_page: 1,
                        total_page: 1,
                        todays_limit: DASHBOARD_PAGE_LIMIT,
                        total_limit: DASHBOARD_PAGE_LIMIT,
                    })
                    .await;

                if !*mounted.borrow() {
                    return;
                }

                let mut next = (*state).clone();
                match result {
                    Ok(data) => {
                        next.today
                            .apply_first_page(scope_slice(&data, EntryScope::Today));
                        next.all.apply_first_page(scope_slice(&data, EntryScope::All));
                        log::info!(
                            "📊 Dashboard cargado: hoy {}/{}, total {}/{}",
                            next.today.items.len(),
                            next.today.total_count,
                            next.all.items.len(),
                            next.all.total_count
                        );
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando dashboard: {}", e);
                        next.today.fail(e.to_string());
                        next.all.fail(e.to_string());
                    }
                }
                state.set(next);
            });
        })
    };

    // La carga inicial espera a que el gate resuelva las claves y se
    // reintenta sola cuando aparecen (None → Some dispara el efecto)
    {
        let refresh = refresh.clone();
        let state = state.clone();
        use_effect_with(keys.clone(), move |keys| {
            if keys.is_some() && !state.initialized {
                refresh.emit(());
            }
            || ()
        });
    }

    let load_more = {
        let state = state.clone();
        let keys = keys.clone();
        let mounted = mounted.clone();
        Callback::from(move |scope: EntryScope| {
            let Some(keys) = keys.clone() else {
                log::warn!("⏳ load_more sin claves de sesión, ignorado");
                return;
            };

            let mut next = (*state).clone();
            // con un fetch del scope en vuelo esto devuelve None: ni cola
            // ni cancelación, el pedido se ignora
            let Some(page) = next.feed_mut(scope).begin_load_more() else {
                return;
            };

            // el otro scope conserva su página actual en el query
            let (todays_page, total_page) = match scope {
                EntryScope::Today => (page, next.all.page),
                EntryScope::All => (next.today.page, page),
            };
            state.set(next);

            let state = state.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = api
                    .get_dashboard_data(&DashboardQuery {
                        activity_loc_id: keys.activity_loc_id,
                        promoter_id: keys.promoter_id,
                        todays_page,
                        total_page,
                        todays_limit: DASHBOARD_PAGE_LIMIT,
                        total_limit: DASHBOARD_PAGE_LIMIT,
                    })
                    .await;

                if !*mounted.borrow() {
                    return;
                }

                let mut next = (*state).clone();
                match result {
                    Ok(data) => {
                        next.feed_mut(scope)
                            .apply_next_page(page, scope_slice(&data, scope));
                        log::info!(
                            "📄 Página {} aplicada: {} entradas acumuladas",
                            page,
                            next.feed(scope).items.len()
                        );
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando página {}: {}", page, e);
                        next.feed_mut(scope).fail(e.to_string());
                    }
                }
                state.set(next);
            });
        })
    };

    UseEntriesHandle {
        state,
        refresh,
        load_more,
    }
}
