// ============================================================================
// SESSION CONTEXT - Único dueño de los documentos persistidos
// ============================================================================
// Reemplaza el estado ambiente leído desde pantallas sueltas: un solo
// provider con init (carga desde storage al montar) y teardown (logout).
// ============================================================================

use yew::prelude::*;

use crate::models::{AuthData, LocationData};
use crate::state::session::{classify, SessionPhase};
use crate::utils::storage;

#[derive(Clone)]
pub struct SessionHandle {
    pub auth: Option<AuthData>,
    pub location: Option<LocationData>,
    /// false hasta terminar la carga inicial desde storage
    pub ready: bool,
    pub login: Callback<AuthData>,
    pub set_location: Callback<LocationData>,
    pub reset_location: Callback<()>,
    pub logout: Callback<()>,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        // los callbacks se recrean por render; la identidad del contexto
        // son los documentos y el flag de carga
        self.auth == other.auth && self.location == other.location && self.ready == other.ready
    }
}

impl SessionHandle {
    pub fn phase(&self) -> SessionPhase {
        classify(self.auth.as_ref(), self.location.as_ref())
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let auth = use_state(|| None::<AuthData>);
    let location = use_state(|| None::<LocationData>);
    let ready = use_state(|| false);

    // Init: carga inicial de los dos documentos
    {
        let auth = auth.clone();
        let location = location.clone();
        let ready = ready.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let stored_auth = storage::get_auth_data().await;
                let stored_location = storage::get_loc_data().await;

                match &stored_auth {
                    Some(data) => {
                        log::info!("✅ Sesión restaurada: promotor {}", data.promoter_id)
                    }
                    None => log::info!("ℹ️ Sin sesión guardada"),
                }

                auth.set(stored_auth);
                location.set(stored_location);
                ready.set(true);
            });
            || ()
        });
    }

    let login = {
        let auth = auth.clone();
        Callback::from(move |data: AuthData| {
            let auth = auth.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if storage::store_auth_data(&data).await {
                    log::info!("🔐 Login: promotor {}", data.promoter_id);
                    auth.set(Some(data));
                } else {
                    log::error!("❌ No se pudo persistir authData");
                }
            });
        })
    };

    let set_location = {
        let location = location.clone();
        Callback::from(move |data: LocationData| {
            let location = location.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if storage::store_loc_data(&data).await {
                    log::info!("📍 Ubicación confirmada: {}", data.activity_loc_name);
                    location.set(Some(data));
                } else {
                    log::error!("❌ No se pudo persistir locData");
                }
            });
        })
    };

    // Reset-settings: sólo destruye el documento de ubicación
    let reset_location = {
        let location = location.clone();
        Callback::from(move |_| {
            let location = location.clone();
            wasm_bindgen_futures::spawn_local(async move {
                storage::clear_loc_data().await;
                log::info!("🔄 Reset de ubicación");
                location.set(None);
            });
        })
    };

    // Teardown completo
    let logout = {
        let auth = auth.clone();
        let location = location.clone();
        Callback::from(move |_| {
            let auth = auth.clone();
            let location = location.clone();
            wasm_bindgen_futures::spawn_local(async move {
                storage::clear_loc_data().await;
                storage::clear_auth_data().await;
                log::info!("👋 Logout");
                location.set(None);
                auth.set(None);
            });
        })
    };

    let handle = SessionHandle {
        auth: (*auth).clone(),
        location: (*location).clone(),
        ready: *ready,
        login,
        set_location,
        reset_location,
        logout,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session requiere un SessionProvider")
}
