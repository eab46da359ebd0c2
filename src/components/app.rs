// ============================================================================
// APP - Render condicional por ruta + session gate
// ============================================================================
// Sin crate de router: la ruta es estado y el gate la corrige ante cada
// cambio de ruta o de documentos persistidos.
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_session, SessionProvider};
use crate::state::session::{gate, Route};
use super::{
    CreateEntryScreen, DashboardScreen, LocationScreen, LoginScreen, OtpScreen,
    UploadImagesScreen,
};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let session = use_session();
    let route = use_state(|| Route::Login);

    // El gate se re-evalúa ante cambios de ruta o de los documentos.
    // Recién corre cuando el storage terminó de cargar, para no echar a
    // un usuario logueado durante el arranque.
    {
        let route = route.clone();
        let session = session.clone();
        use_effect_with(
            (
                (*route).clone(),
                session.auth.clone(),
                session.location.clone(),
                session.ready,
            ),
            move |(current, _, _, ready)| {
                if *ready {
                    if let Some(target) = gate(session.phase(), current) {
                        log::info!("🧭 Gate: {:?} → {:?}", current, target);
                        route.set(target);
                    }
                }
                || ()
            },
        );
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| route.set(target))
    };

    if !session.ready {
        return html! { <div class="splash">{"Loading..."}</div> };
    }

    match (*route).clone() {
        Route::Login => html! { <LoginScreen navigate={navigate} /> },
        Route::Otp { phone } => html! { <OtpScreen phone={phone} navigate={navigate} /> },
        Route::Location => html! { <LocationScreen /> },
        Route::Dashboard => html! { <DashboardScreen navigate={navigate} /> },
        Route::CreateEntry => html! { <CreateEntryScreen navigate={navigate} /> },
        Route::UploadImages => html! { <UploadImagesScreen navigate={navigate} /> },
    }
}
