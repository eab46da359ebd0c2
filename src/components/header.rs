use web_sys::window;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::state::session::Route;

#[derive(Properties, PartialEq)]
pub struct AppHeaderProps {
    pub navigate: Callback<Route>,
    /// En la pantalla de ubicación el menú se reduce a logout
    #[prop_or_default]
    pub location_screen: bool,
    #[prop_or_default]
    pub show_home: bool,
}

#[function_component(AppHeader)]
pub fn app_header(props: &AppHeaderProps) -> Html {
    let session = use_session();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_home = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Dashboard))
    };

    let on_upload_images = {
        let navigate = props.navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            navigate.emit(Route::UploadImages);
        })
    };

    // Reset-settings sólo borra el documento de ubicación; el gate manda
    // de vuelta a la selección
    let on_reset_settings = {
        let reset_location = session.reset_location.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to reset settings?")
                        .ok()
                })
                .unwrap_or(false);
            if confirmed {
                reset_location.emit(());
            }
        })
    };

    let on_logout = {
        let logout = session.logout.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            let confirmed = window()
                .and_then(|w| w.confirm_with_message("Are you sure you want to logout?").ok())
                .unwrap_or(false);
            if confirmed {
                logout.emit(());
            }
        })
    };

    html! {
        <header class="app-header">
            <div class="app-logo">
                <span class="logo-main">{"DIRECT"}</span>
                <span class="logo-accent">{"X"}</span>
            </div>
            if props.location_screen {
                <button type="button" class="header-logout" onclick={on_logout}>
                    {"Logout"}
                </button>
            } else {
                <div class="header-actions">
                    if props.show_home {
                        <button type="button" class="header-home" onclick={on_home}>
                            {"🏠"}
                        </button>
                    }
                    <button type="button" class="header-menu" onclick={toggle_menu}>
                        {"☰"}
                    </button>
                    if *menu_open {
                        <div class="header-dropdown">
                            <button type="button" onclick={on_reset_settings}>
                                {"Reset Settings"}
                            </button>
                            <button type="button" onclick={on_upload_images}>
                                {"Society Images Upload"}
                            </button>
                            <button type="button" onclick={on_logout}>
                                {"Logout"}
                            </button>
                        </div>
                    }
                </div>
            }
        </header>
    }
}
