// ============================================================================
// DASHBOARD - Entradas de hoy / totales con scroll incremental
// ============================================================================

use web_sys::Element;
use yew::prelude::*;

use crate::components::AppHeader;
use crate::hooks::{use_entries, use_session, DashboardKeys};
use crate::models::Entry;
use crate::state::entries::{EntryFeed, EntryScope};
use crate::state::search::near_scroll_end;
use crate::state::session::Route;

#[derive(Properties, PartialEq)]
pub struct DashboardScreenProps {
    pub navigate: Callback<Route>,
}

#[function_component(DashboardScreen)]
pub fn dashboard_screen(props: &DashboardScreenProps) -> Html {
    let session = use_session();
    let active_tab = use_state(|| EntryScope::Today);

    // Hasta que el gate resuelva ambos documentos no hay claves y el
    // hook pospone toda carga
    let keys = match (&session.auth, &session.location) {
        (Some(auth), Some(location)) if location.has_location() => Some(DashboardKeys {
            activity_loc_id: location.activity_loc_id.clone(),
            promoter_id: auth.promoter_id.clone(),
        }),
        _ => None,
    };
    let entries = use_entries(keys);

    let society_name = session
        .location
        .as_ref()
        .map(|l| l.activity_loc_name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Society".to_string());

    let select_today = {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(EntryScope::Today))
    };
    let select_all = {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(EntryScope::All))
    };

    // Scroll cerca del fondo de la lista = pedir la página siguiente.
    // Con un fetch en vuelo el controlador lo ignora.
    let onscroll = {
        let load_more = entries.load_more.clone();
        let scope = *active_tab;
        Callback::from(move |e: Event| {
            let Some(target) = e.target_dyn_into::<Element>() else {
                return;
            };
            if near_scroll_end(
                target.scroll_top(),
                target.client_height(),
                target.scroll_height(),
            ) {
                load_more.emit(scope);
            }
        })
    };

    let on_load_more = {
        let load_more = entries.load_more.clone();
        let scope = *active_tab;
        Callback::from(move |_: MouseEvent| load_more.emit(scope))
    };

    let on_retry = {
        let refresh = entries.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let on_create = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::CreateEntry))
    };

    let feed = entries.state.feed(*active_tab).clone();
    let today_count = entries.state.today.total_count;

    html! {
        <div class="dashboard-screen">
            <AppHeader navigate={props.navigate.clone()} />

            <div class="dashboard-hero">
                <h1>{ society_name }</h1>
            </div>

            <div class="dashboard-count-card">
                <p>{"Today's Entries"}</p>
                <p class="dashboard-count">{ today_count }</p>
            </div>

            <div class="dashboard-tabs">
                <button
                    type="button"
                    class={classes!("tab", (*active_tab == EntryScope::Today).then_some("tab-active"))}
                    onclick={select_today}
                >
                    {"Today's Entries"}
                </button>
                <button
                    type="button"
                    class={classes!("tab", (*active_tab == EntryScope::All).then_some("tab-active"))}
                    onclick={select_all}
                >
                    {"Total Entries"}
                </button>
            </div>

            <div class="entry-list" onscroll={onscroll}>
                { render_feed(&feed, on_load_more, on_retry) }
            </div>

            <button type="button" class="fab" onclick={on_create}>
                {"+"}
            </button>
        </div>
    }
}

fn render_feed(feed: &EntryFeed, on_load_more: Callback<MouseEvent>, on_retry: Callback<MouseEvent>) -> Html {
    html! {
        <>
            {
                feed.items.iter().map(render_entry).collect::<Html>()
            }
            if feed.items.is_empty() && !feed.loading && feed.error.is_none() {
                <p class="entry-empty">{"No entries available"}</p>
            }
            if feed.loading {
                <p class="entry-loading">{"Loading..."}</p>
            }
            // error no fatal: lo acumulado sigue visible
            if let Some(error) = feed.error.clone() {
                <div class="entry-error">
                    <p>{ error }</p>
                    if feed.items.is_empty() {
                        <button type="button" class="btn-link" onclick={on_retry}>
                            {"Retry"}
                        </button>
                    }
                </div>
            }
            // tras una falla reintenta la MISMA página (el cursor no avanzó)
            if feed.has_more() && !feed.loading && !feed.items.is_empty() {
                <button type="button" class="btn-link entry-load-more" onclick={on_load_more}>
                    {"Load more"}
                </button>
            }
        </>
    }
}

fn render_entry(entry: &Entry) -> Html {
    let name = entry.customer_name.clone().unwrap_or_else(|| "—".to_string());
    html! {
        <div class="entry-card" key={entry.id.clone()}>
            <p class="entry-name">{ name }</p>
            if let Some(address) = entry.order_address.clone() {
                <p class="entry-address">{ address }</p>
            }
            <div class="entry-meta">
                if let Some(order_id) = entry.order_id.clone() {
                    <span class="entry-order">{ format!("Order: {}", order_id) }</span>
                }
                if let Some(cashback) = entry.cashback_amount {
                    <span class="entry-cashback">{ format!("₹{}", cashback) }</span>
                }
            </div>
        </div>
    }
}
