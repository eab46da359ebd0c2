// ============================================================================
// SEARCH DROPDOWN - Typeahead genérico con scroll infinito
// ============================================================================
// Focus y tipeo reinician la paginación (página 1, lista pisada);
// scroll cerca del fondo agrega la página siguiente. El estado vive en
// state/search.rs; el colaborador de fetch llega por props.
// ============================================================================

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_mounted;
use crate::services::ApiError;
use crate::state::search::{near_scroll_end, SearchFeed, SearchItem};

/// Colaborador de fetch: (texto, página) → filas
pub type SearchFetcher =
    Rc<dyn Fn(String, u32) -> Pin<Box<dyn Future<Output = Result<Vec<SearchItem>, ApiError>>>>>;

#[derive(Properties, Clone)]
pub struct SearchDropdownProps {
    pub placeholder: AttrValue,
    pub fetch: SearchFetcher,
    /// Recibe el texto crudo en cada tipeo y el nombre al seleccionar
    pub on_value_change: Callback<String>,
}

impl PartialEq for SearchDropdownProps {
    fn eq(&self, other: &Self) -> bool {
        self.placeholder == other.placeholder
            && Rc::ptr_eq(&self.fetch, &other.fetch)
            && self.on_value_change == other.on_value_change
    }
}

#[function_component(SearchDropdown)]
pub fn search_dropdown(props: &SearchDropdownProps) -> Html {
    let feed = use_state(SearchFeed::new);
    let mounted = use_mounted();

    // Reinicio compartido por focus y cambio de texto
    let restart = {
        let feed = feed.clone();
        let fetch = props.fetch.clone();
        let mounted = mounted.clone();
        Callback::from(move |text: String| {
            let mut next = (*feed).clone();
            let epoch = next.restart(&text);
            feed.set(next);

            let feed = feed.clone();
            let fetch = fetch.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch(text, 1).await;
                if !*mounted.borrow() {
                    return;
                }

                let mut next = (*feed).clone();
                match result {
                    Ok(rows) => {
                        next.apply_restart(epoch, rows);
                    }
                    Err(e) => {
                        // el dropdown se queda con lo que tenía; reintento
                        // manual re-enfocando o tipeando
                        log::error!("❌ Error buscando: {}", e);
                        next.fail(epoch);
                    }
                }
                feed.set(next);
            });
        })
    };

    let onfocus = {
        let feed = feed.clone();
        let restart = restart.clone();
        Callback::from(move |_: FocusEvent| {
            restart.emit(feed.query.clone());
        })
    };

    let oninput = {
        let feed = feed.clone();
        let restart = restart.clone();
        let on_value_change = props.on_value_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();

            // el texto crudo siempre sube, pase lo que pase con el fetch
            on_value_change.emit(text.clone());

            if text.is_empty() {
                let mut next = (*feed).clone();
                next.close_keep_results();
                feed.set(next);
            } else {
                restart.emit(text);
            }
        })
    };

    let onscroll = {
        let feed = feed.clone();
        let fetch = props.fetch.clone();
        let mounted = mounted.clone();
        Callback::from(move |e: Event| {
            let Some(target) = e.target_dyn_into::<Element>() else {
                return;
            };
            if !near_scroll_end(
                target.scroll_top(),
                target.client_height(),
                target.scroll_height(),
            ) {
                return;
            }

            let mut next = (*feed).clone();
            let Some((page, epoch)) = next.begin_append() else {
                return;
            };
            let query = next.query.clone();
            feed.set(next);

            let feed = feed.clone();
            let fetch = fetch.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch(query, page).await;
                if !*mounted.borrow() {
                    return;
                }

                let mut next = (*feed).clone();
                match result {
                    Ok(rows) => {
                        next.apply_append(epoch, page, rows);
                    }
                    Err(e) => {
                        log::error!("❌ Error paginando búsqueda: {}", e);
                        next.fail(epoch);
                    }
                }
                feed.set(next);
            });
        })
    };

    let on_select = {
        let feed = feed.clone();
        let on_value_change = props.on_value_change.clone();
        Callback::from(move |item: SearchItem| {
            let mut next = (*feed).clone();
            next.select(&item);
            feed.set(next);
            on_value_change.emit(item.name);
        })
    };

    // Reset explícito: borra todo y colapsa ya
    let on_clear = {
        let feed = feed.clone();
        let on_value_change = props.on_value_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*feed).clone();
            next.reset();
            feed.set(next);
            on_value_change.emit(String::new());
        })
    };

    html! {
        <div class="search-dropdown">
            <div class="search-input-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder={props.placeholder.clone()}
                    value={feed.query.clone()}
                    onfocus={onfocus}
                    oninput={oninput}
                />
                if !feed.query.is_empty() {
                    <button type="button" class="search-clear" onclick={on_clear}>
                        {"✕"}
                    </button>
                }
            </div>
            if feed.open {
                <div class="search-results" onscroll={onscroll}>
                    {
                        feed.results.iter().enumerate().map(|(index, item)| {
                            let name = item.name.clone();
                            let selected = item.clone();
                            let on_select = on_select.clone();
                            let onclick =
                                Callback::from(move |_: MouseEvent| on_select.emit(selected.clone()));
                            html! {
                                <div
                                    class="search-result-item"
                                    key={format!("{}-{}", index, name)}
                                    onclick={onclick}
                                >
                                    { name }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    if feed.loading {
                        <div class="search-loading">{"Loading..."}</div>
                    }
                    if !feed.loading && feed.results.is_empty() {
                        <div class="search-empty">{"No results found"}</div>
                    }
                </div>
            }
        </div>
    }
}
