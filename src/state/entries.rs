// ============================================================================
// ENTRY FEEDS - Colecciones paginadas del dashboard
// ============================================================================
// Dos cursores independientes (hoy / total) sobre el mismo endpoint.
// Máquina de estados pura; el fetch vive en hooks/use_entries.rs.
// ============================================================================

use crate::models::Entry;

/// Página normalizada de un scope, ya recortada de la respuesta compartida
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PageResult {
    pub items: Vec<Entry>,
    pub total_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryScope {
    Today,
    All,
}

/// Colección paginada de un scope, acumulada página a página.
/// Invariante: nunca hay dos items con el mismo id.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryFeed {
    pub items: Vec<Entry>,
    pub page: u32,
    pub limit: u32,
    pub total_count: u32,
    pub loading: bool,
    pub error: Option<String>,
}

impl EntryFeed {
    pub fn new(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            limit,
            total_count: 0,
            loading: false,
            error: None,
        }
    }

    /// true mientras el servidor reporte más entradas que las acumuladas.
    /// Se recalcula con el totalCount de la última respuesta.
    pub fn has_more(&self) -> bool {
        (self.items.len() as u32) < self.total_count
    }

    /// Marca el inicio de la carga de la primera página.
    /// false si ya hay un fetch de este scope en vuelo.
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Reserva la página siguiente. Devuelve la página a pedir SIN avanzar
    /// el cursor (avanza recién al aplicar el resultado, así un fetch
    /// fallido se puede reintentar con la misma página). None si ya hay un
    /// fetch en vuelo o no quedan más entradas.
    pub fn begin_load_more(&mut self) -> Option<u32> {
        if self.loading || !self.has_more() {
            return None;
        }
        self.loading = true;
        Some(self.page + 1)
    }

    /// Primera página: reemplaza lo acumulado.
    pub fn apply_first_page(&mut self, result: PageResult) {
        self.items.clear();
        for entry in result.items {
            self.push_unique(entry);
        }
        self.page = 1;
        self.total_count = result.total_count;
        self.loading = false;
        self.error = None;
    }

    /// Página siguiente: agrega sólo ids nuevos, en orden de respuesta,
    /// detrás de lo ya acumulado. Un id repetido conserva su primera
    /// posición. El totalCount del servidor pisa al anterior.
    pub fn apply_next_page(&mut self, page: u32, result: PageResult) {
        for entry in result.items {
            self.push_unique(entry);
        }
        self.page = page;
        self.total_count = result.total_count;
        self.loading = false;
        self.error = None;
    }

    /// Un fetch fallido no toca lo acumulado ni el cursor.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    // A esta escala el escaneo lineal alcanza; con listas enormes iría
    // un mapa id → posición.
    fn push_unique(&mut self, entry: Entry) {
        if !self.items.iter().any(|e| e.id == entry.id) {
            self.items.push(entry);
        }
    }
}

/// Los dos feeds independientes del dashboard
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub today: EntryFeed,
    pub all: EntryFeed,
    /// true desde que se disparó la carga inicial
    pub initialized: bool,
}

impl DashboardState {
    pub fn new(limit: u32) -> Self {
        Self {
            today: EntryFeed::new(limit),
            all: EntryFeed::new(limit),
            initialized: false,
        }
    }

    pub fn feed(&self, scope: EntryScope) -> &EntryFeed {
        match scope {
            EntryScope::Today => &self.today,
            EntryScope::All => &self.all,
        }
    }

    pub fn feed_mut(&mut self, scope: EntryScope) -> &mut EntryFeed {
        match scope {
            EntryScope::Today => &mut self.today,
            EntryScope::All => &mut self.all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> Entry {
        Entry {
            id: id.to_string(),
            customer_name: Some(format!("customer {}", id)),
            ..Default::default()
        }
    }

    fn entries(ids: &[&str]) -> Vec<Entry> {
        ids.iter().map(|id| entry(id)).collect()
    }

    fn ids(feed: &EntryFeed) -> Vec<&str> {
        feed.items.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn first_page_replaces_accumulated_items() {
        let mut feed = EntryFeed::new(10);
        assert!(feed.begin_refresh());
        feed.apply_first_page(PageResult {
            items: entries(&["1", "2"]),
            total_count: 5,
        });
        assert_eq!(ids(&feed), vec!["1", "2"]);

        assert!(feed.begin_refresh());
        feed.apply_first_page(PageResult {
            items: entries(&["3"]),
            total_count: 1,
        });
        assert_eq!(ids(&feed), vec!["3"]);
        assert_eq!(feed.page, 1);
    }

    #[test]
    fn merge_is_duplicate_free_and_keeps_first_seen_position() {
        let mut feed = EntryFeed::new(2);
        feed.begin_refresh();
        feed.apply_first_page(PageResult {
            items: entries(&["1", "2"]),
            total_count: 4,
        });

        // la página 2 repite el id "2" por accidente
        let page = feed.begin_load_more().expect("page");
        feed.apply_next_page(
            page,
            PageResult {
                items: entries(&["2", "3", "4"]),
                total_count: 4,
            },
        );

        assert_eq!(ids(&feed), vec!["1", "2", "3", "4"]);
        assert_eq!(feed.page, 2);
    }

    #[test]
    fn one_in_flight_fetch_per_scope() {
        let mut feed = EntryFeed::new(10);
        feed.begin_refresh();
        feed.apply_first_page(PageResult {
            items: entries(&["1"]),
            total_count: 3,
        });

        // segundo load_more mientras el primero sigue en vuelo: ignorado
        assert_eq!(feed.begin_load_more(), Some(2));
        assert_eq!(feed.begin_load_more(), None);

        feed.apply_next_page(
            2,
            PageResult {
                items: entries(&["2"]),
                total_count: 3,
            },
        );
        assert_eq!(feed.begin_load_more(), Some(3));
    }

    #[test]
    fn load_more_scenario_reaches_server_total() {
        // dashboard: totalCount 12 con 10 items, luego 2 más únicos
        let mut feed = EntryFeed::new(10);
        feed.begin_refresh();
        feed.apply_first_page(PageResult {
            items: entries(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]),
            total_count: 12,
        });
        assert!(feed.has_more());

        let page = feed.begin_load_more().expect("page");
        feed.apply_next_page(
            page,
            PageResult {
                items: entries(&["11", "12"]),
                total_count: 12,
            },
        );

        assert_eq!(feed.items.len(), 12);
        assert!(!feed.has_more());
        assert_eq!(feed.begin_load_more(), None);
    }

    #[test]
    fn failed_page_leaves_state_intact_and_is_retryable() {
        let mut feed = EntryFeed::new(10);
        feed.begin_refresh();
        feed.apply_first_page(PageResult {
            items: entries(&["1", "2"]),
            total_count: 10,
        });

        let page = feed.begin_load_more().expect("page");
        assert_eq!(page, 2);
        feed.fail("Network error: timeout".to_string());

        // lo acumulado queda intacto y el cursor no avanzó
        assert_eq!(ids(&feed), vec!["1", "2"]);
        assert_eq!(feed.page, 1);
        assert_eq!(feed.error.as_deref(), Some("Network error: timeout"));

        // el reintento pide la misma página
        assert_eq!(feed.begin_load_more(), Some(2));
    }

    #[test]
    fn server_total_count_wins_over_accumulation() {
        let mut feed = EntryFeed::new(10);
        feed.begin_refresh();
        feed.apply_first_page(PageResult {
            items: entries(&["1", "2", "3"]),
            total_count: 9,
        });

        // el servidor bajó el total entre páginas: last-write-wins
        let page = feed.begin_load_more().expect("page");
        feed.apply_next_page(
            page,
            PageResult {
                items: entries(&["4"]),
                total_count: 4,
            },
        );
        assert_eq!(feed.total_count, 4);
        assert!(!feed.has_more());
    }

    #[test]
    fn scopes_are_independent() {
        let mut dashboard = DashboardState::new(10);
        dashboard.today.begin_refresh();
        dashboard.today.apply_first_page(PageResult {
            items: entries(&["1"]),
            total_count: 5,
        });
        dashboard.all.begin_refresh();
        dashboard.all.apply_first_page(PageResult {
            items: entries(&["1", "2"]),
            total_count: 2,
        });

        // avanzar "today" no reinicia ni toca "all"
        let page = dashboard.today.begin_load_more().expect("page");
        dashboard.today.apply_next_page(
            page,
            PageResult {
                items: entries(&["2", "3"]),
                total_count: 5,
            },
        );

        assert_eq!(dashboard.today.page, 2);
        assert_eq!(dashboard.all.page, 1);
        assert_eq!(ids(&dashboard.all), vec!["1", "2"]);
        assert!(!dashboard.all.loading);
    }
}
