// ============================================================================
// SEARCH FEED - Estado del typeahead incremental
// ============================================================================
// Reiniciar (focus / tipeo) pisa la lista; scroll al fondo agrega páginas.
// El epoch descarta respuestas viejas: el último reinicio gana.
// ============================================================================

use crate::utils::constants::NEAR_END_MARGIN_PX;

/// Fila visible del dropdown
#[derive(Clone, Debug, PartialEq)]
pub struct SearchItem {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchFeed {
    pub query: String,
    pub page: u32,
    pub results: Vec<SearchItem>,
    pub open: bool,
    pub loading: bool,
    pub has_more: bool,
    epoch: u32,
}

impl SearchFeed {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: Vec::new(),
            open: false,
            loading: false,
            has_more: true,
            epoch: 0,
        }
    }

    /// Reinicia la paginación para un texto (focus o cambio de texto).
    /// Devuelve el epoch que identifica al fetch que se va a disparar.
    pub fn restart(&mut self, query: &str) -> u32 {
        self.query = query.to_string();
        self.page = 1;
        self.has_more = true;
        self.loading = true;
        self.epoch += 1;
        self.epoch
    }

    /// Aplica el resultado de un reinicio: reemplaza, no mezcla.
    /// Respuestas de epochs viejos se descartan (false).
    pub fn apply_restart(&mut self, epoch: u32, rows: Vec<SearchItem>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.has_more = !rows.is_empty();
        self.results = rows;
        self.page = 1;
        self.loading = false;
        self.open = true;
        true
    }

    /// Reserva la página siguiente para el scroll infinito.
    /// None si hay un fetch en vuelo o la última página vino vacía.
    pub fn begin_append(&mut self) -> Option<(u32, u32)> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        Some((self.page + 1, self.epoch))
    }

    /// Agrega una página en orden de respuesta, sin dedup (el backend no
    /// repite filas dentro de una misma búsqueda).
    pub fn apply_append(&mut self, epoch: u32, page: u32, rows: Vec<SearchItem>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.has_more = !rows.is_empty();
        self.results.extend(rows);
        self.page = page;
        self.loading = false;
        true
    }

    /// Error de fetch: la lista visible y `open` quedan como estaban.
    pub fn fail(&mut self, epoch: u32) {
        if epoch == self.epoch {
            self.loading = false;
        }
    }

    /// Texto vacío: colapsa sin borrar resultados (evita el flash de
    /// "sin resultados" a mitad de edición) e invalida fetchs en vuelo.
    pub fn close_keep_results(&mut self) {
        self.query.clear();
        self.open = false;
        self.loading = false;
        self.epoch += 1;
    }

    /// Selección: fija el texto visible, cierra y vacía la lista de
    /// respaldo. El próximo focus arranca limpio.
    pub fn select(&mut self, item: &SearchItem) {
        self.query = item.name.clone();
        self.results.clear();
        self.page = 1;
        self.open = false;
        self.loading = false;
        self.has_more = true;
        self.epoch += 1;
    }

    /// Reset explícito: borra todo y colapsa ya.
    pub fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.page = 1;
        self.open = false;
        self.loading = false;
        self.has_more = true;
        self.epoch += 1;
    }
}

impl Default for SearchFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// ¿El scroll quedó a menos del margen del final del contenido?
pub fn near_scroll_end(scroll_top: i32, client_height: i32, scroll_height: i32) -> bool {
    scroll_top + client_height >= scroll_height - NEAR_END_MARGIN_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(names: &[&str]) -> Vec<SearchItem> {
        names
            .iter()
            .map(|name| SearchItem {
                id: Some(format!("id-{}", name)),
                name: name.to_string(),
            })
            .collect()
    }

    fn names(feed: &SearchFeed) -> Vec<&str> {
        feed.results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn restart_replaces_results_and_opens() {
        let mut feed = SearchFeed::new();
        let epoch = feed.restart("gr");
        assert!(feed.apply_restart(epoch, rows(&["Green Valley", "Green Park"])));
        assert!(feed.open);
        assert_eq!(names(&feed), vec!["Green Valley", "Green Park"]);

        let epoch = feed.restart("gre");
        assert!(feed.apply_restart(epoch, rows(&["Green Valley"])));
        assert_eq!(names(&feed), vec!["Green Valley"]);
        assert_eq!(feed.page, 1);
    }

    #[test]
    fn last_restart_wins_over_stale_responses() {
        let mut feed = SearchFeed::new();
        let first = feed.restart("ac");
        let second = feed.restart("ace");

        // la respuesta de "ace" llega primero
        assert!(feed.apply_restart(second, rows(&["Ace Towers"])));
        // la de "ac" llega tarde y se descarta
        assert!(!feed.apply_restart(first, rows(&["Acacia", "Acropolis"])));

        assert_eq!(names(&feed), vec!["Ace Towers"]);
        assert_eq!(feed.query, "ace");
    }

    #[test]
    fn scroll_appends_in_response_order() {
        let mut feed = SearchFeed::new();
        let epoch = feed.restart("");
        feed.apply_restart(epoch, rows(&["A", "B"]));

        let (page, epoch) = feed.begin_append().expect("append");
        assert_eq!(page, 2);
        assert!(feed.apply_append(epoch, page, rows(&["C", "D"])));
        assert_eq!(names(&feed), vec!["A", "B", "C", "D"]);
        assert_eq!(feed.page, 2);
    }

    #[test]
    fn append_is_ignored_while_loading() {
        let mut feed = SearchFeed::new();
        let epoch = feed.restart("");
        feed.apply_restart(epoch, rows(&["A"]));

        assert!(feed.begin_append().is_some());
        // scroll repetido con el fetch en vuelo
        assert!(feed.begin_append().is_none());
    }

    #[test]
    fn has_more_flips_on_empty_page_and_resets_on_restart() {
        let mut feed = SearchFeed::new();
        let epoch = feed.restart("gr");
        feed.apply_restart(epoch, rows(&["A"]));
        assert!(feed.has_more);

        let (page, epoch) = feed.begin_append().expect("append");
        feed.apply_append(epoch, page, Vec::new());
        assert!(!feed.has_more);
        assert!(feed.begin_append().is_none());

        // sólo un reinicio lo vuelve a habilitar
        feed.restart("gre");
        assert!(feed.has_more);
    }

    #[test]
    fn failed_fetch_keeps_visible_state() {
        let mut feed = SearchFeed::new();
        let epoch = feed.restart("gr");
        feed.apply_restart(epoch, rows(&["A", "B"]));

        let (_, epoch) = feed.begin_append().expect("append");
        feed.fail(epoch);

        assert_eq!(names(&feed), vec!["A", "B"]);
        assert!(feed.open);
        assert!(!feed.loading);
    }

    #[test]
    fn select_sets_text_closes_and_clears_backing_list() {
        let mut feed = SearchFeed::new();
        let epoch = feed.restart("gr");
        feed.apply_restart(epoch, rows(&["Green Valley"]));

        let item = feed.results[0].clone();
        feed.select(&item);

        assert_eq!(feed.query, "Green Valley");
        assert!(!feed.open);
        assert!(feed.results.is_empty());
    }

    #[test]
    fn empty_text_closes_without_clearing_and_drops_in_flight() {
        let mut feed = SearchFeed::new();
        let epoch = feed.restart("gr");
        feed.apply_restart(epoch, rows(&["A"]));

        let stale = feed.restart("gre");
        feed.close_keep_results();

        assert!(!feed.open);
        assert_eq!(names(&feed), vec!["A"]);
        // la respuesta del fetch en vuelo ya no reabre el dropdown
        assert!(!feed.apply_restart(stale, rows(&["B"])));
        assert!(!feed.open);
    }

    #[test]
    fn explicit_reset_clears_everything() {
        let mut feed = SearchFeed::new();
        let epoch = feed.restart("gr");
        feed.apply_restart(epoch, rows(&["A"]));

        feed.reset();
        assert!(feed.results.is_empty());
        assert!(feed.query.is_empty());
        assert!(!feed.open);
        assert!(feed.has_more);
    }

    #[test]
    fn near_scroll_end_uses_fixed_margin() {
        // contenido 1000px, viewport 300px
        assert!(near_scroll_end(700, 300, 1000));
        assert!(near_scroll_end(700 - NEAR_END_MARGIN_PX, 300, 1000));
        assert!(!near_scroll_end(700 - NEAR_END_MARGIN_PX - 1, 300, 1000));
    }
}
