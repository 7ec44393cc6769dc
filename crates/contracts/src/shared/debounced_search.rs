//! Удалённый поиск с задержкой: побеждает последний запрос.
//!
//! Ядро не знает о часах. Каждое нажатие получает номер поколения, а UI
//! вызывает [`DebouncedSearch::settle`] с этим номером после паузы ввода.
//! Срабатывает только последнее нажатие. Каждый отправленный запрос несёт
//! порядковый номер, и ответ применяется, только если номер всё ещё последний.

use crate::shared::error::SearchError;

/// Запрос к выполнению с порядковым номером
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct DebouncedSearch<T> {
    min_query_len: usize,
    query: String,
    debounced_query: String,
    keystroke: u64,
    pending: bool,
    seq: u64,
    results: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> DebouncedSearch<T> {
    pub fn new(min_query_len: usize) -> Self {
        Self {
            min_query_len,
            query: String::new(),
            debounced_query: String::new(),
            keystroke: 0,
            pending: false,
            seq: 0,
            results: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Сырой текст запроса. Возвращает поколение нажатия для `settle`.
    pub fn set_query(&mut self, query: impl Into<String>) -> u64 {
        self.query = query.into();
        self.keystroke += 1;
        self.pending = true;
        self.keystroke
    }

    /// Пауза после нажатия `keystroke` истекла. Возвращает запрос, если он нужен.
    ///
    /// Устаревшие нажатия дают `None`. Слишком короткий запрос очищает
    /// результаты и делает недействительными ответы в полёте.
    pub fn settle(&mut self, keystroke: u64) -> Option<SearchTicket> {
        if keystroke != self.keystroke || !self.pending {
            return None;
        }
        self.pending = false;
        self.debounced_query = self.query.clone();
        self.seq += 1;

        let trimmed = self.query.trim();
        if trimmed.chars().count() < self.min_query_len {
            self.results.clear();
            self.loading = false;
            self.error = None;
            return None;
        }

        self.loading = true;
        self.error = None;
        log::debug!("search: dispatch #{} for '{}'", self.seq, trimmed);
        Some(SearchTicket {
            seq: self.seq,
            query: trimmed.to_string(),
        })
    }

    /// Применяет результат запроса. `false`, если ответ устарел и отброшен.
    pub fn complete(&mut self, ticket: &SearchTicket, outcome: Result<Vec<T>, SearchError>) -> bool {
        if ticket.seq != self.seq {
            log::debug!(
                "search: discard stale response #{} for '{}' (latest #{})",
                ticket.seq,
                ticket.query,
                self.seq
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(items) => {
                self.results = items;
                self.error = None;
            }
            Err(e) => {
                log::warn!("search: '{}' failed: {}", ticket.query, e);
                self.results.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    /// Текст ждёт окончания паузы
    pub fn is_settling(&self) -> bool {
        self.pending
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<T> Default for DebouncedSearch<T> {
    fn default() -> Self {
        Self::new(crate::shared::ui_config::DEFAULT_MIN_QUERY_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Имитация таймеров: каждое нажатие взводит свой, срабатывают по порядку
    fn type_and_settle(search: &mut DebouncedSearch<String>, keys: &[&str]) -> Vec<SearchTicket> {
        let timers: Vec<u64> = keys.iter().map(|k| search.set_query(*k)).collect();
        timers.into_iter().filter_map(|t| search.settle(t)).collect()
    }

    #[test]
    fn test_rapid_typing_issues_single_fetch() {
        let mut search = DebouncedSearch::<String>::new(2);
        let fetches = type_and_settle(&mut search, &["a", "ap", "app"]);
        assert_eq!(fetches.len(), 1);
        assert_eq!(fetches[0].query, "app");
        assert!(search.loading());
        assert_eq!(search.debounced_query(), "app");
    }

    #[test]
    fn test_raw_query_updates_before_settle() {
        let mut search = DebouncedSearch::<String>::new(2);
        search.set_query("lap");
        assert_eq!(search.query(), "lap");
        assert_eq!(search.debounced_query(), "");
        assert!(search.is_settling());
    }

    #[test]
    fn test_short_query_clears_without_fetch() {
        let mut search = DebouncedSearch::<String>::new(2);
        let fetches = type_and_settle(&mut search, &["lap"]);
        search.complete(&fetches[0], Ok(vec!["Laptop".to_string()]));
        assert_eq!(search.results().to_vec(), vec!["Laptop".to_string()]);

        let fetches = type_and_settle(&mut search, &[" l "]);
        assert!(fetches.is_empty());
        assert!(search.results().is_empty());
        assert!(!search.loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut search = DebouncedSearch::<String>::new(2);
        let first = type_and_settle(&mut search, &["mou"]).remove(0);
        let second = type_and_settle(&mut search, &["moni"]).remove(0);

        assert!(search.complete(&second, Ok(vec!["Monitor".to_string()])));
        // старый запрос отвечает последним
        assert!(!search.complete(&first, Ok(vec!["Mouse".to_string()])));
        assert_eq!(search.results().to_vec(), vec!["Monitor".to_string()]);
        assert!(!search.loading());
    }

    #[test]
    fn test_stale_response_while_newer_in_flight_keeps_loading() {
        let mut search = DebouncedSearch::<String>::new(2);
        let first = type_and_settle(&mut search, &["mou"]).remove(0);
        let _second = type_and_settle(&mut search, &["moni"]).remove(0);
        assert!(!search.complete(&first, Ok(vec!["Mouse".to_string()])));
        assert!(search.loading());
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_short_query_invalidates_in_flight_fetch() {
        let mut search = DebouncedSearch::<String>::new(2);
        let fetch = type_and_settle(&mut search, &["ssd"]).remove(0);
        type_and_settle(&mut search, &["s"]);
        assert!(!search.complete(&fetch, Ok(vec!["SSD Kingston".to_string()])));
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_failure_stores_error_and_clears_results() {
        let mut search = DebouncedSearch::<String>::new(2);
        let ok = type_and_settle(&mut search, &["bat"]).remove(0);
        search.complete(&ok, Ok(vec!["Battery".to_string()]));

        let failing = type_and_settle(&mut search, &["batt"]).remove(0);
        assert!(search.complete(&failing, Err(SearchError::Status(503))));
        assert!(search.results().is_empty());
        assert_eq!(search.error(), Some("Server responded with status 503"));

        // новый ввод сбрасывает ошибку
        let retry = type_and_settle(&mut search, &["batt"]).remove(0);
        assert_eq!(search.error(), None);
        assert_eq!(retry.query, "batt");
    }

    #[test]
    fn test_settle_twice_is_noop() {
        let mut search = DebouncedSearch::<String>::new(2);
        let k = search.set_query("abc");
        assert!(search.settle(k).is_some());
        assert!(search.settle(k).is_none());
    }
}
