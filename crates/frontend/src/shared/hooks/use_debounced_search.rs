//! Hook поиска с задержкой поверх `contracts::shared::debounced_search`.
//!
//! ```rust,ignore
//! let search = use_debounced_search(|q: String| async move {
//!     product_api::search_products(&q).await
//! });
//! <input on:input=move |ev| search.set_query.run(event_target_value(&ev)) />
//! {move || search.results().len()}
//! ```

use crate::shared::config::ui_config;
use contracts::shared::debounced_search::DebouncedSearch;
use contracts::shared::error::SearchError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::future::Future;

pub struct DebouncedSearchHandle<T: Send + Sync + 'static> {
    pub state: RwSignal<DebouncedSearch<T>>,
    pub set_query: Callback<String>,
}

impl<T: Send + Sync + 'static> Clone for DebouncedSearchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DebouncedSearchHandle<T> {}

impl<T: Clone + Send + Sync + 'static> DebouncedSearchHandle<T> {
    pub fn query(&self) -> String {
        self.state.with(|s| s.query().to_string())
    }

    pub fn results(&self) -> Vec<T> {
        self.state.with(|s| s.results().to_vec())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }
}

/// Создаёт состояние поиска на время жизни компонента.
///
/// После размонтирования сигнал удалён, поздние ответы игнорируются
/// (`try_update` возвращает `None`).
pub fn use_debounced_search<T, F, Fut>(search_fn: F) -> DebouncedSearchHandle<T>
where
    T: Send + Sync + 'static,
    F: Fn(String) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, SearchError>> + 'static,
{
    let settings = &ui_config().search;
    let delay_ms = settings.debounce_ms;
    let state = RwSignal::new(DebouncedSearch::new(settings.min_query_len));

    let set_query = Callback::new(move |query: String| {
        let Some(keystroke) = state.try_update(|s| s.set_query(query)) else {
            return;
        };
        let search_fn = search_fn.clone();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let Some(ticket) = state.try_update(|s| s.settle(keystroke)).flatten() else {
                return;
            };
            let outcome = search_fn(ticket.query.clone()).await;
            state.try_update(|s| s.complete(&ticket, outcome));
        });
    });

    DebouncedSearchHandle { state, set_query }
}
