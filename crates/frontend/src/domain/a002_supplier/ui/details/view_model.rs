use crate::domain::a002_supplier::api::{create_supplier, fetch_supplier, update_supplier};
use contracts::domain::a002_supplier::SupplierDto;
use contracts::shared::form::FormMode;
use leptos::prelude::*;

/// ViewModel формы поставщика
#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<SupplierDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl SupplierDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(SupplierDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Загрузка записи в режиме редактирования
    pub fn load_if_needed(&self, mode: &FormMode) {
        let Some(id) = mode.id().map(str::to_string) else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_supplier(&id).await {
                Ok(supplier) => form.set(SupplierDto::from(supplier)),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let payload = match current.to_payload() {
            Ok(p) => p,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &current.id {
                Some(id) => update_supplier(id, &payload).await,
                None => create_supplier(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("supplier '{}' saved", payload.name);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
