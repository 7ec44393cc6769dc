use crate::domain::a003_customer::api::{create_customer, fetch_customer, update_customer};
use contracts::domain::a003_customer::CustomerDto;
use contracts::shared::form::FormMode;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CustomerDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, mode: &FormMode) {
        let Some(id) = mode.id().map(str::to_string) else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_customer(&id).await {
                Ok(customer) => form.set(CustomerDto::from(customer)),
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
                Some(id) => update_customer(id, &payload).await,
                None => create_customer(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("customer {} saved", payload.document_number);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
