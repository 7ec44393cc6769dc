use crate::domain::a001_product::api::{
    create_product, fetch_brands, fetch_categories, fetch_product, fetch_subcategories,
    update_product,
};
use contracts::domain::a001_product::ProductDto;
use contracts::shared::form::FormMode;
use contracts::shared::lookup::LookupItem;
use leptos::prelude::*;

/// ViewModel формы товара со справочниками марок и категорий
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub brands: RwSignal<Vec<LookupItem>>,
    pub categories: RwSignal<Vec<LookupItem>>,
    pub subcategories: RwSignal<Vec<LookupItem>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductDto::default()),
            brands: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            subcategories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Справочники грузятся всегда; ошибка даёт пустой список
    pub fn load_lookups(&self) {
        let brands = self.brands;
        let categories = self.categories;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_brands().await {
                Ok(items) => brands.set(items),
                Err(e) => log::warn!("product form: brands: {}", e),
            }
            match fetch_categories().await {
                Ok(items) => categories.set(items),
                Err(e) => log::warn!("product form: categories: {}", e),
            }
        });
    }

    pub fn load_subcategories(&self, category_id: String) {
        let subcategories = self.subcategories;
        if category_id.is_empty() {
            subcategories.set(Vec::new());
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_subcategories(&category_id).await {
                Ok(items) => subcategories.set(items),
                Err(e) => {
                    log::warn!("product form: subcategories of {}: {}", category_id, e);
                    subcategories.set(Vec::new());
                }
            }
        });
    }

    pub fn load_if_needed(&self, mode: &FormMode) {
        let Some(id) = mode.id().map(str::to_string) else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_product(&id).await {
                Ok(product) => form.set(ProductDto::from(product)),
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
                Some(id) => update_product(id, &payload).await,
                None => create_product(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("product '{}' saved", payload.name);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
