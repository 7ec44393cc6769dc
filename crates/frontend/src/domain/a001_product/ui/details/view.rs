use super::view_model::ProductDetailsViewModel;
use contracts::shared::form::FormMode;
use contracts::shared::lookup::LookupItem;
use leptos::prelude::*;
use thaw::*;

fn lookup_options(items: &[LookupItem]) -> impl IntoView {
    items
        .iter()
        .map(|item| view! { <option value=item.id.clone()>{item.name.clone()}</option> })
        .collect_view()
}

fn text_field(
    id: &'static str,
    label: &'static str,
    value: impl Fn() -> String + Send + Sync + 'static,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                prop:value=value
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductDetails(mode: FormMode, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    vm.load_lookups();
    vm.load_if_needed(&mode);

    // Подкатегории перечитываются при смене категории
    let category_id = Memo::new(move |_| vm.form.with(|f| f.category_id.clone()));
    Effect::new(move |_| vm.load_subcategories(category_id.get()));

    let handle_cancel = move |_: leptos::ev::MouseEvent| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("All entered data will be lost. Cancel?").ok())
            .unwrap_or(false);
        if confirmed {
            on_cancel.run(());
        }
    };

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit product" } else { "New product" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name" <span class="required">" *"</span></label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Product name"
                    />
                </div>
                {text_field(
                    "display_name",
                    "Alias",
                    move || vm.form.with(|f| f.display_name.clone()),
                    move |v| vm.form.update(|f| f.display_name = v),
                )}

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="brand">"Brand"</label>
                    <select
                        id="brand"
                        // После загрузки опций значение выставляется заново
                        prop:value=move || {
                            vm.brands.track();
                            vm.form.with(|f| f.brand_id.clone())
                        }
                        on:change=move |ev| vm.form.update(|f| f.brand_id = event_target_value(&ev))
                    >
                        <option value="">"-- Select --"</option>
                        {move || vm.brands.with(|items| lookup_options(items))}
                    </select>
                </div>

                <div class="form-group">
                    <label for="category">"Category"</label>
                    <select
                        id="category"
                        prop:value=move || {
                            vm.categories.track();
                            category_id.get()
                        }
                        on:change=move |ev| vm.form.update(|f| f.set_category(event_target_value(&ev)))
                    >
                        <option value="">"-- Select --"</option>
                        {move || vm.categories.with(|items| lookup_options(items))}
                    </select>
                </div>

                <div class="form-group">
                    <label for="subcategory">"Subcategory"</label>
                    <select
                        id="subcategory"
                        prop:disabled=move || category_id.with(String::is_empty)
                        prop:value=move || {
                            vm.subcategories.track();
                            vm.form.with(|f| f.subcategory_id.clone())
                        }
                        on:change=move |ev| vm.form.update(|f| f.subcategory_id = event_target_value(&ev))
                    >
                        <option value="">"-- Select --"</option>
                        {move || vm.subcategories.with(|items| lookup_options(items))}
                    </select>
                </div>

                {text_field(
                    "sku",
                    "SKU",
                    move || vm.form.with(|f| f.sku.clone()),
                    move |v| vm.form.update(|f| f.sku = v),
                )}
                {text_field(
                    "barcode",
                    "Barcode",
                    move || vm.form.with(|f| f.barcode.clone()),
                    move |v| vm.form.update(|f| f.barcode = v),
                )}
                {text_field(
                    "image_url",
                    "Image URL",
                    move || vm.form.with(|f| f.image_url.clone()),
                    move |v| vm.form.update(|f| f.image_url = v),
                )}

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="active"
                        prop:checked=move || vm.form.with(|f| f.active)
                        on:change=move |ev| vm.form.update(|f| f.active = event_target_checked(&ev))
                    />
                    <label for="active">"Active"</label>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.saving
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=handle_cancel>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
