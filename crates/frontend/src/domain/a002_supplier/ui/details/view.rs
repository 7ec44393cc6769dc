use super::view_model::SupplierDetailsViewModel;
use contracts::shared::form::{DocumentKind, FormMode};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn SupplierDetails(mode: FormMode, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new();
    vm.load_if_needed(&mode);

    let handle_cancel = move |_: leptos::ev::MouseEvent| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("All entered data will be lost. Cancel?").ok())
            .unwrap_or(false);
        if confirmed {
            on_cancel.run(());
        }
    };

    let number_placeholder = move || {
        vm.form.with(|f| {
            DocumentKind::parse(&f.document_type)
                .map(DocumentKind::placeholder)
                .unwrap_or("Select a document type first")
        })
    };

    view! {
        <div class="details-container supplier-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit supplier" } else { "New supplier" }}</h3>
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
                        placeholder="Supplier name"
                    />
                </div>

                <div class="form-group">
                    <label for="document_type">"Document type" <span class="required">" *"</span></label>
                    <select
                        id="document_type"
                        prop:value=move || vm.form.with(|f| f.document_type.clone())
                        on:change=move |ev| {
                            vm.form.update(|f| {
                                f.document_type = event_target_value(&ev);
                                f.document_number.clear();
                            })
                        }
                    >
                        <option value="">"-- Select --"</option>
                        {DocumentKind::ALL
                            .into_iter()
                            .map(|k| view! { <option value=k.code()>{k.code()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="document_number">"Document number" <span class="required">" *"</span></label>
                    <input
                        type="text"
                        id="document_number"
                        placeholder=number_placeholder
                        prop:value=move || vm.form.with(|f| f.document_number.clone())
                        on:input=move |ev| {
                            vm.form.update(|f| {
                                f.set_document_number(event_target_value(&ev));
                            })
                        }
                    />
                </div>

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
                    <label for="address">"Address"</label>
                    <input
                        type="text"
                        id="address"
                        prop:value=move || vm.form.with(|f| f.address.clone())
                        on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="phone">"Phone"</label>
                    <input
                        type="text"
                        id="phone"
                        prop:value=move || vm.form.with(|f| f.phone.clone())
                        on:input=move |ev| {
                            vm.form.update(|f| {
                                f.set_phone(event_target_value(&ev));
                            })
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || vm.form.with(|f| f.email.clone())
                        on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>

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
