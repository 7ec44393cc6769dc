use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::domain::a004_purchase::ui::form::PurchaseForm;
use crate::domain::a005_sale::ui::form::SaleForm;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Products,
    Suppliers,
    Customers,
    Purchase,
    Sale,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Products,
        Page::Suppliers,
        Page::Customers,
        Page::Purchase,
        Page::Sale,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Products => "Products",
            Page::Suppliers => "Suppliers",
            Page::Customers => "Customers",
            Page::Purchase => "New purchase",
            Page::Sale => "New sale",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let page = RwSignal::new(Page::Products);

    view! {
        <div class="app">
            <nav class="app__nav">
                {Page::ALL
                    .into_iter()
                    .map(|p| view! {
                        <Button
                            appearance=move || if page.get() == p { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                            on_click=move |_| page.set(p)
                        >
                            {p.title()}
                        </Button>
                    })
                    .collect_view()}
            </nav>
            <main class="app__main">
                {move || match page.get() {
                    Page::Products => view! { <ProductList /> }.into_any(),
                    Page::Suppliers => view! { <SupplierList /> }.into_any(),
                    Page::Customers => view! { <CustomerList /> }.into_any(),
                    Page::Purchase => view! { <PurchaseForm /> }.into_any(),
                    Page::Sale => view! { <SaleForm /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_page_titles_are_unique() {
        let titles: HashSet<_> = Page::ALL.iter().map(|p| p.title()).collect();
        assert_eq!(titles.len(), Page::ALL.len());
    }
}
