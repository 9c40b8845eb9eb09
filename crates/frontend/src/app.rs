use crate::domain::catalog::ui::ProductsPage;
use crate::layout::{Footer, Header};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Header />
        <ProductsPage />
        <Footer />
    }
}
