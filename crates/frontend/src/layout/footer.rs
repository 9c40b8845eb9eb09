use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Loja Online | DEISI Shop | 2024"</p>
        </footer>
    }
}
