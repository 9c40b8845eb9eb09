use leptos::prelude::*;

/// Fixed navigation bar; no state.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="header__title">"Loja Online"</h1>
            <nav class="header__nav">
                <ul>
                    <li><a href="#produtos">"Produtos"</a></li>
                    <li><a href="#carrinho">"Carrinho"</a></li>
                </ul>
            </nav>
        </header>
    }
}
