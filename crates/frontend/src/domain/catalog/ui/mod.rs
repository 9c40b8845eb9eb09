use std::sync::Arc;

use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::cart::context::CartContext;
use crate::domain::cart::model::RandomIds;
use crate::domain::cart::storage::LocalStorageCartStore;
use crate::domain::catalog::api;
use crate::domain::catalog::projection::{
    derive_display_list, FilterState, SortOrder, ALL_CATEGORIES,
};
use crate::shared::search_input::SearchInput;

/// Categories offered by the control panel.
const CATEGORIES: [&str; 3] = ["T-shirts", "Canecas", "Meias"];

/// Storefront page: catalog grid with filter/sort/search plus the cart.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error_msg = RwSignal::new(None::<String>);

    // filter state
    let categoria = RwSignal::new(ALL_CATEGORIES.to_string());
    let ordem = RwSignal::new(SortOrder::Asc);
    let pesquisa = RwSignal::new(String::new());

    let cart = CartContext::new(Arc::new(LocalStorageCartStore), Arc::new(RandomIds));

    // Initial fetch through the internal proxy. A failure is terminal for
    // this page load; there is no retry.
    spawn_local(async move {
        match api::fetch_products().await {
            Ok(list) => products.set(list),
            Err(e) => error_msg.set(Some(e)),
        }
        loading.set(false);
    });

    let displayed = Memo::new(move |_| {
        let filter = FilterState {
            category: categoria.get(),
            order: ordem.get(),
            search: pesquisa.get(),
        };
        derive_display_list(&products.get(), &filter)
    });

    view! {
        <div class="page">
            {move || {
                if loading.get() {
                    view! { <p>"Carregando..."</p> }.into_any()
                } else if let Some(msg) = error_msg.get() {
                    view! { <p>"Erro: " {msg}</p> }.into_any()
                } else {
                    let grid_cart = cart.clone();
                    let section_cart = cart.clone();
                    view! {
                        <ControlPanel categoria=categoria ordem=ordem pesquisa=pesquisa />
                        <main>
                            <article id="produtos">
                                <h2>"Selecione os seus Produtos"</h2>
                                <section class="lista-produtos">
                                    <For
                                        each=move || displayed.get()
                                        key=|p| p.id
                                        children=move |p| {
                                            view! { <ProductCard product=p cart=grid_cart.clone() /> }
                                        }
                                    />
                                </section>
                            </article>
                            <CartSection cart=section_cart />
                        </main>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ControlPanel(
    categoria: RwSignal<String>,
    ordem: RwSignal<SortOrder>,
    pesquisa: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div id="control-panel">
            <label for="filtro-categoria">"Filtrar:"</label>
            <select
                id="filtro-categoria"
                prop:value=move || categoria.get()
                on:change=move |ev| categoria.set(event_target_value(&ev))
            >
                <option value=ALL_CATEGORIES>"Todas as categorias"</option>
                {CATEGORIES
                    .into_iter()
                    .map(|c| view! { <option value=c>{c}</option> })
                    .collect_view()}
            </select>

            <label for="ordenar-preco">"Ordenar:"</label>
            <select
                id="ordenar-preco"
                prop:value=move || ordem.get().as_str()
                on:change=move |ev| ordem.set(SortOrder::from_str(&event_target_value(&ev)))
            >
                <option value="asc">"Ordenar pelo preço (crescente)"</option>
                <option value="desc">"Ordenar pelo preço (decrescente)"</option>
            </select>

            <label for="pesquisar">"Procurar:"</label>
            <SearchInput on_change=Callback::new(move |texto| pesquisa.set(texto)) />
        </div>
    }
}

#[component]
fn ProductCard(product: Product, cart: CartContext) -> impl IntoView {
    let item = product.clone();
    view! {
        <div class="product-card">
            <h3>{product.title.clone()}</h3>
            <img src=product.image.clone() alt=product.title.clone() />
            <p>{product.description.clone()}</p>
            <p>{format!("{:.2} €", product.price)}</p>
            <button on:click=move |_| cart.add(item.clone())>"+ Adicionar ao Carrinho"</button>
        </div>
    }
}

#[component]
fn CartSection(cart: CartContext) -> impl IntoView {
    let items = cart.items();
    let remove_cart = cart.clone();
    let total_cart = cart.clone();
    view! {
        <article id="carrinho">
            <h2>"Produtos Selecionados"</h2>
            <section class="carrinho">
                <For
                    each=move || items.get()
                    key=|item| item.id_unico
                    children=move |item| {
                        let cart = remove_cart.clone();
                        let id_unico = item.id_unico;
                        view! {
                            <div class="product-card">
                                <h3>{item.product.title.clone()}</h3>
                                <img src=item.product.image.clone() alt=item.product.title.clone() />
                                <p>{format!("{:.2} €", item.product.price)}</p>
                                <button on:click=move |_| cart.remove(id_unico)>
                                    "- Remover do Carrinho"
                                </button>
                            </div>
                        }
                    }
                />
                <p class="total">{move || format!("Custo total: {:.2}€", total_cart.total())}</p>
            </section>
        </article>
    }
}
