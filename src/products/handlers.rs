use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
};
use tera::Context;
use tracing::instrument;

use crate::state::AppState;
use crate::templates;

/// GET / : every product in storage, rendered through `index.html`.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let products = state.products.find_all().await.map_err(internal)?;

    let mut ctx = Context::new();
    ctx.insert("products", &products);
    let body = templates::render(&state.templates, "index.html", &ctx).map_err(internal)?;
    Ok(Html(body))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::model::NewProduct;

    #[tokio::test]
    async fn listing_renders_each_stored_product() {
        let state = AppState::fake();
        state
            .products
            .create(NewProduct {
                name: "Widget".into(),
                price: 9.99,
                stock: 5,
                image: "widget.png".into(),
            })
            .await
            .expect("seed product");

        let Html(body) = index(State(state)).await.expect("index ok");
        assert!(body.contains("Widget"));
        assert!(body.contains("9.99"));
        assert!(body.contains("5"));
        assert_eq!(body.matches("class=\"product\"").count(), 1);
    }

    #[tokio::test]
    async fn listing_with_empty_storage_is_ok_and_has_no_entries() {
        let state = AppState::fake();
        let Html(body) = index(State(state)).await.expect("index ok");
        assert_eq!(body.matches("class=\"product\"").count(), 0);
        assert!(body.contains("<h1>Products</h1>"));
    }

    #[tokio::test]
    async fn listing_has_one_entry_per_product() {
        let state = AppState::fake();
        for i in 0..3 {
            state
                .products
                .create(NewProduct {
                    name: format!("Product {i}"),
                    price: 1.0,
                    stock: i,
                    image: format!("p{i}.png"),
                })
                .await
                .expect("seed product");
        }

        let Html(body) = index(State(state)).await.expect("index ok");
        assert_eq!(body.matches("class=\"product\"").count(), 3);
    }
}
