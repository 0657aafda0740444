use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::resource::{AdminResource, AdminRow};
use crate::products::model::NewProduct;
use crate::products::repo::ProductRepo;

/// Product registration: the change list shows `name`, `price`, `stock`.
pub struct ProductAdmin {
    repo: Arc<dyn ProductRepo>,
}

impl ProductAdmin {
    pub fn new(repo: Arc<dyn ProductRepo>) -> Self {
        Self { repo }
    }
}

/// Numeric coercion only; absent fields fall back to empty/zero.
/// There is no validation beyond what the types require.
fn parse_form(form: &HashMap<String, String>) -> anyhow::Result<NewProduct> {
    let name = form.get("name").cloned().unwrap_or_default();
    let price: f64 = form
        .get("price")
        .map(String::as_str)
        .unwrap_or("0")
        .trim()
        .parse()?;
    let stock: i32 = form
        .get("stock")
        .map(String::as_str)
        .unwrap_or("0")
        .trim()
        .parse()?;
    let image = form.get("image").cloned().unwrap_or_default();
    Ok(NewProduct {
        name,
        price,
        stock,
        image,
    })
}

#[async_trait]
impl AdminResource for ProductAdmin {
    fn name(&self) -> &'static str {
        "products"
    }

    fn list_display(&self) -> &'static [&'static str] {
        &["name", "price", "stock"]
    }

    fn fields(&self) -> &'static [&'static str] {
        &["name", "price", "stock", "image"]
    }

    async fn list(&self) -> anyhow::Result<Vec<AdminRow>> {
        let products = self.repo.find_all().await?;
        Ok(products
            .into_iter()
            .map(|p| AdminRow {
                id: p.id,
                cells: vec![p.name, p.price.to_string(), p.stock.to_string()],
            })
            .collect())
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<HashMap<String, String>>> {
        let Some(p) = self.repo.find(id).await? else {
            return Ok(None);
        };
        Ok(Some(HashMap::from([
            ("name".to_string(), p.name),
            ("price".to_string(), p.price.to_string()),
            ("stock".to_string(), p.stock.to_string()),
            ("image".to_string(), p.image),
        ])))
    }

    async fn create(&self, form: &HashMap<String, String>) -> anyhow::Result<i64> {
        let product = self.repo.create(parse_form(form)?).await?;
        Ok(product.id)
    }

    async fn update(&self, id: i64, form: &HashMap<String, String>) -> anyhow::Result<bool> {
        Ok(self.repo.update(id, parse_form(form)?).await?.is_some())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        self.repo.delete(id).await
    }
}
