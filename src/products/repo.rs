use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::Mutex;

use super::model::{NewProduct, Product};

#[async_trait]
pub trait ProductRepo: Send + Sync {
    /// All products in insertion order.
    async fn find_all(&self) -> anyhow::Result<Vec<Product>>;
    async fn find(&self, id: i64) -> anyhow::Result<Option<Product>>;
    async fn create(&self, new: NewProduct) -> anyhow::Result<Product>;
    /// Returns `None` when no product has the given id.
    async fn update(&self, id: i64, new: NewProduct) -> anyhow::Result<Option<Product>>;
    /// Returns `false` when no product had the given id.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

pub struct PgProductRepo {
    db: PgPool,
}

impl PgProductRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepo for PgProductRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock, image
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock, image
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(product)
    }

    async fn create(&self, new: NewProduct) -> anyhow::Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, stock, image
            "#,
        )
        .bind(&new.name)
        .bind(new.price)
        .bind(new.stock)
        .bind(&new.image)
        .fetch_one(&self.db)
        .await?;
        Ok(product)
    }

    async fn update(&self, id: i64, new: NewProduct) -> anyhow::Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, price = $3, stock = $4, image = $5
            WHERE id = $1
            RETURNING id, name, price, stock, image
            "#,
        )
        .bind(id)
        .bind(&new.name)
        .bind(new.price)
        .bind(new.stock)
        .bind(&new.image)
        .fetch_optional(&self.db)
        .await?;
        Ok(product)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Process-local repository backing `AppState::fake()`.
pub struct MemoryProductRepo {
    inner: Mutex<MemoryInner>,
}

struct MemoryInner {
    next_id: i64,
    rows: Vec<Product>,
}

impl MemoryProductRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemoryInner {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryProductRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepo for MemoryProductRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Product>> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.clone())
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Product>> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, new: NewProduct) -> anyhow::Result<Product> {
        let mut inner = self.inner.lock().await;
        let product = Product {
            id: inner.next_id,
            name: new.name,
            price: new.price,
            stock: new.stock,
            image: new.image,
        };
        inner.next_id += 1;
        inner.rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, new: NewProduct) -> anyhow::Result<Option<Product>> {
        let mut inner = self.inner.lock().await;
        let Some(row) = inner.rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        row.name = new.name;
        row.price = new.price;
        row.stock = new.stock;
        row.image = new.image;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut inner = self.inner.lock().await;
        let before = inner.rows.len();
        inner.rows.retain(|p| p.id != id);
        Ok(inner.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> NewProduct {
        NewProduct {
            name: "Widget".into(),
            price: 9.99,
            stock: 5,
            image: "widget.png".into(),
        }
    }

    #[tokio::test]
    async fn create_then_find_round_trips_all_fields() {
        let repo = MemoryProductRepo::new();
        let created = repo.create(widget()).await.expect("create");
        let found = repo
            .find(created.id)
            .await
            .expect("find")
            .expect("product present");
        assert_eq!(found.name, "Widget");
        assert_eq!(found.price, 9.99);
        assert_eq!(found.stock, 5);
        assert_eq!(found.image, "widget.png");
    }

    #[tokio::test]
    async fn find_all_is_empty_on_fresh_storage() {
        let repo = MemoryProductRepo::new();
        assert!(repo.find_all().await.expect("find_all").is_empty());
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let repo = MemoryProductRepo::new();
        let mut first = widget();
        first.name = "First".into();
        let mut second = widget();
        second.name = "Second".into();
        repo.create(first).await.expect("create first");
        repo.create(second).await.expect("create second");

        let all = repo.find_all().await.expect("find_all");
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn ids_are_unique_and_stable_across_updates() {
        let repo = MemoryProductRepo::new();
        let a = repo.create(widget()).await.expect("create a");
        let b = repo.create(widget()).await.expect("create b");
        assert_ne!(a.id, b.id);

        let mut changed = widget();
        changed.stock = 42;
        let updated = repo
            .update(a.id, changed)
            .await
            .expect("update")
            .expect("product present");
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.stock, 42);
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let repo = MemoryProductRepo::new();
        let updated = repo.update(999, widget()).await.expect("update");
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn delete_removes_the_row_and_reports_absence() {
        let repo = MemoryProductRepo::new();
        let created = repo.create(widget()).await.expect("create");
        assert!(repo.delete(created.id).await.expect("delete"));
        assert!(!repo.delete(created.id).await.expect("second delete"));
        assert!(repo.find_all().await.expect("find_all").is_empty());
    }
}
