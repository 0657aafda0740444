use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

/// One entry in a change list: the record id plus one cell per
/// `list_display` column, already rendered to text.
#[derive(Debug, Clone, Serialize)]
pub struct AdminRow {
    pub id: i64,
    pub cells: Vec<String>,
}

/// Generic CRUD capability the admin screens are written against.
/// Implemented once per managed entity; the handlers never see a
/// concrete model type. Form values travel as strings, the way they
/// arrive from an HTML form; each implementation coerces them.
#[async_trait]
pub trait AdminResource: Send + Sync {
    /// URL segment and heading, e.g. "products".
    fn name(&self) -> &'static str;
    /// Columns shown in the change list.
    fn list_display(&self) -> &'static [&'static str];
    /// Editable fields, in form order.
    fn fields(&self) -> &'static [&'static str];

    async fn list(&self) -> anyhow::Result<Vec<AdminRow>>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<HashMap<String, String>>>;
    async fn create(&self, form: &HashMap<String, String>) -> anyhow::Result<i64>;
    /// Returns `false` when no record has the given id.
    async fn update(&self, id: i64, form: &HashMap<String, String>) -> anyhow::Result<bool>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
