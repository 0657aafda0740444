use std::sync::Arc;

use super::resource::AdminResource;

/// Registry of everything manageable through the admin screens.
pub struct AdminSite {
    resources: Vec<Arc<dyn AdminResource>>,
}

impl AdminSite {
    pub fn new() -> Self {
        Self {
            resources: Vec::new(),
        }
    }

    pub fn register(mut self, resource: Arc<dyn AdminResource>) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn AdminResource>> {
        self.resources.iter().find(|r| r.name() == name)
    }

    pub fn resources(&self) -> &[Arc<dyn AdminResource>] {
        &self.resources
    }
}

impl Default for AdminSite {
    fn default() -> Self {
        Self::new()
    }
}
