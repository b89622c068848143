use crate::ports::ManifestCatalog;

/// Application context holding dependencies for command execution.
pub struct AppContext<'c, C: ManifestCatalog + ?Sized> {
    catalog: &'c C,
}

impl<'c, C: ManifestCatalog + ?Sized> AppContext<'c, C> {
    pub fn new(catalog: &'c C) -> Self {
        Self { catalog }
    }

    /// Read-only manifest catalog.
    pub fn catalog(&self) -> &'c C {
        self.catalog
    }
}
