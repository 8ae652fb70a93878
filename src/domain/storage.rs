use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Name of the entry holding the weekly menu.
pub const MENU_KEY: &str = "weeklyMenu";

/// Client-side key-value storage. Absence of a key is `Ok(None)`, not an error.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    // Filesystem path backing `key`, if any. Watched for external edits.
    fn location(&self, key: &str) -> Option<PathBuf>;
}

/// Supplier of the mail template text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateSource: Send + Sync {
    async fn fetch(&self) -> Result<String>;
}
