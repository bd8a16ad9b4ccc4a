//! Port for secret lookup

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for reading secrets such as provider credentials
///
/// Implementations decide where secrets live (process environment, a
/// vault, ...). A secret that simply is not set is `Ok(None)`; errors are
/// reserved for a store that cannot be read.
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Look up a secret by key (e.g. "serp_api_key")
    async fn get_secret(&self, key: &str) -> Result<Option<String>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn SecretStorePort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SecretStorePort>();
    }
}
