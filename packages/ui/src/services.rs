//! Shared client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] whose session lives in the platform store:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
//! - **Native**: one file per key via [`store::FileStore`]
//! - WASM without `web`: in memory, gone on reload

use api::{ApiClient, ClientConfig};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// The client every component talks to.
pub type Client = ApiClient<PlatformStore>;

pub fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("social");
        store::FileStore::new(base)
    }
}

/// Create a platform-appropriate client for `config`.
pub fn make_client(config: ClientConfig) -> Client {
    ApiClient::with_reqwest(config, platform_store())
}
