//! Shared swap form session for apps that drive the form from several tasks.

use super::{FormAction, FormView, SwapForm};
use crate::domain::coin::PriceSource;
use crate::error::{FormError, SdkError};
use async_lock::RwLock;
use std::sync::Arc;

/// A cloneable handle to one [`SwapForm`].
///
/// Every action holds the write lock for exactly one transition, so
/// concurrent callers observe actions one at a time.
#[derive(Debug, Clone, Default)]
pub struct SwapFormHandle {
    inner: Arc<RwLock<SwapForm>>,
}

impl SwapFormHandle {
    pub fn new(form: SwapForm) -> Self {
        Self {
            inner: Arc::new(RwLock::new(form)),
        }
    }

    /// Fetch the catalog from `source` and apply it.
    ///
    /// The fetch runs without holding the lock, so actions keep flowing
    /// while prices load. On failure the catalog is left as it was.
    pub async fn load_catalog<S: PriceSource>(&self, source: &S) -> Result<usize, SdkError> {
        match source.fetch_coins().await {
            Ok(coins) => {
                let mut form = self.inner.write().await;
                form.on_catalog_loaded(coins);
                Ok(form.catalog().len())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Price catalog unavailable, conversions disabled");
                Err(e)
            }
        }
    }

    pub async fn dispatch(&self, action: FormAction) -> Result<(), FormError> {
        self.inner.write().await.dispatch(action)
    }

    pub async fn submit(&self) -> Result<String, FormError> {
        self.inner.write().await.submit()
    }

    pub async fn view(&self) -> FormView {
        self.inner.read().await.view()
    }

    /// A copy of the current session.
    pub async fn snapshot(&self) -> SwapForm {
        self.inner.read().await.clone()
    }
}
