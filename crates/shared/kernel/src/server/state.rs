use axum::extract::FromRef;
use shub_domain::config::AppConfig;
use shub_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::TypeId;
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("State validation error: {0}")]
    Validation(&'static str),
    #[error("State missing feature slice: {0}")]
    MissingSlice(&'static str),
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: AppConfig,
    slices: HashMap<TypeId, InitializedSlice>,
}

/// Shared application state handed to every handler.
///
/// Holds the read-only configuration snapshot and the registry of initialized
/// feature slices. Cloning is cheap (a single `Arc`).
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner
            .slices
            .get(&TypeId::of::<T>())
            .and_then(|initialized| initialized.state.as_any().downcast_ref::<T>())
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, AppStateError> {
        self.get_slice::<T>()
            .ok_or_else(|| AppStateError::MissingSlice(std::any::type_name::<T>()))
    }

    /// Iterates over registered slice type IDs (for diagnostics).
    pub fn slice_ids(&self) -> impl Iterator<Item = &TypeId> {
        self.inner.slices.keys()
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct AppStateBuilder {
    config: Option<AppConfig>,
    slices: HashMap<TypeId, InitializedSlice>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        for slice in slices {
            self.slices.insert(slice.id, slice);
        }
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns an error if the configuration was not provided.
    pub fn build(self) -> Result<AppState, AppStateError> {
        let config = self.config.ok_or(AppStateError::Validation("AppConfig not provided"))?;

        Ok(AppState { inner: Arc::new(AppStateInner { config, slices: self.slices }) })
    }
}
