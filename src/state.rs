use std::sync::{Arc, Mutex};

use crate::analyzer::filter::Selection;
use crate::chat::ChatSession;
use crate::config::AppConfig;
use crate::data::generate_datasets;
use crate::data::types::Datasets;
use crate::error::AppError;

/// Everything the commands operate on. Datasets are generated once at
/// start-up and never mutated afterwards.
pub struct AppState {
    datasets: Arc<Datasets>,
    pub config: Mutex<AppConfig>,
    pub selection: Mutex<Selection>,
    pub chat: Mutex<ChatSession>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let datasets = generate_datasets(&config.generator)?;
        Ok(Self::with_datasets(config, datasets))
    }

    pub fn with_datasets(config: AppConfig, datasets: Datasets) -> Self {
        Self {
            datasets: Arc::new(datasets),
            config: Mutex::new(config),
            selection: Mutex::new(Selection::default()),
            chat: Mutex::new(ChatSession::new()),
        }
    }

    pub fn datasets(&self) -> Arc<Datasets> {
        Arc::clone(&self.datasets)
    }
}

/// Lock helpers; a poisoned mutex surfaces as `AppError::StatePoisoned`.
pub trait StateAccess {
    fn config_snapshot(&self) -> Result<AppConfig, AppError>;

    fn selection_snapshot(&self) -> Result<Selection, AppError>;

    fn chat_session<F, T>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut ChatSession) -> T;
}

impl StateAccess for AppState {
    fn config_snapshot(&self) -> Result<AppConfig, AppError> {
        let guard = self.config.lock()?;
        Ok(guard.clone())
    }

    fn selection_snapshot(&self) -> Result<Selection, AppError> {
        let guard = self.selection.lock()?;
        Ok(*guard)
    }

    fn chat_session<F, T>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut ChatSession) -> T,
    {
        let mut guard = self.chat.lock()?;
        Ok(f(&mut guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;

    #[test]
    fn test_new_generates_datasets() {
        let config = AppConfig {
            generator: GeneratorConfig {
                seed: Some(3),
                ..GeneratorConfig::default()
            },
            ..AppConfig::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.datasets().hiring.len(), 960);
        assert!(state.selection_snapshot().unwrap().is_unconstrained());
    }

    #[test]
    fn test_poisoned_lock_is_an_error() {
        let state = AppState::with_datasets(AppConfig::default(), Datasets::default());
        let state = Arc::new(state);
        let s = Arc::clone(&state);
        let _ = std::thread::spawn(move || {
            let _guard = s.selection.lock().unwrap();
            panic!("poison");
        })
        .join();

        assert!(matches!(
            state.selection_snapshot(),
            Err(AppError::StatePoisoned(_))
        ));
    }
}
