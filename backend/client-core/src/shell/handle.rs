use super::{PresentationShell, SubmitOutcome};
use crate::attachment;
use crate::config::AppConfig;
use crate::error::CoreError;
use crate::translation_client::TranslationClient;

use std::path::Path;
use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Shared handle to the page state plus the client that serves it.
///
/// The lock is never held across the network call, so a second submit made
/// while a request is outstanding sees `InFlight` and is ignored.
///
/// # Thread Safety
///
/// This type is `Clone`; all clones share the same shell.
#[derive(Clone)]
pub struct ShellHandle {
    shell: Arc<RwLock<PresentationShell>>,
    client: TranslationClient,
}

impl ShellHandle {
    pub fn new(shell: PresentationShell, client: TranslationClient) -> Self {
        Self {
            shell: Arc::new(RwLock::new(shell)),
            client,
        }
    }

    /// Start a session from config: validate it, build the client and restore
    /// the saved page preferences.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] for invalid config values and
    /// [`CoreError::TranslationClient`] if the client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let client = TranslationClient::new(&config.api.base_url)?;
        info!("Translation API: {}", client.base_url());

        Ok(Self::new(
            PresentationShell::with_preferences(&config.ui),
            client,
        ))
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> PresentationShell {
        self.shell.read().await.clone()
    }

    /// Run a synchronous control (toggle, select, set input, ...) against the shell.
    pub async fn update<R>(&self, control: impl FnOnce(&mut PresentationShell) -> R) -> R {
        let mut shell = self.shell.write().await;
        control(&mut shell)
    }

    /// Load a file from disk and attach it, or record why it was rejected.
    ///
    /// Returns `true` if the file was accepted.
    pub async fn attach_path(&self, path: &Path) -> bool {
        let loaded = attachment::load(path).await;

        let mut shell = self.shell.write().await;
        match loaded {
            Ok(loaded) => {
                shell.attach(loaded);
                true
            }
            Err(error) => {
                shell.reject_attachment(&error);
                false
            }
        }
    }

    /// Submit the current input and wait for the outcome.
    pub async fn submit(&self) -> SubmitOutcome {
        let request = match self.shell.write().await.begin_submit() {
            SubmitOutcome::Dispatched(request) => request,
            other => return other,
        };

        let request_id = Uuid::new_v4();
        info!(
            "[{request_id}] Sending translation request (target={})",
            request.target_language()
        );

        let result = self.client.send(&request).await;

        info!(
            "[{request_id}] Translation request finished (ok={})",
            result.is_ok()
        );
        self.shell.write().await.complete_submit(result);

        SubmitOutcome::Dispatched(request)
    }
}
