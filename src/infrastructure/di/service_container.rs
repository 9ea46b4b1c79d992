//! Service container for dependency injection
//!
//! Wires settings, the tick source and the input source together.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::application::Visualizer;
use crate::config::Settings;
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::{InputSource, RealInputSource, SleepTicker, Ticker};

/// Where to read tree values from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// Values given inline, e.g. `1,2,null,3`
    Inline(&'a str),
    /// Values read from a file
    File(&'a Path),
    /// Values read from standard input
    Stdin,
}

/// Container holding settings and I/O boundaries.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Input abstraction
    pub input: Arc<dyn InputSource>,

    /// Replay tick source
    pub ticker: Arc<dyn Ticker>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealInputSource), Arc::new(SleepTicker))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        input: Arc<dyn InputSource>,
        ticker: Arc<dyn Ticker>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            input,
            ticker,
        }
    }

    /// Fresh session honouring the configured null policy.
    pub fn visualizer(&self) -> Visualizer {
        Visualizer::new(self.settings.null_policy)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.settings.interval_ms)
    }

    /// Read raw input text.
    pub fn read_input(&self, input: &Input<'_>) -> InfraResult<String> {
        debug!("read_input: {:?}", input);
        match input {
            Input::Inline(text) => Ok(text.to_string()),
            Input::File(path) => self
                .input
                .read_file(path)
                .map_err(|e| InfraError::io(format!("read {}", path.display()), e)),
            Input::Stdin => self
                .input
                .read_stdin()
                .map_err(|e| InfraError::io("read stdin", e)),
        }
    }

    /// Read, parse and visualize `input` in a fresh session.
    pub fn load(&self, input: &Input<'_>) -> InfraResult<Visualizer> {
        let text = self.read_input(input)?;
        let mut viz = self.visualizer();
        viz.visualize_text(&text, self.settings.lenient)?;
        Ok(viz)
    }
}
