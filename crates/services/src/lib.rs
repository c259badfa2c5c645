pub mod storage;
pub mod surface;
pub mod time;

pub mod branding;
pub mod config;
pub mod theme;

pub mod backend;
pub mod gateway;

pub mod context;
pub mod panels;
pub mod wizard;

pub use backend::{LegalBackend, MockBackend, MockDelays};
pub use branding::{BrandingSource, BrandingStore};
pub use config::{AppConfigLoader, ConfigSource, ConfigState};
pub use context::{initialize, AppServices, StartupOptions};
pub use gateway::ApiGateway;
pub use storage::{KeyValueStore, MemoryStore};
pub use surface::{Presentation, ThemeSurface};
pub use theme::ThemeResolver;
pub use wizard::{SetupWizard, WizardStep};
