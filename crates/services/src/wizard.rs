//! First-run setup wizard: a linear, four-step editor over a draft branding
//! record that commits into the [`BrandingStore`] at the end.

use crate::branding::BrandingStore;
use crate::storage::{KeyValueStore, SETUP_COMPLETED_KEY};
use shared_types::{AppError, BrandingConfig, BrandingPatch};
use std::collections::HashMap;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    BasicInfo,
    VisualIdentity,
    Contact,
    Summary,
}

pub const ALL_STEPS: &[WizardStep] = &[
    WizardStep::BasicInfo,
    WizardStep::VisualIdentity,
    WizardStep::Contact,
    WizardStep::Summary,
];

impl WizardStep {
    pub fn index(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 0,
            WizardStep::VisualIdentity => 1,
            WizardStep::Contact => 2,
            WizardStep::Summary => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic information",
            WizardStep::VisualIdentity => "Visual identity",
            WizardStep::Contact => "Contact details",
            WizardStep::Summary => "Review",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        ALL_STEPS.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(|i| ALL_STEPS.get(i).copied())
    }

    /// Whether a validation error path belongs to a field edited in this step.
    fn owns(&self, path: &str) -> bool {
        match self {
            WizardStep::BasicInfo => path == "app_name" || path == "tagline",
            WizardStep::VisualIdentity => {
                path == "logo_url"
                    || path == "favicon_url"
                    || path.starts_with("colors.")
                    || path.starts_with("fonts.")
            }
            WizardStep::Contact => path.starts_with("contact."),
            WizardStep::Summary => true,
        }
    }
}

pub struct SetupWizard {
    step: WizardStep,
    draft: BrandingConfig,
    field_errors: HashMap<String, String>,
}

impl SetupWizard {
    /// Start at `BasicInfo` with a copy of `initial` as the draft.
    pub fn new(initial: &BrandingConfig) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            draft: initial.clone(),
            field_errors: HashMap::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BrandingConfig {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BrandingConfig {
        &mut self.draft
    }

    pub fn field_error(&self, path: &str) -> Option<&str> {
        self.field_errors.get(path).map(String::as_str)
    }

    pub fn field_errors(&self) -> &HashMap<String, String> {
        &self.field_errors
    }

    /// Errors in the fields owned by the current step.
    fn check_step(&self) -> Result<(), AppError> {
        let Err(errors) = self.draft.validate() else {
            return Ok(());
        };
        let all = AppError::from(errors);
        let owned: HashMap<String, String> = all
            .field_errors
            .into_iter()
            .filter(|(path, _)| self.step.owns(path))
            .collect();
        if owned.is_empty() {
            return Ok(());
        }
        let message = owned
            .iter()
            .min_by(|a, b| a.0.cmp(b.0))
            .map(|(_, msg)| msg.clone())
            .unwrap_or_default();
        Err(AppError::validation(message, owned))
    }

    /// Validate the current step and advance. Invalid fields are kept in
    /// [`field_errors`](Self::field_errors) and the step does not change.
    pub fn next(&mut self) -> Result<WizardStep, AppError> {
        let Some(next) = self.step.next() else {
            return Err(AppError::conflict("The review step is the last step"));
        };
        if let Err(err) = self.check_step() {
            self.field_errors = err.field_errors.clone();
            return Err(err);
        }
        self.field_errors.clear();
        self.step = next;
        Ok(next)
    }

    /// Go back one step; stays put on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
            self.field_errors.clear();
        }
        self.step
    }

    /// Commit the draft and mark setup as completed. Only legal on the review
    /// step.
    pub fn complete(
        &mut self,
        store: &mut BrandingStore,
        storage: &dyn KeyValueStore,
    ) -> Result<(), AppError> {
        if self.step != WizardStep::Summary {
            return Err(AppError::conflict(format!(
                "Setup can only be completed from the review step, not {}",
                self.step.title()
            )));
        }
        store.update(&BrandingPatch::from(&self.draft))?;
        mark_setup_completed(storage)?;
        tracing::info!(app_name = %self.draft.app_name, "Setup wizard completed");
        Ok(())
    }
}

pub fn is_setup_completed(storage: &dyn KeyValueStore) -> bool {
    match storage.get(SETUP_COMPLETED_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read setup flag; showing the wizard");
            false
        }
    }
}

pub fn mark_setup_completed(storage: &dyn KeyValueStore) -> Result<(), AppError> {
    storage.set(SETUP_COMPLETED_KEY, "true")
}
