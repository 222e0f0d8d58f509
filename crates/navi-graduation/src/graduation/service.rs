use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{CreditRecord, MajorType, RequirementKey};
use super::draft::CreditDraft;
use super::evaluation::{evaluate, EvaluationConfig, GraduationReport};
use super::input::InputGuard;
use super::repository::{GraduationResultRepository, KeyValueStore, StoreError};
use super::validation::ValidationError;

/// Service composing the input guard, the evaluator, and the result repository.
pub struct GraduationService<S> {
    guard: InputGuard,
    results: GraduationResultRepository<S>,
}

impl<S> GraduationService<S>
where
    S: KeyValueStore + 'static,
{
    pub fn new(store: Arc<S>, config: EvaluationConfig) -> Self {
        Self {
            guard: InputGuard::from_config(&config),
            results: GraduationResultRepository::new(store),
        }
    }

    pub fn guard(&self) -> &InputGuard {
        &self.guard
    }

    /// Blank sheet for a freshly scanned transcript.
    pub fn start_draft(&self, major: MajorType) -> CreditDraft {
        CreditDraft::blank(major)
    }

    /// Sheet for editing the saved result. The saved major type wins over `requested`;
    /// `None` when nothing has been saved yet.
    pub fn resume_draft(
        &self,
        requested: MajorType,
    ) -> Result<Option<CreditDraft>, GraduationServiceError> {
        let Some(saved) = self.results.load()? else {
            return Ok(None);
        };
        if saved.major != requested {
            info!(
                requested = %requested,
                saved = %saved.major,
                "resuming saved sheet under its own major type"
            );
        }
        Ok(Some(CreditDraft::from_result(saved)))
    }

    /// Apply one keystroke to a draft; returns whether the stored value changed.
    pub fn input(&self, draft: &mut CreditDraft, key: RequirementKey, raw: &str) -> bool {
        draft.input(&self.guard, key, raw)
    }

    /// Completion table without persisting anything.
    pub fn preview(&self, major: MajorType, credits: &CreditRecord) -> GraduationReport {
        evaluate(major, credits)
    }

    /// Validate and persist the draft, returning its completion table.
    pub fn submit(&self, draft: &CreditDraft) -> Result<GraduationReport, GraduationServiceError> {
        let validation = draft.validate();
        if let Some(message) = validation.message() {
            warn!(major = %draft.major, %message, "credit sheet incomplete");
        }
        validation.into_result()?;

        self.results.save(&draft.to_result())?;
        let report = evaluate(draft.major, &draft.credits);
        info!(
            major = %draft.major,
            all_complete = report.all_complete(),
            "graduation result saved"
        );
        Ok(report)
    }

    /// Completion table of the saved result, `None` when nothing has been saved.
    pub fn report(&self) -> Result<Option<GraduationReport>, GraduationServiceError> {
        let saved = self.results.load()?;
        Ok(saved.map(|result| evaluate(result.major, &result.credits)))
    }

    pub fn saved(&self) -> Result<Option<CreditDraft>, GraduationServiceError> {
        Ok(self.results.load()?.map(CreditDraft::from_result))
    }

    pub fn clear(&self) -> Result<(), GraduationServiceError> {
        self.results.clear()?;
        info!("graduation result cleared");
        Ok(())
    }
}

/// Error raised by the graduation service.
#[derive(Debug, thiserror::Error)]
pub enum GraduationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
