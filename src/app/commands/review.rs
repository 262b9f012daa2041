//! `cr`: review the current branch against the main branch.
//!
//! The run is a five-state machine. Every state either advances to the next
//! one or terminates with a [`ReviewOutcome`]; no state is visited twice.
//! Collaborator faults surfacing as [`AppError`] are caught here and reported,
//! never propagated.

use crate::app::ReviewContext;
use crate::app::repository::{git_diff, is_git_repository};
use crate::domain::review::{
    ANALYZING_MESSAGE, DIFF_FAILURE_MESSAGE, NO_CHANGES_MESSAGE, NOT_A_REPOSITORY_MESSAGE,
    REVIEW_SERVICE_FAILURE_MESSAGE, UNEXPECTED_FAULT_MESSAGE, UNKNOWN_FAULT_MESSAGE,
    missing_prompt_message, review_result_message,
};
use crate::domain::{
    AppError, COMMON_PROMPT, ChatOutcome, DiffOutcome, ReviewOutcome, assemble_review_request,
};
use crate::ports::{ChatClientFactory, Git, Logger, PromptStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReviewState {
    CheckRepo,
    ComputeDiff,
    LoadPrompts { diff: String },
    CallReview { request: String },
    Emit { response: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Advance(ReviewState),
    Terminate(ReviewOutcome),
}

impl ReviewState {
    pub(crate) fn step<G, P, F, L>(
        self,
        ctx: &ReviewContext<G, P, F, L>,
        prompt_name: &str,
    ) -> Result<Step, AppError>
    where
        G: Git,
        P: PromptStore,
        F: ChatClientFactory,
        L: Logger,
    {
        let logger = ctx.logger();

        match self {
            ReviewState::CheckRepo => {
                if !is_git_repository(ctx.git()) {
                    logger.error(NOT_A_REPOSITORY_MESSAGE, None);
                    return Ok(Step::Terminate(ReviewOutcome::NotARepository));
                }
                Ok(Step::Advance(ReviewState::ComputeDiff))
            }
            ReviewState::ComputeDiff => match git_diff(ctx.git()) {
                DiffOutcome::Changes(diff) => Ok(Step::Advance(ReviewState::LoadPrompts { diff })),
                DiffOutcome::NoChanges => {
                    logger.info(NO_CHANGES_MESSAGE);
                    Ok(Step::Terminate(ReviewOutcome::NoChanges))
                }
                DiffOutcome::ToolError(detail) => {
                    logger.error(DIFF_FAILURE_MESSAGE, Some(detail.as_str()));
                    logger.info(NO_CHANGES_MESSAGE);
                    Ok(Step::Terminate(ReviewOutcome::NoChanges))
                }
            },
            ReviewState::LoadPrompts { diff } => {
                let common = load_template(ctx.prompts(), COMMON_PROMPT)?;
                let specific = load_template(ctx.prompts(), prompt_name)?;

                match (common, specific) {
                    (Some(common), Some(specific)) => {
                        let request = assemble_review_request(&common, &specific, &diff);
                        Ok(Step::Advance(ReviewState::CallReview { request }))
                    }
                    _ => {
                        logger.error(&missing_prompt_message(prompt_name), None);
                        Ok(Step::Terminate(ReviewOutcome::MissingPromptResource {
                            prompt: prompt_name.to_string(),
                        }))
                    }
                }
            }
            ReviewState::CallReview { request } => {
                let client = ctx.chat().create()?;
                logger.info(ANALYZING_MESSAGE);

                match client.send(&request) {
                    ChatOutcome::Reply(response) => {
                        Ok(Step::Advance(ReviewState::Emit { response }))
                    }
                    ChatOutcome::Empty => {
                        log::debug!("chat service returned an empty completion");
                        logger.error(REVIEW_SERVICE_FAILURE_MESSAGE, None);
                        Ok(Step::Terminate(ReviewOutcome::ReviewServiceFailure))
                    }
                    ChatOutcome::Failed(detail) => {
                        log::debug!("chat service failed: {}", detail);
                        logger.error(REVIEW_SERVICE_FAILURE_MESSAGE, None);
                        Ok(Step::Terminate(ReviewOutcome::ReviewServiceFailure))
                    }
                }
            }
            ReviewState::Emit { response } => {
                logger.info(&review_result_message(&response));
                Ok(Step::Terminate(ReviewOutcome::Completed { response }))
            }
        }
    }
}

/// Template text, with blank files treated the same as missing ones.
fn load_template<P: PromptStore>(store: &P, name: &str) -> Result<Option<String>, AppError> {
    Ok(store.load(name)?.filter(|text| !text.is_empty()))
}

/// Run a review using `prompt_name` as the specific template.
pub fn execute<G, P, F, L>(ctx: &ReviewContext<G, P, F, L>, prompt_name: &str) -> ReviewOutcome
where
    G: Git,
    P: PromptStore,
    F: ChatClientFactory,
    L: Logger,
{
    let mut state = ReviewState::CheckRepo;
    loop {
        match state.step(ctx, prompt_name) {
            Ok(Step::Advance(next)) => state = next,
            Ok(Step::Terminate(outcome)) => return outcome,
            Err(e) => return report_fault(ctx.logger(), &e),
        }
    }
}

/// Report a fault that escaped a review state.
pub fn report_fault<L: Logger + ?Sized>(logger: &L, error: &AppError) -> ReviewOutcome {
    let message = error.message();
    match &message {
        Some(text) => logger.error(UNEXPECTED_FAULT_MESSAGE, Some(text.as_str())),
        None => logger.error(UNKNOWN_FAULT_MESSAGE, None),
    }
    ReviewOutcome::UnexpectedFault { message }
}
