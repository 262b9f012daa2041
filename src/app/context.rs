use crate::ports::{ChatClientFactory, Git, Logger, PromptStore};

/// Collaborators a review run needs.
pub struct ReviewContext<G: Git, P: PromptStore, F: ChatClientFactory, L: Logger> {
    git: G,
    prompts: P,
    chat: F,
    logger: L,
}

impl<G: Git, P: PromptStore, F: ChatClientFactory, L: Logger> ReviewContext<G, P, F, L> {
    pub fn new(git: G, prompts: P, chat: F, logger: L) -> Self {
        Self { git, prompts, chat, logger }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn prompts(&self) -> &P {
        &self.prompts
    }

    pub fn chat(&self) -> &F {
        &self.chat
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }
}
