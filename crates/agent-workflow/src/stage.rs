//! Stage and state contracts

use agent_core::Result;
use async_trait::async_trait;

/// State record carried through a [`Workflow`](crate::Workflow)
///
/// Stages do not write to the state directly. They return an `Update`
/// and the workflow folds it in with [`apply`](Self::apply).
pub trait WorkflowState: Send + Sync {
    /// Delta produced by a single stage
    type Update: Send;

    /// Merge a stage's delta into the state
    fn apply(&mut self, update: Self::Update);
}

/// One step of a linear pipeline
#[async_trait]
pub trait Stage<S: WorkflowState>: Send + Sync {
    /// Stage name, unique within a workflow
    fn name(&self) -> &str;

    /// Compute this stage's delta from the current state
    async fn execute(&self, state: &S) -> Result<S::Update>;
}
