//! Workflow definition and execution

use crate::{Stage, WorkflowState};
use agent_core::{Error, Result};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, debug, debug_span};

/// A fixed, linear pipeline of stages over a state `S`
///
/// Stages run strictly in the order they were added. There are no branches
/// and no cycles; the first failing stage ends the run and its error is
/// returned as is.
///
/// # Example
///
/// ```no_run
/// use agent_workflow::{Stage, Workflow, WorkflowState};
/// use async_trait::async_trait;
///
/// #[derive(Default)]
/// struct Counter(u32);
///
/// impl WorkflowState for Counter {
///     type Update = u32;
///     fn apply(&mut self, update: u32) {
///         self.0 += update;
///     }
/// }
///
/// struct AddOne;
///
/// #[async_trait]
/// impl Stage<Counter> for AddOne {
///     fn name(&self) -> &str {
///         "add_one"
///     }
///     async fn execute(&self, _state: &Counter) -> agent_core::Result<u32> {
///         Ok(1)
///     }
/// }
///
/// # async fn example() -> agent_core::Result<()> {
/// let workflow = Workflow::<Counter>::builder().add_stage(AddOne).build()?;
/// let state = workflow.execute(Counter::default()).await?;
/// assert_eq!(state.0, 1);
/// # Ok(())
/// # }
/// ```
pub struct Workflow<S: WorkflowState> {
    stages: Vec<Arc<dyn Stage<S>>>,
}

impl<S: WorkflowState> Workflow<S> {
    /// Create a new workflow builder
    pub fn builder() -> WorkflowBuilder<S> {
        WorkflowBuilder::new()
    }

    /// Run every stage against `initial` and return the final state
    pub async fn execute(&self, initial: S) -> Result<S> {
        let mut state = initial;

        for stage in &self.stages {
            let span = debug_span!("stage", name = stage.name());
            let started = Instant::now();

            let update = match stage.execute(&state).instrument(span).await {
                Ok(update) => update,
                Err(e) => {
                    debug!(stage = stage.name(), error = %e, "Stage failed");
                    return Err(e);
                }
            };

            debug!(
                stage = stage.name(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Stage completed"
            );
            state.apply(update);
        }

        Ok(state)
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false for a built workflow
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<S: WorkflowState> std::fmt::Debug for Workflow<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workflow")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Builder for constructing workflows
pub struct WorkflowBuilder<S: WorkflowState> {
    stages: Vec<Arc<dyn Stage<S>>>,
}

impl<S: WorkflowState> WorkflowBuilder<S> {
    /// Create a new workflow builder
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the pipeline
    pub fn add_stage(mut self, stage: impl Stage<S> + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Build the workflow
    ///
    /// Fails when no stage was added or when two stages share a name.
    pub fn build(self) -> Result<Workflow<S>> {
        if self.stages.is_empty() {
            return Err(Error::InitializationFailed(
                "workflow needs at least one stage".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for stage in &self.stages {
            if !seen.insert(stage.name()) {
                return Err(Error::InitializationFailed(format!(
                    "duplicate stage name: {}",
                    stage.name()
                )));
            }
        }

        Ok(Workflow {
            stages: self.stages,
        })
    }
}

impl<S: WorkflowState> Default for WorkflowBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct Trace {
        visited: Vec<String>,
    }

    impl WorkflowState for Trace {
        type Update = String;

        fn apply(&mut self, update: String) {
            self.visited.push(update);
        }
    }

    struct Record(&'static str);

    #[async_trait]
    impl Stage<Trace> for Record {
        fn name(&self) -> &str {
            self.0
        }

        async fn execute(&self, state: &Trace) -> Result<String> {
            Ok(format!("{}@{}", self.0, state.visited.len()))
        }
    }

    struct Fail {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Stage<Trace> for Fail {
        fn name(&self) -> &str {
            "fail"
        }

        async fn execute(&self, _state: &Trace) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::InvalidValue("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn test_stages_run_in_order() {
        let workflow = Workflow::<Trace>::builder()
            .add_stage(Record("first"))
            .add_stage(Record("second"))
            .add_stage(Record("third"))
            .build()
            .unwrap();

        assert_eq!(workflow.stage_names(), vec!["first", "second", "third"]);

        let state = workflow.execute(Trace::default()).await.unwrap();
        assert_eq!(state.visited, vec!["first@0", "second@1", "third@2"]);
    }

    #[tokio::test]
    async fn test_error_stops_pipeline_unchanged() {
        let calls = Arc::new(AtomicUsize::new(0));
        let workflow = Workflow::<Trace>::builder()
            .add_stage(Record("first"))
            .add_stage(Fail {
                calls: calls.clone(),
            })
            .add_stage(Record("never"))
            .build()
            .unwrap();

        let err = workflow.execute(Trace::default()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidValue(ref msg) if msg == "boom"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_each_run_gets_its_own_state() {
        let workflow = Workflow::<Trace>::builder().add_stage(Record("only")).build().unwrap();

        let a = workflow.execute(Trace::default()).await.unwrap();
        let b = workflow.execute(Trace::default()).await.unwrap();
        assert_eq!(a.visited, b.visited);
        assert_eq!(a.visited, vec!["only@0"]);
    }

    #[test]
    fn test_empty_workflow_rejected() {
        let result = WorkflowBuilder::<Trace>::new().build();
        assert!(matches!(result, Err(Error::InitializationFailed(_))));
    }

    #[test]
    fn test_duplicate_stage_rejected() {
        let result = Workflow::<Trace>::builder()
            .add_stage(Record("same"))
            .add_stage(Record("same"))
            .build();

        match result {
            Err(Error::InitializationFailed(msg)) => assert!(msg.contains("same")),
            other => panic!("expected InitializationFailed, got {other:?}"),
        }
    }
}
