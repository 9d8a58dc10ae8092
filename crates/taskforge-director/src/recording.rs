// Recording score director for notification trace capture.
//
// The `RecordingScoreDirector` wraps an existing score director, forwards
// every call to it and keeps the ordered trace of notifications:
//
// ```text
// let mut recording = RecordingScoreDirector::new(&mut inner_sd);
// change.apply(&mut recording)?;
// recording.verify_brackets()?;          // pairing, nesting, single trigger
// let trace = recording.take_events();
// ```

use std::fmt;

use taskforge_core::{EntityRef, Result, TaskAssigningSolution, TaskForgeError, TaskId};

use super::ScoreDirector;

/// A single call received by a score director.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorEvent {
    BeforeProblemFactAdded(EntityRef),
    AfterProblemFactAdded(EntityRef),
    BeforeProblemFactRemoved(EntityRef),
    AfterProblemFactRemoved(EntityRef),
    BeforeProblemPropertyChanged(EntityRef),
    AfterProblemPropertyChanged(EntityRef),
    BeforeVariableChanged { task: TaskId, variable: String },
    AfterVariableChanged { task: TaskId, variable: String },
    TriggerVariableListeners,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    FactAdded(EntityRef),
    FactRemoved(EntityRef),
    PropertyChanged(EntityRef),
    VariableChanged(TaskId),
}

impl DirectorEvent {
    fn opens(&self) -> Option<Bracket> {
        match self {
            DirectorEvent::BeforeProblemFactAdded(e) => Some(Bracket::FactAdded(*e)),
            DirectorEvent::BeforeProblemFactRemoved(e) => Some(Bracket::FactRemoved(*e)),
            DirectorEvent::BeforeProblemPropertyChanged(e) => Some(Bracket::PropertyChanged(*e)),
            DirectorEvent::BeforeVariableChanged { task, .. } => {
                Some(Bracket::VariableChanged(*task))
            }
            _ => None,
        }
    }

    fn closes(&self) -> Option<Bracket> {
        match self {
            DirectorEvent::AfterProblemFactAdded(e) => Some(Bracket::FactAdded(*e)),
            DirectorEvent::AfterProblemFactRemoved(e) => Some(Bracket::FactRemoved(*e)),
            DirectorEvent::AfterProblemPropertyChanged(e) => Some(Bracket::PropertyChanged(*e)),
            DirectorEvent::AfterVariableChanged { task, .. } => {
                Some(Bracket::VariableChanged(*task))
            }
            _ => None,
        }
    }
}

impl fmt::Display for DirectorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectorEvent::BeforeProblemFactAdded(e) => write!(f, "beforeProblemFactAdded({e})"),
            DirectorEvent::AfterProblemFactAdded(e) => write!(f, "afterProblemFactAdded({e})"),
            DirectorEvent::BeforeProblemFactRemoved(e) => {
                write!(f, "beforeProblemFactRemoved({e})")
            }
            DirectorEvent::AfterProblemFactRemoved(e) => write!(f, "afterProblemFactRemoved({e})"),
            DirectorEvent::BeforeProblemPropertyChanged(e) => {
                write!(f, "beforeProblemPropertyChanged({e})")
            }
            DirectorEvent::AfterProblemPropertyChanged(e) => {
                write!(f, "afterProblemPropertyChanged({e})")
            }
            DirectorEvent::BeforeVariableChanged { task, variable } => {
                write!(f, "beforeVariableChanged(task {task}, {variable})")
            }
            DirectorEvent::AfterVariableChanged { task, variable } => {
                write!(f, "afterVariableChanged(task {task}, {variable})")
            }
            DirectorEvent::TriggerVariableListeners => f.write_str("triggerVariableListeners()"),
        }
    }
}

// A score director wrapper that records every notification it forwards.
//
// Used by assert environment modes and by tests comparing call traces.
//
// # Example
//
// ```
// use taskforge_core::{EntityRef, TaskAssigningSolution, UserId};
// use taskforge_director::{DirectorEvent, RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};
//
// let mut inner = SimpleScoreDirector::new(TaskAssigningSolution::new());
// let mut recording = RecordingScoreDirector::new(&mut inner);
//
// recording.before_problem_property_changed(EntityRef::User(UserId(1)));
// recording.after_problem_property_changed(EntityRef::User(UserId(1)));
// recording.trigger_variable_listeners();
//
// assert_eq!(recording.events().len(), 3);
// assert!(recording.verify_brackets().is_ok());
// ```
pub struct RecordingScoreDirector<'a> {
    inner: &'a mut dyn ScoreDirector,
    events: Vec<DirectorEvent>,
}

impl<'a> RecordingScoreDirector<'a> {
    // Creates a new recording score director wrapping the inner director.
    pub fn new(inner: &'a mut dyn ScoreDirector) -> Self {
        Self {
            inner,
            events: Vec::with_capacity(16),
        }
    }

    // Returns the recorded trace, oldest first.
    pub fn events(&self) -> &[DirectorEvent] {
        &self.events
    }

    // Returns the recorded trace and clears it for reuse.
    pub fn take_events(&mut self) -> Vec<DirectorEvent> {
        std::mem::take(&mut self.events)
    }

    // Number of `trigger_variable_listeners` calls recorded.
    pub fn trigger_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| **e == DirectorEvent::TriggerVariableListeners)
            .count()
    }

    // Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    // Checks the recorded trace against the notification contract.
    //
    // Every before call must be closed by the matching after call for the
    // same entity, brackets must nest, and listeners are triggered at most
    // once, outside of any bracket, as the last call.
    pub fn verify_brackets(&self) -> Result<()> {
        let mut open: Vec<Bracket> = Vec::new();
        let mut triggered = false;

        for (i, event) in self.events.iter().enumerate() {
            if triggered {
                return Err(contract(format!("{event} at {i} after triggerVariableListeners()")));
            }
            if let Some(bracket) = event.opens() {
                open.push(bracket);
            } else if let Some(bracket) = event.closes() {
                if open.pop() != Some(bracket) {
                    return Err(contract(format!("{event} at {i} does not close the open bracket")));
                }
            } else if !open.is_empty() {
                return Err(contract(format!("{event} at {i} inside an open bracket")));
            } else {
                triggered = true;
            }
        }

        if let Some(bracket) = open.last() {
            return Err(contract(format!("unclosed bracket {bracket:?}")));
        }
        Ok(())
    }
}

fn contract(message: String) -> TaskForgeError {
    TaskForgeError::InvariantViolation(format!("notification contract: {message}"))
}

impl ScoreDirector for RecordingScoreDirector<'_> {
    fn working_solution(&self) -> &TaskAssigningSolution {
        self.inner.working_solution()
    }

    fn working_solution_mut(&mut self) -> &mut TaskAssigningSolution {
        self.inner.working_solution_mut()
    }

    fn look_up_working_object(&self, prototype: EntityRef) -> Option<EntityRef> {
        self.inner.look_up_working_object(prototype)
    }

    fn before_problem_fact_added(&mut self, entity: EntityRef) {
        self.events.push(DirectorEvent::BeforeProblemFactAdded(entity));
        self.inner.before_problem_fact_added(entity);
    }

    fn after_problem_fact_added(&mut self, entity: EntityRef) {
        self.events.push(DirectorEvent::AfterProblemFactAdded(entity));
        self.inner.after_problem_fact_added(entity);
    }

    fn before_problem_fact_removed(&mut self, entity: EntityRef) {
        self.events.push(DirectorEvent::BeforeProblemFactRemoved(entity));
        self.inner.before_problem_fact_removed(entity);
    }

    fn after_problem_fact_removed(&mut self, entity: EntityRef) {
        self.events.push(DirectorEvent::AfterProblemFactRemoved(entity));
        self.inner.after_problem_fact_removed(entity);
    }

    fn before_problem_property_changed(&mut self, entity: EntityRef) {
        self.events
            .push(DirectorEvent::BeforeProblemPropertyChanged(entity));
        self.inner.before_problem_property_changed(entity);
    }

    fn after_problem_property_changed(&mut self, entity: EntityRef) {
        self.events
            .push(DirectorEvent::AfterProblemPropertyChanged(entity));
        self.inner.after_problem_property_changed(entity);
    }

    fn before_variable_changed(&mut self, task: TaskId, variable_name: &str) {
        self.events.push(DirectorEvent::BeforeVariableChanged {
            task,
            variable: variable_name.to_string(),
        });
        self.inner.before_variable_changed(task, variable_name);
    }

    fn after_variable_changed(&mut self, task: TaskId, variable_name: &str) {
        self.events.push(DirectorEvent::AfterVariableChanged {
            task,
            variable: variable_name.to_string(),
        });
        self.inner.after_variable_changed(task, variable_name);
    }

    fn trigger_variable_listeners(&mut self) {
        self.events.push(DirectorEvent::TriggerVariableListeners);
        self.inner.trigger_variable_listeners();
    }
}
