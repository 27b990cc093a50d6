use crate::step::Step;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    #[default]
    Sticky,
    /// Retreating to a step drops the markers of that step and everything after it.
    RetractOnRetreat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Current,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEntry {
    pub step: Step,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepController {
    current: Step,
    completed: BTreeSet<Step>,
    policy: CompletionPolicy,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new(CompletionPolicy::default())
    }
}

impl StepController {
    pub fn new(policy: CompletionPolicy) -> Self {
        Self {
            current: Step::Upload,
            completed: BTreeSet::new(),
            policy,
        }
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn completed(&self) -> impl Iterator<Item = Step> + '_ {
        self.completed.iter().copied()
    }

    pub fn is_completed(&self, step: Step) -> bool {
        self.completed.contains(&step)
    }

    pub fn advance(&mut self) -> bool {
        let Some(next) = self.current.next() else {
            return false;
        };
        self.completed.insert(self.current);
        self.current = next;
        true
    }

    pub fn retreat(&mut self) -> bool {
        let Some(previous) = self.current.previous() else {
            return false;
        };
        if self.policy == CompletionPolicy::RetractOnRetreat {
            self.completed.retain(|step| *step < previous);
        }
        self.current = previous;
        true
    }

    pub fn progress(&self) -> Vec<ProgressEntry> {
        Step::ALL
            .iter()
            .map(|&step| {
                let status = if step == self.current {
                    StepStatus::Current
                } else if self.completed.contains(&step) {
                    StepStatus::Completed
                } else {
                    StepStatus::Pending
                };
                ProgressEntry { step, status }
            })
            .collect()
    }
}
