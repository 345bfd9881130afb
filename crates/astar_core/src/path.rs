//! Persistent, singly linked route representation.
use std::{fmt, rc::Rc};

use crate::{constants::Weight, graph::NodeIndex};

#[derive(Debug)]
struct Step {
    last_step: NodeIndex,
    previous_steps: Option<Path>,
    total_cost: Weight,
}

impl Drop for Step {
    // Unlink iteratively, a recursive drop of a long chain overflows the stack
    fn drop(&mut self) {
        let mut next = self.previous_steps.take();
        while let Some(Path(step)) = next {
            match Rc::try_unwrap(step) {
                Ok(mut step) => next = step.previous_steps.take(),
                Err(_) => break,
            }
        }
    }
}

/// An immutable route ending in [`Path::last_step`].
///
/// Extending a path never touches it: [`Path::add_step`] returns a new link
/// that shares the whole existing chain as its tail. Cloning is a reference
/// count increment.
#[derive(Debug, Clone)]
pub struct Path(Rc<Step>);

impl Path {
    /// Creates a path consisting of `start` only, with a total cost of 0.
    pub fn new(start: NodeIndex) -> Self {
        Path(Rc::new(Step {
            last_step: start,
            previous_steps: None,
            total_cost: 0.0,
        }))
    }

    /// Returns a new path continuing this one to `step`.
    pub fn add_step(&self, step: NodeIndex, step_cost: Weight) -> Path {
        Path(Rc::new(Step {
            last_step: step,
            previous_steps: Some(self.clone()),
            total_cost: self.total_cost() + step_cost,
        }))
    }

    pub fn last_step(&self) -> NodeIndex {
        self.0.last_step
    }

    /// The path without its last step, `None` for the start.
    pub fn previous_steps(&self) -> Option<&Path> {
        self.0.previous_steps.as_ref()
    }

    pub fn total_cost(&self) -> Weight {
        self.0.total_cost
    }

    /// Cost of the last step alone
    pub fn step_cost(&self) -> Weight {
        match self.previous_steps() {
            Some(previous) => self.total_cost() - previous.total_cost(),
            None => 0.0,
        }
    }

    pub fn start(&self) -> NodeIndex {
        self.iter()
            .last()
            .map(Path::last_step)
            .unwrap_or_else(|| self.last_step())
    }

    /// Number of nodes on the path, the start included.
    pub fn num_steps(&self) -> usize {
        self.iter().count()
    }

    /// Walks from this path back to the start, yielding every prefix.
    pub fn iter(&self) -> Steps<'_> {
        Steps { next: Some(self) }
    }

    /// Nodes from start to destination.
    pub fn nodes(&self) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = self.iter().map(Path::last_step).collect();
        nodes.reverse();
        nodes
    }

    /// True if both paths are the very same link.
    pub fn ptr_eq(&self, other: &Path) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Iterator over the prefixes of a [`Path`], destination first.
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    next: Option<&'a Path>,
}

impl<'a> Iterator for Steps<'a> {
    type Item = &'a Path;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.previous_steps();
        Some(current)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Path;
    type IntoIter = Steps<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path[Cost = {}]: ", self.total_cost())?;
        let nodes = self.nodes();
        write!(f, "{}", nodes[0])?;
        for node in nodes.iter().skip(1) {
            write!(f, " -> {}", node)?;
        }
        Ok(())
    }
}
