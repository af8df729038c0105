//! Delivery candidates built per paste call

use std::fmt;
use std::time::Duration;

use super::mechanism::Mechanism;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation from a program and arguments
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// One viable way to deliver the paste, with its timing.
///
/// `escalation` names the mechanism to run when this one fails, ahead of the
/// rest of the ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryCandidate {
    pub mechanism: Mechanism,
    pub invocation: Invocation,
    pub pre_delay: Duration,
    pub timeout: Duration,
    pub restore_delay: Duration,
    pub escalation: Option<Box<DeliveryCandidate>>,
}

impl DeliveryCandidate {
    /// Create a candidate using the mechanism's tuned timing
    pub fn new(mechanism: Mechanism, invocation: Invocation) -> Self {
        let timing = mechanism.timing();
        Self {
            mechanism,
            invocation,
            pre_delay: timing.pre_delay,
            timeout: timing.timeout,
            restore_delay: timing.restore_delay,
            escalation: None,
        }
    }

    /// Run `fallback` immediately when this candidate fails
    pub fn escalate_to(mut self, fallback: DeliveryCandidate) -> Self {
        self.escalation = Some(Box::new(fallback));
        self
    }

    /// Mechanisms this candidate may run, itself first
    pub fn chain(&self) -> Vec<Mechanism> {
        let mut chain = vec![self.mechanism];
        let mut next = self.escalation.as_deref();
        while let Some(candidate) = next {
            chain.push(candidate.mechanism);
            next = candidate.escalation.as_deref();
        }
        chain
    }
}
