use std::fmt::{self, Debug, Write as _};

use crate::text::normalize_diacritics;

/// `tracing` target for every audit event.
pub const TARGET: &str = "brdoc::audit";

/// Point in a call an event was emitted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Before the wrapped call runs.
    Entry,
    /// After the wrapped call returned.
    Exit,
}

impl Stage {
    /// Value of the `stage` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named argument handed to [`Invocation::run`].
#[derive(Clone, Copy)]
pub struct Arg<'a> {
    /// Parameter name matched against [`Invocation::record_args`].
    pub name: &'static str,
    /// Value, rendered with `Debug`.
    pub value: &'a dyn Debug,
}

impl<'a> Arg<'a> {
    /// Pair a parameter name with its value.
    pub fn new(name: &'static str, value: &'a dyn Debug) -> Self {
        Self { name, value }
    }
}

impl Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.name, self.value)
    }
}

/// Describes what to log around one call.
///
/// Built by the call site; there is no attribute or runtime metadata
/// involved. Defaults: no description, every argument recorded, exit
/// event on, result recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    component: &'static str,
    method: &'static str,
    description: Option<String>,
    record_args: Vec<&'static str>,
    record_exit: bool,
    record_result: bool,
}

impl Invocation {
    /// Descriptor for `method` of `component`, with the defaults above.
    pub fn new(component: &'static str, method: &'static str) -> Self {
        Self {
            component,
            method,
            description: None,
            record_args: Vec::new(),
            record_exit: true,
            record_result: true,
        }
    }

    /// Human-readable purpose. Diacritics are stripped; a blank
    /// description is dropped.
    pub fn description(mut self, description: &str) -> Self {
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(normalize_diacritics(description))
        };
        self
    }

    /// Restrict the entry event to these argument names. Empty records all.
    pub fn record_args(mut self, names: &[&'static str]) -> Self {
        self.record_args = names.to_vec();
        self
    }

    /// Emit an exit event when the call returns.
    pub fn record_exit(mut self, on: bool) -> Self {
        self.record_exit = on;
        self
    }

    /// Include the return value in the exit event. No effect when the exit
    /// event is off.
    pub fn record_result(mut self, on: bool) -> Self {
        self.record_result = on;
        self
    }

    /// Component name logged with every event.
    pub fn component(&self) -> &'static str {
        self.component
    }

    /// Method name logged with every event.
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Normalized description, if any.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `true` if an argument with this name goes into the entry event.
    pub fn records_arg(&self, name: &str) -> bool {
        self.record_args.is_empty() || self.record_args.contains(&name)
    }

    /// Log entry, run `f`, log exit. The result is returned untouched.
    pub fn run<R: Debug>(&self, args: &[Arg<'_>], f: impl FnOnce() -> R) -> R {
        self.entry(args);
        let result = f();
        self.exit(&result);
        result
    }

    fn entry(&self, args: &[Arg<'_>]) {
        let rendered = self.render_args(args);
        tracing::info!(
            target: TARGET,
            component = self.component,
            method = self.method,
            stage = Stage::Entry.as_str(),
            description = self.description.as_deref(),
            args = %rendered,
        );
    }

    fn exit<R: Debug>(&self, result: &R) {
        if !self.record_exit {
            return;
        }
        if self.record_result {
            tracing::info!(
                target: TARGET,
                component = self.component,
                method = self.method,
                stage = Stage::Exit.as_str(),
                description = self.description.as_deref(),
                result = ?result,
            );
        } else {
            tracing::info!(
                target: TARGET,
                component = self.component,
                method = self.method,
                stage = Stage::Exit.as_str(),
                description = self.description.as_deref(),
            );
        }
    }

    fn render_args(&self, args: &[Arg<'_>]) -> String {
        let mut out = String::new();
        for arg in args.iter().filter(|a| self.records_arg(a.name)) {
            if !out.is_empty() {
                out.push_str(", ");
            }
            let _ = write!(out, "{arg:?}");
        }
        out
    }
}
