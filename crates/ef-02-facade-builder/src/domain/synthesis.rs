//! # Event Synthesis Table
//!
//! Maps each declared event kind to the function that turns the native
//! callback's raw arguments into an [`Event`]. The keys are exactly the
//! `on<kind>` slots a facade installs on its wrapped object.

use crate::error::FacadeError;
use shared_bus::Event;
use shared_types::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Builds an event from raw callback arguments.
pub type Synthesizer = Arc<dyn Fn(&[Value]) -> Event + Send + Sync>;

/// Event kind → synthesizer.
#[derive(Clone, Default)]
pub struct SynthesisTable {
    entries: BTreeMap<String, Synthesizer>,
}

impl SynthesisTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to declare `kind` with a custom synthesizer.
    pub fn with(
        mut self,
        kind: impl Into<String>,
        synthesize: impl Fn(&[Value]) -> Event + Send + Sync + 'static,
    ) -> Self {
        self.insert(kind, synthesize);
        self
    }

    /// Builder-style method to declare `kind` with events that carry no
    /// detail.
    pub fn plain(self, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        let tag = kind.clone();
        self.with(kind, move |_| Event::new(tag.clone()))
    }

    /// Builder-style method to declare `kind` with events whose detail is the
    /// raw arguments: the single argument itself, `null` for none, or an
    /// array for several.
    pub fn passthrough(self, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        let tag = kind.clone();
        self.with(kind, move |raw| Event::with_detail(tag.clone(), raw_detail(raw)))
    }

    /// Declare `kind`, replacing any previous synthesizer.
    pub fn insert(
        &mut self,
        kind: impl Into<String>,
        synthesize: impl Fn(&[Value]) -> Event + Send + Sync + 'static,
    ) -> Option<Synthesizer> {
        self.entries.insert(kind.into(), Arc::new(synthesize))
    }

    /// Declared kinds, sorted.
    pub fn kinds(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject kinds that cannot name an `on<kind>` slot.
    pub fn validate(&self) -> Result<(), FacadeError> {
        for kind in self.kinds() {
            if kind.is_empty() || kind.chars().any(char::is_whitespace) {
                return Err(FacadeError::InvalidEventKind(kind.to_string()));
            }
        }
        Ok(())
    }

    /// Synthesize the event for `kind` from raw callback arguments.
    ///
    /// The returned event is always tagged with `kind`; a synthesizer that
    /// produced another tag is logged and corrected.
    pub fn synthesize(&self, kind: &str, raw: &[Value]) -> Option<Event> {
        let synthesize = self.entries.get(kind)?;
        let event = synthesize(raw);

        if event.kind() == kind {
            return Some(event);
        }

        warn!(
            kind = %kind,
            produced = %event.kind(),
            "Synthesized event carries the wrong kind, re-tagging"
        );
        Some(event.retagged(kind))
    }
}

impl fmt::Debug for SynthesisTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

fn raw_detail(raw: &[Value]) -> Value {
    match raw {
        [] => Value::Null,
        [single] => single.clone(),
        many => Value::Array(many.to_vec()),
    }
}
