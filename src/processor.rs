//! Round-driven manifest processing.
//!
//! A [`ManifestProcessor`] is set up once from the option string, then fed
//! rounds of declarations. Every non-terminal round advances the pending
//! resolvers; the terminal round finalizes them and merges the results into
//! the manifest held by a [`ManifestStore`].

use anyhow::Context as AnyhowContext;
use tracing::{debug, trace};

use crate::attributes::known::{self, MANIFEST_VERSION, MANIFEST_VERSION_VALUE};
use crate::attributes::{AttributeName, AttributeTable, AttributeValue};
use crate::config::{parse_options, OptionValue, DEFAULT_OPTIONS};
use crate::diagnostics::Diagnostics;
use crate::engine::DeclarationVisitor;
use crate::env::BuildEnvironment;
use crate::error::ConfigError;
use crate::manifest::{Manifest, ManifestStore, MANIFEST_NAME};
use crate::model::Declaration;

/// One pass over the declarations available so far.
#[derive(Debug, Clone, Copy)]
pub struct Round<'a> {
    pub roots: &'a [Declaration],
    pub terminal: bool,
}

impl<'a> Round<'a> {
    pub fn new(roots: &'a [Declaration]) -> Self {
        Self {
            roots,
            terminal: false,
        }
    }

    /// The last round: no new declarations, finalize and write.
    pub fn terminal() -> Self {
        Self {
            roots: &[],
            terminal: true,
        }
    }
}

pub struct ManifestProcessor {
    table: AttributeTable,
    diagnostics: Diagnostics,
    merged: Vec<(AttributeName, String)>,
    finished: bool,
}

impl ManifestProcessor {
    /// Builds the attribute table from `options`, or from `Main-Class` when
    /// no options are given. Problems with individual entries are reported
    /// as warnings and the entry is skipped.
    pub fn new(options: Option<&str>, env: &BuildEnvironment) -> Self {
        let mut processor = Self {
            table: AttributeTable::new(),
            diagnostics: Diagnostics::new(),
            merged: Vec::new(),
            finished: false,
        };
        processor.init(options.unwrap_or(DEFAULT_OPTIONS), env);
        processor
    }

    fn init(&mut self, options: &str, env: &BuildEnvironment) {
        for option in parse_options(options) {
            if let Err(e) = self.register(&option.name, option.value, env) {
                self.diagnostics.warning(e.to_string());
            }
        }
        debug!(attributes = self.table.len(), "initialized attribute table");
    }

    fn register(&mut self, name: &str, value: OptionValue, env: &BuildEnvironment) -> Result<(), ConfigError> {
        let name = AttributeName::configurable(name)?;
        let value = match value {
            OptionValue::Explicit(v) => AttributeValue::Literal(v),
            OptionValue::Resolve => known::default_value(&name, env)?,
        };
        self.table.add(name, value)
    }

    pub fn process_round<S: ManifestStore>(&mut self, round: &Round<'_>, store: &mut S) {
        if self.finished {
            debug!("ignoring round after the terminal round");
            return;
        }
        if round.terminal {
            self.finished = true;
            if let Err(e) = self.write_manifest(store) {
                self.diagnostics.error(format!("{e:?}"));
            }
        } else {
            self.visit_roots(round.roots);
        }
    }

    fn visit_roots(&mut self, roots: &[Declaration]) {
        trace!(roots = roots.len(), "processing round");
        for (name, resolver) in self.table.pending_mut() {
            trace!(attribute = %name, "visiting roots");
            resolver.visit_roots(roots);
        }
    }

    fn write_manifest<S: ManifestStore>(&mut self, store: &mut S) -> anyhow::Result<()> {
        let mut manifest = store
            .read()
            .with_context(|| format!("failed to read {MANIFEST_NAME}"))?
            .unwrap_or_default();
        let added = self.update_manifest(&mut manifest);
        store
            .write(&manifest)
            .with_context(|| format!("failed to write {MANIFEST_NAME}"))?;

        for (name, value) in added {
            self.diagnostics.note(format!("{name}: {value}"));
            self.merged.push((name, value));
        }
        Ok(())
    }

    /// Finalizes the table into `manifest` and returns the entries that were
    /// actually added.
    fn update_manifest(&mut self, manifest: &mut Manifest) -> Vec<(AttributeName, String)> {
        let attributes = &mut manifest.main;
        attributes.insert_if_absent(AttributeName::known(MANIFEST_VERSION), MANIFEST_VERSION_VALUE);

        let mut added = Vec::new();
        for (name, value) in self.table.drain() {
            let value = match value {
                AttributeValue::Literal(v) => v,
                AttributeValue::Pending(resolver) => match resolver.finalize() {
                    Ok(v) => v,
                    Err(e) => {
                        self.diagnostics.warning(e.to_string());
                        continue;
                    }
                },
            };

            if attributes.insert_if_absent(name.clone(), value.clone()) {
                added.push((name, value));
            } else {
                debug!(attribute = %name, "keeping existing manifest value");
            }
        }
        added
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Attributes this processor added to the manifest, in order.
    pub fn merged(&self) -> &[(AttributeName, String)] {
        &self.merged
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
