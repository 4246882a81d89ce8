// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The module loader (SPEC_FULL.md §4.4): walks the modules directory,
//! resolves each discovered `.chart.py` marker to either a statically
//! registered in-process module or an executable subprocess module, and
//! applies selection/disable-list filtering. Generic over where a given
//! collector's code actually lives — the directory walk and filtering
//! logic never need to know.

use crate::registry::StaticRegistry;
use crate::subprocess::SubprocessModule;
use crate::Module;
use chartsup_core::ModuleName;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("modules directory {0} does not exist")]
    DirMissing(PathBuf),
    #[error("failed to read {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("no built-in or executable module named {0}")]
    NotFound(ModuleName),
}

pub struct ModuleLoader {
    registry: StaticRegistry,
}

impl ModuleLoader {
    pub fn new(registry: StaticRegistry) -> Self {
        Self { registry }
    }

    /// List every `.chart.py` marker in `modules_dir`, stripped to module
    /// names, sorted for deterministic discovery-mode ordering.
    pub fn discover_dir(&self, modules_dir: &Path) -> Result<Vec<ModuleName>, LoadError> {
        if !modules_dir.is_dir() {
            return Err(LoadError::DirMissing(modules_dir.to_path_buf()));
        }
        let mut names = Vec::new();
        for entry in
            fs::read_dir(modules_dir).map_err(|e| LoadError::Io(modules_dir.to_path_buf(), e))?
        {
            let entry = entry.map_err(|e| LoadError::Io(modules_dir.to_path_buf(), e))?;
            if let Some(name) = entry
                .file_name()
                .to_str()
                .and_then(ModuleName::from_filename)
            {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn resolve_one(
        &self,
        modules_dir: &Path,
        name: &ModuleName,
    ) -> Result<Arc<dyn Module>, LoadError> {
        if let Some(module) = self.registry.load(name) {
            return Ok(module);
        }
        let path = modules_dir.join(name.filename());
        if is_executable(&path) {
            return Ok(Arc::new(SubprocessModule::new(name.clone(), path)));
        }
        Err(LoadError::NotFound(name.clone()))
    }

    /// Load modules per SPEC_FULL.md §4.4: explicit `selection` demands
    /// every entry succeed (fatal to the caller on the first failure);
    /// an empty selection walks the directory and tolerates individual
    /// load failures, returning whatever did load.
    pub fn load(
        &self,
        modules_dir: &Path,
        selection: &[ModuleName],
        disabled: &[ModuleName],
    ) -> Result<Vec<Arc<dyn Module>>, LoadError> {
        if !modules_dir.is_dir() {
            return Err(LoadError::DirMissing(modules_dir.to_path_buf()));
        }

        let mut modules = Vec::new();
        if !selection.is_empty() {
            for name in selection {
                if disabled.contains(name) {
                    continue;
                }
                match self.resolve_one(modules_dir, name) {
                    Ok(module) => modules.push(module),
                    Err(err) => {
                        tracing::error!(module = %name, error = %err, "failed to load explicitly selected module");
                        return Err(err);
                    }
                }
            }
        } else {
            for name in self.discover_dir(modules_dir)? {
                if disabled.contains(&name) {
                    continue;
                }
                match self.resolve_one(modules_dir, &name) {
                    Ok(module) => modules.push(module),
                    Err(err) => {
                        tracing::debug!(module = %name, error = %err, "skipping module that failed to load");
                    }
                }
            }
        }
        Ok(modules)
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
