// Module registry: which dashboard module is active and which are enabled

use crate::models::Module;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Enabled/disabled flags for each dashboard module.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnabledModules {
    pub input: bool,
    pub generation: bool,
    pub templates: bool,
    pub analytics: bool,
}

impl Default for EnabledModules {
    fn default() -> Self {
        Self {
            input: true,
            generation: true,
            templates: true,
            analytics: true,
        }
    }
}

impl EnabledModules {
    pub fn is_enabled(&self, module: Module) -> bool {
        match module {
            Module::Input => self.input,
            Module::Generation => self.generation,
            Module::Templates => self.templates,
            Module::Analytics => self.analytics,
        }
    }

    fn toggle(&mut self, module: Module) {
        match module {
            Module::Input => self.input = !self.input,
            Module::Generation => self.generation = !self.generation,
            Module::Templates => self.templates = !self.templates,
            Module::Analytics => self.analytics = !self.analytics,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleState {
    pub active_module: Module,
    pub enabled_modules: EnabledModules,
}

impl Default for ModuleState {
    fn default() -> Self {
        Self {
            active_module: Module::Input,
            enabled_modules: EnabledModules::default(),
        }
    }
}

/// What the shell should render for the active module.
///
/// Toggling a module off never changes `active_module`; the shell instead
/// gets a disabled-module placeholder for it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "status", content = "module")]
pub enum ModuleView {
    Active(Module),
    Disabled(Module),
}

/// In-memory module registry; resets to defaults on restart.
pub struct ModuleRegistry {
    state: RwLock<ModuleState>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ModuleState::default()),
        }
    }

    pub fn snapshot(&self) -> Result<ModuleState, String> {
        self.state
            .read()
            .map(|s| s.clone())
            .map_err(|e| format!("Failed to acquire lock: {}", e))
    }

    /// Unconditionally switch the active module. Cannot fail.
    pub fn set_active_module(&self, module: Module) -> Result<ModuleState, String> {
        let mut state = self
            .state
            .write()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;
        state.active_module = module;
        Ok(state.clone())
    }

    /// Flip a module's enabled flag. The active module can be disabled.
    pub fn toggle_module(&self, module: Module) -> Result<ModuleState, String> {
        let mut state = self
            .state
            .write()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;
        state.enabled_modules.toggle(module);
        Ok(state.clone())
    }

    /// Render decision for the shell.
    pub fn active_view(&self) -> Result<ModuleView, String> {
        let state = self
            .state
            .read()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;
        if state.enabled_modules.is_enabled(state.active_module) {
            Ok(ModuleView::Active(state.active_module))
        } else {
            Ok(ModuleView::Disabled(state.active_module))
        }
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
