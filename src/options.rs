//! Registration options.

use rustc_hash::FxHashSet;

/// Functions skipped by default.
///
/// Logging helpers, settings persistence and the deprecated capture
/// overrides are host concerns and stay out of the script surface unless a
/// host opts in with [`BindingOptions::allow`].
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "LogToTTY",
    "LogToFile",
    "LogToClipboard",
    "LogText",
    "LogButtons",
    "LogFinish",
    "SaveIniSettingsToDisk",
    "SaveIniSettingsToMemory",
    "CaptureKeyboardFromApp",
    "CaptureMouseFromApp",
    "MemAlloc",
    "MemFree",
    "SetAllocatorFunctions",
];

/// Options for [`register_interface_with`](crate::register_interface_with).
///
/// ```
/// use imgui_script::BindingOptions;
///
/// let options = BindingOptions::new()
///     .with_namespace("Gui")
///     .blacklist("ShowDemoWindow")
///     .allow("LogText");
/// assert!(options.is_blacklisted("ShowDemoWindow"));
/// assert!(!options.is_blacklisted("LogText"));
/// ```
#[derive(Debug, Clone)]
pub struct BindingOptions {
    /// `::`-separated namespace; empty for the global namespace.
    pub namespace: String,
    /// Script-visible names of functions to skip.
    pub blacklist: FxHashSet<String>,
    /// Register value-type constructors.
    pub register_constructors: bool,
    /// Register methods of handle types.
    pub register_methods: bool,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            namespace: "ImGui".to_string(),
            blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
            register_constructors: true,
            register_methods: true,
        }
    }
}

impl BindingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register into `namespace` (`""` for the global namespace).
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Skip a function.
    pub fn blacklist(mut self, name: impl Into<String>) -> Self {
        self.blacklist.insert(name.into());
        self
    }

    /// Skip several functions.
    pub fn with_blacklist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist.extend(names.into_iter().map(Into::into));
        self
    }

    /// Register a function even if it is blacklisted.
    pub fn allow(mut self, name: &str) -> Self {
        self.blacklist.remove(name);
        self
    }

    pub fn without_constructors(mut self) -> Self {
        self.register_constructors = false;
        self
    }

    pub fn without_methods(mut self) -> Self {
        self.register_methods = false;
        self
    }

    pub fn is_blacklisted(&self, name: &str) -> bool {
        self.blacklist.contains(name)
    }

    /// The namespace split into its components.
    pub fn namespace_path(&self) -> Vec<String> {
        self.namespace
            .split("::")
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
