use std::fmt;

/// Namespace-qualified name of a bound type or function.
///
/// Used as the primary key of the engine tables. The whole GUI surface is
/// normally installed under a single namespace such as `ImGui`.
///
/// # Examples
///
/// ```
/// use imgui_script_core::QualifiedName;
///
/// let button = QualifiedName::new("Button", vec!["ImGui".into()]);
/// assert_eq!(button.to_string(), "ImGui::Button");
/// assert_eq!(QualifiedName::from_qualified_string("ImGui::Button"), button);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    /// Simple name (e.g., "Button", "Vec2")
    pub name: String,
    /// Namespace path, empty for the global namespace
    pub namespace: Vec<String>,
}

impl QualifiedName {
    /// Create a new qualified name with namespace.
    pub fn new(name: impl Into<String>, namespace: Vec<String>) -> Self {
        Self {
            name: name.into(),
            namespace,
        }
    }

    /// Create a qualified name in the global namespace.
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Vec::new(),
        }
    }

    /// Parse a `::`-separated string. A leading `::` is ignored.
    pub fn from_qualified_string(s: &str) -> Self {
        let parts: Vec<&str> = s.split("::").filter(|p| !p.is_empty()).collect();
        match parts.split_last() {
            None => Self::global(""),
            Some((name, namespace)) => Self {
                name: (*name).to_string(),
                namespace: namespace.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    /// Check if this is in the global namespace.
    pub fn is_global(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Get the simple (unqualified) name.
    pub fn simple_name(&self) -> &str {
        &self.name
    }

    /// Get the namespace as a joined string.
    pub fn namespace_string(&self) -> String {
        self.namespace.join("::")
    }

    /// A name for a member of this type (`Vec2` + `x` = `Vec2::x`).
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut namespace = self.namespace.clone();
        namespace.push(self.name.clone());
        Self {
            name: name.into(),
            namespace,
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ns in &self.namespace {
            write!(f, "{ns}::")?;
        }
        f.write_str(&self.name)
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        Self::from_qualified_string(s)
    }
}
