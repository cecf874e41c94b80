/// Opaque stable handle for a loaded package.
///
/// Two [`crate::loader::Package`] instances with the same import path within
/// one invocation must map to the same `PackageId` — callers are expected to
/// derive it from `(import_path, module_version)`, which is exactly what
/// [`PackageId::new`] does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(String);

impl PackageId {
    /// Builds a `PackageId` from a package's canonical import path and its
    /// module's resolved version.
    pub fn new(import_path: impl AsRef<str>, module_version: impl AsRef<str>) -> Self {
        Self(format!("{}@{}", import_path.as_ref(), module_version.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
