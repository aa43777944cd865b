//! Core traits for Syllabus.
//!
//! [`ConfigProvider`] is the seam through which hosts tell the pipeline where
//! content lives. The catalog never reads a global constant for its root;
//! it asks its provider.

use std::path::PathBuf;

use crate::Result;

/// Trait for supplying content locations.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across tasks
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use syllabus_core::traits::ConfigProvider;
/// use syllabus_core::Result;
///
/// #[derive(Clone)]
/// struct TutorialsConfig {
///     root: PathBuf,
/// }
///
/// impl ConfigProvider for TutorialsConfig {
///     fn project_name(&self) -> &str {
///         "tutorials"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.root.clone())
///     }
///
///     fn content_path(&self, section: &str) -> Result<PathBuf> {
///         Ok(self.root.join(section))
///     }
/// }
///
/// let config = TutorialsConfig { root: PathBuf::from("/srv/tutorials") };
/// assert_eq!(
///     config.content_path("Beginner").unwrap(),
///     PathBuf::from("/srv/tutorials/Beginner")
/// );
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used in log messages.
    fn project_name(&self) -> &str;

    /// Root directory under which all content lives.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn base_path(&self) -> Result<PathBuf>;

    /// Directory holding one content section (e.g. a difficulty level).
    ///
    /// # Errors
    ///
    /// Returns an error if the section is unknown or the path cannot be
    /// resolved.
    fn content_path(&self, section: &str) -> Result<PathBuf>;
}
