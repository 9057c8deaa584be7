//! Deterministic output filenames.

use crate::identity::ResourceIdentity;

/// Separator between the four identity segments.
const SEPARATOR: &str = "__";

/// Extension of every generated file.
const EXTENSION: &str = ".yaml";

/// Replaces every `/` and `.` of an `apiVersion` with `_`.
///
/// ```rust
/// use kubesplit_core::normalize_api_version;
///
/// assert_eq!(normalize_api_version("networking.k8s.io/v1"), "networking_k8s_io_v1");
/// ```
#[must_use]
pub fn normalize_api_version(api_version: &str) -> String {
    api_version.replace(['/', '.'], "_")
}

/// Builds the filename of a resource:
/// `<apiVersion>__<kind>__<namespace>__<name>.yaml`.
///
/// The `apiVersion` is normalized with [`normalize_api_version`] then lowercased,
/// the `kind` is lowercased. `namespace` and `name` are used verbatim, and an empty
/// one leaves its segment empty instead of being elided.
///
/// ```rust
/// use kubesplit_core::{ResourceIdentity, derive_filename};
///
/// let identity = ResourceIdentity {
///     api_version: "v1".into(),
///     kind: "Service".into(),
///     namespace: String::new(),
///     name: "web-svc".into(),
/// };
/// assert_eq!(derive_filename(&identity), "v1__service____web-svc.yaml");
/// ```
#[must_use]
pub fn derive_filename(identity: &ResourceIdentity) -> String {
    let ResourceIdentity {
        api_version,
        kind,
        namespace,
        name,
    } = identity;

    let api_version = normalize_api_version(api_version).to_lowercase();
    let kind = kind.to_lowercase();

    format!("{api_version}{SEPARATOR}{kind}{SEPARATOR}{namespace}{SEPARATOR}{name}{EXTENSION}")
}
