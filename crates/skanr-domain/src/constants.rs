//! Domain layer constants
//!
//! Defaults for the generated registration scaffold and the annotation family.
//! Infrastructure-specific constants live in `skanr_infrastructure::constants`.

// ============================================================================
// ANNOTATION FAMILY
// ============================================================================

/// Tag of the base annotation kind every registration annotation derives from
pub const BASE_ANNOTATION_KIND: &str = "Injectable";

/// Suffix hosts commonly append to annotation type names
pub const ANNOTATION_TYPE_SUFFIX: &str = "Attribute";

/// Named argument overriding the lifetime
pub const NAMED_ARG_LIFETIME: &str = "lifetime";

/// Named argument overriding the registration mode
pub const NAMED_ARG_MODE: &str = "mode";

/// Named argument overriding the explicit interface list
pub const NAMED_ARG_INTERFACES: &str = "interfaces";

/// Named argument carrying the build-variant label
pub const NAMED_ARG_LABEL: &str = "label";

/// Legacy spelling of [`NAMED_ARG_LABEL`]
pub const NAMED_ARG_PREPROCESSOR_LABEL: &str = "preprocessorlabel";

// ============================================================================
// GENERATED SCAFFOLD
// ============================================================================

/// Namespace used when neither configuration nor the manifest names one
pub const DEFAULT_GENERATED_NAMESPACE: &str = "Skanr.Generated";

/// Name of the generated container-extension type
pub const DEFAULT_REGISTRATION_CLASS: &str = "SkanrServiceRegistration";

/// Name of the generated entry-point operation
pub const DEFAULT_ENTRY_POINT: &str = "RegisterServices";

/// Name of the host-extensible hook invoked after all bindings
pub const DEFAULT_EXTENSION_HOOK: &str = "RegisterAdditionalServices";

/// Dialect used when none is configured
pub const DEFAULT_DIALECT: &str = "csharp";
