//! Rust dialect
//!
//! Emits a module holding an extension trait for the container type.
//! Build-variant labels become `cfg(feature = ..)` blocks, and the host hook
//! is a free function in the parent module.
//!
//! Host namespaces are module paths under the crate root, so imports and
//! qualified names carry a `crate::` prefix. The container namespace names an
//! external crate and is used as is.
//!
//! ```text
//! // @generated by skanr. Do not edit.
//! pub mod sample_app {
//!     use crate::Sample::App::*;
//!     use skanr_runtime::*;
//!
//!     pub trait SkanrServiceRegistration {
//!         fn register_services(&mut self);
//!     }
//!
//!     impl SkanrServiceRegistration for ServiceCollection {
//!         fn register_services(&mut self) {
//!             let services = self;
//!             // region: Sample.App.WeatherService
//!             services.add_transient::<IFirst, WeatherService>();
//!             // endregion
//!
//!             super::register_additional_services(services);
//!         }
//!     }
//! }
//! ```

use std::sync::Arc;

use heck::ToSnakeCase;
use skanr_domain::{OutputDocument, TypeRef};

use super::source_builder::SourceBuilder;
use crate::ports::dialect::{EmitDialect, EmitterOptions};
use crate::ports::registry::{DialectEntry, EMIT_DIALECTS};

/// Crate path of the container runtime
pub const CONTAINER_NAMESPACE: &str = "skanr_runtime";

/// Container type the registration trait is implemented for
pub const CONTAINER_TYPE: &str = "ServiceCollection";

/// Generated file name
pub const HINT_NAME: &str = "skanr_registrations.rs";

/// Rust source renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct RustDialect;

impl EmitDialect for RustDialect {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn hint_name(&self) -> &'static str {
        HINT_NAME
    }

    fn default_container_namespace(&self) -> &'static str {
        CONTAINER_NAMESPACE
    }

    fn path_separator(&self) -> &'static str {
        "::"
    }

    fn namespace_path(&self, namespace: &str) -> String {
        format!("crate::{}", namespace.replace('.', "::"))
    }

    fn container_path(&self, namespace: &str) -> String {
        namespace.replace('.', "::")
    }

    fn qualify(&self, ty: &TypeRef) -> String {
        format!("crate::{}", ty.qualified_name().replace('.', "::"))
    }

    fn render(&self, document: &OutputDocument, options: &EmitterOptions) -> String {
        let mut src = SourceBuilder::new("    ");
        let entry_point = options.entry_point.to_snake_case();
        let hook = options.hook.to_snake_case();

        src.line(0, "// @generated by skanr. Do not edit.");
        src.line(0, format!("pub mod {} {{", document.namespace.to_snake_case()));
        for import in &document.imports {
            src.line(1, format!("use {import}::*;"));
        }

        src.blank();
        src.line(1, format!("pub trait {} {{", options.class_name));
        src.line(2, format!("fn {entry_point}(&mut self);"));
        src.line(1, "}");
        src.blank();
        src.line(
            1,
            format!("impl {} for {CONTAINER_TYPE} {{", options.class_name),
        );
        src.line(2, format!("fn {entry_point}(&mut self) {{"));
        src.line(3, "let services = self;");

        for group in &document.groups {
            src.line(3, format!("// region: {}", group.name));

            for block in &group.blocks {
                let depth = match &block.label {
                    Some(label) => {
                        src.line(3, format!("#[cfg(feature = {label:?})]"));
                        src.line(3, "{");
                        4
                    }
                    None => 3,
                };
                for binding in &block.bindings {
                    src.line(
                        depth,
                        format!(
                            "services.add_{}::<{}, {}>();",
                            binding.lifetime.as_str().to_snake_case(),
                            binding.service,
                            binding.implementation
                        ),
                    );
                }
                if block.label.is_some() {
                    src.line(3, "}");
                }
            }

            src.line(3, "// endregion");
        }

        src.blank();
        src.line(3, format!("super::{hook}(services);"));
        src.line(2, "}");
        src.line(1, "}");
        src.line(0, "}");

        src.finish()
    }
}

fn rust_factory() -> Arc<dyn EmitDialect> {
    Arc::new(RustDialect)
}

#[linkme::distributed_slice(EMIT_DIALECTS)]
static RUST_DIALECT: DialectEntry = DialectEntry {
    name: "rust",
    aliases: &["rs"],
    description: "Rust extension trait with cfg(feature) variant blocks",
    factory: rust_factory,
};
