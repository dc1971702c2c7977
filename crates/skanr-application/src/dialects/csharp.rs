//! C# dialect
//!
//! Emits a static partial class extending `IServiceCollection`, the layout
//! consumed by `Microsoft.Extensions.DependencyInjection` hosts.

use std::sync::Arc;

use skanr_domain::OutputDocument;

use super::source_builder::SourceBuilder;
use crate::ports::dialect::{EmitDialect, EmitterOptions};
use crate::ports::registry::{DialectEntry, EMIT_DIALECTS};

/// Container API namespace imported by every generated file
pub const CONTAINER_NAMESPACE: &str = "Microsoft.Extensions.DependencyInjection";

/// Generated file name
pub const HINT_NAME: &str = "SkanrRegistrations.g.cs";

/// C# source renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpDialect;

impl EmitDialect for CSharpDialect {
    fn name(&self) -> &'static str {
        "csharp"
    }

    fn hint_name(&self) -> &'static str {
        HINT_NAME
    }

    fn default_container_namespace(&self) -> &'static str {
        CONTAINER_NAMESPACE
    }

    fn render(&self, document: &OutputDocument, options: &EmitterOptions) -> String {
        let mut src = SourceBuilder::new("    ");

        src.line(0, "// <auto-generated />");
        for import in &document.imports {
            src.line(0, format!("using {import};"));
        }

        src.blank();
        src.line(0, format!("namespace {};", document.namespace));
        src.blank();
        src.line(0, format!("public static partial class {}", options.class_name));
        src.line(0, "{");
        src.line(
            1,
            format!("static partial void {}(IServiceCollection services);", options.hook),
        );
        src.blank();
        src.line(
            1,
            format!(
                "public static void {}(this IServiceCollection services)",
                options.entry_point
            ),
        );
        src.line(1, "{");

        for group in &document.groups {
            src.line(1, format!("#region {}", group.name));

            for block in &group.blocks {
                if let Some(label) = &block.label {
                    src.line(1, format!("#if {label}"));
                }
                for binding in &block.bindings {
                    src.line(
                        2,
                        format!(
                            "services.Add{}<{}, {}>();",
                            binding.lifetime, binding.service, binding.implementation
                        ),
                    );
                }
                if block.label.is_some() {
                    src.line(1, "#endif");
                    src.blank();
                }
            }

            src.line(1, "#endregion");
            src.blank();
        }

        src.blank();
        src.line(2, format!("{}(services);", options.hook));
        src.line(1, "}");
        src.line(0, "}");

        src.finish()
    }
}

fn csharp_factory() -> Arc<dyn EmitDialect> {
    Arc::new(CSharpDialect)
}

#[linkme::distributed_slice(EMIT_DIALECTS)]
static CSHARP_DIALECT: DialectEntry = DialectEntry {
    name: "csharp",
    aliases: &["cs", "c#"],
    description: "C# static partial class for Microsoft.Extensions.DependencyInjection",
    factory: csharp_factory,
};
