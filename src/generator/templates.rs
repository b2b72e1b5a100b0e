use askama::Template;

use super::catalog::{CrudOperation, RenderedOperation};
use super::error::GenerateError;
use super::inflect::NameVariants;
use super::options::TransportStyle;
use super::select::TemplateId;

const CLIENT_PROVIDER: &str = "PrismaService";

/// Everything a template may bind
///
/// Built once per run by the orchestrator and shared by every artifact of
/// that run.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Inflected resource names
    pub names: &'a NameVariants,
    /// Transport style of the entry point
    pub style: TransportStyle,
    /// Whether CRUD operations are generated
    pub crud: bool,
    /// Whether the resource directory is omitted
    pub flat: bool,
    /// Register the data-access client provider in module and stubs
    pub orm_integration: bool,
    /// Take the partial-type helper from the API-docs package
    pub validation_decorators: bool,
}

impl RenderContext<'_> {
    fn service_class(&self) -> String {
        format!("{}Service", self.names.classified)
    }

    fn service_var(&self) -> String {
        format!("{}Service", self.names.lower_camel)
    }

    fn entry_class(&self) -> String {
        format!(
            "{}{}",
            self.names.classified,
            self.style.entry_kind().class_suffix()
        )
    }

    fn input_class(&self, prefix: &str) -> String {
        format!(
            "{prefix}{}{}",
            self.names.classified_singular,
            self.style.input_suffix()
        )
    }

    /// Relative import path of the data-access client module
    fn client_path(&self) -> &'static str {
        if self.flat {
            "./prisma.service"
        } else {
            "../prisma.service"
        }
    }

    fn registers_client(&self) -> bool {
        self.crud && self.orm_integration
    }

    fn client_import(&self) -> String {
        format!(
            "import {{ {CLIENT_PROVIDER} }} from '{}';",
            self.client_path()
        )
    }
}

/// Template data for the controller, gateway or resolver
#[derive(Template)]
#[template(path = "entry_point.ts.txt", escape = "none")]
pub struct EntryPointTemplate<'a> {
    pub names: &'a NameVariants,
    pub framework_imports: Vec<&'static str>,
    pub crud: bool,
    pub client_types_import: String,
    pub class_decorator: String,
    pub class_name: String,
    pub service_class: String,
    pub service_var: String,
    /// One entry per CRUD operation; empty without CRUD
    pub operations: Vec<RenderedOperation>,
}

/// Template data for the data-access service
#[derive(Template)]
#[template(path = "service.ts.txt", escape = "none")]
pub struct ServiceTemplate {
    pub crud: bool,
    pub client_path: &'static str,
    pub entity: String,
    pub class_name: String,
    /// Client delegate property (`user` in `this.prisma.user`)
    pub delegate: String,
}

/// Template data for the module wiring
#[derive(Template)]
#[template(path = "module.ts.txt", escape = "none")]
pub struct ModuleTemplate<'a> {
    pub names: &'a NameVariants,
    pub service_class: String,
    pub entry_class: String,
    pub entry_segment: &'static str,
    pub is_controller: bool,
    pub orm: bool,
    pub client_path: &'static str,
    pub providers: String,
    pub module_class: String,
}

/// Template data for the entity definition
#[derive(Template)]
#[template(path = "entity.ts.txt", escape = "none")]
pub struct EntityTemplate {
    pub decorated: bool,
    pub entity: String,
}

/// Template data for the create input
#[derive(Template)]
#[template(path = "create_input.ts.txt", escape = "none")]
pub struct CreateInputTemplate {
    pub decorated: bool,
    pub class_name: String,
}

/// Template data for the update input
///
/// References the create input by name only.
#[derive(Template)]
#[template(path = "update_input.ts.txt", escape = "none")]
pub struct UpdateInputTemplate {
    pub imports: Vec<String>,
    pub decorated: bool,
    pub has_id: bool,
    pub class_name: String,
    pub create_class: String,
}

/// Template data for a test stub
#[derive(Template)]
#[template(path = "test_stub.ts.txt", escape = "none")]
pub struct TestStubTemplate {
    pub imports: Vec<String>,
    pub subject_class: String,
    pub subject_var: &'static str,
    pub has_controllers: bool,
    pub controllers: String,
    pub providers: String,
}

/// Template data for the schema-description file
#[derive(Template)]
#[template(path = "schema.graphql.txt", escape = "none")]
pub struct SchemaTemplate {
    pub entity: String,
    pub create_class: String,
    pub update_class: String,
    pub find_all: String,
    pub find_one: String,
    pub create: String,
    pub update: String,
    pub remove: String,
}

impl<'a> EntryPointTemplate<'a> {
    fn new(ctx: &RenderContext<'a>) -> Self {
        let style = ctx.style;
        let operations = if ctx.crud {
            style
                .bindings(ctx.names)
                .iter()
                .map(|binding| style.render_operation(binding, ctx.names))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            names: ctx.names,
            framework_imports: style.framework_imports(ctx.crud),
            crud: ctx.crud,
            client_types_import: style.client_types_import(ctx.names),
            class_decorator: style.class_decorator(ctx.names, ctx.crud),
            class_name: ctx.entry_class(),
            service_class: ctx.service_class(),
            service_var: ctx.service_var(),
            operations,
        }
    }
}

impl ServiceTemplate {
    fn new(ctx: &RenderContext<'_>) -> Self {
        Self {
            crud: ctx.crud,
            client_path: ctx.client_path(),
            entity: ctx.names.classified_singular.clone(),
            class_name: ctx.service_class(),
            delegate: ctx.names.lower_camel_singular.clone(),
        }
    }
}

impl<'a> ModuleTemplate<'a> {
    fn new(ctx: &RenderContext<'a>) -> Self {
        let entry = ctx.style.entry_kind();
        let mut providers = Vec::with_capacity(3);
        if !entry.is_controller() {
            providers.push(ctx.entry_class());
        }
        providers.push(ctx.service_class());
        if ctx.registers_client() {
            providers.push(CLIENT_PROVIDER.to_string());
        }
        Self {
            names: ctx.names,
            service_class: ctx.service_class(),
            entry_class: ctx.entry_class(),
            entry_segment: entry.file_segment(),
            is_controller: entry.is_controller(),
            orm: ctx.registers_client(),
            client_path: ctx.client_path(),
            providers: providers.join(", "),
            module_class: format!("{}Module", ctx.names.classified),
        }
    }
}

impl UpdateInputTemplate {
    fn new(ctx: &RenderContext<'_>) -> Self {
        let style = ctx.style;
        let create_class = ctx.input_class("Create");
        let create_import = format!(
            "import {{ {create_class} }} from './create-{}.{}';",
            ctx.names.dasherized_singular,
            style.input_segment()
        );
        let partial_import = match style {
            TransportStyle::TypedQueryCodeFirst => {
                "import { InputType, Field, Int, PartialType } from '@nestjs/graphql';"
            }
            TransportStyle::RequestResponse if ctx.validation_decorators => {
                "import { PartialType } from '@nestjs/swagger';"
            }
            _ => "import { PartialType } from '@nestjs/mapped-types';",
        }
        .to_string();
        let imports = if style.is_typed_query() {
            vec![create_import, partial_import]
        } else {
            vec![partial_import, create_import]
        };
        Self {
            imports,
            decorated: style.decorates_types(),
            has_id: style.update_input_has_id(),
            class_name: ctx.input_class("Update"),
            create_class,
        }
    }
}

impl TestStubTemplate {
    fn for_entry_point(ctx: &RenderContext<'_>) -> Self {
        let entry = ctx.style.entry_kind();
        let entry_class = ctx.entry_class();
        let service_class = ctx.service_class();
        let dasherized = &ctx.names.dasherized;

        let mut imports = vec![
            format!(
                "import {{ {entry_class} }} from './{dasherized}.{}';",
                entry.file_segment()
            ),
            format!("import {{ {service_class} }} from './{dasherized}.service';"),
        ];
        let mut providers = Vec::with_capacity(3);
        if !entry.is_controller() {
            providers.push(entry_class.clone());
        }
        providers.push(service_class);
        if ctx.registers_client() {
            imports.push(ctx.client_import());
            providers.push(CLIENT_PROVIDER.to_string());
        }

        Self {
            imports,
            has_controllers: entry.is_controller(),
            controllers: if entry.is_controller() {
                entry_class.clone()
            } else {
                String::new()
            },
            subject_class: entry_class,
            subject_var: entry.file_segment(),
            providers: providers.join(", "),
        }
    }

    fn for_service(ctx: &RenderContext<'_>) -> Self {
        let service_class = ctx.service_class();
        let mut imports = vec![format!(
            "import {{ {service_class} }} from './{}.service';",
            ctx.names.dasherized
        )];
        let mut providers = vec![service_class.clone()];
        if ctx.registers_client() {
            imports.push(ctx.client_import());
            providers.push(CLIENT_PROVIDER.to_string());
        }
        Self {
            imports,
            subject_class: service_class,
            subject_var: "service",
            has_controllers: false,
            controllers: String::new(),
            providers: providers.join(", "),
        }
    }
}

impl SchemaTemplate {
    fn new(ctx: &RenderContext<'_>) -> Self {
        let mut schema = Self {
            entity: ctx.names.classified_singular.clone(),
            create_class: ctx.input_class("Create"),
            update_class: ctx.input_class("Update"),
            find_all: String::new(),
            find_one: String::new(),
            create: String::new(),
            update: String::new(),
            remove: String::new(),
        };
        for binding in ctx.style.bindings(ctx.names) {
            let slot = match binding.operation {
                CrudOperation::Create => &mut schema.create,
                CrudOperation::FindAll => &mut schema.find_all,
                CrudOperation::FindOne => &mut schema.find_one,
                CrudOperation::Update => &mut schema.update,
                CrudOperation::Remove => &mut schema.remove,
            };
            *slot = binding.trigger;
        }
        schema
    }
}

/// Render one template against a context.
///
/// The result always ends with exactly one newline.
///
/// # Errors
///
/// Returns [`GenerateError::Render`] if askama fails to render.
pub fn render(template: TemplateId, ctx: &RenderContext<'_>) -> Result<String, GenerateError> {
    let rendered = match template {
        TemplateId::EntryPoint => EntryPointTemplate::new(ctx).render(),
        TemplateId::Service => ServiceTemplate::new(ctx).render(),
        TemplateId::Module => ModuleTemplate::new(ctx).render(),
        TemplateId::Entity => EntityTemplate {
            decorated: ctx.style.decorates_types(),
            entity: ctx.names.classified_singular.clone(),
        }
        .render(),
        TemplateId::CreateInput => CreateInputTemplate {
            decorated: ctx.style.decorates_types(),
            class_name: ctx.input_class("Create"),
        }
        .render(),
        TemplateId::UpdateInput => UpdateInputTemplate::new(ctx).render(),
        TemplateId::SchemaFile => SchemaTemplate::new(ctx).render(),
        TemplateId::EntryPointStub => TestStubTemplate::for_entry_point(ctx).render(),
        TemplateId::ServiceStub => TestStubTemplate::for_service(ctx).render(),
    };
    rendered
        .map(|text| with_single_trailing_newline(&text))
        .map_err(|e| GenerateError::Render {
            template: template.name(),
            message: e.to_string(),
        })
}

fn with_single_trailing_newline(text: &str) -> String {
    let mut out = text.trim_end_matches(['\n', '\r']).to_string();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::inflect::inflect;

    fn ctx(names: &NameVariants, style: TransportStyle) -> RenderContext<'_> {
        RenderContext {
            names,
            style,
            crud: true,
            flat: false,
            orm_integration: false,
            validation_decorators: false,
        }
    }

    #[test]
    fn test_trailing_newline_normalised() {
        assert_eq!(with_single_trailing_newline("a\n\n"), "a\n");
        assert_eq!(with_single_trailing_newline("a"), "a\n");
    }

    #[test]
    fn test_entity_variants() {
        let names = inflect("users").unwrap();
        let plain = render(
            TemplateId::Entity,
            &ctx(&names, TransportStyle::RequestResponse),
        )
        .unwrap();
        assert_eq!(plain, "export class User {}\n");

        let decorated = render(
            TemplateId::Entity,
            &ctx(&names, TransportStyle::TypedQueryCodeFirst),
        )
        .unwrap();
        assert!(decorated.starts_with("import { ObjectType, Field, Int } from '@nestjs/graphql';\n\n@ObjectType()\nexport class User {\n"));
    }

    #[test]
    fn test_service_without_crud_is_empty_shell() {
        let names = inflect("users").unwrap();
        let mut context = ctx(&names, TransportStyle::PushChannel);
        context.crud = false;
        let service = render(TemplateId::Service, &context).unwrap();
        assert_eq!(
            service,
            "import { Injectable } from '@nestjs/common';\n\n@Injectable()\nexport class UsersService {}\n"
        );
    }

    #[test]
    fn test_service_client_path_follows_layout() {
        let names = inflect("users").unwrap();
        let mut context = ctx(&names, TransportStyle::RequestResponse);
        assert!(render(TemplateId::Service, &context)
            .unwrap()
            .contains("from '../prisma.service';"));
        context.flat = true;
        assert!(render(TemplateId::Service, &context)
            .unwrap()
            .contains("from './prisma.service';"));
    }

    #[test]
    fn test_update_input_partial_type_source() {
        let names = inflect("users").unwrap();
        let mut context = ctx(&names, TransportStyle::RequestResponse);
        let plain = render(TemplateId::UpdateInput, &context).unwrap();
        assert_eq!(
            plain,
            "import { PartialType } from '@nestjs/mapped-types';\nimport { CreateUserDto } from './create-user.dto';\n\nexport class UpdateUserDto extends PartialType(CreateUserDto) {}\n"
        );
        context.validation_decorators = true;
        let swagger = render(TemplateId::UpdateInput, &context).unwrap();
        assert!(swagger.starts_with("import { PartialType } from '@nestjs/swagger';\n"));
    }

    #[test]
    fn test_module_registers_client_with_orm() {
        let names = inflect("users").unwrap();
        let mut context = ctx(&names, TransportStyle::PushChannel);
        context.orm_integration = true;
        let module = render(TemplateId::Module, &context).unwrap();
        assert!(module.contains("import { PrismaService } from '../prisma.service';\n"));
        assert!(module.contains("  providers: [UsersGateway, UsersService, PrismaService]\n"));
        assert!(!module.contains("controllers:"));
    }
}
