//! Template catalog: what each transport style looks like.
//!
//! Operations are described once as [`OperationBinding`]s (method name,
//! externally visible trigger, parameter roles). Each [`TransportStyle`]
//! then renders a binding in its own decorator and parameter syntax, so the
//! entry-point template is shared by all five styles.

use serde::Serialize;

use super::inflect::NameVariants;
use super::options::TransportStyle;

/// The five data-access operations every CRUD resource exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrudOperation {
    Create,
    FindAll,
    FindOne,
    Update,
    Remove,
}

impl CrudOperation {
    /// Operations in the order they appear in generated classes
    pub const ALL: [CrudOperation; 5] = [
        CrudOperation::Create,
        CrudOperation::FindAll,
        CrudOperation::FindOne,
        CrudOperation::Update,
        CrudOperation::Remove,
    ];

    /// Service method the entry point delegates to
    pub fn service_method(self) -> &'static str {
        match self {
            CrudOperation::Create => "create",
            CrudOperation::FindAll => "findAll",
            CrudOperation::FindOne => "findOne",
            CrudOperation::Update => "update",
            CrudOperation::Remove => "remove",
        }
    }
}

/// Which generated input type a payload parameter carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputRole {
    Create,
    Update,
}

/// Role of one parameter of a generated operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamRole {
    /// Payload typed as the create or update input
    Data(InputRole),
    /// Find-many filter arguments
    Filter,
    /// Record identifier
    Id,
}

/// Abstract binding of one CRUD operation to a transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationBinding {
    /// Operation being bound
    pub operation: CrudOperation,
    /// Method name on the generated entry-point class
    pub method: String,
    /// Externally visible trigger (route segment, message or field name)
    pub trigger: String,
    /// Parameters in declaration order
    pub params: Vec<ParamRole>,
}

/// Flavour of the transport entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Controller,
    Gateway,
    Resolver,
}

impl EntryKind {
    /// File-name segment and test-stub variable name (`controller`)
    pub fn file_segment(self) -> &'static str {
        match self {
            EntryKind::Controller => "controller",
            EntryKind::Gateway => "gateway",
            EntryKind::Resolver => "resolver",
        }
    }

    /// Class-name suffix (`Controller`)
    pub fn class_suffix(self) -> &'static str {
        match self {
            EntryKind::Controller => "Controller",
            EntryKind::Gateway => "Gateway",
            EntryKind::Resolver => "Resolver",
        }
    }

    /// Controllers are registered under `controllers`, the rest as providers
    pub fn is_controller(self) -> bool {
        matches!(self, EntryKind::Controller)
    }
}

/// One operation rendered in the syntax of a style, ready for a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOperation {
    pub decorator: String,
    pub method: String,
    pub params: String,
    pub returns: String,
    pub call: String,
}

impl TransportStyle {
    /// Entry-point flavour of this style
    pub fn entry_kind(self) -> EntryKind {
        match self {
            TransportStyle::RequestResponse | TransportStyle::AsyncMessage => {
                EntryKind::Controller
            }
            TransportStyle::PushChannel => EntryKind::Gateway,
            TransportStyle::TypedQueryCodeFirst | TransportStyle::TypedQuerySchemaFirst => {
                EntryKind::Resolver
            }
        }
    }

    /// File extension segment of input artifacts (`dto` or `input`)
    pub fn input_segment(self) -> &'static str {
        if self.is_typed_query() {
            "input"
        } else {
            "dto"
        }
    }

    /// Class-name suffix of input artifacts (`Dto` or `Input`)
    pub fn input_suffix(self) -> &'static str {
        if self.is_typed_query() {
            "Input"
        } else {
            "Dto"
        }
    }

    /// Whether the update input declares an explicit identifier field
    pub fn update_input_has_id(self) -> bool {
        !matches!(self, TransportStyle::RequestResponse)
    }

    /// Whether entity and inputs carry typed-query field decorators
    pub fn decorates_types(self) -> bool {
        matches!(self, TransportStyle::TypedQueryCodeFirst)
    }

    /// Whether the style emits a standalone schema-description artifact
    pub fn has_schema_file(self) -> bool {
        matches!(self, TransportStyle::TypedQuerySchemaFirst)
    }

    /// Bindings for all five CRUD operations in this style
    pub fn bindings(self, names: &NameVariants) -> Vec<OperationBinding> {
        CrudOperation::ALL
            .into_iter()
            .map(|op| self.binding(op, names))
            .collect()
    }

    fn binding(self, operation: CrudOperation, names: &NameVariants) -> OperationBinding {
        let single = &names.classified_singular;
        let plural = &names.classified_plural;
        let typed_query = self.is_typed_query();

        let method = match (operation, self) {
            (CrudOperation::Create, TransportStyle::TypedQueryCodeFirst) => format!("create{single}"),
            (CrudOperation::Update, TransportStyle::TypedQueryCodeFirst) => format!("update{single}"),
            (CrudOperation::Remove, TransportStyle::TypedQueryCodeFirst) => format!("remove{single}"),
            (CrudOperation::FindOne, _) => "findById".to_string(),
            (op, _) => op.service_method().to_string(),
        };

        let trigger = match operation {
            _ if self == TransportStyle::RequestResponse => match operation {
                CrudOperation::Create | CrudOperation::FindAll => String::new(),
                _ => ":id".to_string(),
            },
            CrudOperation::Create => format!("create{single}"),
            CrudOperation::Update => format!("update{single}"),
            CrudOperation::Remove => format!("remove{single}"),
            CrudOperation::FindAll if typed_query => names.lower_camel_plural.clone(),
            CrudOperation::FindAll => format!("findAll{plural}"),
            CrudOperation::FindOne if typed_query => {
                if names.lower_camel_singular == names.lower_camel_plural {
                    format!("{}ById", names.lower_camel_singular)
                } else {
                    names.lower_camel_singular.clone()
                }
            }
            CrudOperation::FindOne => format!("find{single}ById"),
        };

        let params = match operation {
            CrudOperation::Create => vec![ParamRole::Data(InputRole::Create)],
            CrudOperation::FindAll if self == TransportStyle::TypedQuerySchemaFirst => vec![],
            CrudOperation::FindAll => vec![ParamRole::Filter],
            CrudOperation::FindOne | CrudOperation::Remove => vec![ParamRole::Id],
            CrudOperation::Update => vec![ParamRole::Id, ParamRole::Data(InputRole::Update)],
        };

        OperationBinding {
            operation,
            method,
            trigger,
            params,
        }
    }

    /// Framework import lines at the top of the entry point
    pub fn framework_imports(self, crud: bool) -> Vec<&'static str> {
        match (self, crud) {
            (TransportStyle::RequestResponse, true) => vec![
                "import { Controller, Get, Post, Body, Patch, Param, Delete, Query } from '@nestjs/common';",
            ],
            (TransportStyle::RequestResponse, false) | (TransportStyle::AsyncMessage, false) => {
                vec!["import { Controller } from '@nestjs/common';"]
            }
            (TransportStyle::AsyncMessage, true) => vec![
                "import { Controller } from '@nestjs/common';",
                "import { MessagePattern, Payload } from '@nestjs/microservices';",
            ],
            (TransportStyle::PushChannel, true) => vec![
                "import { WebSocketGateway, SubscribeMessage, MessageBody } from '@nestjs/websockets';",
            ],
            (TransportStyle::PushChannel, false) => {
                vec!["import { WebSocketGateway } from '@nestjs/websockets';"]
            }
            (TransportStyle::TypedQueryCodeFirst, true) => {
                vec!["import { Resolver, Query, Mutation, Args, Int } from '@nestjs/graphql';"]
            }
            (TransportStyle::TypedQuerySchemaFirst, true) => {
                vec!["import { Resolver, Query, Mutation, Args } from '@nestjs/graphql';"]
            }
            (TransportStyle::TypedQueryCodeFirst, false)
            | (TransportStyle::TypedQuerySchemaFirst, false) => {
                vec!["import { Resolver } from '@nestjs/graphql';"]
            }
        }
    }

    /// Import of the data-access types used by CRUD entry points
    pub fn client_types_import(self, names: &NameVariants) -> String {
        match self {
            TransportStyle::TypedQuerySchemaFirst => {
                "import { Prisma } from '@prisma/client';".to_string()
            }
            _ => format!(
                "import {{ {}, Prisma }} from '@prisma/client';",
                names.classified_singular
            ),
        }
    }

    /// Class-level decorator of the entry point
    pub fn class_decorator(self, names: &NameVariants, crud: bool) -> String {
        match self {
            TransportStyle::RequestResponse => format!("@Controller('{}')", names.dasherized),
            TransportStyle::AsyncMessage => "@Controller()".to_string(),
            TransportStyle::PushChannel => "@WebSocketGateway()".to_string(),
            TransportStyle::TypedQueryCodeFirst if crud => {
                format!("@Resolver(() => {})", names.classified_singular)
            }
            TransportStyle::TypedQuerySchemaFirst if crud => {
                format!("@Resolver('{}')", names.classified_singular)
            }
            TransportStyle::TypedQueryCodeFirst | TransportStyle::TypedQuerySchemaFirst => {
                "@Resolver()".to_string()
            }
        }
    }

    /// Render a binding in this style's decorator and parameter syntax
    pub fn render_operation(
        self,
        binding: &OperationBinding,
        names: &NameVariants,
    ) -> RenderedOperation {
        let single = &names.classified_singular;
        let op = binding.operation;

        let decorator = match self {
            TransportStyle::RequestResponse => {
                let verb = match op {
                    CrudOperation::Create => "Post",
                    CrudOperation::FindAll | CrudOperation::FindOne => "Get",
                    CrudOperation::Update => "Patch",
                    CrudOperation::Remove => "Delete",
                };
                if binding.trigger.is_empty() {
                    format!("@{verb}()")
                } else {
                    format!("@{verb}('{}')", binding.trigger)
                }
            }
            TransportStyle::AsyncMessage => format!("@MessagePattern('{}')", binding.trigger),
            TransportStyle::PushChannel => format!("@SubscribeMessage('{}')", binding.trigger),
            TransportStyle::TypedQueryCodeFirst => match op {
                CrudOperation::FindAll => {
                    format!("@Query(() => [{single}], {{ name: '{}' }})", binding.trigger)
                }
                CrudOperation::FindOne => {
                    format!("@Query(() => {single}, {{ name: '{}' }})", binding.trigger)
                }
                _ => format!("@Mutation(() => {single})"),
            },
            TransportStyle::TypedQuerySchemaFirst => match op {
                CrudOperation::FindAll | CrudOperation::FindOne => {
                    format!("@Query('{}')", binding.trigger)
                }
                _ => format!("@Mutation('{}')", binding.trigger),
            },
        };

        let params = binding
            .params
            .iter()
            .map(|role| self.render_param(*role, single))
            .collect::<Vec<_>>()
            .join(", ");

        let returns = self.return_type(op, single);

        let key = if self == TransportStyle::RequestResponse {
            "{ id: +id }"
        } else {
            "{ id }"
        };
        let filter = if binding.params.contains(&ParamRole::Filter) {
            "query"
        } else {
            "{}"
        };
        let method = op.service_method();
        let call = match op {
            CrudOperation::Create => format!("{method}(data)"),
            CrudOperation::FindAll => format!("{method}({filter})"),
            CrudOperation::FindOne | CrudOperation::Remove => format!("{method}({key})"),
            CrudOperation::Update => format!("{method}({key}, data)"),
        };

        RenderedOperation {
            decorator,
            method: binding.method.clone(),
            params,
            returns,
            call,
        }
    }

    fn render_param(self, role: ParamRole, single: &str) -> String {
        let (name, ty) = match role {
            ParamRole::Data(InputRole::Create) => ("data", format!("Prisma.{single}CreateInput")),
            ParamRole::Data(InputRole::Update) => ("data", format!("Prisma.{single}UpdateInput")),
            ParamRole::Filter => ("query", format!("Prisma.{single}FindManyArgs")),
            ParamRole::Id if self == TransportStyle::RequestResponse => ("id", "string".to_string()),
            ParamRole::Id => ("id", "number".to_string()),
        };
        let binder = match (self, role) {
            (TransportStyle::RequestResponse, ParamRole::Data(_)) => "@Body()".to_string(),
            (TransportStyle::RequestResponse, ParamRole::Filter) => "@Query()".to_string(),
            (TransportStyle::RequestResponse, ParamRole::Id) => "@Param('id')".to_string(),
            (TransportStyle::AsyncMessage, _) => "@Payload()".to_string(),
            (TransportStyle::PushChannel, _) => "@MessageBody()".to_string(),
            (TransportStyle::TypedQueryCodeFirst, ParamRole::Id) => {
                "@Args('id', { type: () => Int })".to_string()
            }
            (_, _) => format!("@Args('{name}')"),
        };
        format!("{binder} {name}: {ty}")
    }

    fn return_type(self, op: CrudOperation, single: &str) -> String {
        if self == TransportStyle::TypedQuerySchemaFirst {
            return String::new();
        }
        match op {
            CrudOperation::Create => format!(": Promise<{single}>"),
            CrudOperation::FindAll => format!(": Promise<{single}[]>"),
            CrudOperation::FindOne => format!(": Promise<{single} | null>"),
            CrudOperation::Update | CrudOperation::Remove
                if self == TransportStyle::RequestResponse =>
            {
                String::new()
            }
            CrudOperation::Update | CrudOperation::Remove => format!(": Promise<{single}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::inflect::inflect;

    #[test]
    fn test_message_triggers() {
        let names = inflect("users").unwrap();
        let triggers = TransportStyle::AsyncMessage
            .bindings(&names)
            .into_iter()
            .map(|b| b.trigger)
            .collect::<Vec<_>>();
        assert_eq!(
            triggers,
            ["createUser", "findAllUsers", "findUserById", "updateUser", "removeUser"]
        );
    }

    #[test]
    fn test_typed_query_triggers_follow_lower_camel_names() {
        let names = inflect("user").unwrap();
        for style in [
            TransportStyle::TypedQueryCodeFirst,
            TransportStyle::TypedQuerySchemaFirst,
        ] {
            let bindings = style.bindings(&names);
            assert_eq!(bindings[1].trigger, "users");
            assert_eq!(bindings[2].trigger, "user");
        }
    }

    #[test]
    fn test_typed_query_triggers_stay_distinct_for_uninflected_names() {
        let names = inflect("news").unwrap();
        for style in [
            TransportStyle::TypedQueryCodeFirst,
            TransportStyle::TypedQuerySchemaFirst,
        ] {
            let bindings = style.bindings(&names);
            assert_eq!(bindings[1].trigger, "news");
            assert_eq!(bindings[2].trigger, "newsById");
        }
    }

    #[test]
    fn test_rest_operation_rendering() {
        let names = inflect("users").unwrap();
        let style = TransportStyle::RequestResponse;
        let bindings = style.bindings(&names);
        let update = style.render_operation(&bindings[3], &names);
        assert_eq!(update.decorator, "@Patch(':id')");
        assert_eq!(
            update.params,
            "@Param('id') id: string, @Body() data: Prisma.UserUpdateInput"
        );
        assert_eq!(update.returns, "");
        assert_eq!(update.call, "update({ id: +id }, data)");
    }

    #[test]
    fn test_code_first_operation_rendering() {
        let names = inflect("users").unwrap();
        let style = TransportStyle::TypedQueryCodeFirst;
        let bindings = style.bindings(&names);
        let find_all = style.render_operation(&bindings[1], &names);
        assert_eq!(find_all.decorator, "@Query(() => [User], { name: 'users' })");
        assert_eq!(find_all.method, "findAll");
        let remove = style.render_operation(&bindings[4], &names);
        assert_eq!(remove.method, "removeUser");
        assert_eq!(remove.params, "@Args('id', { type: () => Int }) id: number");
        assert_eq!(remove.returns, ": Promise<User>");
    }

    #[test]
    fn test_schema_first_find_all_takes_no_arguments() {
        let names = inflect("users").unwrap();
        let style = TransportStyle::TypedQuerySchemaFirst;
        let bindings = style.bindings(&names);
        let find_all = style.render_operation(&bindings[1], &names);
        assert_eq!(find_all.decorator, "@Query('users')");
        assert_eq!(find_all.params, "");
        assert_eq!(find_all.call, "findAll({})");
    }

    #[test]
    fn test_class_decorator_without_crud_never_names_entity() {
        let names = inflect("users").unwrap();
        for style in TransportStyle::ALL {
            let decorator = style.class_decorator(&names, false);
            assert!(!decorator.contains("User'") && !decorator.contains("=> User"));
        }
    }
}
