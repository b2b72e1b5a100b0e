//! Unit tests for CLI commands

use crate::cli::{plan_lines, style_lines, Cli, Commands, ResourceArgs, StyleArg};
use crate::generator::{generate_resource, ResourceOptions, TransportStyle};
use clap::Parser;
use std::fs;

fn resource_args(cli: Cli) -> ResourceArgs {
    match cli.command {
        Commands::Generate { resource, .. } | Commands::Plan { resource, .. } => resource,
        Commands::Styles => panic!("Expected a resource command"),
    }
}

#[test]
fn test_generate_command_with_flags() {
    let cli = Cli::try_parse_from([
        "resgen",
        "generate",
        "users",
        "--style",
        "ws",
        "--no-crud",
        "--flat",
        "--spec-file-suffix",
        "test",
        "--output",
        "src",
        "--force",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            resource,
            output,
            force,
            dry_run,
        } => {
            assert_eq!(resource.name, "users");
            assert_eq!(resource.style, Some(StyleArg::PushChannel));
            assert!(resource.no_crud);
            assert!(resource.flat);
            assert!(!resource.no_spec);
            assert_eq!(resource.spec_file_suffix.as_deref(), Some("test"));
            assert_eq!(output.unwrap().to_string_lossy(), "src");
            assert!(force);
            assert!(!dry_run);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_style_aliases_parse() {
    for (arg, expected) in [
        ("rest", TransportStyle::RequestResponse),
        ("microservice", TransportStyle::AsyncMessage),
        ("graphql-code-first", TransportStyle::TypedQueryCodeFirst),
        ("typed-query-schema-first", TransportStyle::TypedQuerySchemaFirst),
    ] {
        let cli = Cli::try_parse_from(["resgen", "plan", "users", "--style", arg]).unwrap();
        let style = resource_args(cli).style.unwrap();
        assert_eq!(TransportStyle::from(style), expected, "{arg}");
    }
}

#[test]
fn test_unknown_style_rejected() {
    assert!(Cli::try_parse_from(["resgen", "plan", "users", "--style", "soap"]).is_err());
}

#[test]
fn test_name_is_required() {
    assert!(Cli::try_parse_from(["resgen", "generate"]).is_err());
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["resgen", "generate", "users"],
        vec!["resgen", "plan", "users", "--json"],
        vec!["resgen", "styles"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}

#[test]
fn test_flags_override_config_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("resgen.toml"),
        "output = \"src\"\n\n[defaults]\ntransportStyle = \"microservice\"\nspecFileSuffix = \"test\"\n",
    )
    .unwrap();

    let cli = Cli::try_parse_from(["resgen", "plan", "users", "--no-spec"]).unwrap();
    let (options, output) = resource_args(cli).resolve(dir.path()).unwrap();
    assert_eq!(options.transport_style, TransportStyle::AsyncMessage);
    assert_eq!(options.test_stub_suffix, "test");
    assert!(!options.generate_test_stubs);
    assert_eq!(output.unwrap().to_string_lossy(), "src");

    let cli = Cli::try_parse_from(["resgen", "plan", "users", "--style", "rest"]).unwrap();
    let (options, _) = resource_args(cli).resolve(dir.path()).unwrap();
    assert_eq!(options.transport_style, TransportStyle::RequestResponse);
}

#[test]
fn test_flags_reenable_what_config_disables() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("resgen.toml"),
        "[defaults]\ncrud = false\nspec = false\nflat = true\normIntegrationAvailable = true\n",
    )
    .unwrap();

    let cli = Cli::try_parse_from(["resgen", "plan", "users"]).unwrap();
    let (options, _) = resource_args(cli).resolve(dir.path()).unwrap();
    assert!(!options.crud);
    assert!(!options.generate_test_stubs);
    assert!(options.flat);
    assert!(options.orm_integration_available);

    let cli = Cli::try_parse_from([
        "resgen", "plan", "users", "--crud", "--spec", "--no-flat", "--no-orm",
    ])
    .unwrap();
    let (options, _) = resource_args(cli).resolve(dir.path()).unwrap();
    assert!(options.crud);
    assert!(options.generate_test_stubs);
    assert!(!options.flat);
    assert!(!options.orm_integration_available);
}

#[test]
fn test_last_flag_of_a_pair_wins() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::try_parse_from(["resgen", "plan", "users", "--no-crud", "--crud"]).unwrap();
    let args = resource_args(cli);
    assert!(args.crud);
    assert!(!args.no_crud);
    assert!(args.resolve(dir.path()).unwrap().0.crud);

    let cli = Cli::try_parse_from(["resgen", "plan", "users", "--flat", "--no-flat"]).unwrap();
    assert!(!resource_args(cli).resolve(dir.path()).unwrap().0.flat);
}

#[test]
fn test_resolve_without_config_uses_builtins() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::try_parse_from(["resgen", "plan", "users"]).unwrap();
    let (options, output) = resource_args(cli).resolve(dir.path()).unwrap();
    assert_eq!(options, ResourceOptions::new("users"));
    assert!(output.is_none());
}

#[test]
fn test_plan_lines_list_every_path() {
    let artifacts = generate_resource(&ResourceOptions::new("users")).unwrap();
    let lines = plan_lines(&artifacts);
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("users/dto/create-user.dto.ts"));
    assert!(lines.iter().all(|l| l.ends_with(" bytes")));
}

#[test]
fn test_style_lines() {
    let lines = style_lines();
    assert_eq!(lines.len(), 5);
    assert!(lines[2].starts_with("push-channel"));
    assert!(lines[2].ends_with("(alias: ws)"));
}
