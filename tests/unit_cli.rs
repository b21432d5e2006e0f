mod common;

use eduflow::cli::{Cli, Commands, execute};
use eduflow_core::{Permission, Role};
use eduflow_session::{MemoryStore, SessionManager};
use clap::Parser;

fn signed_out() -> SessionManager<MemoryStore> {
    SessionManager::new(MemoryStore::new(), Default::default())
}

#[test]
fn test_check_allowed_and_denied() {
    let state = common::default_state();
    let mut session = signed_out();

    let allowed = execute(
        Commands::Check {
            role: Role::OrgAdmin,
            permission: Permission::ManageUsers,
        },
        &state,
        &mut session,
    )
    .unwrap();
    assert!(allowed.success);

    let denied = execute(
        Commands::Check {
            role: Role::Student,
            permission: Permission::ManageUsers,
        },
        &state,
        &mut session,
    )
    .unwrap();
    assert!(!denied.success);
    assert!(denied.output.contains("manage_users"));
}

#[test]
fn test_routes_require_a_role() {
    let state = common::default_state();
    let mut session = signed_out();

    let err = execute(
        Commands::Routes {
            role: None,
            all: false,
        },
        &state,
        &mut session,
    )
    .unwrap_err();
    assert!(err.to_string().contains("no user is signed in"));
}

#[test]
fn test_routes_default_to_session_role() {
    let state = common::default_state();
    let mut session = signed_out();
    execute(
        Commands::Login {
            email: Some("hod@school.com".to_string()),
            password: Some("secret".to_string()),
        },
        &state,
        &mut session,
    )
    .unwrap();

    let outcome = execute(
        Commands::Routes {
            role: None,
            all: false,
        },
        &state,
        &mut session,
    )
    .unwrap();
    assert!(outcome.output.contains("Performance"));
    assert!(!outcome.output.contains("Wallet"));
}

#[test]
fn test_guard_command() {
    let state = common::default_state();
    let mut session = signed_out();

    let unauthenticated = execute(
        Commands::Guard {
            path: "/(tabs)/marks".to_string(),
            role: None,
        },
        &state,
        &mut session,
    )
    .unwrap();
    assert!(!unauthenticated.success);

    let student = execute(
        Commands::Guard {
            path: "/(tabs)/marks".to_string(),
            role: Some(Role::Student),
        },
        &state,
        &mut session,
    )
    .unwrap();
    assert!(student.success);

    assert!(
        execute(
            Commands::Guard {
                path: "/nowhere".to_string(),
                role: Some(Role::Student),
            },
            &state,
            &mut session,
        )
        .is_err()
    );
}

#[test]
fn test_session_commands() {
    let state = common::default_state();
    let mut session = signed_out();

    let whoami = execute(Commands::Whoami, &state, &mut session).unwrap();
    assert!(!whoami.success);

    let cli = Cli::try_parse_from([
        "eduflow-cli",
        "login",
        "--email",
        "admin@school.com",
        "--password",
        "secret",
    ])
    .unwrap();
    let login = execute(cli.command, &state, &mut session).unwrap();
    assert!(login.output.contains("Administrator"));

    execute(Commands::SwitchRole { role: Role::Student }, &state, &mut session).unwrap();
    let whoami = execute(Commands::Whoami, &state, &mut session).unwrap();
    assert!(whoami.success);
    assert!(whoami.output.contains("Role: Student (#F97316)"));

    execute(Commands::Logout, &state, &mut session).unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn test_login_without_credentials_fails() {
    let state = common::default_state();
    let mut session = signed_out();

    let result = execute(
        Commands::Login {
            email: Some("admin@school.com".to_string()),
            password: None,
        },
        &state,
        &mut session,
    );
    assert!(result.is_err());
}
