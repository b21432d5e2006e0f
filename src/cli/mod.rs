//! Command-line front end.
//!
//! Argument parsing and command execution live here so they can be tested
//! without a terminal; the binary only prompts, prints and picks the exit
//! code.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use eduflow_core::{Permission, PermissionResolver, Role};
use eduflow_models::LoginRequest;
use eduflow_session::{KeyValueStore, SessionManager};

use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "eduflow-cli")]
#[command(about = "EduFlow CLI - inspect roles, permissions and navigation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every role with its display name and color
    Roles,
    /// List the permissions granted to a role
    Permissions {
        /// Role key (org_admin, hod, student)
        role: Role,
    },
    /// Check whether a role holds a permission
    Check { role: Role, permission: Permission },
    /// Show the navigation for a role (defaults to the signed-in role)
    Routes {
        role: Option<Role>,

        /// Include routes hidden from primary navigation
        #[arg(short = 'a', long)]
        all: bool,
    },
    /// Check whether a role may open the screen at PATH
    Guard { path: String, role: Option<Role> },
    /// Sign in (prompts for missing credentials)
    Login {
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Change the active role of the signed-in user
    SwitchRole { role: Role },
}

/// Rendered command result. `success == false` maps to a non-zero exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }

    fn denied(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: false,
        }
    }
}

pub fn execute<S: KeyValueStore>(
    command: Commands,
    state: &AppState,
    session: &mut SessionManager<S>,
) -> Result<Outcome> {
    let outcome = match command {
        Commands::Roles => Outcome::ok(render_roles(&state.resolver)),
        Commands::Permissions { role } => Outcome::ok(render_permissions(&state.resolver, role)),
        Commands::Check { role, permission } => {
            if state.resolver.has_permission(role, permission) {
                Outcome::ok(format!("✅ {role} has {permission}"))
            } else {
                Outcome::denied(format!("❌ {role} does not have {permission}"))
            }
        }
        Commands::Routes { role, all } => {
            let role = role
                .or(session.role())
                .context("No role given and no user is signed in")?;
            Outcome::ok(render_routes(state, role, all))
        }
        Commands::Guard { path, role } => {
            let guard = state
                .catalog
                .guard_for(&path)
                .with_context(|| format!("Unknown screen path '{path}'"))?;

            let role = role.or(session.role());
            match guard.check(role) {
                Ok(()) => Outcome::ok(format!(
                    "✅ {} may open {path}",
                    role.map_or("nobody", |r| r.as_str())
                )),
                Err(e) => Outcome::denied(format!("❌ {e}")),
            }
        }
        Commands::Login { email, password } => {
            let (Some(email), Some(password)) = (email, password) else {
                bail!("Email and password are required");
            };
            let user = session.login(LoginRequest::new(email, password))?;
            Outcome::ok(format!(
                "✅ Logged in successfully!\n   Name: {}\n   Role: {}",
                user.name,
                state.resolver.display_name(user.role)
            ))
        }
        Commands::Logout => {
            session.logout()?;
            Outcome::ok("✅ Logged out")
        }
        Commands::Whoami => render_whoami(state, session),
        Commands::SwitchRole { role } => {
            session.switch_role(role)?;
            Outcome::ok(format!(
                "✅ Switched to {}",
                state.resolver.display_name(role)
            ))
        }
    };

    Ok(outcome)
}

pub fn render_roles(resolver: &PermissionResolver) -> String {
    Role::ALL
        .iter()
        .map(|&role| {
            format!(
                "{:<10} {:<20} {}",
                role.as_str(),
                resolver.display_name(role),
                resolver.display_color(role)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Granted permissions, one per line, in declaration order.
pub fn render_permissions(resolver: &PermissionResolver, role: Role) -> String {
    Permission::ALL
        .iter()
        .filter(|&&permission| resolver.has_permission(role, permission))
        .map(Permission::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Navigation for `role`; with `all`, every route the role may open.
pub fn render_routes(state: &AppState, role: Role, all: bool) -> String {
    let rows: Vec<String> = if all {
        state
            .catalog
            .routes_for(role)
            .into_iter()
            .map(|route| format!("{:<14} {:<24} {}", route.name, route.path, route.icon))
            .collect()
    } else {
        state
            .navigation
            .entries_for(role)
            .into_iter()
            .map(|entry| format!("{:<14} {:<24} {}", entry.title, entry.path, entry.icon))
            .collect()
    };

    rows.join("\n")
}

fn render_whoami<S: KeyValueStore>(state: &AppState, session: &SessionManager<S>) -> Outcome {
    let Some(user) = session.user() else {
        return Outcome::denied("Not signed in");
    };

    let mut lines = vec![
        format!("Name: {}", user.name),
        format!("Email: {}", user.email),
        format!(
            "Role: {} ({})",
            state.resolver.display_name(user.role),
            state.resolver.display_color(user.role)
        ),
    ];
    if let Some(department) = &user.department {
        lines.push(format!("Department: {department}"));
    }

    Outcome::ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_arguments() {
        let cli = Cli::try_parse_from(["eduflow-cli", "check", "hod", "manage_marks"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Check {
                role: Role::HeadOfDepartment,
                permission: Permission::ManageMarks,
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        assert!(Cli::try_parse_from(["eduflow-cli", "permissions", "principal"]).is_err());
    }

    #[test]
    fn test_parse_routes_flags() {
        let cli = Cli::try_parse_from(["eduflow-cli", "routes", "--all"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Routes {
                role: None,
                all: true
            }
        );
    }

    #[test]
    fn test_render_roles() {
        let rendered = render_roles(&PermissionResolver::default());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("org_admin"));
        assert!(lines[0].ends_with("#3B82F6"));
        assert!(lines[1].contains("Head of Department"));
    }

    #[test]
    fn test_render_student_permissions() {
        let rendered = render_permissions(&PermissionResolver::default(), Role::Student);
        assert_eq!(
            rendered,
            "view_attendance\nview_marks\nview_profile\nedit_profile"
        );
    }
}
