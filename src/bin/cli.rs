use clap::Parser;
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use eduflow::AppState;
use eduflow::cli::{Cli, Commands, execute};
use tracing::warn;

fn main() {
    dotenv().ok();
    eduflow_observability::init_basic_console_logging();

    let cli = Cli::parse();
    let state = AppState::from_env();
    let mut session = state.session();

    if let Err(e) = session.restore() {
        warn!(error = %e, "Continuing without a session");
    }

    let command = match prompt_missing_credentials(cli.command) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("\n❌ Error reading credentials: {}", e);
            std::process::exit(1);
        }
    };

    match execute(command, &state, &mut session) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if !outcome.success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn prompt_missing_credentials(command: Commands) -> dialoguer::Result<Commands> {
    let Commands::Login { email, password } = command else {
        return Ok(command);
    };

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email address").interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    Ok(Commands::Login {
        email: Some(email),
        password: Some(password),
    })
}
