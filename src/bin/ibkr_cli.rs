//! Command-line driver for a running ibkr-proxy.
//!
//!   ibkr-cli login --user alice --password secret
//!   ibkr-cli portfolio --token <token>
//!
//! `login` prompts for whichever of `--user` / `--password` is missing; the
//! password prompt does not echo.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use ibkr_proxy::client::{ApiClient, DEFAULT_API_BASE, render_login, render_portfolio};

#[derive(Parser)]
#[command(name = "ibkr-cli", about = "CLI driver for the ibkr-proxy backend")]
struct Args {
    /// Base URL for the backend API (no trailing slash).
    #[arg(long, global = true, env = "IBKR_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Login and print the session token.
    Login {
        #[arg(long, help = "Username for backend login (prompted if omitted)")]
        user: Option<String>,
        #[arg(long, help = "Password for backend login (prompted if omitted)")]
        password: Option<String>,
    },
    /// Fetch portfolio data with a token.
    Portfolio {
        #[arg(long, help = "Token returned by the login command")]
        token: String,
    },
}

fn prompt_line(label: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{label}: ")?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let client = ApiClient::new(&args.api_base);

    let rendered = match args.command {
        Command::Login { user, password } => {
            let user = match user {
                Some(u) => u,
                None => match prompt_line("User") {
                    Ok(u) => u,
                    Err(e) => {
                        eprintln!("Could not read user: {e}");
                        return ExitCode::FAILURE;
                    }
                },
            };
            let password = match password {
                Some(p) => p,
                None => match rpassword::prompt_password("Password: ") {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("Could not read password: {e}");
                        return ExitCode::FAILURE;
                    }
                },
            };
            render_login(client.login(&user, &password).await)
        }
        Command::Portfolio { token } => render_portfolio(client.portfolio(&token).await),
    };

    match rendered {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
