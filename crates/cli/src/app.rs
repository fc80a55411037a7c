use crate::cli::{Cli, Commands};
use crate::commands::{HashArgs, VerifyArgs};
use crate::json::ErrorJson;
use anyhow::Result;
use console::style;

pub fn run(cli: Cli) -> Result<()> {
    let json = cli.json;

    let result = match cli.command {
        Commands::Hash {
            input,
            text,
            encoding,
            algorithm,
            fixed_salt,
            salt_len,
            store,
            order,
            out,
        } => crate::commands::hash(
            HashArgs {
                input,
                text,
                encoding,
                algorithm,
                fixed_salt,
                salt_len,
                store: store.into(),
                order: order.into(),
                out,
            },
            json,
        ),

        Commands::Verify {
            input,
            text,
            encoding,
            stored,
            algorithm,
            fixed_salt,
            salt_len,
            store,
            order,
        } => crate::commands::verify(
            VerifyArgs {
                input,
                text,
                encoding,
                stored,
                algorithm,
                fixed_salt,
                salt_len,
                store: store.into(),
                order: order.into(),
            },
            json,
        ),
    };

    if let Err(e) = &result {
        if json {
            let causes: Vec<String> = e.chain().skip(1).map(|c| c.to_string()).collect();
            let payload = ErrorJson {
                status: "error",
                error: e.to_string(),
                causes,
            };
            println!("{}", serde_json::to_string(&payload)?);
        } else {
            eprintln!("\n{} {}", style("[ERROR]").red().bold(), style(&e).red());

            for (i, cause) in e.chain().skip(1).enumerate() {
                if i == 0 {
                    eprintln!("\n    Caused by:");
                }
                eprintln!("      - {}", style(cause).red());
            }
            eprintln!();
        }
    }

    result
}
