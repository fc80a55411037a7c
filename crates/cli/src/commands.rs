//! Hash and verify command implementations.

use anyhow::{Context, Result, bail};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use salthash_core::{DigestAlgorithm, SaltOrder, SaltStoreType, SaltedHasher};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::OutputFormat;
use crate::json::{HashJson, VerifyJson};
use crate::util::{format_bytes_out, parse_bytes_arg};

pub struct HashArgs {
    pub input: Option<PathBuf>,
    pub text: Option<String>,
    pub encoding: String,
    pub algorithm: String,
    pub fixed_salt: Option<String>,
    pub salt_len: usize,
    pub store: SaltStoreType,
    pub order: SaltOrder,
    pub out: OutputFormat,
}

pub struct VerifyArgs {
    pub input: Option<PathBuf>,
    pub text: Option<String>,
    pub encoding: String,
    pub stored: String,
    pub algorithm: String,
    pub fixed_salt: Option<String>,
    pub salt_len: usize,
    pub store: SaltStoreType,
    pub order: SaltOrder,
}

pub fn hash(args: HashArgs, json: bool) -> Result<()> {
    let hasher = build_hasher(
        &args.algorithm,
        args.fixed_salt.as_deref(),
        args.salt_len,
        args.store,
        args.order,
    )?;

    eprintln!(
        "{}",
        style(format!("==> Hashing with {}", hasher.algorithm().name()))
            .cyan()
            .bold()
    );

    let (stored, input_label) = match (&args.input, &args.text) {
        (Some(path), None) => {
            let spinner = start_spinner(format!("Hashing {}", style(path.display()).cyan()));
            let file = BufReader::new(
                File::open(path)
                    .with_context(|| format!("Failed to open input: {}", path.display()))?,
            );
            let stored = hasher.hash_reader(file)?;
            spinner.finish_with_message("[OK] Input hashed");
            (stored, path.display().to_string())
        }
        (None, Some(text)) => (hasher.hash_text(text, &args.encoding)?, "<text>".to_string()),
        _ => bail!("Provide an input file or --text"),
    };

    let rendered = format_bytes_out(&stored, args.out);
    if json {
        let payload = HashJson {
            status: "ok",
            command: "hash",
            input: input_label,
            algorithm: hasher.algorithm().name(),
            store: store_name(args.store),
            salt_len: effective_salt_len(args.store, args.salt_len),
            stored: rendered,
        };
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        eprintln!(
            "    {} stored buffer ({} bytes)",
            style("[OK]").green().bold(),
            stored.len()
        );
        println!("{rendered}");
    }

    Ok(())
}

pub fn verify(args: VerifyArgs, json: bool) -> Result<()> {
    let hasher = build_hasher(
        &args.algorithm,
        args.fixed_salt.as_deref(),
        args.salt_len,
        args.store,
        args.order,
    )?;

    eprintln!(
        "{}",
        style(format!("==> Verifying with {}", hasher.algorithm().name()))
            .cyan()
            .bold()
    );

    let stored = parse_bytes_arg(&args.stored).context("Invalid --stored value")?;

    let (matched, input_label) = match (&args.input, &args.text) {
        (Some(path), None) => {
            let spinner = start_spinner(format!("Verifying {}", style(path.display()).cyan()));
            let file = BufReader::new(
                File::open(path)
                    .with_context(|| format!("Failed to open input: {}", path.display()))?,
            );
            let matched = hasher.verify_reader(file, &stored)?;
            spinner.finish_and_clear();
            (matched, path.display().to_string())
        }
        (None, Some(text)) => (
            hasher.verify_text(text, &args.encoding, &stored)?,
            "<text>".to_string(),
        ),
        _ => bail!("Provide an input file or --text"),
    };

    if json {
        let payload = VerifyJson {
            status: if matched { "ok" } else { "mismatch" },
            command: "verify",
            input: input_label,
            algorithm: hasher.algorithm().name(),
            matched,
        };
        println!("{}", serde_json::to_string(&payload)?);
    } else if matched {
        eprintln!(
            "    {} input matches the stored digest",
            style("[OK]").green().bold()
        );
    } else {
        bail!("Input does not match the stored digest");
    }

    Ok(())
}

fn build_hasher(
    algorithm: &str,
    fixed_salt: Option<&str>,
    salt_len: usize,
    store: SaltStoreType,
    order: SaltOrder,
) -> Result<SaltedHasher> {
    let algorithm = DigestAlgorithm::from_name(algorithm)?;
    let mut hasher = SaltedHasher::new(algorithm)
        .store_type(store)
        .salt_order(order)
        .stored_salt_len(salt_len);
    if let Some(value) = fixed_salt {
        hasher = hasher.fixed_salt(parse_bytes_arg(value).context("Invalid --fixed-salt value")?);
    }
    Ok(hasher)
}

fn start_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message);
    spinner
}

fn store_name(store: SaltStoreType) -> &'static str {
    match store {
        SaltStoreType::DoNotStore => "none",
        SaltStoreType::Prepend => "prepend",
        SaltStoreType::Append => "append",
    }
}

fn effective_salt_len(store: SaltStoreType, salt_len: usize) -> usize {
    if store == SaltStoreType::DoNotStore {
        0
    } else {
        salt_len
    }
}
