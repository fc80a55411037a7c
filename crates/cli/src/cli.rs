use clap::{Parser, Subcommand, ValueEnum};
use salthash_core::{SaltOrder, SaltStoreType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "salthash",
    about = "Salted message digests with a recoverable-salt storage layout",
    long_about = "Hash files or text with a salted digest and verify candidates against \
                  previously stored salt+hash buffers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output machine-readable JSON to stdout
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hash a file or a text value and print the stored salt+hash buffer
    Hash {
        /// Path to the input file (omit when using --text)
        input: Option<PathBuf>,

        /// Hash this text value instead of a file
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// Text encoding name for --text (e.g. UTF-8, windows-1252)
        #[arg(long, default_value = "UTF-8")]
        encoding: String,

        /// Digest algorithm (MD5, SHA-1, SHA-256, SHA-384, SHA-512)
        #[arg(short, long, default_value = "SHA-256")]
        algorithm: String,

        /// Fixed salt known out-of-band ("hex:" prefix for hex, otherwise base64)
        #[arg(long)]
        fixed_salt: Option<String>,

        /// Length in bytes of the random stored salt (0 disables it)
        #[arg(long, default_value_t = salthash_core::DEFAULT_STORED_SALT_LEN)]
        salt_len: usize,

        /// Where the stored salt sits relative to the hash
        #[arg(long, value_enum, default_value = "prepend")]
        store: StoreTypeArg,

        /// Order in which stored and fixed salt are folded in
        #[arg(long, value_enum, default_value = "stored-first")]
        order: SaltOrderArg,

        /// Output encoding for the stored buffer
        #[arg(long, value_enum, default_value = "hex")]
        out: OutputFormat,
    },

    /// Verify a file or a text value against a stored salt+hash buffer
    Verify {
        /// Path to the input file (omit when using --text)
        input: Option<PathBuf>,

        /// Verify this text value instead of a file
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// Text encoding name for --text
        #[arg(long, default_value = "UTF-8")]
        encoding: String,

        /// The stored buffer to check against ("hex:" prefix for hex, otherwise base64)
        #[arg(short, long)]
        stored: String,

        /// Digest algorithm used when hashing
        #[arg(short, long, default_value = "SHA-256")]
        algorithm: String,

        /// Fixed salt used when hashing
        #[arg(long)]
        fixed_salt: Option<String>,

        /// Stored salt length used when hashing
        #[arg(long, default_value_t = salthash_core::DEFAULT_STORED_SALT_LEN)]
        salt_len: usize,

        /// Storage layout used when hashing
        #[arg(long, value_enum, default_value = "prepend")]
        store: StoreTypeArg,

        /// Salt fold order used when hashing
        #[arg(long, value_enum, default_value = "stored-first")]
        order: SaltOrderArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StoreTypeArg {
    /// salt ++ hash
    Prepend,
    /// hash ++ salt
    Append,
    /// hash alone; the salt is not persisted
    None,
}

impl From<StoreTypeArg> for SaltStoreType {
    fn from(arg: StoreTypeArg) -> Self {
        match arg {
            StoreTypeArg::Prepend => SaltStoreType::Prepend,
            StoreTypeArg::Append => SaltStoreType::Append,
            StoreTypeArg::None => SaltStoreType::DoNotStore,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SaltOrderArg {
    StoredFirst,
    FixedFirst,
}

impl From<SaltOrderArg> for SaltOrder {
    fn from(arg: SaltOrderArg) -> Self {
        match arg {
            SaltOrderArg::StoredFirst => SaltOrder::StoredFirst,
            SaltOrderArg::FixedFirst => SaltOrder::FixedFirst,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Hex,
    Base64,
}
