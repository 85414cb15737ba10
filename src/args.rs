use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt a single 16-byte block
    Encrypt(BlockArgs),

    /// Decrypt a single 16-byte block
    Decrypt(BlockArgs),

    /// Print the round keys derived from a key
    Schedule(ScheduleArgs),

    /// Print a random key as hex
    Keygen(KeygenArgs),

    /// Run the FIPS-197 Appendix C known-answer tests
    Selftest,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct BlockArgs {
    /// Key as 32, 48, or 64 hex characters.
    #[arg(short = 'k', long = "key", value_name = "HEX")]
    pub key: String,

    /// Input block as 32 hex characters.
    #[arg(short = 'b', long = "block", value_name = "HEX")]
    pub block: String,

    /// Log the round keys and the state after every transform (trace level).
    #[arg(long = "trace")]
    pub trace: bool,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct ScheduleArgs {
    /// Key as 32, 48, or 64 hex characters.
    #[arg(short = 'k', long = "key", value_name = "HEX")]
    pub key: String,

    /// Print the schedule in decryption order.
    #[arg(long = "backward")]
    pub backward: bool,
}

#[derive(Args, Debug)]
pub struct KeygenArgs {
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits256,
    )]
    pub key_size: KeySize,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

impl From<KeySize> for rijndael::KeySize {
    fn from(size: KeySize) -> Self {
        match size {
            KeySize::Bits128 => rijndael::KeySize::Bits128,
            KeySize::Bits192 => rijndael::KeySize::Bits192,
            KeySize::Bits256 => rijndael::KeySize::Bits256,
        }
    }
}
