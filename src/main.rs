mod args;

use args::{BlockArgs, Cli, Commands};
use clap::Parser;
use hex_literal::hex;
use rayon::prelude::*;
use thiserror::Error;

use rijndael::{Key, KeySize, LogTrace, NoTrace, RoundObserver};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error(transparent)]
    Rijndael(#[from] rijndael::Error),

    #[error("{failed} of {total} self-test cases failed")]
    SelfTestFailed { failed: usize, total: usize },
}

fn main() {
    let args = Cli::parse();

    let trace = match &args.command {
        Commands::Encrypt(block) | Commands::Decrypt(block) => block.trace,
        _ => false,
    };
    init_logging(trace);

    if let Err(e) = rijndael_cli(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

// RUST_LOG still takes precedence over --trace
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn rijndael_cli(args: Cli) -> Result<(), CliError> {
    match args.command {
        Commands::Encrypt(block_args) => {
            let (key, block) = parse_block_args(&block_args)?;
            let mut observer = observer(block_args.trace);
            let ciphertext = rijndael::encrypt_traced(&block, &key, &mut *observer)?;
            println!("{}", hex::encode(ciphertext));
            Ok(())
        }
        Commands::Decrypt(block_args) => {
            let (key, block) = parse_block_args(&block_args)?;
            let mut observer = observer(block_args.trace);
            let plaintext = rijndael::decrypt_traced(&block, &key, &mut *observer)?;
            println!("{}", hex::encode(plaintext));
            Ok(())
        }
        Commands::Schedule(schedule_args) => {
            let key = Key::try_from_slice(&hex::decode(strip(&schedule_args.key))?)?;
            let w = rijndael::expand_key(&key);
            let schedule = if schedule_args.backward {
                rijndael::backward_key_schedule(&w)
            } else {
                rijndael::forward_key_schedule(&w)
            };

            println!(
                "AES-{} (Nk = {}, Nr = {})",
                key.size().bits(),
                key.size().nk(),
                key.size().nr()
            );
            for (round, round_key) in schedule.iter().enumerate() {
                println!("{round:>2}: {}", rijndael::format_round_key(round_key));
            }
            Ok(())
        }
        Commands::Keygen(keygen_args) => {
            let key = Key::rand_key(keygen_args.key_size.into())?;
            println!("{}", hex::encode(key.as_bytes()));
            Ok(())
        }
        Commands::Selftest => selftest(),
    }
}

fn observer(trace: bool) -> Box<dyn RoundObserver> {
    if trace {
        Box::new(LogTrace)
    } else {
        Box::new(NoTrace)
    }
}

fn parse_block_args(args: &BlockArgs) -> Result<(Vec<u8>, Vec<u8>), CliError> {
    let key = hex::decode(strip(&args.key))?;
    let block = hex::decode(strip(&args.block))?;
    Ok((key, block))
}

// allow "00 11 22 ..." and "0x0011..." / "0X0011..." as well as plain hex
fn strip(s: &str) -> String {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// FIPS-197 Appendix C example vector.
struct Vector {
    key: &'static [u8],
    plaintext: [u8; 16],
    ciphertext: [u8; 16],
}

const PLAINTEXT: [u8; 16] = hex!("00112233445566778899aabbccddeeff");

const VECTORS: [Vector; 3] = [
    Vector {
        key: &hex!("000102030405060708090a0b0c0d0e0f"),
        plaintext: PLAINTEXT,
        ciphertext: hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
    },
    Vector {
        key: &hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
        plaintext: PLAINTEXT,
        ciphertext: hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
    },
    Vector {
        key: &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
        plaintext: PLAINTEXT,
        ciphertext: hex!("8ea2b7ca516745bfeafc49904b496089"),
    },
];

#[derive(Copy, Clone, Debug)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn run_case(vector: &Vector, direction: Direction) -> Result<(String, bool), rijndael::Error> {
    let bits = KeySize::from_len(vector.key.len())?.bits();
    let (label, passed) = match direction {
        Direction::Encrypt => (
            "ENC",
            rijndael::encrypt(&vector.plaintext, vector.key)? == vector.ciphertext,
        ),
        Direction::Decrypt => (
            "DEC",
            rijndael::decrypt(&vector.ciphertext, vector.key)? == vector.plaintext,
        ),
    };
    Ok((format!("AES-{bits}-{label}"), passed))
}

fn selftest() -> Result<(), CliError> {
    let cases: Vec<(&Vector, Direction)> = VECTORS
        .iter()
        .flat_map(|v| [(v, Direction::Encrypt), (v, Direction::Decrypt)])
        .collect();

    // each case expands its own schedule, so they run independently
    let results = cases
        .par_iter()
        .map(|&(vector, direction)| run_case(vector, direction))
        .collect::<Result<Vec<_>, _>>()?;

    println!("{:<12} RESULT", "TEST CASE");
    for (name, passed) in &results {
        println!("{name:<12} {}", if *passed { "PASSED" } else { "FAILED" });
    }

    let failed = results.iter().filter(|(_, passed)| !passed).count();
    if failed > 0 {
        return Err(CliError::SelfTestFailed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_accepts_prefix_and_spacing() {
        assert_eq!(strip("000102"), "000102");
        assert_eq!(strip("0x000102"), "000102");
        assert_eq!(strip("0X000102"), "000102");
        assert_eq!(strip("  00 01\t02 "), "000102");
        assert_eq!(strip("0X 00 01 02"), "000102");
    }

    #[test]
    fn upper_case_prefix_decodes() -> Result<(), CliError> {
        let block_args = BlockArgs {
            key: "0X000102030405060708090A0B0C0D0E0F".to_string(),
            block: "0x00112233445566778899aabbccddeeff".to_string(),
            trace: false,
        };
        let (key, block) = parse_block_args(&block_args)?;
        assert_eq!(rijndael::encrypt(&block, &key)?, VECTORS[0].ciphertext);
        Ok(())
    }

    #[test]
    fn selftest_passes() {
        assert!(selftest().is_ok());
    }
}
