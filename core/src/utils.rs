use crypto_bigint::{Encoding, U256};
use spv_errors::{MalformedInputError, SpvError};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Initializes `tracing` as the logger.
///
/// # Parameters
///
/// - `level`: `None` defaults to no logs but can be overwritten with the
///   `RUST_LOG` env var. Otherwise sets the default level, which `RUST_LOG`
///   directives may still refine. Use `None` on tests and a user supplied
///   level for binaries.
///
/// # Returns
///
/// Returns `Err` if `tracing` can't be initialized. A repeated initialization
/// is not an error and returns `Ok(())`.
pub fn initialize_logger(level: Option<LevelFilter>) -> Result<(), SpvError> {
    // Human readable logs.
    let layer = fmt::layer().with_test_writer();
    // JSON formatted logs.
    let json_layer = fmt::layer::<Registry>().with_test_writer().json();

    let filter = match level {
        Some(level) => EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy(),
        None => EnvFilter::from_default_env(),
    };

    let res = if std::env::var("JSON_LOGS").is_ok() {
        tracing_subscriber::util::SubscriberInitExt::try_init(
            tracing_subscriber::registry().with(json_layer).with(filter),
        )
    } else {
        tracing_subscriber::util::SubscriberInitExt::try_init(
            tracing_subscriber::registry().with(layer).with(filter),
        )
    };

    if let Err(e) = res {
        if e.to_string() != "a global default trace dispatcher has already been set" {
            return Err(SpvError::ConfigError(e.to_string()));
        }

        tracing::trace!("Tracing is already initialized, skipping without errors...");
    };

    Ok(())
}

/// Decodes hex input, with or without a `0x` prefix.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, SpvError> {
    let input = input.trim();
    let input = input.strip_prefix("0x").unwrap_or(input);
    Ok(hex::decode(input)?)
}

/// Decodes a 32-byte hash given in hex.
pub fn decode_hash(input: &str) -> Result<[u8; 32], SpvError> {
    let bytes = decode_hex(input)?;
    bytes.as_slice().try_into().map_err(|_| {
        MalformedInputError::InvalidHex(format!("expected 32 bytes, got {}", bytes.len())).into()
    })
}

/// Formats a difficulty in decimal when it fits in 128 bits, in hex otherwise.
pub fn format_difficulty(difficulty: &U256) -> String {
    let bytes = difficulty.to_be_bytes();
    let (high, low) = bytes.split_at(16);

    match <[u8; 16]>::try_from(low) {
        Ok(low) if high.iter().all(|b| *b == 0) => u128::from_be_bytes(low).to_string(),
        _ => format!("0x{difficulty}"),
    }
}
