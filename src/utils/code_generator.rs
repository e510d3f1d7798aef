//! Short code generation.
//!
//! Codes are drawn from an alphabet without easily confused glyphs, using the
//! operating system CSPRNG and rejection sampling so every symbol is equally
//! likely.

/// Symbols a generated code may contain: ASCII letters without `I`, `O`, `l`,
/// plus the digits 2-9.
pub const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789";

/// Length of every code issued by the shortener.
pub const CODE_LENGTH: usize = 7;

/// Random bytes fetched from the OS per refill.
const RANDOM_BATCH: usize = 32;

/// The OS random source could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error generating short code: {0}")]
pub struct GenerationError(String);

impl GenerationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Source of fresh short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a code of exactly `length` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if randomness is unavailable. Callers treat
    /// this as fatal for the current request.
    fn generate(&self, length: usize) -> Result<String, GenerationError>;
}

/// [`CodeGenerator`] backed by `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> Result<String, GenerationError> {
        let mut code = String::with_capacity(length);
        let mut buffer = [0u8; RANDOM_BATCH];

        while code.len() < length {
            getrandom::fill(&mut buffer).map_err(|e| GenerationError::new(e.to_string()))?;

            for symbol in buffer.iter().filter_map(|&byte| symbol_for(byte)) {
                code.push(symbol);
                if code.len() == length {
                    break;
                }
            }
        }

        Ok(code)
    }
}

/// Largest multiple of the alphabet size that fits in a byte.
///
/// Bytes at or above it would favour the first symbols of the alphabet.
const fn rejection_threshold() -> usize {
    256 - (256 % ALPHABET.len())
}

/// Maps a raw random byte to a symbol, or `None` if it must be redrawn.
fn symbol_for(byte: u8) -> Option<char> {
    let value = byte as usize;
    (value < rejection_threshold()).then(|| ALPHABET[value % ALPHABET.len()] as char)
}
