//! Newline-terminated JSON records for command output.

use serde::Serialize;
use std::io::{self, Write};

/// Writes `value` as one compact JSON object followed by `\n`.
///
/// `serde_json` leaves `&`, `<` and `>` unescaped, so URLs are written
/// byte-for-byte.
pub fn write_json<W, T>(out: &mut W, value: &T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")?;
    out.flush()
}
