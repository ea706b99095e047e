use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use md5::{Digest, Md5};

use crate::error::{Result, SeqTallyError};

const READ_BUF: usize = 64 * 1024;

/// MD5 of everything `reader` yields, as 32 lowercase hex characters.
pub fn md5_hex<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Md5::new();
    let mut buf = vec![0u8; READ_BUF];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let mut out = String::with_capacity(32);
    for byte in hasher.finalize().iter() {
        write!(out, "{:02x}", byte).unwrap();
    }
    Ok(out)
}

/// Checksum of the file's raw bytes as stored on disk (compressed files are
/// hashed as-is).
pub fn file_digest<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let unavailable = |source| SeqTallyError::DigestUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let f = File::open(path).map_err(unavailable)?;
    md5_hex(BufReader::new(f)).map_err(unavailable)
}
