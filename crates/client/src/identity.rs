//! Anonymous visitor identity.
//!
//! A visitor is identified by a random `user_` id generated on first use and
//! kept in a small file, so repeated runs count as the same visitor.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rand::Rng;

use crate::error::{ClientError, Result};

/// Prefix of every generated id.
pub const USER_ID_PREFIX: &str = "user_";

/// Number of random characters after the prefix.
pub const USER_ID_RANDOM_LEN: usize = 9;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates `user_` followed by nine lowercase base-36 characters.
pub fn generate_user_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..USER_ID_RANDOM_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{USER_ID_PREFIX}{suffix}")
}

/// Returns the id stored at `path`, creating and saving a new one if the
/// file is missing or empty.
pub fn load_or_create_user_id(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let stored = contents.trim();
            if stored.chars().any(char::is_whitespace) {
                return Err(ClientError::InvalidUserId {
                    path: path.display().to_string(),
                    reason: "must be a single token".to_string(),
                });
            }
            if !stored.is_empty() {
                return Ok(stored.to_string());
            }
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }

    let user_id = generate_user_id(&mut rand::rng());
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{user_id}\n"))?;

    Ok(user_id)
}
