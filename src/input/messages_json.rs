use std::io::Read;
use std::path::Path;

use crate::input::{InputError, open_maybe_gz};
use crate::messages::UserMessage;

pub fn load_messages(path: &Path) -> Result<Vec<UserMessage>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    Ok(serde_json::from_str(&json)?)
}
