use std::path::Path;

use routelink_store::MemoryStore;

use crate::exit::{io_error, json_error, CliResult};

pub fn load_store(path: &Path) -> CliResult<MemoryStore> {
    let text = std::fs::read_to_string(path).map_err(|err| io_error("reading state file", err))?;
    MemoryStore::from_json(&text).map_err(|err| json_error("parsing state file", err))
}

pub fn save_store(path: &Path, store: &MemoryStore) -> CliResult<()> {
    let mut text = store
        .to_json_pretty()
        .map_err(|err| json_error("serializing state file", err))?;
    text.push('\n');
    std::fs::write(path, text).map_err(|err| io_error("writing state file", err))
}
