use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "segue";

pub fn data_root() -> PathBuf {
    if let Ok(override_dir) = env::var("SEGUE_DATA_DIR") {
        return PathBuf::from(override_dir);
    }

    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}
