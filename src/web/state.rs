use crate::Config;
use std::path::PathBuf;

pub struct AppState {
    pub config: Config,
    pub pictures_dir: PathBuf,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let pictures_dir = config.pictures.root.clone();
        Self {
            config,
            pictures_dir,
        }
    }
}
