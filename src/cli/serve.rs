use crate::{web, Config};
use anyhow::Result;
use std::path::PathBuf;

pub async fn run(pictures: PathBuf, host: &str, port: u16) -> Result<()> {
    let config = Config::new(pictures, host.to_string(), port);

    if !config.pictures.root.is_dir() {
        tracing::warn!(
            "picture root '{}' is not a directory; /api/photosets will fail until it exists",
            config.pictures.root.display()
        );
    }

    let addr = config.addr();
    tracing::info!("Starting server at http://{}", addr);

    web::serve(config).await?;

    Ok(())
}
