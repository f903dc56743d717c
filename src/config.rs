use anyhow::{anyhow, Result};
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct InkwellConfig {
    pub api_port: u16,
    /// Posts per feed page, fixed for the whole deployment.
    pub page_size: usize,
    pub paths: InkwellPaths,
}

impl InkwellConfig {
    pub fn from_env() -> Result<Self> {
        let paths = InkwellPaths::discover()?;
        let api_port = env::var("INKWELL_API_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8080);
        let page_size = env::var("INKWELL_PAGE_SIZE")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Ok(Self {
            api_port,
            page_size,
            paths,
        })
    }

    pub fn new(api_port: u16, page_size: usize, paths: InkwellPaths) -> Self {
        Self {
            api_port,
            page_size,
            paths,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InkwellPaths {
    pub base: PathBuf,
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
}

impl InkwellPaths {
    pub fn discover() -> Result<Self> {
        let exe_path = std::env::current_exe()
            .map_err(|err| anyhow!("failed to resolve current executable: {err}"))?;
        let base = exe_path
            .parent()
            .ok_or_else(|| anyhow!("executable path missing parent"))?
            .to_path_buf();
        Ok(Self::from_base_dir(base))
    }

    pub fn from_base_dir<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref().to_path_buf();
        let data_dir = base.join("data");
        let db_path = data_dir.join("inkwell.db");
        Self {
            base,
            data_dir,
            db_path,
        }
    }
}
