//! Layout configuration (`layout.toml`).
//!
//! An explicit `--layout` file must load cleanly. The implicit file in the user
//! config dir is best-effort: problems become warnings and defaults are used.

use directories::ProjectDirs;
use sheetdigest_core::{DigestError, LayoutPolicy, Result};
use std::path::{Path, PathBuf};

const MAX_LAYOUT_FILE_BYTES: u64 = 1_048_576; // 1 MiB

/// Location of the per-user layout file, if the platform has a config dir.
pub fn user_layout_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "sheetdigest")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("layout.toml");
    Some(path)
}

/// Resolve the layout policy and any warnings worth showing the user.
pub fn load_layout(
    explicit: Option<&Path>,
    use_user_config: bool,
) -> Result<(LayoutPolicy, Vec<String>)> {
    if let Some(path) = explicit {
        return Ok((read_layout_file(path)?, Vec::new()));
    }

    let mut warnings = Vec::new();
    if use_user_config {
        if let Some(path) = user_layout_path() {
            if path.exists() {
                match read_layout_file(&path) {
                    Ok(policy) => {
                        log::debug!("using layout from {}", path.display());
                        return Ok((policy, warnings));
                    }
                    Err(err) => warnings.push(format!("{}; using default layout", err)),
                }
            }
        }
    }

    Ok((LayoutPolicy::default(), warnings))
}

fn read_layout_file(path: &Path) -> Result<LayoutPolicy> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_LAYOUT_FILE_BYTES {
        return Err(DigestError::Config {
            path: path.to_path_buf(),
            message: format!(
                "file too large ({} bytes, max {})",
                meta.len(),
                MAX_LAYOUT_FILE_BYTES
            ),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_layout(&content).map_err(|err| match err {
        DigestError::Config { message, .. } => DigestError::Config {
            path: path.to_path_buf(),
            message,
        },
        DigestError::InvalidLayout(message) => {
            DigestError::InvalidLayout(format!("{}: {}", path.display(), message))
        }
        other => other,
    })
}

/// Parse and validate layout TOML. Missing keys keep their defaults.
pub fn parse_layout(content: &str) -> Result<LayoutPolicy> {
    let policy: LayoutPolicy = toml::from_str(content).map_err(|err| DigestError::Config {
        path: PathBuf::new(),
        message: err.to_string(),
    })?;
    policy.validate().map_err(DigestError::InvalidLayout)?;
    Ok(policy)
}
