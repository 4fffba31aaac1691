//! Environment-backed settings, optionally seeded from a `.env` file.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// 凭据所在的环境变量。
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const BASE_URL_ENVS: [&str; 2] = ["GENAI_BASE_URL", "GEMINI_BASE_URL"];
const API_VERSION_ENV: &str = "GENAI_API_VERSION";

/// 运行设置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// API 密钥；空白值视为缺失。
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub api_version: Option<String>,
}

impl Settings {
    /// 从进程环境读取设置。
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过自定义查找函数读取设置。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            api_key: non_blank(API_KEY_ENV),
            base_url: BASE_URL_ENVS.into_iter().find_map(|key| non_blank(key)),
            api_version: non_blank(API_VERSION_ENV),
        }
    }
}

/// 从当前目录起向上查找 `.env` 并合并进进程环境；已存在的变量不会被覆盖。
///
/// 返回加载的文件路径，未找到时为 `None`。
///
/// # Errors
/// 文件存在但无法读取或解析时返回错误。
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded env file");
            Ok(Some(path))
        }
        Err(err) if err.not_found() => {
            tracing::debug!("no env file found");
            Ok(None)
        }
        Err(err) => Err(dotenv_error(err, Path::new(".env"))),
    }
}

/// 将指定的 dotenv 文件合并进进程环境；已存在的变量不会被覆盖。
///
/// 返回是否找到并加载了文件。
///
/// # Errors
/// 文件存在但无法读取或解析时返回错误。
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded env file");
            Ok(true)
        }
        Err(err) if err.not_found() => {
            tracing::debug!(path = %path.display(), "env file not found");
            Ok(false)
        }
        Err(err) => Err(dotenv_error(err, path)),
    }
}

fn dotenv_error(err: dotenvy::Error, path: &Path) -> Error {
    match err {
        dotenvy::Error::Io(source) => Error::Io { source },
        err => Error::InvalidConfig {
            message: format!("Invalid env file {}: {err}", path.display()),
        },
    }
}
