//! Lists the models an API key can generate content with.
//!
//! Every path ends normally: a missing credential prints two advisory lines,
//! and any failure while building the client or listing collapses into a
//! single `Error listing models: ...` line on the same writer.

use std::future::Future;
use std::io::{self, Write};

use gemini_models_types::models::Model;

use crate::capabilities::generation_models;
use crate::error::Result;
use crate::models::Models;
use crate::settings::API_KEY_ENV;

/// 可列出模型的数据源。
pub trait ModelSource {
    /// 获取当前凭据可见的模型（单次请求，不翻页）。
    fn list_models(&self) -> impl Future<Output = Result<Vec<Model>>> + Send;
}

impl ModelSource for Models {
    async fn list_models(&self) -> Result<Vec<Model>> {
        Ok(self.list().await?.into_models())
    }
}

/// 一次运行的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 未找到凭据，未发起任何请求。
    MissingCredential,
    /// 列出成功。
    Listed { total: usize, matched: usize },
    /// 构建客户端或列出模型失败，已输出错误行。
    Failed,
}

/// 模型列出器，所有输出写入 `out`。
pub struct ModelLister<W> {
    out: W,
}

impl<W: Write> ModelLister<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// 检查凭据，列出并打印支持 `generateContent` 或 `predict` 的模型。
    ///
    /// `connect` 仅在凭据存在时调用。
    ///
    /// # Errors
    /// 仅当写入 `out` 失败时返回错误。
    pub async fn run<S, F>(&mut self, api_key: Option<&str>, connect: F) -> io::Result<Outcome>
    where
        S: ModelSource,
        F: FnOnce(&str) -> Result<S>,
    {
        let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) else {
            tracing::debug!("no credential, skipping model listing");
            writeln!(self.out, "Warning: {API_KEY_ENV} not found in .env")?;
            writeln!(self.out, "Please set {API_KEY_ENV} environment variable.")?;
            return Ok(Outcome::MissingCredential);
        };

        let listed = match connect(api_key) {
            Ok(source) => source.list_models().await,
            Err(err) => Err(err),
        };
        let models = match listed {
            Ok(models) => models,
            Err(err) => {
                tracing::debug!(error = %err, "listing models failed");
                writeln!(self.out, "Error listing models: {err}")?;
                return Ok(Outcome::Failed);
            }
        };

        writeln!(self.out, "List of available models:")?;
        let mut matched = 0;
        for model in generation_models(&models) {
            write_model(&mut self.out, model)?;
            matched += 1;
        }
        tracing::debug!(total = models.len(), matched, "listed models");
        Ok(Outcome::Listed {
            total: models.len(),
            matched,
        })
    }
}

fn write_model(out: &mut impl Write, model: &Model) -> io::Result<()> {
    writeln!(out, "Model Name: {}", model.name())?;
    writeln!(
        out,
        " - Supported Methods: {:?}",
        model.supported_generation_methods
    )
}
