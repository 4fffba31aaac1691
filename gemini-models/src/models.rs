//! Models API surface.

use std::sync::Arc;

use gemini_models_types::models::{ListModelsConfig, ListModelsResponse, Model};

use crate::client::ClientInner;
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 列出模型（单页，默认配置）。
    ///
    /// # Errors
    /// 当请求失败、服务端返回错误状态或响应无法解析时返回错误。
    pub async fn list(&self) -> Result<ListModelsResponse> {
        self.list_with_config(ListModelsConfig::default()).await
    }

    /// 列出模型（单页，带配置）。
    ///
    /// # Errors
    /// 当请求失败、服务端返回错误状态或响应无法解析时返回错误。
    pub async fn list_with_config(&self, config: ListModelsConfig) -> Result<ListModelsResponse> {
        let url = build_models_list_url(&self.inner, &config)?;
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        let body = response.text().await?;
        let result = serde_json::from_str::<ListModelsResponse>(&body)?;
        tracing::debug!(
            count = result.models.as_ref().map_or(0, Vec::len),
            "listed models"
        );
        Ok(result)
    }

    /// 获取单个模型信息。
    ///
    /// # Errors
    /// 当请求失败、服务端返回错误状态或响应无法解析时返回错误。
    pub async fn get(&self, model: impl Into<String>) -> Result<Model> {
        let url = build_model_get_url(&self.inner, &model.into());
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str::<Model>(&body)?)
    }
}

fn transform_model_name(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

fn build_model_get_url(inner: &ClientInner, model: &str) -> String {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    let model = transform_model_name(model);
    format!("{base}{version}/{model}")
}

fn build_models_list_url(inner: &ClientInner, config: &ListModelsConfig) -> Result<String> {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    add_list_query_params(&format!("{base}{version}/models"), config)
}

fn add_list_query_params(url: &str, config: &ListModelsConfig) -> Result<String> {
    let mut url = reqwest::Url::parse(url).map_err(|err| Error::InvalidConfig {
        message: err.to_string(),
    })?;
    if config.page_size.is_some() || config.filter.is_some() {
        let mut pairs = url.query_pairs_mut();
        if let Some(page_size) = config.page_size {
            pairs.append_pair("pageSize", &page_size.to_string());
        }
        if let Some(filter) = &config.filter {
            pairs.append_pair("filter", filter);
        }
    }
    Ok(url.to_string())
}
