//! Generation-method checks used to pick listable models.

use gemini_models_types::models::Model;

/// `generateContent` 方法标签。
pub const GENERATE_CONTENT: &str = "generateContent";
/// `predict` 方法标签。
pub const PREDICT: &str = "predict";

/// 需要展示的生成方法，命中任意一个即可。
pub const LISTED_METHODS: [&str; 2] = [GENERATE_CONTENT, PREDICT];

/// 模型是否支持任一被展示的生成方法。
#[must_use]
pub fn supports_generation(model: &Model) -> bool {
    LISTED_METHODS
        .iter()
        .any(|method| model.supports_method(method))
}

/// 按原顺序筛选出可用于生成的模型。
pub fn generation_models<'a>(models: &'a [Model]) -> impl Iterator<Item = &'a Model> + 'a {
    models.iter().filter(|model| supports_generation(model))
}
