use serde::{Deserialize, Serialize};

pub const MAX_NEW_TOKENS: u32 = 230;
pub const TEMPERATURE: f64 = 0.5;
pub const TOP_P: f64 = 0.95;
pub const DO_SAMPLE: bool = false;

/// Decoding parameters forwarded to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            do_sample: DO_SAMPLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextGenerationRequest {
    pub model: String,
    pub inputs: String,
    pub parameters: GenerationParameters,
}

impl TextGenerationRequest {
    pub fn new(model: impl Into<String>, inputs: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            inputs: inputs.into(),
            parameters: GenerationParameters::default(),
        }
    }
}

/// Body posted to the inference endpoint. The model travels in the URL.
#[derive(Debug, Serialize)]
pub(crate) struct InferencePayload<'a> {
    pub inputs: &'a str,
    pub parameters: &'a GenerationParameters,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextGenerationResponse {
    #[serde(default)]
    pub generated_text: Option<String>,
}

impl TextGenerationResponse {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            generated_text: Some(text.into()),
        }
    }

    /// The generated text, if the provider produced any.
    pub fn text(&self) -> Option<&str> {
        self.generated_text.as_deref().filter(|text| !text.is_empty())
    }
}

/// The inference API answers with either a list of generations or a single one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum InferenceOutput {
    Batch(Vec<TextGenerationResponse>),
    Single(TextGenerationResponse),
}

impl InferenceOutput {
    pub fn into_first(self) -> TextGenerationResponse {
        match self {
            Self::Batch(outputs) => outputs.into_iter().next().unwrap_or_default(),
            Self::Single(output) => output,
        }
    }
}
