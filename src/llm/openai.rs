use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestMessageArgs, CreateChatCompletionRequestArgs, Role},
    Client,
};
use async_trait::async_trait;

use std::time::Duration;

use crate::config::Config;
use crate::error::LlmError;

use super::TextGenerator;

pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u16,
    timeout: Duration,
}

impl OpenAiGenerator {
    pub fn new(config: &Config) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.openai_api_key.clone());
        if let Some(api_base) = config.openai_api_base.as_ref() {
            openai_config = openai_config.with_api_base(api_base.clone());
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_chat_model.clone(),
            max_tokens: config.max_completion_tokens,
            timeout: config.llm_timeout(),
        }
    }

    #[allow(dead_code)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn complete(&self, instructions: &str, prompt: &str) -> Result<String, LlmError> {
        let req = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestMessageArgs::default()
                    .role(Role::System)
                    .content(instructions)
                    .build()?,
                ChatCompletionRequestMessageArgs::default()
                    .role(Role::User)
                    .content(prompt)
                    .build()?,
            ])
            .max_tokens(self.max_tokens)
            .build()?;

        let resp = self.client.chat().create(req).await?;
        tracing::debug!("Chat completion usage: {:?}", resp.usage);

        resp.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, instructions: &str, prompt: &str) -> Result<String, LlmError> {
        tokio::time::timeout(self.timeout, self.complete(instructions, prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))?
    }
}
