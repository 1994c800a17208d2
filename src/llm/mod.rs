pub mod openai;

use async_trait::async_trait;

use crate::error::LlmError;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, instructions: &str, prompt: &str) -> Result<String, LlmError>;
}
