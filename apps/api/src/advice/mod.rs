// Résumé review and job-specific recommendations.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod assembler;
pub mod handlers;
pub mod prompts;
pub mod render;
