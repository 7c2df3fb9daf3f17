// Recommendation flow: profile in, one upstream call, award cards out.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod fetcher;
pub mod handlers;
pub mod prompts;
