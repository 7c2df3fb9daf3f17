// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You respond ONLY with strict JSON. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Instruction that keeps the model from inventing sources.
pub const LEGITIMACY_INSTRUCTION: &str = "All programs must be legal, legitimate, and US-based. \
    Prefer official .gov, .edu, or recognized nonprofit URLs when possible. \
    If you are not sure, include the best known official or widely-recognized site. \
    Do NOT invent fake organizations or fake government programs.";
