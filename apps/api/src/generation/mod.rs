// Post generation: form state → prompt → one API call → post drafts.
// All API calls go through llm_client.

pub mod form;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
