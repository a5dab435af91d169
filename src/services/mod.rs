pub mod llm;
pub mod praise_api;
pub mod tone;
