//! Supervisor and worker agents for prophecy research
//!
//! A supervisor model routes each step of a query to one of three
//! workers: a scripture researcher, a Stellarium command executor, and
//! a date planner. Workers append their findings to shared state and
//! control returns to the supervisor until it decides the task is
//! finished or the iteration cap is hit.
//!
//! The orchestrator is generic over [`prophecy_domain::LlmProvider`],
//! so tests drive it with canned responses and production wires it to
//! local Ollama models.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod prompts;
pub mod state;

pub use config::AgentConfig;
pub use error::AgentError;
pub use orchestrator::{Decision, Orchestrator};
pub use state::{AgentMessage, AgentRole, AgentState, CommandPlan, DatePlan, ResearchFinding, TaskStatus};
