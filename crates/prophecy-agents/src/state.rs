//! Shared state threaded through the agent loop

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// The human request that started the task
    User,
    /// Routing agent
    Supervisor,
    /// Scripture research worker
    Researcher,
    /// Stellarium command worker
    Executor,
    /// Candidate date worker
    Planner,
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            AgentRole::User => "USER",
            AgentRole::Supervisor => "SUPERVISOR",
            AgentRole::Researcher => "RESEARCHER",
            AgentRole::Executor => "EXECUTOR",
            AgentRole::Planner => "PLANNER",
        };
        write!(f, "{tag}")
    }
}

/// One entry in the conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMessage {
    /// Who wrote the message
    pub role: AgentRole,
    /// Message body
    pub content: String,
}

impl AgentMessage {
    /// Create a message.
    pub fn new(role: AgentRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Render as "[ROLE] content", the form workers see in history.
    pub fn tagged(&self) -> String {
        format!("[{}] {}", self.role, self.content)
    }
}

/// Where the task currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// No worker has acted yet
    Starting,
    /// Researcher produced findings
    Researched,
    /// Executor produced Stellarium commands
    Configured,
    /// Planner produced candidate dates
    DatesIdentified,
    /// Supervisor declared the task finished
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Starting => "starting",
            TaskStatus::Researched => "researched",
            TaskStatus::Configured => "configured",
            TaskStatus::DatesIdentified => "dates_identified",
            TaskStatus::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

/// Output of one researcher step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchFinding {
    /// Request the researcher was given
    pub query: String,
    /// The researcher's analysis
    pub analysis: String,
}

/// Output of one executor step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPlan {
    /// Stellarium command sequence the executor proposed
    pub generated_commands: String,
}

/// Output of one planner step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePlan {
    /// Candidate dates with explanations
    pub analysis: String,
}

/// Accumulated state for one prophecy query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    /// Conversation history, user request first
    pub messages: Vec<AgentMessage>,
    /// Findings from researcher steps
    pub scripture_results: Vec<ResearchFinding>,
    /// Command plans from executor steps
    pub stellarium_commands: Vec<CommandPlan>,
    /// Date candidates from planner steps
    pub candidate_dates: Vec<DatePlan>,
    /// Current task status
    pub task_status: TaskStatus,
}

impl AgentState {
    /// Start fresh from a user query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            messages: vec![AgentMessage::new(AgentRole::User, query)],
            scripture_results: Vec::new(),
            stellarium_commands: Vec::new(),
            candidate_dates: Vec::new(),
            task_status: TaskStatus::Starting,
        }
    }

    /// Content of the most recent message, or a placeholder when the
    /// history is empty.
    pub fn last_message(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or("No request yet")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_with_user_message() {
        let state = AgentState::new("show the blood moon");
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, AgentRole::User);
        assert_eq!(state.task_status, TaskStatus::Starting);
        assert_eq!(state.last_message(), "show the blood moon");
    }

    #[test]
    fn test_message_tagging() {
        let msg = AgentMessage::new(AgentRole::Researcher, "found Joel 2:31");
        assert_eq!(msg.tagged(), "[RESEARCHER] found Joel 2:31");
    }

    #[test]
    fn test_status_display_matches_serde() {
        let json = serde_json::to_string(&TaskStatus::DatesIdentified).unwrap();
        assert_eq!(json, format!("\"{}\"", TaskStatus::DatesIdentified));
    }
}
