//! Supervisor loop routing work between the agents

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::prompts;
use crate::state::{
    AgentMessage, AgentRole, AgentState, CommandPlan, DatePlan, ResearchFinding, TaskStatus,
};
use prophecy_domain::LlmProvider;
use prophecy_llm::OllamaProvider;
use tracing::{debug, info, warn};

/// What the supervisor chose to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Task is done
    Finish,
    /// Route to the scripture researcher
    Researcher,
    /// Route to the Stellarium executor
    Executor,
    /// Route to the date planner
    Planner,
}

impl Decision {
    /// Parse a supervisor reply.
    ///
    /// Matches by substring after uppercasing, FINISH winning over
    /// agent names. Unrecognized replies route to the researcher so a
    /// rambling supervisor cannot stall the loop.
    pub fn parse(reply: &str) -> Self {
        let upper = reply.to_uppercase();
        if upper.contains("FINISH") {
            Decision::Finish
        } else if upper.contains("RESEARCHER") {
            Decision::Researcher
        } else if upper.contains("EXECUTOR") {
            Decision::Executor
        } else if upper.contains("PLANNER") {
            Decision::Planner
        } else {
            Decision::Researcher
        }
    }
}

/// Runs the supervisor/worker loop for prophecy queries
///
/// Generic over the LLM provider so tests can drive the loop with
/// canned responses. The planner role reuses the researcher provider.
pub struct Orchestrator<P> {
    supervisor: P,
    researcher: P,
    executor: P,
    config: AgentConfig,
}

impl<P> Orchestrator<P>
where
    P: LlmProvider,
{
    /// Build an orchestrator from three providers.
    pub fn new(supervisor: P, researcher: P, executor: P, config: AgentConfig) -> Self {
        Self {
            supervisor,
            researcher,
            executor,
            config,
        }
    }

    /// Run a query to completion.
    ///
    /// Each round asks the supervisor for a routing decision, then
    /// runs the chosen worker, which appends to the shared state.
    /// Returns when the supervisor answers FINISH or the configured
    /// iteration cap is reached.
    pub fn run(&self, query: &str) -> Result<AgentState, AgentError<P::Error>> {
        info!(query, "Starting prophecy query");
        let mut state = AgentState::new(query);

        for iteration in 0..self.config.max_iterations {
            let prompt = prompts::supervisor_prompt(
                state.scripture_results.len(),
                state.stellarium_commands.len(),
                state.candidate_dates.len(),
                state.task_status,
                state.last_message(),
            );
            let reply = self
                .supervisor
                .generate(&prompt)
                .map_err(AgentError::Provider)?;
            let decision = Decision::parse(&reply);
            debug!(iteration, ?decision, "Supervisor decision");

            match decision {
                Decision::Finish => {
                    state.task_status = TaskStatus::Completed;
                    info!(iteration, "Supervisor finished the task");
                    return Ok(state);
                }
                Decision::Researcher => self.research_step(&mut state)?,
                Decision::Executor => self.execute_step(&mut state)?,
                Decision::Planner => self.plan_step(&mut state)?,
            }
        }

        warn!(
            max_iterations = self.config.max_iterations,
            "Iteration cap reached before FINISH"
        );
        Ok(state)
    }

    fn research_step(&self, state: &mut AgentState) -> Result<(), AgentError<P::Error>> {
        let request = state.last_message().to_string();
        let prompt = prompts::researcher_prompt(&request);
        let analysis = self
            .researcher
            .generate(&prompt)
            .map_err(AgentError::Provider)?;

        state.scripture_results.push(ResearchFinding {
            query: request,
            analysis: analysis.clone(),
        });
        state
            .messages
            .push(AgentMessage::new(AgentRole::Researcher, analysis));
        state.task_status = TaskStatus::Researched;
        Ok(())
    }

    fn execute_step(&self, state: &mut AgentState) -> Result<(), AgentError<P::Error>> {
        let findings = match state.scripture_results.last() {
            Some(finding) => serde_json::to_string(finding)?,
            None => "{}".to_string(),
        };
        let prompt = prompts::executor_prompt(&findings);
        let commands = self
            .executor
            .generate(&prompt)
            .map_err(AgentError::Provider)?;

        state.stellarium_commands.push(CommandPlan {
            generated_commands: commands.clone(),
        });
        state
            .messages
            .push(AgentMessage::new(AgentRole::Executor, commands));
        state.task_status = TaskStatus::Configured;
        Ok(())
    }

    fn plan_step(&self, state: &mut AgentState) -> Result<(), AgentError<P::Error>> {
        let context = match state.scripture_results.last() {
            Some(finding) => serde_json::to_string(finding)?,
            None => "{}".to_string(),
        };
        let prompt = prompts::planner_prompt(
            &context,
            self.config.planner_start_year,
            self.config.planner_end_year,
        );
        // The planner shares the researcher model.
        let analysis = self
            .researcher
            .generate(&prompt)
            .map_err(AgentError::Provider)?;

        state.candidate_dates.push(DatePlan {
            analysis: analysis.clone(),
        });
        state
            .messages
            .push(AgentMessage::new(AgentRole::Planner, analysis));
        state.task_status = TaskStatus::DatesIdentified;
        Ok(())
    }
}

impl Orchestrator<OllamaProvider> {
    /// Build an orchestrator wired to local Ollama per the config.
    pub fn from_config(config: AgentConfig) -> Self {
        let supervisor = OllamaProvider::new(&config.ollama_endpoint, &config.supervisor_model)
            .with_temperature(config.supervisor_temperature);
        let researcher = OllamaProvider::new(&config.ollama_endpoint, &config.researcher_model)
            .with_temperature(config.researcher_temperature);
        let executor = OllamaProvider::new(&config.ollama_endpoint, &config.executor_model)
            .with_temperature(config.executor_temperature);

        Self::new(supervisor, researcher, executor, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prophecy_llm::MockProvider;

    fn orchestrator_with_supervisor(supervisor: MockProvider) -> Orchestrator<MockProvider> {
        Orchestrator::new(
            supervisor,
            MockProvider::new("Joel 2:31 speaks of the moon turning to blood over Jerusalem"),
            MockProvider::new("set_biblical_location('jerusalem'); set_time_julian(2456749.5)"),
            AgentConfig::quick(),
        )
    }

    #[test]
    fn test_decision_parse() {
        assert_eq!(Decision::parse("FINISH"), Decision::Finish);
        assert_eq!(Decision::parse("I choose RESEARCHER next"), Decision::Researcher);
        assert_eq!(Decision::parse("executor"), Decision::Executor);
        assert_eq!(Decision::parse("the PLANNER should act"), Decision::Planner);
    }

    #[test]
    fn test_decision_finish_wins_over_agent_names() {
        assert_eq!(
            Decision::parse("RESEARCHER is done, so FINISH"),
            Decision::Finish
        );
    }

    #[test]
    fn test_decision_defaults_to_researcher() {
        assert_eq!(Decision::parse("hmm, not sure"), Decision::Researcher);
    }

    #[test]
    fn test_finish_completes_immediately() {
        let orchestrator = orchestrator_with_supervisor(MockProvider::new("FINISH"));
        let state = orchestrator.run("show the blood moon").unwrap();

        assert_eq!(state.task_status, TaskStatus::Completed);
        assert!(state.scripture_results.is_empty());
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_researcher_loop_hits_iteration_cap() {
        let orchestrator = orchestrator_with_supervisor(MockProvider::new("RESEARCHER"));
        let state = orchestrator.run("show the blood moon").unwrap();

        // Never told to finish; one finding per round up to the cap.
        let cap = AgentConfig::quick().max_iterations;
        assert_eq!(state.scripture_results.len(), cap);
        assert_eq!(state.task_status, TaskStatus::Researched);
        assert_eq!(state.messages.len(), 1 + cap);
        assert_eq!(state.messages[1].role, AgentRole::Researcher);
    }

    #[test]
    fn test_executor_records_command_plan() {
        let orchestrator = orchestrator_with_supervisor(MockProvider::new("EXECUTOR"));
        let state = orchestrator.run("configure the sky").unwrap();

        assert!(!state.stellarium_commands.is_empty());
        assert_eq!(state.task_status, TaskStatus::Configured);
        assert!(state.stellarium_commands[0]
            .generated_commands
            .contains("set_biblical_location"));
    }

    #[test]
    fn test_planner_uses_researcher_provider() {
        let researcher = MockProvider::new("2014-04-15: total lunar eclipse over Jerusalem");
        let orchestrator = Orchestrator::new(
            MockProvider::new("PLANNER"),
            researcher.clone(),
            MockProvider::new("unused"),
            AgentConfig::quick(),
        );

        let state = orchestrator.run("when could this have happened?").unwrap();

        assert_eq!(state.task_status, TaskStatus::DatesIdentified);
        assert_eq!(state.candidate_dates.len(), AgentConfig::quick().max_iterations);
        // One planner call per round, all through the researcher provider.
        assert_eq!(researcher.call_count(), AgentConfig::quick().max_iterations);
    }

    #[test]
    fn test_provider_failure_surfaces() {
        let supervisor = MockProvider::new("RESEARCHER");
        let mut researcher = MockProvider::default();
        let prompt = crate::prompts::researcher_prompt("bad query");
        researcher.add_error(&prompt);

        let orchestrator = Orchestrator::new(
            supervisor,
            researcher,
            MockProvider::new("unused"),
            AgentConfig::quick(),
        );

        let result = orchestrator.run("bad query");
        assert!(matches!(result, Err(AgentError::Provider(_))));
    }

    #[test]
    fn test_two_phase_run() {
        // Supervisor routes research first, then finishes.
        let mut supervisor = MockProvider::new("FINISH");
        let initial_prompt = crate::prompts::supervisor_prompt(
            0,
            0,
            0,
            TaskStatus::Starting,
            "show the blood moon",
        );
        supervisor.add_response(&initial_prompt, "RESEARCHER");

        let orchestrator = orchestrator_with_supervisor(supervisor);
        let state = orchestrator.run("show the blood moon").unwrap();

        assert_eq!(state.scripture_results.len(), 1);
        assert_eq!(state.task_status, TaskStatus::Completed);
    }
}
