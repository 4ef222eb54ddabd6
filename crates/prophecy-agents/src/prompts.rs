//! Prompt templates for the supervisor and workers

use crate::state::TaskStatus;

/// Build the supervisor routing prompt.
///
/// The supervisor sees a summary of accumulated state and the latest
/// message, and must answer with a single agent name or FINISH.
pub fn supervisor_prompt(
    scripture_count: usize,
    stellarium_count: usize,
    dates_count: usize,
    task_status: TaskStatus,
    user_message: &str,
) -> String {
    format!(
        "You are a supervisor agent coordinating a team to visualize biblical prophecies in Stellarium.\n\
         \n\
         Your team:\n\
         - RESEARCHER: Searches scripture for prophetic verses, analyzes celestial references\n\
         - EXECUTOR: Configures Stellarium to display astronomical events\n\
         - PLANNER: Identifies candidate dates when exact dates are uncertain\n\
         \n\
         Given the user's request, decide which agent should handle the next step.\n\
         Respond with ONLY one of: RESEARCHER, EXECUTOR, PLANNER, or FINISH\n\
         \n\
         Current state:\n\
         - Scripture results: {scripture_count} verses found\n\
         - Stellarium commands: {stellarium_count} pending\n\
         - Candidate dates: {dates_count} dates identified\n\
         - Task status: {task_status}\n\
         \n\
         User request: {user_message}\n\
         \n\
         Which agent should act next?"
    )
}

/// Build the scripture researcher prompt.
pub fn researcher_prompt(request: &str) -> String {
    format!(
        "You are a scripture research specialist focused on finding prophetic verses with astronomical significance.\n\
         \n\
         Your capabilities:\n\
         1. Search for verses about cosmic events (sun darkening, blood moons, stars falling)\n\
         2. Analyze passages for celestial imagery\n\
         3. Identify cross-references between prophecies\n\
         4. Determine relevant biblical locations for viewing events\n\
         \n\
         Given the request, search for relevant scripture and extract:\n\
         - Specific verse references\n\
         - Celestial objects mentioned (sun, moon, stars, constellations)\n\
         - Suggested viewing location (Jerusalem, Babylon, etc.)\n\
         - Date clues from the text\n\
         \n\
         Request: {request}\n\
         \n\
         Provide your findings in a structured format."
    )
}

/// Build the Stellarium executor prompt from researcher findings.
pub fn executor_prompt(findings: &str) -> String {
    format!(
        "You are a Stellarium execution specialist. You translate scripture analysis into Stellarium commands.\n\
         \n\
         Based on the research findings, determine:\n\
         1. Which location to set (use set_biblical_location)\n\
         2. What time/date to set (use set_time_gregorian or set_time_julian)\n\
         3. Which celestial object to focus on (use focus_on_object)\n\
         \n\
         Research findings:\n\
         {findings}\n\
         \n\
         Generate the sequence of Stellarium commands needed.\n\
         If the date is uncertain, flag this for the PLANNER agent."
    )
}

/// Build the date planner prompt.
pub fn planner_prompt(context: &str, start_year: i32, end_year: i32) -> String {
    format!(
        "You are a date analysis specialist. When prophecies have uncertain dates, you identify candidate astronomical events.\n\
         \n\
         For prophecies about:\n\
         - Blood moons: Look for total lunar eclipses\n\
         - Sun darkening: Look for solar eclipses\n\
         - Star signs: Look for notable conjunctions or meteor events\n\
         - General celestial signs: Look for remarkable astronomical alignments\n\
         \n\
         Research context:\n\
         {context}\n\
         \n\
         Date range to search: {start_year} to {end_year}\n\
         \n\
         Identify 3-5 candidate dates that could match this prophecy.\n\
         Format each as: YYYY-MM-DD (or -YYYY for BC dates) with brief explanation."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supervisor_prompt_carries_state() {
        let prompt = supervisor_prompt(3, 1, 0, TaskStatus::Researched, "show the sign");
        assert!(prompt.contains("Scripture results: 3 verses found"));
        assert!(prompt.contains("Stellarium commands: 1 pending"));
        assert!(prompt.contains("Task status: researched"));
        assert!(prompt.contains("User request: show the sign"));
    }

    #[test]
    fn test_supervisor_prompt_names_all_outcomes() {
        let prompt = supervisor_prompt(0, 0, 0, TaskStatus::Starting, "q");
        for name in ["RESEARCHER", "EXECUTOR", "PLANNER", "FINISH"] {
            assert!(prompt.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_planner_prompt_embeds_range() {
        let prompt = planner_prompt("{}", -100, 2030);
        assert!(prompt.contains("Date range to search: -100 to 2030"));
    }
}
