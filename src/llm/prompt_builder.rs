use crate::llm::prompts;

/// Character budget for the commit diff embedded in the prompt.
pub const MAX_DIFF_CHARS: usize = 4000;

pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Clip `s` to at most `max_chars` characters, never splitting one.
pub fn clip_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Build the README rewrite prompt. The diff is embedded as given; callers
/// clip it to [`MAX_DIFF_CHARS`] beforehand.
pub fn readme_update_prompt(
    current_readme: &str,
    diff: &str,
    commit_log: &str,
    project_hint: Option<&str>,
) -> PromptPair {
    let mut system = prompts::SYSTEM_INSTRUCTIONS.to_owned();
    if let Some(hint) = project_hint {
        system.push_str("\nProject background: ");
        system.push_str(hint);
    }

    let user = format!(
        "You are an expert technical writer maintaining documentation for a software project.\n\n\
         Your task is to update the README file based on the latest code changes. Review the git \
         diff and commit history below, then update ONLY the relevant sections of the README that \
         are affected by these changes.\n\n\
         **Latest Commit Changes:**\n\
         {diff}\n\n\
         **Recent Commit History:**\n\
         {commit_log}\n\n\
         **Current README Content:**\n\
         {current_readme}\n\n\
         {rules}",
        rules = prompts::UPDATE_RULES
    );

    PromptPair { system, user }
}
