// Prompt construction for post generation.
// Instruction lines are appended in a fixed order: thread, hashtags, emojis, character limit.

use crate::generation::form::PostForm;

pub const THREAD_INSTRUCTION: &str = "Format as a thread (multiple connected posts)";
pub const HASHTAGS_INSTRUCTION: &str = "Include relevant and trending hashtags";
pub const EMOJIS_INSTRUCTION: &str = "Include appropriate and engaging emojis";

/// Builds the single prompt string sent to the generation API.
///
/// Total over its input: an empty topic still yields a prompt.
pub fn build_prompt(form: &PostForm) -> String {
    let count = form.variations.get();
    let plural = if count > 1 { "s" } else { "" };

    let mut prompt = format!(
        "Generate {count} engaging social media post{plural} for {} about: {}\n\n",
        form.platform, form.topic
    );
    prompt.push_str(&format!("Tone: {}\n", form.tone));

    if form.include_thread {
        push_line(&mut prompt, THREAD_INSTRUCTION);
    }
    if form.include_hashtags {
        push_line(&mut prompt, HASHTAGS_INSTRUCTION);
    }
    if form.include_emojis {
        push_line(&mut prompt, EMOJIS_INSTRUCTION);
    }
    if let Some(limit) = form.platform.character_limit() {
        prompt.push_str(&format!("Keep each post within {limit} characters\n"));
    }

    prompt
}

fn push_line(prompt: &mut String, line: &str) {
    prompt.push_str(line);
    prompt.push('\n');
}
