// Prompts for the LLM fallback, used only when no deterministic route matches.

pub const CHAT_SYSTEM: &str = "\
You are a portfolio assistant. Answer using only the provided resume context. \
If a detail is missing, say it is not listed in the resume. \
Keep responses concise, accurate, and professional. \
Use strengths-first language and frame improvement points positively (growth mindset), \
without negative or damaging phrasing. \
Never use the phrase 'beginner developer'.";

pub const CHAT_PROMPT_TEMPLATE: &str = "\
Resume context:
{context}

User question: {question}

Give a factual answer based only on context.";

pub fn build_chat_prompt(context: &str, question: &str) -> String {
    CHAT_PROMPT_TEMPLATE
        .replace("{context}", context)
        .replace("{question}", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chat_prompt() {
        let prompt = build_chat_prompt("## Education\nDA-IICT", "Where did you study?");
        assert_eq!(
            prompt,
            "Resume context:\n## Education\nDA-IICT\n\nUser question: Where did you study?\n\n\
             Give a factual answer based only on context."
        );
    }
}
