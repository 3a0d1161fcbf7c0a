// All prompt text for interview question generation.

/// System prompt: fixed interviewer role and output format.
pub const SYSTEM_PROMPT: &str = "You are an AI interviewer. Generate exactly 5 interview questions based on the job description and resume provided.
Your response must contain ONLY the 5 numbered questions - no introduction, no explanation, no additional text.
Include technical questions that assess the candidate's fit for the role.";

/// User prompt template. Replace `{job_description}` and `{resume_text}` before sending.
pub const USER_PROMPT_TEMPLATE: &str = "
Job Description:
{job_description}

Resume:
{resume_text}

Generate exactly 5 relevant interview questions. Format as a numbered list. Include only the questions - no other text.";

/// Embeds the literal inputs under their headings.
pub fn build_user_prompt(job_description: &str, resume_text: &str) -> String {
    // Single pass over the template so placeholder text inside the inputs is left alone.
    let (head, rest) = USER_PROMPT_TEMPLATE
        .split_once("{job_description}")
        .unwrap_or((USER_PROMPT_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("{resume_text}").unwrap_or((rest, ""));

    let mut prompt = String::with_capacity(
        USER_PROMPT_TEMPLATE.len() + job_description.len() + resume_text.len(),
    );
    prompt.push_str(head);
    prompt.push_str(job_description);
    prompt.push_str(middle);
    prompt.push_str(resume_text);
    prompt.push_str(tail);
    prompt
}
