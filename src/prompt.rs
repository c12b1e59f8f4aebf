//! Evaluation prompt construction.

use crate::util::fill_template;

/// Default interviewer instructions. Placeholders: `{question}`,
/// `{ideal_answer}`, `{answer}`.
pub const DEFAULT_EVALUATION_TEMPLATE: &str = r#"
You are acting as a technical Excel interviewer.
Below is a candidate's response to a question, along with the ideal answer.
Your task is to **formally evaluate** the candidate's answer and provide:
1. **2 to 3 specific and constructive feedback points** that highlight strengths and areas for improvement.
2. A **final score out of 10** reflecting the answer's accuracy, completeness, and clarity.

Please follow this format:
Feedback for the previous question:
- Point 1
- Point 2
- Point 3 (optional)
Score: X/10

---
Question: {question}
Ideal Answer: {ideal_answer}
Candidate Answer: {answer}
"#;

/// Build the evaluation prompt. Pure; inputs are embedded verbatim.
pub fn build_prompt(template: &str, question: &str, ideal_answer: &str, answer: &str) -> String {
  fill_template(
    template,
    &[("question", question), ("ideal_answer", ideal_answer), ("answer", answer)],
  )
}
