/// Renders a question and its context into the prompt sent to the provider.
///
/// The template is fixed; inputs are interpolated verbatim with no escaping
/// or truncation.
pub fn format_prompt(question: &str, context: &str) -> String {
    format!(
        "Write a program using loops or recursion to solve: question: {question} context: {context}"
    )
}
