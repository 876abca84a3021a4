/*!
 * Prompt template for documentation translation.
 *
 * The oracle is a general-purpose assistant, so every call carries the full
 * rule set alongside the segment to translate.
 */

/// Instruction template sent with every segment.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// Default instructions for technical documentation.
    /// Placeholders: {source_language}, {target_language}, {preserve_terms}, {text}
    pub const DOCUMENTATION_TRANSLATOR: &'static str = r#"You are an expert translator. Translate the following technical documentation from {source_language} to {target_language}.

IMPORTANT RULES:
1. Keep these technical terms in {source_language}: {preserve_terms}
2. Keep all code blocks unchanged
3. Keep all markdown formatting (links, bold, italic, headers)
4. Keep image URLs unchanged
5. Keep HTML tags and JSX expressions unchanged
6. Only translate natural language text
7. Maintain the exact same structure and formatting
8. Use natural, idiomatic {target_language} - not machine translation
9. Keep all emojis
10. Keep all file paths and command syntax unchanged

Text to translate:
---
{text}
---

Provide ONLY the translated text, with no additional explanations or comments."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    pub fn documentation_translator() -> Self {
        Self::new(Self::DOCUMENTATION_TRANSLATOR)
    }

    /// Render the template for one segment.
    ///
    /// `{text}` is substituted last so that braces inside the document are
    /// never treated as placeholders.
    pub fn render(
        &self,
        source_language: &str,
        target_language: &str,
        preserve_terms: &[String],
        text: &str,
    ) -> String {
        let rendered = self
            .template
            .replace("{source_language}", source_language)
            .replace("{target_language}", target_language)
            .replace("{preserve_terms}", &preserve_terms.join(", "));

        match rendered.split_once("{text}") {
            Some((before, after)) => format!("{}{}{}", before, text, after),
            None => format!("{}\n\n{}", rendered, text),
        }
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::documentation_translator()
    }
}
