/*!
 * Translation of documentation files through an oracle.
 *
 * - `document`: frontmatter-aware document translation with fail-open segments
 * - `prompts`: instruction template sent with every segment
 */

// Re-export main types for easier usage
pub use self::document::DocumentTranslator;
pub use self::prompts::PromptTemplate;

// Submodules
pub mod document;
pub mod prompts;
