/*!
 * Document-level translation.
 *
 * Splits a document into frontmatter and body, sends the translatable
 * pieces through the oracle one at a time, and reassembles the result.
 * Oracle failures never abort a document: the untranslated segment is kept.
 */

use anyhow::Result;
use log::{debug, warn};
use std::path::Path;
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::DocumentError;
use crate::frontmatter::{self, Frontmatter, SplitDocument};
use crate::language_utils;
use crate::oracle::{TranslationOracle, TranslationRequest};
use crate::translation::prompts::PromptTemplate;

/// Translates whole documents through an oracle
#[derive(Debug, Clone)]
pub struct DocumentTranslator {
    oracle: Arc<dyn TranslationOracle>,
    template: PromptTemplate,
    source_language: String,
    target_language: String,
    source_language_name: String,
    target_language_name: String,
    preserve_terms: Vec<String>,
    translatable_keys: Vec<String>,
    rewrite_locale_links: bool,
}

impl DocumentTranslator {
    /// Build a translator from the configuration and an oracle
    pub fn from_config(config: &Config, oracle: Arc<dyn TranslationOracle>) -> Result<Self> {
        Ok(Self {
            oracle,
            template: PromptTemplate::default(),
            source_language: language_utils::normalize_to_part1_or_part3(&config.source_language)?,
            target_language: language_utils::normalize_to_part1_or_part3(&config.target_language)?,
            source_language_name: language_utils::get_language_name(&config.source_language)?,
            target_language_name: language_utils::get_language_name(&config.target_language)?,
            preserve_terms: config.preserve_terms.clone(),
            translatable_keys: config.translatable_keys.clone(),
            rewrite_locale_links: config.rewrite_locale_links,
        })
    }

    /// Replace the instruction template
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn oracle_name(&self) -> String {
        self.oracle.name()
    }

    /// Translate one segment, falling back to the original text on any oracle failure.
    ///
    /// Surrounding whitespace is kept from the source; only the trimmed core
    /// is sent. Blank segments are returned as-is without an oracle call.
    pub async fn translate_text(&self, text: &str) -> String {
        let core = text.trim();
        if core.is_empty() {
            return text.to_string();
        }

        let request = TranslationRequest {
            text: core.to_string(),
            prompt: self.template.render(
                &self.source_language_name,
                &self.target_language_name,
                &self.preserve_terms,
                core,
            ),
        };

        match self.oracle.translate(&request).await {
            Ok(answer) => {
                let start = text.len() - text.trim_start().len();
                let end = text.trim_end().len();
                format!("{}{}{}", &text[..start], answer.trim(), &text[end..])
            }
            Err(e) => {
                warn!("Translation error, keeping original text: {}", e);
                text.to_string()
            }
        }
    }

    /// Translate a document's text content
    pub async fn translate_content(&self, content: &str) -> String {
        self.translate_document(content).await.assemble()
    }

    /// Translate the allow-listed frontmatter keys and the body of a document
    pub async fn translate_document(&self, content: &str) -> SplitDocument {
        let SplitDocument {
            frontmatter: source_frontmatter,
            body,
        } = frontmatter::split(content);

        let mut translated_frontmatter = Frontmatter::new();
        for (key, value) in source_frontmatter.iter() {
            if self.translatable_keys.iter().any(|k| k == key) {
                debug!("Translating frontmatter key '{}'", key);
                translated_frontmatter.insert(key, self.translate_text(value).await);
            } else {
                translated_frontmatter.insert(key, value);
            }
        }

        let mut translated_body = self.translate_text(&body).await;
        if self.rewrite_locale_links {
            translated_body = self.rewrite_links(&translated_body);
        }

        SplitDocument {
            frontmatter: translated_frontmatter,
            body: translated_body,
        }
    }

    /// Read and translate a document; a result with no keys and a blank body is an error
    pub async fn translate_file(&self, path: &Path) -> Result<String, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let translated = self.translate_document(&content).await;
        if translated.is_blank() {
            return Err(DocumentError::EmptyOutput);
        }

        Ok(translated.assemble())
    }

    /// Point absolute site links at the target-language tree
    pub fn rewrite_links(&self, text: &str) -> String {
        text.replace(
            &format!("](/{}/", self.source_language),
            &format!("](/{}/", self.target_language),
        )
    }
}
