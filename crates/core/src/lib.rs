pub mod article;
pub mod clean;
pub mod content;
pub mod error;
pub mod extractor;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod inject;
pub mod metadata;
pub mod parse;
pub mod pipeline;

pub use article::ExtractedArticle;
pub use clean::{CleanConfig, clean_html};
pub use content::{CONTENT_CHAR_THRESHOLD, CONTENT_SELECTORS, extract_content};
pub use error::{BacaError, Result};
#[cfg(feature = "fetch")]
pub use extractor::{extract, extract_with_config};
pub use extractor::{Extractor, extract_from_html};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url};
pub use inject::{ContentFormat, RelatedLink, inject_links};
pub use parse::{Document, Element};
pub use pipeline::{ContentPipeline, PipelineResult, RewriteLength, RewriteOptions, Rewriter};
