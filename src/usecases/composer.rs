//! Assembles outgoing messages: templates, indented listings, uploaded images,
//! authority markers.

use crate::domain::{
    Authority, DomainError, MessageChain, MessageChainBuilder, Placeholder, as_message_chain,
};
use crate::ports::ImageUploader;
use crate::shared::text::{Indent, append_line_indent};
use crate::usecases::authority::annotate;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub struct MessageComposer {
    uploader: Arc<dyn ImageUploader>,
    indent_width: usize,
}

impl MessageComposer {
    pub fn new(uploader: Arc<dyn ImageUploader>, indent_width: usize) -> Self {
        Self {
            uploader,
            indent_width,
        }
    }

    /// Fills `template` from `placeholder` as a single plain segment.
    pub fn render(&self, template: &str, placeholder: &Placeholder) -> MessageChain {
        as_message_chain(&placeholder.format(template))
    }

    /// `title` on its own line, then one indented line per item.
    pub fn listing<I, S>(&self, title: &str, items: I) -> MessageChain
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let indent = Indent::new(1, self.indent_width);
        let mut text = format!("{}\n", title);
        for item in items {
            append_line_indent(&mut text, item.as_ref(), indent);
        }
        as_message_chain(&text)
    }

    /// Uploads the image at `path` for `contact_id` and appends it on its own line.
    pub async fn add_image_line(
        &self,
        builder: &mut MessageChainBuilder,
        path: &Path,
        contact_id: i64,
    ) -> Result<(), DomainError> {
        let image = self.uploader.upload_image(path, contact_id).await?;
        debug!(path = %path.display(), contact_id, "image segment appended");
        builder.add_line(image);
        Ok(())
    }

    /// Builds the final chain, bracketed when sent under `authority`.
    pub fn finish(
        &self,
        builder: MessageChainBuilder,
        authority: Option<Authority>,
    ) -> MessageChain {
        annotate(builder.build(), authority)
    }
}
