// Shared service dependencies
//
// One bundle of collaborator handles plus configuration, cloned into
// effects, scheduled tasks, and tests. Collaborators sit behind the
// kernel traits so implementations can be swapped without touching
// domain code.

use std::sync::Arc;

use moderation::Lexicon;

use crate::config::Config;
use crate::kernel::traits::{BaseBlobStore, BaseNotifier, BaseRecordStore};

#[derive(Clone)]
pub struct ServiceDeps {
    pub records: Arc<dyn BaseRecordStore>,
    pub blobs: Arc<dyn BaseBlobStore>,
    pub notifier: Arc<dyn BaseNotifier>,
    /// Screening lexicon, assembled once at startup and shared read-only.
    pub lexicon: Arc<Lexicon>,
    pub config: Config,
}

impl ServiceDeps {
    /// Bundle collaborators and assemble the screening lexicon from the
    /// built-in word lists plus any configured supplementary file.
    pub fn new(
        records: Arc<dyn BaseRecordStore>,
        blobs: Arc<dyn BaseBlobStore>,
        notifier: Arc<dyn BaseNotifier>,
        config: Config,
    ) -> Self {
        let lexicon = match &config.supplementary_lexicon_path {
            Some(path) => Lexicon::builtin().with_supplementary_file(path),
            None => Lexicon::builtin(),
        };

        Self {
            records,
            blobs,
            notifier,
            lexicon: Arc::new(lexicon),
            config,
        }
    }
}
