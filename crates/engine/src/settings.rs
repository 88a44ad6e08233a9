/// Maximum rows fetched or written per batch, bounding peak memory to the
/// batch size regardless of table cardinality.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone)]
pub struct EtlSettings {
    pub batch_size: usize,
}

impl Default for EtlSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}
