mod snapshot;
#[cfg(test)]
mod tests;

pub use snapshot::Snapshot;
pub(crate) use snapshot::Tally;
