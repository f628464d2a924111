use thiserror::Error;

/// An error surfaced by an application [`Handler`](crate::Handler).
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// The only way `parse()` fails. Document content never produces errors:
/// malformed input degrades to `Unmatched` end tags, incomplete ranges or
/// no-ops instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParsingError {
    #[error("parsing aborted by handler: {0}")]
    HandlerError(#[source] HandlerError),
}
