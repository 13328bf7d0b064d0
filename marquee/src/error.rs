use crate::MarqueeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The marquee was never started by this scheduler, or has already ended or been destroyed.
    #[error("{0} is not active")]
    InstanceNotFound(MarqueeId),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
