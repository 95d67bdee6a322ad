use crate::prelude::*;

/// Default and upper bound on how many transfers one ledger call carries.
pub const DEFAULT_BATCH_CAP: usize = 100;

/// Transfer requests submitted together in one ledger call, holding between
/// one and `cap` items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Deref, AsRef)]
pub struct Batch(Vec<TransferRequest>);

impl Batch {
    pub fn new(items: impl IntoIterator<Item = TransferRequest>, cap: usize) -> Result<Self> {
        let items = items.into_iter().collect::<Vec<_>>();
        let len = items.len();
        if len == 0 || len > cap {
            return Err(Error::InvalidBatch { len, cap });
        }
        Ok(Self(items))
    }

    /// `count` copies of the same request.
    pub fn repeated(request: TransferRequest, count: usize, cap: usize) -> Result<Self> {
        Self::new(std::iter::repeat(request).take(count), cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TransferRequest {
        TransferRequest::builder()
            .destination("dest")
            .payload(CommentPayload::new("mint"))
            .build()
    }

    #[test]
    fn repeated_batch_has_identical_requests() {
        let batch = Batch::repeated(request(), 3, DEFAULT_BATCH_CAP).unwrap();
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|r| r == &request()));
        assert_eq!(*batch[0].amount(), Amount::ZERO);
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert!(matches!(
            Batch::repeated(request(), 0, DEFAULT_BATCH_CAP),
            Err(Error::InvalidBatch { len: 0, cap: 100 })
        ));
    }

    #[test]
    fn batch_over_cap_is_rejected() {
        assert!(matches!(
            Batch::repeated(request(), 5, 4),
            Err(Error::InvalidBatch { len: 5, cap: 4 })
        ));
        assert!(Batch::repeated(request(), 4, 4).is_ok());
    }
}
