//! # Combine-Latest
//!
//! Merge two live sequences into one that emits the most recent pair whenever
//! either side emits, once both sides have produced a value.

use futures::future::{self, Either};
use futures::stream::{self, BoxStream, Stream, StreamExt};

/// Combine two streams with combine-latest semantics.
///
/// Nothing is emitted until both inputs have produced at least one value.
/// The output ends when both inputs have ended.
pub fn combine_latest<A, B, L, R>(left: L, right: R) -> BoxStream<'static, (A, B)>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    L: Stream<Item = A> + Send + 'static,
    R: Stream<Item = B> + Send + 'static,
{
    stream::select(left.map(Either::Left), right.map(Either::Right))
        .scan(
            (None, None),
            |latest: &mut (Option<A>, Option<B>), item| {
                match item {
                    Either::Left(a) => latest.0 = Some(a),
                    Either::Right(b) => latest.1 = Some(b),
                }
                let pair = match latest {
                    (Some(a), Some(b)) => Some((a.clone(), b.clone())),
                    _ => None,
                };
                future::ready(Some(pair))
            },
        )
        .filter_map(future::ready)
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;
    use tokio_stream::wrappers::UnboundedReceiverStream;

    #[tokio::test]
    async fn test_waits_for_both_sides() {
        let (left_tx, left_rx) = mpsc::unbounded_channel::<u32>();
        let (right_tx, right_rx) = mpsc::unbounded_channel::<&'static str>();
        let mut combined = combine_latest(
            UnboundedReceiverStream::new(left_rx),
            UnboundedReceiverStream::new(right_rx),
        );

        left_tx.send(1).unwrap();
        assert!(timeout(Duration::from_millis(50), combined.next())
            .await
            .is_err());

        right_tx.send("a").unwrap();
        assert_eq!(combined.next().await, Some((1, "a")));
    }

    #[tokio::test]
    async fn test_emits_on_every_change() {
        let (left_tx, left_rx) = mpsc::unbounded_channel::<u32>();
        let (right_tx, right_rx) = mpsc::unbounded_channel::<&'static str>();
        let mut combined = combine_latest(
            UnboundedReceiverStream::new(left_rx),
            UnboundedReceiverStream::new(right_rx),
        );

        left_tx.send(1).unwrap();
        right_tx.send("a").unwrap();
        assert_eq!(combined.next().await, Some((1, "a")));

        left_tx.send(2).unwrap();
        assert_eq!(combined.next().await, Some((2, "a")));

        right_tx.send("b").unwrap();
        assert_eq!(combined.next().await, Some((2, "b")));
    }

    #[tokio::test]
    async fn test_ends_when_both_inputs_end() {
        let combined = combine_latest(stream::iter(vec![1u32]), stream::iter(vec!['x']));
        let items: Vec<_> = combined.collect().await;
        assert_eq!(items, vec![(1, 'x')]);
    }
}
