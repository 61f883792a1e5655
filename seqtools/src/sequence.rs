//! The [`Sequence`] pull protocol.
use core::iter::FusedIterator;

/// A single-pass, pull-driven stream of items.
///
/// This is [`Iterator`] with the extra promise of [`FusedIterator`]: once `next` has returned
/// `None` it keeps returning `None`. Every adaptor in this crate fuses its upstreams, so all of
/// them are `Sequence`s regardless of whether their sources are.
///
/// A `Sequence` is not restartable. To iterate again, build a new one from the producer.
pub trait Sequence: Iterator + FusedIterator {}
impl<I> Sequence for I where I: Iterator + FusedIterator {}
