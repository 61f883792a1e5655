use core::hash::Hash;

use rustc_hash::FxHashSet;

/// Key set built from a whole side input, on first demand.
pub(crate) enum LookupSet<J, K> {
    Pending(Option<J>),
    Ready(FxHashSet<K>),
}

impl<J, K> LookupSet<J, K>
where
    J: Iterator,
    K: Eq + Hash,
{
    pub(crate) fn new(iter: J) -> Self {
        Self::Pending(Some(iter))
    }

    /// Drains the side input through `key_fn` the first time this is called.
    pub(crate) fn get<Func>(&mut self, key_fn: &mut Func, operator: &'static str) -> &FxHashSet<K>
    where
        Func: FnMut(&J::Item) -> K,
    {
        if let Self::Pending(iter) = self {
            let set: FxHashSet<K> = iter
                .take()
                .into_iter()
                .flatten()
                .map(|item| (key_fn)(&item))
                .collect();
            tracing::trace!(operator, keys = set.len(), "lookup set built");
            *self = Self::Ready(set);
        }
        match self {
            Self::Ready(set) => set,
            Self::Pending(_) => unreachable!(),
        }
    }
}
