use crate::error::ConnError;
use log::trace;

/// A disjoint-set forest over the elements `0..len`.
///
/// `find_root` applies path halving and `union` attaches the smaller tree under the larger root,
/// which together give amortized near-constant time per operation. Sets can only be merged, never
/// split.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    set_count: usize,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        Self { parent: (0..len).collect(), size: vec![1; len], set_count: len }
    }

    /// Like `new`, but returns an error instead of aborting when the forest cannot be allocated.
    pub fn try_new(len: usize) -> Result<Self, ConnError> {
        let mut parent = Vec::new();
        parent
            .try_reserve_exact(len)
            .map_err(|_| ConnError::OutOfMemory("union-find parents", len))?;
        parent.extend(0..len);
        let mut size = Vec::new();
        size.try_reserve_exact(len).map_err(|_| ConnError::OutOfMemory("union-find sizes", len))?;
        size.resize(len, 1);
        Ok(Self { parent, size, set_count: len })
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.set_count
    }

    pub fn find_root(&mut self, i: usize) -> Result<usize, ConnError> {
        self.check_index(i)?;
        Ok(self.root(i))
    }

    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool, ConnError> {
        self.check_index(p)?;
        self.check_index(q)?;
        Ok(self.same_set(p, q))
    }

    /// Merges the sets containing `p` and `q`. Returns `false` if they were already one set.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool, ConnError> {
        self.check_index(p)?;
        self.check_index(q)?;
        Ok(self.merge(p, q))
    }

    /// Number of elements in the set containing `i`.
    pub fn size(&mut self, i: usize) -> Result<usize, ConnError> {
        let root = self.find_root(i)?;
        Ok(self.size[root])
    }

    #[inline]
    fn check_index(&self, i: usize) -> Result<(), ConnError> {
        if i < self.parent.len() {
            Ok(())
        } else {
            Err(ConnError::ElementOutOfRange(i, self.parent.len()))
        }
    }

    // The methods below expect indices that are already known to be in range.

    pub(crate) fn root(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            let grandparent = self.parent[self.parent[i]];
            self.parent[i] = grandparent;
            i = grandparent;
        }
        i
    }

    #[inline]
    pub(crate) fn same_set(&mut self, p: usize, q: usize) -> bool {
        self.root(p) == self.root(q)
    }

    pub(crate) fn merge(&mut self, p: usize, q: usize) -> bool {
        let p_root = self.root(p);
        let q_root = self.root(q);
        if p_root == q_root {
            return false;
        }
        // Ties attach `p`'s root under `q`'s root.
        let (child, parent) =
            if self.size[p_root] > self.size[q_root] { (q_root, p_root) } else { (p_root, q_root) };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.set_count -= 1;
        trace!("Union of {} and {}: root {} now under {}", p, q, child, parent);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::union_find::UnionFind;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.count(), 5);
        for i in 0..5 {
            assert_eq!(uf.find_root(i).unwrap(), i);
            assert_eq!(uf.size(i).unwrap(), 1);
        }
    }

    #[test]
    fn union_merges_once() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1).unwrap());
        assert!(!uf.union(1, 0).unwrap());
        assert!(uf.connected(0, 1).unwrap());
        assert!(!uf.connected(0, 2).unwrap());
        assert_eq!(uf.count(), 3);
        assert_eq!(uf.size(1).unwrap(), 2);
    }

    #[test]
    fn tie_attaches_first_root_under_second() {
        let mut uf = UnionFind::new(2);
        uf.union(0, 1).unwrap();
        assert_eq!(uf.find_root(0).unwrap(), 1);
    }

    #[test]
    fn smaller_tree_goes_under_larger() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1).unwrap();
        uf.union(2, 1).unwrap();
        let big_root = uf.find_root(0).unwrap();
        // `3` is a singleton, so it must end up under the existing root even though it is `q`.
        uf.union(big_root, 3).unwrap();
        assert_eq!(uf.find_root(3).unwrap(), big_root);
        assert_eq!(uf.size(3).unwrap(), 4);
    }

    fn depth(uf: &UnionFind, mut i: usize) -> usize {
        let mut depth = 0;
        while uf.parent[i] != i {
            i = uf.parent[i];
            depth += 1;
        }
        depth
    }

    #[test]
    fn find_root_halves_paths() {
        // Union by size never builds a chain, so lay one out by hand: 0 -> 1 -> ... -> 7.
        let mut uf = UnionFind::new(8);
        for i in 0..7 {
            uf.parent[i] = i + 1;
        }
        uf.size[7] = 8;
        uf.set_count = 1;
        assert_eq!((0..8).map(|i| depth(&uf, i)).max(), Some(7));

        assert_eq!(uf.find_root(0).unwrap(), 7);
        // Every node visited on the walk now points at its former grandparent.
        assert_eq!(uf.parent, vec![2, 2, 4, 4, 6, 6, 7, 7]);
        assert_eq!((0..8).map(|i| depth(&uf, i)).max(), Some(4));

        assert_eq!(uf.find_root(0).unwrap(), 7);
        assert_eq!(uf.parent, vec![4, 2, 4, 4, 7, 6, 7, 7]);
        assert_eq!(depth(&uf, 0), 2);
        assert_eq!(uf.size(1).unwrap(), 8);
    }

    #[test]
    fn union_chain_stays_flat() {
        let mut uf = UnionFind::new(8);
        for i in 0..7 {
            uf.union(i, i + 1).unwrap();
        }
        let root = uf.find_root(0).unwrap();
        for i in 0..8 {
            assert_eq!(uf.find_root(i).unwrap(), root);
            assert!(depth(&uf, i) <= 1);
        }
        assert_eq!(uf.count(), 1);
        assert_eq!(uf.size(5).unwrap(), 8);
    }

    #[test]
    fn try_new_reports_allocation_failure() {
        let uf = UnionFind::try_new(6).unwrap();
        assert_eq!(uf.len(), 6);
        assert_eq!(uf.count(), 6);
        assert!(UnionFind::try_new(usize::MAX).unwrap_err().is_construction_error());
    }

    #[test]
    fn out_of_range() {
        let mut uf = UnionFind::new(3);
        assert!(uf.find_root(3).unwrap_err().is_index_range_error());
        assert!(uf.connected(0, 3).unwrap_err().is_index_range_error());
        assert!(uf.union(5, 0).unwrap_err().is_index_range_error());
        assert_eq!(uf.count(), 3);

        let mut empty = UnionFind::new(0);
        assert!(empty.is_empty());
        assert!(empty.find_root(0).is_err());
    }

    #[test]
    fn connected_is_an_equivalence_relation() {
        let n = 30;
        let mut rng = StdRng::seed_from_u64(7);
        let mut uf = UnionFind::new(n);
        for _ in 0..20 {
            let (p, q) = (rng.gen_range(0..n), rng.gen_range(0..n));
            uf.union(p, q).unwrap();
            for a in 0..n {
                assert!(uf.connected(a, a).unwrap());
                for b in 0..n {
                    let ab = uf.connected(a, b).unwrap();
                    assert_eq!(ab, uf.connected(b, a).unwrap());
                    if !ab {
                        continue;
                    }
                    for c in 0..n {
                        if uf.connected(b, c).unwrap() {
                            assert!(uf.connected(a, c).unwrap());
                        }
                    }
                }
            }
        }
    }
}
