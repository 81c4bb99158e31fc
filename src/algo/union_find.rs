use super::*;

/// Disjoint-set-union over the nodes `0..n` with path halving and union by size
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    num_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            num_sets: n,
        }
    }

    /// Returns the representative of the set containing `u`
    pub fn find(&mut self, mut u: Node) -> Node {
        while self.parent[u as usize] != u {
            let grand_parent = self.parent[self.parent[u as usize] as usize];
            self.parent[u as usize] = grand_parent;
            u = grand_parent;
        }
        u
    }

    /// Merges the sets of `u` and `v`. Returns *false* if they were already joined.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let (mut ru, mut rv) = (self.find(u), self.find(v));
        if ru == rv {
            return false;
        }

        if self.size[ru as usize] < self.size[rv as usize] {
            std::mem::swap(&mut ru, &mut rv);
        }
        self.parent[rv as usize] = ru;
        self.size[ru as usize] += self.size[rv as usize];
        self.num_sets -= 1;
        true
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_and_find() {
        let mut uf = UnionFind::new(6);
        assert_eq!(uf.number_of_sets(), 6);

        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));

        assert_eq!(uf.find(0), uf.find(3));
        assert_ne!(uf.find(0), uf.find(4));
        assert_eq!(uf.number_of_sets(), 3);
    }

    #[test]
    fn long_chain() {
        let n = 1000;
        let mut uf = UnionFind::new(n);
        for u in 1..n {
            assert!(uf.union(u - 1, u));
        }

        assert_eq!(uf.number_of_sets(), 1);
        let root = uf.find(0);
        assert!((0..n).all(|u| uf.find(u) == root));
    }
}
