use rand::Rng;

use super::*;

/// `G(n,p)` graphs contain every possible (undirected, loop-free) edge between `n` nodes
/// independently with probability `p`.
///
/// # Example
/// ```rust
/// use lexgraphs::{prelude::*, gens::*};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let g: AdjArrayUndir = Gnp::new().nodes(10).avg_deg(3.0).generate(&mut rng);
/// assert_eq!(g.number_of_nodes(), 10);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
}

impl Gnp {
    /// Creates a new generator for empty graphs without nodes
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `n`
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "invalid probability {p}");
        self.p = p;
        self
    }

    /// Sets `p` such that every node has an expected degree of `deg`.
    /// Must be called after [`Gnp::nodes`].
    pub fn avg_deg(self, deg: f64) -> Self {
        let p = if self.n > 1 {
            (deg / (self.n - 1) as f64).min(1.0)
        } else {
            0.0
        };
        self.prob(p)
    }

    /// Returns an iterator over the normalized edges of a random `G(n,p)` graph
    pub fn stream<'a, R: Rng>(&self, rng: &'a mut R) -> impl Iterator<Item = Edge> + 'a {
        let (n, p) = (self.n, self.p);
        (0..n)
            .flat_map(move |u| ((u + 1)..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }

    /// Generates a random `G(n,p)` graph
    pub fn generate<G, R>(&self, rng: &mut R) -> G
    where
        G: GraphFromScratch,
        R: Rng,
    {
        G::from_edges(self.n, self.stream(rng))
    }
}

/// Shorthand for generating random graphs directly on the graph type
pub trait RandomGraph: GraphFromScratch + Sized {
    /// Generates a `G(n,p)` graph, see [`Gnp`]
    fn gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Self {
        Gnp::new().nodes(n).prob(p).generate(rng)
    }
}

impl<G: GraphFromScratch> RandomGraph for G {}
