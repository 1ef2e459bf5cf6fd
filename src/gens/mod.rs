/*!
# Graph Generators

Deterministic substructures ([`GeneratorSubstructures`]) and random `G(n,p)` graphs
([`RandomGraph`]) used to build instances of known graph classes.
*/

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;
