/*!
# Graph Algorithms

Classical graph routines needed around the forcing engine: breadth-first traversal,
connectivity checks and distances. All algorithms are re-exported at the top level of this
module, so you can simply do:
```rust
use zqforce::algo::*;
```
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod connectivity;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use traversal::*;
