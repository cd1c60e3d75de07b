// DOT export for visualization (e.g. `dot -Tsvg`)
use crate::graph::Graph;
use crate::vertex::VertexKey;
use std::fmt::{self, Display};

fn quoted<T: Display>(value: &T) -> String {
    value.to_string().replace('"', "\\\"")
}

impl<T: VertexKey + Display> Graph<T> {
    /// Render the graph in DOT format.
    ///
    /// One line per vertex without outgoing edges, one `a -> b` line per
    /// stored adjacency otherwise. Undirected edges therefore show up in
    /// both directions.
    pub fn to_dot(&self) -> String {
        self.to_string()
    }
}

impl<T: VertexKey + Display> Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store();
        writeln!(f, "digraph \"{}\" {{", quoted(&self.name()))?;

        for (id, vertex) in store.iter() {
            let neighbors = store.neighbors(id);
            if neighbors.is_empty() {
                writeln!(f, "  \"{}\";", quoted(vertex))?;
                continue;
            }
            for &n in neighbors {
                writeln!(
                    f,
                    "  \"{}\" -> \"{}\";",
                    quoted(vertex),
                    quoted(store.payload(n))
                )?;
            }
        }

        f.write_str("}")
    }
}
