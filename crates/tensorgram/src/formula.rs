//! Formula generation from the contraction graph.
//!
//! Both generators are pure string builders over the frozen model: tensor
//! subscripts come from per-tensor index declaration order, the contracted
//! set from contraction names, and free indices keep their first-seen order
//! across the whole diagram. Names are caller-supplied and trusted; no
//! escaping is performed.

use indexmap::IndexSet;

use tensorgram_core::identifier::Id;

use crate::diagram::{Diagram, Tensor};

fn subscript(tensor: &Tensor) -> String {
    tensor
        .indices()
        .iter()
        .map(|index| index.name().to_string())
        .collect()
}

impl Diagram {
    /// Generates an einsum call expression in the NumPy/PyTorch/TensorFlow
    /// convention, e.g. `einsum('ij,jk->ik', A, B)`.
    ///
    /// Free (output) indices are all index names minus the contracted ones,
    /// deduplicated, in first-seen order.
    pub fn to_einsum_formula(&self) -> String {
        let contracted = self.contracted_names();

        let mut free: IndexSet<Id> = IndexSet::new();
        for tensor in self.tensors() {
            for index in tensor.indices() {
                if !contracted.contains(&index.name()) {
                    free.insert(index.name());
                }
            }
        }

        let subscripts: Vec<String> = self.tensors().iter().map(subscript).collect();
        let free_str: String = free.iter().map(Id::to_string).collect();
        let tensor_names: Vec<String> = self
            .tensors()
            .iter()
            .map(|tensor| tensor.name().to_string())
            .collect();

        format!(
            "einsum('{}->{}', {})",
            subscripts.join(","),
            free_str,
            tensor_names.join(", ")
        )
    }

    /// Generates a LaTeX summation expression, e.g. `\sum_{j} A_{ij} B_{jk}`.
    ///
    /// The subscript of `\sum` concatenates the contraction names in
    /// contraction order.
    pub fn to_latex_formula(&self) -> String {
        let terms: Vec<String> = self
            .tensors()
            .iter()
            .map(|tensor| format!("{}_{{{}}}", tensor.name(), subscript(tensor)))
            .collect();
        let contracted: String = self
            .contractions()
            .iter()
            .map(|contraction| contraction.name().to_string())
            .collect();

        format!("\\sum_{{{}}} {}", contracted, terms.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use tensorgram_core::geometry::Point;

    use crate::diagram::{Placement, TensorId};

    use super::*;

    #[test]
    fn test_self_contraction_trace() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("A", Placement::Start, &["i"], &["i"], &[], &[])
            .unwrap()
            .add_contraction(TensorId::new(0), TensorId::new(0), "i")
            .unwrap();

        assert_eq!(diagram.to_einsum_formula(), "einsum('ii->', A)");
        assert_eq!(diagram.to_latex_formula(), "\\sum_{i} A_{ii}");
    }

    #[test]
    fn test_fully_contracted_chain() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("v", Placement::Start, &[], &["i"], &[], &[])
            .unwrap()
            .add_tensor("T", Placement::Right, &["i"], &["j", "k"], &[], &[])
            .unwrap()
            .add_tensor("A", Placement::Right, &["j"], &["n"], &[], &[])
            .unwrap()
            .add_tensor("B", Point::new(2.0, 1.0), &["k"], &["m"], &[], &[])
            .unwrap()
            .add_contraction(TensorId::new(0), TensorId::new(1), "i")
            .unwrap()
            .add_contraction(TensorId::new(1), TensorId::new(2), "j")
            .unwrap()
            .add_contraction(TensorId::new(1), TensorId::new(3), "k")
            .unwrap();

        assert_eq!(
            diagram.to_einsum_formula(),
            "einsum('i,ijk,jn,km->nm', v, T, A, B)"
        );
        assert_eq!(
            diagram.to_latex_formula(),
            "\\sum_{ijk} v_{i} T_{ijk} A_{jn} B_{km}"
        );
    }

    #[test]
    fn test_open_indices_keep_first_seen_order() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("A", Placement::Start, &[], &["p", "q"], &[], &[])
            .unwrap()
            .add_tensor("B", Placement::Right, &["q"], &["r"], &[], &[])
            .unwrap();

        // Nothing contracted: every name is free, in first-seen order, with
        // the shared name deduplicated.
        assert_eq!(diagram.to_einsum_formula(), "einsum('pq,qr->pqr', A, B)");
    }

    #[test]
    fn test_formula_generation_is_idempotent() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("M", Placement::Start, &["a"], &["b"], &[], &[])
            .unwrap();

        assert_eq!(diagram.to_einsum_formula(), diagram.to_einsum_formula());
        assert_eq!(diagram.to_latex_formula(), diagram.to_latex_formula());
    }
}
