use crate::gradient::sparse::SparseGradient;
use auto_ops::impl_op;

impl_op!(-|a: SparseGradient| -> SparseGradient {
    SparseGradient {
        vars: a.vars,
        real: -a.real,
        dual: -a.dual,
    }
});
impl_op!(-|a: &SparseGradient| -> SparseGradient {
    SparseGradient {
        vars: a.vars.clone(),
        real: -a.real,
        dual: &a.dual * -1.0,
    }
});
