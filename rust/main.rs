use sparsegrad::{Result, SparseGradient, VariableId, VariableNames};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sparsegrad=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (x, y, z) = (VariableId(1), VariableId(2), VariableId(3));
    let names = VariableNames::new().with(x, "x").with(y, "y").with(z, "z");

    let d = SparseGradient::seeded_leaf(x, 7.0, 2.0);
    let e = SparseGradient::try_new(8.0, vec![x, y, z], vec![3.0, 4.0, 5.0])?;
    let f = SparseGradient::try_new(1.0, vec![y, z], vec![6.0, 7.0])?;
    tracing::info!(vars = e.variables().len(), "built operands");

    let results = [
        ("d", d.clone()),
        ("e", e.clone()),
        ("f", f.clone()),
        ("d+e", &d + &e),
        ("d+f", &d + &f),
        ("e+f", &e + &f),
        ("d*e", &d * &e),
        ("d*f", &d * &f),
        ("e*f", &e * &f),
    ];
    for (label, g) in results.iter() {
        println!("{}:\n{}", label, names.render(g));
    }
    Ok(())
}
