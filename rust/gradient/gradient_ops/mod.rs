mod add;
mod div;
mod eq;
mod from;
pub mod math_funcs;
mod mul;
mod neg;
mod sub;
mod sum;
pub mod zip;
mod zero;
