/*!
# Representations

Graph storage used by the flow algorithms. Currently this is the [`ResidualGraph`], an arc
arena in which every arc can reach its paired reverse arc in constant time.
*/

mod residual;

pub use residual::*;
