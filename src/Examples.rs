/// Numbered demonstrations of the toolkit: Arrhenius constants, integration methods,
/// a full temperature sweep and a very fast reaction
pub mod saponification_examples;
