// EnDeCript frontends
// Terminal UI controller over the endecript-core cipher

#[cfg(feature = "cli")]
pub mod tui;
