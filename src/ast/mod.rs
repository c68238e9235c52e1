/// Parse tree module
/// Contains the concrete parse tree produced by the parser
///
/// Submodules:
/// - node: The node type, its labels and constructors
/// - render: The line-per-node text rendering of a tree
pub mod node;
pub mod render;
