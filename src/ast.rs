//! Parse tree handed from the parser to the value model.

#[derive(Debug, Clone, PartialEq)]
pub struct Key(pub String);

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    /// Number literal as written in the source text.
    Number(std::string::String),
    /// String contents with escapes already decoded.
    String(std::string::String),
    Object(Vec<Pair>),
    Array(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub key: Key,
    pub value: Node,
}

impl Pair {
    pub fn new(key: Key, value: Node) -> Self {
        Self { key, value }
    }
}
