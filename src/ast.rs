// The comment-annotated document tree produced by the loader and consumed by
// the renderer.

#[derive(Clone, Debug)]
pub struct Document {
    pub nodes: Vec<Node>,
    // Comments that appear after the last value in the stream.
    pub trailing_comments: Vec<String>,
}

#[derive(Clone, Debug)]
pub enum Node {
    Scalar(Scalar),
    LiteralBlock(LiteralBlock),
    Mapping(Mapping),
    Sequence(Sequence),
    Unsupported(Unsupported),
}

#[derive(Clone, Debug)]
pub struct Scalar {
    pub kind: ScalarKind,
    pub raw: String,
    pub pos: SourcePos,
    pub comments: Comments,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    Null,
}

// A `|` or `>` block scalar. `raw` holds the decoded content, not the source
// bytes, so the renderer can re-indent it to the output depth.
#[derive(Clone, Debug)]
pub struct LiteralBlock {
    pub raw: String,
    pub pos: SourcePos,
    pub comments: Comments,
}

#[derive(Clone, Debug)]
pub struct Mapping {
    pub entries: Vec<Entry>,
    pub comments: Comments,
}

// Entries keep source order, including duplicate keys.
#[derive(Clone, Debug)]
pub struct Entry {
    pub key: Scalar,
    pub value: Node,
}

#[derive(Clone, Debug)]
pub struct Sequence {
    pub items: Vec<Node>,
    pub comments: Comments,
}

// A construct with no rendering rule (alias, tag). Kept in the tree so the
// rest of the document still converts.
#[derive(Clone, Debug)]
pub struct Unsupported {
    pub kind: String,
    pub pos: SourcePos,
    pub comments: Comments,
}

// Comments attached to a node: a group of own-line comments above it, and at
// most one comment sharing its line. Text is verbatim, including the '#'.
#[derive(Clone, Debug, Default)]
pub struct Comments {
    pub leading: Vec<String>,
    pub trailing: Option<String>,
}

// Where a token starts in the source. Only the loader's comment-attachment
// pass reads this; the renderer never does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SourcePos {
    pub line: usize,
    pub col: usize,
}

impl Node {
    pub fn comments(&self) -> &Comments {
        match self {
            Node::Scalar(Scalar { comments, .. })
            | Node::LiteralBlock(LiteralBlock { comments, .. })
            | Node::Mapping(Mapping { comments, .. })
            | Node::Sequence(Sequence { comments, .. })
            | Node::Unsupported(Unsupported { comments, .. }) => comments,
        }
    }
}
