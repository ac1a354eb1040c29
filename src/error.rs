use thiserror::Error;

/// All errors a read entry point can surface.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The document root is not the element the entry point expects.
    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot { expected: &'static str, found: String },

    /// An element the grammar does not allow at this position.
    #[error("unknown element <{element}> under <{parent}>")]
    UnknownElement { parent: &'static str, element: String },

    #[error("missing attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("missing <{child}> in <{element}>")]
    MissingChild {
        element: &'static str,
        child: &'static str,
    },

    /// The document ended inside an open element.
    #[error("premature end of document")]
    TruncatedDocument,

    /// A `type-id` that does not resolve in the current symbol table.
    #[error("unresolved type-id '{0}'")]
    UnresolvedTypeId(String),

    /// Keying an id that is already present without requesting replacement.
    #[error("duplicate id '{0}'")]
    DuplicateId(String),

    /// `def-of-decl-id` naming something other than a declaration-only class.
    #[error("def-of-decl-id '{0}' does not name a declaration-only class")]
    BadDefinitionLink(String),
}

pub type Result<T> = std::result::Result<T, ReadError>;
