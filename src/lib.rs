//! Parser and serializer for Java-style `.properties` files.
//!
//! ```
//! let props = propfile::parse("# db\nhost=localhost\nport: 5432\n").unwrap();
//! assert_eq!(props.keys().collect::<Vec<_>>(), ["host", "port"]);
//! assert_eq!(props.get("port").unwrap().value(), "5432");
//! ```

mod builder;
mod error;
mod escape;
mod lines;
mod parser;
mod properties;
mod separator;
mod types;

pub use builder::{OwnedPropfileBuilder, Propfile, PropfileBuilder};
pub use error::{Error, NoSeparatorFound, Result};
pub use escape::{
    escape_key, escape_separators, escape_value, unescape_property, unescape_separators,
};
pub use lines::LineAssembler;
pub use parser::{parse_line, Parser, PropertyIterator};
pub use properties::Properties;
pub use separator::get_separator;
pub use types::{LogicalLine, ParseOptions, Property, Separator};

/// Parse a whole document. Empty input, or input without any property, is an error.
pub fn parse(input: &str) -> Result<Properties> {
    Parser::new(input).parse()
}

pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Properties> {
    Parser::with_options(input, options).parse()
}
