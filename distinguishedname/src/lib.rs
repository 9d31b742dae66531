//! Parse and print RFC 2253 / RFC 4514 Distinguished Names.
//!
//! ```
//! use distinguishedname::{parse, serialize};
//!
//! let dn = parse("CN=James Bond,OU=Spectre+UID=1234,C=US", true).unwrap();
//! assert_eq!(dn.len(), 3);
//! assert_eq!(dn.rdns()[1].avas(), &["OU=Spectre", "UID=1234"]);
//! assert_eq!(serialize(&dn), "CN=James Bond,OU=Spectre+UID=1234,C=US");
//! ```

pub mod cursor;
pub mod data;
pub mod error;
pub mod parse;
pub mod print;

pub use data::{split_ava, Dn, Rdn};
pub use error::{DnError, Result};
pub use parse::parse;
pub use print::{ldif_dn_line, serialize};
