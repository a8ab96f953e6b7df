//! Case-insensitive identifier comparison.
//!
//! Model names, metadata keys and header names all ignore case. Every lookup
//! in the parser and in this crate goes through [`fold_case`], so a name that
//! resolves during parsing also resolves on the finished AST.

/// The case-folded form of `id`, used as a lookup key.
pub fn fold_case(id: &str) -> String {
    id.to_lowercase()
}

/// Returns `true` if `a` and `b` are the same identifier.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || fold_case(a) == fold_case(b)
}
