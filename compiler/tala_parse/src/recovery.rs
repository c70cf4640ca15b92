//! Error recovery: token sets and synchronization.

use tala_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds, compared by variant.
#[derive(Clone, Copy, Debug)]
pub struct RecoverySet(&'static [TokenKind]);

impl RecoverySet {
    /// Tokens that begin a new top-level statement.
    pub const STMT_START: RecoverySet = RecoverySet(&[
        TokenKind::Let,
        TokenKind::For,
        TokenKind::Semicolon,
    ]);

    /// Statement starts plus the `}` that closes the enclosing block.
    pub const BLOCK_STMT_START: RecoverySet = RecoverySet(&[
        TokenKind::Let,
        TokenKind::For,
        TokenKind::Semicolon,
        TokenKind::RBrace,
    ]);

    pub fn contains(&self, kind: &TokenKind) -> bool {
        self.0.iter().any(|k| k.same_kind(kind))
    }
}

/// Advance until a token in `recovery` or EOF.
///
/// Returns `true` if a recovery token was found.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: RecoverySet) -> bool {
    while !cursor.is_at_end() {
        if recovery.contains(&cursor.current_kind()) {
            return true;
        }
        cursor.advance();
    }
    false
}
